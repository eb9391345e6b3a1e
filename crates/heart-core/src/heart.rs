//! Parametric heart curve and the random targets sampled from it.

use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Point on the unscaled heart curve for parameter `t`.
///
/// `y` is negated so the lobes sit on top in a y-down screen space.
#[inline]
pub fn heart_xy(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(x, y)
}

/// Draw a target position: a random point on the curve scaled by `scale`,
/// with `z` uniform in `[-depth/2, depth/2)`.
pub fn sample_target<R: Rng + ?Sized>(rng: &mut R, scale: f32, depth: f32) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let xy = heart_xy(t) * scale;
    let z = (rng.gen::<f32>() - 0.5) * depth;
    Vec3::new(xy.x, xy.y, z)
}
