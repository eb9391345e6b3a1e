//! Rotation plus perspective divide from field space to surface pixels.

use crate::camera::CameraState;
use crate::constants::PROJECTION_EPSILON;
use crate::surface::{DrawSurface, Hsl, Viewport};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub position: Vec2,
    /// Perspective scale; multiply world sizes by this to get pixels.
    pub scale: f32,
}

/// Rotate around X by `rotation_x`, then around Y by `rotation_y`.
#[inline]
pub fn rotate(p: Vec3, camera: CameraState) -> Vec3 {
    let (sx, cx) = camera.rotation_x.sin_cos();
    let (sy, cy) = camera.rotation_y.sin_cos();
    let y1 = p.y * cx - p.z * sx;
    let z1 = p.z * cx + p.y * sx;
    let x1 = p.x * cy - z1 * sy;
    let z2 = z1 * cy + p.x * sy;
    Vec3::new(x1, y1, z2)
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub focal: f32,
}

impl Projector {
    pub const fn new(focal: f32) -> Self {
        Self { focal }
    }

    /// Perspective scale for a rotated depth, or `None` at or behind the
    /// camera plane (where `focal + z` would be zero or negative).
    #[inline]
    pub fn scale_for_depth(&self, z: f32) -> Option<f32> {
        let denom = self.focal + z;
        if denom.is_nan() || denom <= PROJECTION_EPSILON {
            return None;
        }
        let scale = self.focal / denom;
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }

    pub fn project(&self, p: Vec3, camera: CameraState, viewport: Viewport) -> Option<ScreenPoint> {
        let r = rotate(p, camera);
        let scale = self.scale_for_depth(r.z)?;
        let position = viewport.center() + Vec2::new(r.x, r.y) * scale;
        position.is_finite().then_some(ScreenPoint { position, scale })
    }

    /// Project and draw one particle-sized dot. Returns whether it was drawn.
    pub fn draw_point<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        p: Vec3,
        size: f32,
        color: Hsl,
        camera: CameraState,
        viewport: Viewport,
    ) -> bool {
        match self.project(p, camera, viewport) {
            Some(sp) => {
                surface.fill_circle(sp.position, size * sp.scale, color);
                true
            }
            None => false,
        }
    }
}
