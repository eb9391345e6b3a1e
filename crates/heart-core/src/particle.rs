use crate::camera::CameraState;
use crate::celebration::SimulationMode;
use crate::heart::sample_target;
use crate::params::SceneParams;
use crate::projection::{Projector, ScreenPoint};
use crate::surface::{Hsl, Viewport};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    target: Vec3,
    pub position: Vec3,
    pub size: f32,
    pub color: Hsl,
}

impl Particle {
    /// New particle resting on its heart target.
    pub fn spawn<R: Rng + ?Sized>(params: &SceneParams, rng: &mut R) -> Self {
        let target = sample_target(rng, params.heart_scale, params.heart_depth);
        let size = rng.gen::<f32>() * params.size_max;
        let color = Hsl {
            hue: params.hue_base + rng.gen::<f32>() * params.hue_span,
            saturation: params.saturation,
            lightness: params.lightness,
        };
        Self::with_target(target, size, color)
    }

    pub fn with_target(target: Vec3, size: f32, color: Hsl) -> Self {
        Self {
            target,
            position: target,
            size,
            color,
        }
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        sim_time: f32,
        mode: SimulationMode,
        params: &SceneParams,
        rng: &mut R,
    ) {
        match mode {
            SimulationMode::Idle => {
                let pulse = 1.0 + (sim_time * params.pulse_frequency).sin() * params.pulse_amplitude;
                let k = params.seek_factor;
                self.position.x += (self.target.x * pulse - self.position.x) * k;
                self.position.y += (self.target.y * pulse - self.position.y) * k;
            }
            SimulationMode::Celebrating => {
                // Unbounded random walk; the field keeps dispersing.
                let j = params.celebration_jitter;
                if j > 0.0 {
                    self.position += Vec3::new(
                        rng.gen_range(-j..=j),
                        rng.gen_range(-j..=j),
                        rng.gen_range(-j..=j),
                    );
                }
            }
        }
    }

    #[inline]
    pub fn project(
        &self,
        projector: &Projector,
        camera: CameraState,
        viewport: Viewport,
    ) -> Option<ScreenPoint> {
        projector.project(self.position, camera, viewport)
    }
}
