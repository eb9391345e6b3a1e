use crate::camera::CameraState;
use crate::celebration::SimulationMode;
use crate::constants::{MOBILE_BREAKPOINT_PX, PARTICLE_COUNT_DESKTOP, PARTICLE_COUNT_MOBILE};
use crate::params::SceneParams;
use crate::particle::Particle;
use crate::projection::Projector;
use crate::surface::{DrawSurface, Viewport};
use rand::Rng;

/// Population size for a viewport width, fixed once the field exists.
#[inline]
pub fn particle_count_for_width(width: f32) -> usize {
    if width < MOBILE_BREAKPOINT_PX {
        PARTICLE_COUNT_MOBILE
    } else {
        PARTICLE_COUNT_DESKTOP
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    projector: Projector,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, params: &SceneParams, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(params, rng))
            .collect::<Vec<_>>();
        log::info!("[field] spawned {} particles", particles.len());
        Self {
            particles,
            projector: Projector::new(params.focal_length),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        sim_time: f32,
        mode: SimulationMode,
        params: &SceneParams,
        rng: &mut R,
    ) {
        for p in &mut self.particles {
            p.update(sim_time, mode, params, rng);
        }
    }

    /// Update each particle, then draw it if it projects in front of the
    /// camera. Returns how many particles were drawn.
    pub fn update_and_draw<R, S>(
        &mut self,
        sim_time: f32,
        camera: CameraState,
        mode: SimulationMode,
        params: &SceneParams,
        rng: &mut R,
        surface: &mut S,
    ) -> usize
    where
        R: Rng + ?Sized,
        S: DrawSurface + ?Sized,
    {
        let viewport: Viewport = surface.viewport();
        let draw = !viewport.is_empty();
        let mut drawn = 0;
        for p in &mut self.particles {
            p.update(sim_time, mode, params, rng);
            if draw
                && self
                    .projector
                    .draw_point(&mut *surface, p.position, p.size, p.color, camera, viewport)
            {
                drawn += 1;
            }
        }
        drawn
    }
}
