//! Everything one frame needs, behind a single owner.
//!
//! The web front-end keeps a `Scene` in an `Rc<RefCell<_>>`; the frame
//! callback and the input handlers borrow it in turn, never together.

use crate::camera::{CameraController, CameraState};
use crate::celebration::{Celebration, SimulationMode};
use crate::evasion::{Evasion, EvasionState};
use crate::field::{particle_count_for_width, ParticleField};
use crate::params::SceneParams;
use crate::surface::{BlendMode, DrawSurface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Scene {
    params: SceneParams,
    viewport: Viewport,
    field: ParticleField,
    camera: CameraController,
    celebration: Celebration,
    evasion: EvasionState,
    sim_time: f32,
    rng: StdRng,
}

impl Scene {
    /// Build a scene sized for `viewport`. The particle count is chosen from
    /// the initial width and never changes afterwards.
    pub fn new(params: SceneParams, viewport: Viewport, seed: u64) -> Self {
        let count = particle_count_for_width(viewport.width);
        Self::with_particle_count(params, viewport, count, seed)
    }

    pub fn with_particle_count(
        params: SceneParams,
        viewport: Viewport,
        count: usize,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(count, &params, &mut rng);
        let camera = CameraController::new(&params);
        let evasion = EvasionState::new(
            params.phrases,
            params.evasion_padding,
            params.evasion_scale_step,
        );
        Self {
            params,
            viewport,
            field,
            camera,
            celebration: Celebration::default(),
            evasion,
            sim_time: 0.0,
            rng,
        }
    }

    #[inline]
    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn camera(&self) -> CameraState {
        self.camera.state()
    }

    #[inline]
    pub fn camera_controller(&self) -> &CameraController {
        &self.camera
    }

    #[inline]
    pub fn mode(&self) -> SimulationMode {
        self.celebration.mode()
    }

    #[inline]
    pub fn evasion(&self) -> &EvasionState {
        &self.evasion
    }

    #[inline]
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "[scene] viewport {}x{} -> {}x{}",
                self.viewport.width,
                self.viewport.height,
                viewport.width,
                viewport.height
            );
            self.viewport = viewport;
        }
    }

    /// Mouse or touch moved to `pointer` (viewport pixels).
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.camera.point_at(pointer, self.viewport);
    }

    /// Pointer reached the decline control, whose size is `control`.
    pub fn decline_triggered(&mut self, control: Vec2) -> Option<Evasion> {
        let mode = self.celebration.mode();
        self.evasion
            .trigger(mode, self.viewport, control, &mut self.rng)
    }

    /// Accept control activated. `true` on the first activation only.
    pub fn accept_activated(&mut self) -> bool {
        self.celebration.activate()
    }

    /// One animation tick. Returns how many particles were drawn.
    ///
    /// Order: trail overlay (normal blending), advance time, camera, then
    /// particles under additive blending, restoring normal blending after.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let visible = !surface.viewport().is_empty();
        if visible {
            surface.paint_overlay(self.params.trail);
        }

        self.sim_time += self.params.time_step;
        self.camera.tick();
        let camera = self.camera.state();
        let mode = self.celebration.mode();

        if !visible {
            self.field
                .update(self.sim_time, mode, &self.params, &mut self.rng);
            return 0;
        }

        surface.set_blend(BlendMode::Lighter);
        let drawn = self.field.update_and_draw(
            self.sim_time,
            camera,
            mode,
            &self.params,
            &mut self.rng,
            surface,
        );
        surface.set_blend(BlendMode::SourceOver);
        drawn
    }
}
