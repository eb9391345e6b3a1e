//! State machine for the decline control that runs away from the pointer.

use crate::celebration::SimulationMode;
use crate::surface::Viewport;
use glam::Vec2;
use rand::Rng;

/// What the page should apply after one evasion.
#[derive(Clone, Debug, PartialEq)]
pub struct Evasion {
    pub phrase: &'static str,
    /// Visual scale for the accept control.
    pub accept_scale: f32,
    /// Top-left corner for the decline control, in viewport pixels.
    pub position: Vec2,
}

#[derive(Clone, Debug)]
pub struct EvasionState {
    phrases: &'static [&'static str],
    phrase_index: usize,
    triggers: u32,
    position: Option<Vec2>,
    padding: f32,
    scale_step: f32,
}

impl EvasionState {
    pub fn new(phrases: &'static [&'static str], padding: f32, scale_step: f32) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            triggers: 0,
            position: None,
            padding,
            scale_step,
        }
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phrase(&self) -> &'static str {
        self.phrases.get(self.phrase_index).copied().unwrap_or("")
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        1.0 + self.scale_step * self.triggers as f32
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Largest top-left corner that keeps a `control` sized box on screen
    /// with `padding` to spare. Collapses to zero on tiny viewports.
    pub fn max_position(&self, viewport: Viewport, control: Vec2) -> Vec2 {
        Vec2::new(
            (viewport.width - control.x - self.padding).max(0.0),
            (viewport.height - control.y - self.padding).max(0.0),
        )
    }

    /// Evade once. Frozen for good once the scene is celebrating.
    pub fn trigger<R: Rng + ?Sized>(
        &mut self,
        mode: SimulationMode,
        viewport: Viewport,
        control: Vec2,
        rng: &mut R,
    ) -> Option<Evasion> {
        if mode == SimulationMode::Celebrating || self.phrases.is_empty() {
            return None;
        }
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        self.triggers += 1;

        let max = self.max_position(viewport, control);
        let position = Vec2::new(rng.gen::<f32>() * max.x, rng.gen::<f32>() * max.y)
            .clamp(Vec2::ZERO, max);
        self.position = Some(position);

        log::debug!(
            "[evasion] #{} phrase={:?} at ({:.0},{:.0})",
            self.triggers,
            self.phrase(),
            position.x,
            position.y
        );
        Some(Evasion {
            phrase: self.phrase(),
            accept_scale: self.scale_factor(),
            position,
        })
    }
}
