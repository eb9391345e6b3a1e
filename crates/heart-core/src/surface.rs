//! The drawing seam between the simulation and whatever raster API shows it.
//!
//! A frame is composited in two phases: a translucent overlay is painted over
//! the previous frame under normal blending, then particles are drawn under
//! additive blending. Surfaces must not clear between frames; the overlay is
//! what fades old particles into trails.

use glam::Vec2;
use std::fmt;

/// Pixel dimensions of the render surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True for hidden tabs and collapsed canvases; nothing should be drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// How new paint combines with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Paint replaces what is underneath (alpha-composited).
    SourceOver,
    /// Colours add up, so overlapping particles brighten.
    Lighter,
}

impl BlendMode {
    /// Name used by the Canvas2D `globalCompositeOperation` property.
    pub fn composite_operation(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
        }
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.2},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub trait DrawSurface {
    fn viewport(&self) -> Viewport;
    /// Fill the whole surface with `color` without clearing first.
    fn paint_overlay(&mut self, color: Rgba);
    fn set_blend(&mut self, blend: BlendMode);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl);
}
