use heart_core::{BlendMode, DrawSurface, Hsl, Rgba, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DrawSurface` over a Canvas2D context. The canvas is never cleared.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn paint_overlay(&mut self, color: Rgba) {
        let vp = self.viewport();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(0.0, 0.0, vp.width as f64, vp.height as f64);
    }

    fn set_blend(&mut self, blend: BlendMode) {
        if let Err(e) = self
            .ctx
            .set_global_composite_operation(blend.composite_operation())
        {
            log::error!("globalCompositeOperation error: {:?}", e);
        }
    }

    fn fill_circle(&mut self, center: glam::Vec2, radius: f32, color: Hsl) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }
}
