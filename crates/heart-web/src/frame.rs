use crate::constants::FPS_REPORT_INTERVAL_SEC;
use crate::render::CanvasSurface;
use heart_core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
    pub stats: FrameStats,
}

pub struct FrameStats {
    since: Instant,
    frames: u32,
    drawn: usize,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
            drawn: 0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, drawn: usize) {
        self.frames += 1;
        self.drawn = drawn;
        let elapsed = self.since.elapsed().as_secs_f32();
        if elapsed >= FPS_REPORT_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} particles drawn",
                self.frames as f32 / elapsed,
                self.drawn
            );
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

impl FrameContext {
    pub fn frame(&mut self) {
        let drawn = self.scene.borrow_mut().frame(&mut self.surface);
        self.stats.record(drawn);
    }
}

/// Run `frame` on every display refresh until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
