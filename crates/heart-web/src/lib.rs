#![cfg(target_arch = "wasm32")]
use heart_core::{Scene, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;

use constants::{ACCEPT_BUTTON_ID, CANVAS_ID, DECLINE_BUTTON_ID};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<Scene>>) {
    let canvas = canvas.clone();
    let scene = scene.clone();
    if let Some(window) = web::window() {
        dom::add_listener(window.as_ref(), "resize", move || {
            let vp = dom::sync_canvas_to_window(&canvas);
            scene.borrow_mut().resize(vp);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let accept = dom::html_element(&document, ACCEPT_BUTTON_ID)?;
    let decline = dom::html_element(&document, DECLINE_BUTTON_ID)?;

    let params = SceneParams::default();
    params.validate()?;

    let viewport = dom::sync_canvas_to_window(&canvas);
    let seed: u64 = rand::random();
    let scene = Rc::new(RefCell::new(Scene::new(params, viewport, seed)));
    {
        let s = scene.borrow();
        log::info!(
            "[scene] {}x{} particles={} seed={:#x}",
            viewport.width,
            viewport.height,
            s.field().len(),
            seed
        );
    }

    let surface = render::CanvasSurface::new(&canvas)?;

    wire_canvas_resize(&canvas, &scene);
    events::wire_pointer_tracking(&document, &scene);
    events::wire_decline_button(&scene, decline, accept.clone());
    events::wire_accept_button(&document, &scene, &accept);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        surface,
        stats: frame::FrameStats::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
