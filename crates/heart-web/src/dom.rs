use heart_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// Viewport of the browser window in CSS pixels, zero if unavailable.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

/// Make the canvas backing store match the window and return that size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let vp = window_viewport();
    canvas.set_width(vp.width.max(0.0) as u32);
    canvas.set_height(vp.height.max(0.0) as u32);
    vp
}

/// Attach a handler that ignores the event object.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    attach_callback(target, event, closure.as_ref());
    closure.forget();
}

/// `addEventListener` for an already-built closure, logging failures.
pub fn attach_callback(target: &web::EventTarget, event: &str, callback: &JsValue) {
    if let Err(e) = target.add_event_listener_with_callback(event, callback.unchecked_ref()) {
        log::error!("addEventListener({}) failed: {:?}", event, e);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}
