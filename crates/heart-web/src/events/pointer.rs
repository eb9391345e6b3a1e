use crate::dom;
use glam::Vec2;
use heart_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Mouse and touch moves anywhere on the page steer the camera.
pub fn wire_pointer_tracking(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    wire_mousemove(document, scene.clone());
    wire_touchmove(document, scene.clone());
}

fn wire_mousemove(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        scene.borrow_mut().pointer_moved(pos);
    }) as Box<dyn FnMut(_)>);
    dom::attach_callback(document, "mousemove", closure.as_ref());
    closure.forget();
}

fn wire_touchmove(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let pos = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
            scene.borrow_mut().pointer_moved(pos);
        }
    }) as Box<dyn FnMut(_)>);
    dom::attach_callback(document, "touchmove", closure.as_ref());
    closure.forget();
}
