use crate::dom;
use crate::overlay;
use crate::style;
use glam::Vec2;
use heart_core::{Evasion, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

#[derive(Clone)]
struct DeclineWiring {
    scene: Rc<RefCell<Scene>>,
    decline: web::HtmlElement,
    accept: web::HtmlElement,
}

impl DeclineWiring {
    fn evade(&self) {
        let control = Vec2::new(
            self.decline.offset_width() as f32,
            self.decline.offset_height() as f32,
        );
        // Scene borrow must end before the DOM writes below.
        let outcome = self.scene.borrow_mut().decline_triggered(control);
        if let Some(ev) = outcome {
            self.apply(&ev);
        }
    }

    fn apply(&self, ev: &Evasion) {
        self.decline.set_inner_text(ev.phrase);
        dom::set_style(
            &self.accept,
            "transform",
            &style::scale_transform(ev.accept_scale),
        );
        dom::set_style(&self.decline, "position", "fixed");
        dom::set_style(&self.decline, "left", &style::px(ev.position.x));
        dom::set_style(&self.decline, "top", &style::px(ev.position.y));
    }
}

/// Hover, click and touch on the decline control all make it run away.
pub fn wire_decline_button(
    scene: &Rc<RefCell<Scene>>,
    decline: web::HtmlElement,
    accept: web::HtmlElement,
) {
    let w = DeclineWiring {
        scene: scene.clone(),
        decline,
        accept,
    };
    let target: web::EventTarget = w.decline.clone().into();

    let on_enter = w.clone();
    dom::add_listener(&target, "mouseenter", move || on_enter.evade());
    let on_click = w.clone();
    dom::add_listener(&target, "click", move || on_click.evade());

    let on_touch = w;
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        on_touch.evade();
    }) as Box<dyn FnMut(_)>);
    dom::attach_callback(&target, "touchstart", closure.as_ref());
    closure.forget();
}

pub fn wire_accept_button(
    document: &web::Document,
    scene: &Rc<RefCell<Scene>>,
    accept: &web::HtmlElement,
) {
    let scene = scene.clone();
    let document = document.clone();
    let target: &web::EventTarget = accept.as_ref();
    dom::add_listener(target, "click", move || {
        let changed = scene.borrow_mut().accept_activated();
        if changed {
            overlay::show_success(&document);
        }
    });
}
