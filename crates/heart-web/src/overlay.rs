use crate::constants::{MAIN_PANEL_ID, SUCCESS_PANEL_ID};
use crate::dom;
use crate::style;
use web_sys as web;

fn set_opacity(document: &web::Document, id: &str, value: f32) {
    match dom::html_element(document, id) {
        Ok(el) => dom::set_style(&el, "opacity", &style::opacity(value)),
        Err(e) => log::warn!("{}", e),
    }
}

/// Fade the question panel out and the success panel in. CSS transitions on
/// the page do the actual cross-fade.
pub fn show_success(document: &web::Document) {
    set_opacity(document, MAIN_PANEL_ID, 0.0);
    set_opacity(document, SUCCESS_PANEL_ID, 1.0);
}
