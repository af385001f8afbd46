//! Show/hide for the three top-level panes: intro, corridor and detail modal.

use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without the stylesheet
        _ = el.remove_attribute("style");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if visible {
        show(document, id);
    } else {
        hide(document, id);
    }
}
