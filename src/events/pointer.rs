use crate::constants::*;
use crate::dom;
use crate::input::{parse_exhibit_id, parse_image_index};
use crate::{dispatch, AppHandle};
use museum_core::Command;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn on_click(document: &web::Document, id: &str, app: &AppHandle, command: Command) {
    let app = app.clone();
    dom::add_click_listener(document, id, move |_ev| dispatch(&app, command));
}

/// Delegated click handler on `container_id`: `map` turns the clicked
/// element's `attr` value into a command.
fn on_delegated_click(
    document: &web::Document,
    container_id: &str,
    attr: &'static str,
    app: &AppHandle,
    map: fn(&str) -> Option<Command>,
) {
    let app = app.clone();
    dom::add_click_listener(document, container_id, move |ev| {
        let Some((_, raw)) = dom::closest_with_attr(&ev, attr) else {
            return;
        };
        match map(&raw) {
            Some(command) => dispatch(&app, command),
            None => log::debug!("[click] ignoring {}={:?}", attr, raw),
        }
    });
}

/// Clicking the dimmed backdrop (the modal root itself) closes it.
fn wire_backdrop_close(document: &web::Document, app: &AppHandle) {
    let Some(detail) = document.get_element_by_id(DETAIL_ID) else {
        log::warn!("[dom] no #{} for backdrop close", DETAIL_ID);
        return;
    };
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.id() == DETAIL_ID)
            .unwrap_or(false);
        if on_backdrop {
            dispatch(&app, Command::CloseDetail);
        }
    }) as Box<dyn FnMut(_)>);
    _ = detail.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_click_handlers(document: &web::Document, app: &AppHandle) {
    on_click(document, ENTER_BUTTON_ID, app, Command::Enter);
    on_click(document, BACK_BUTTON_ID, app, Command::Backward);
    on_click(document, FORWARD_BUTTON_ID, app, Command::Forward);
    on_click(document, DETAIL_CLOSE_ID, app, Command::CloseDetail);
    on_click(document, AUDIO_BUTTON_ID, app, Command::TogglePlayback);

    on_delegated_click(document, CARDS_ID, EXHIBIT_ID_ATTR, app, |raw| {
        parse_exhibit_id(raw).map(Command::Activate)
    });
    on_delegated_click(document, DETAIL_DOTS_ID, IMAGE_INDEX_ATTR, app, |raw| {
        parse_image_index(raw).map(Command::SelectImage)
    });
    wire_backdrop_close(document, app);
}
