use crate::input::{command_for_key, suppresses_default, KeyContext};
use crate::{dispatch, AppHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn key_context(app: &AppHandle) -> KeyContext {
    let gallery = app.borrow();
    KeyContext {
        intro: gallery.in_intro(),
        detail_open: gallery.session().is_open(),
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &AppHandle) {
    let key = ev.key();
    let Some(command) = command_for_key(&key, key_context(app)) else {
        return;
    };
    if suppresses_default(&key) {
        ev.prevent_default();
    }
    log::debug!("[key] {} -> {:?}", key, command);
    dispatch(app, command);
}

pub fn wire_global_keydown(window: &web::Window, app: &AppHandle) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Silence the narration when the page is hidden or unloaded.
pub fn wire_page_teardown(window: &web::Window, app: &AppHandle) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        match app.try_borrow_mut() {
            Ok(mut gallery) => gallery.shutdown(),
            Err(_) => log::warn!("[page] gallery busy during teardown"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
