#![cfg(target_arch = "wasm32")]
use museum_core::{Catalog, Command, Gallery, GalleryConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod render;
mod speech;

use speech::WebSpeech;

pub(crate) type AppHandle = Rc<RefCell<Gallery<WebSpeech>>>;

/// Apply a command and redraw if anything changed.
pub(crate) fn dispatch(app: &AppHandle, command: Command) {
    let changed = match app.try_borrow_mut() {
        Ok(mut gallery) => gallery.apply(command),
        Err(_) => {
            log::warn!("[dispatch] gallery busy; dropping {:?}", command);
            return;
        }
    };
    if changed {
        redraw(app);
    }
}

fn redraw(app: &AppHandle) {
    if let Some(document) = dom::window_document() {
        render::render(&document, &app.borrow());
    }
}

// Completion events arrive on a later tick; reach the gallery through a weak
// handle so the engine does not keep it alive.
fn completion_sink(weak: Weak<RefCell<Gallery<WebSpeech>>>) -> speech::CompletionSink {
    Rc::new(move |ticket| {
        let Some(app) = weak.upgrade() else {
            return;
        };
        let changed = match app.try_borrow_mut() {
            Ok(mut gallery) => gallery.utterance_finished(ticket),
            Err(_) => {
                log::warn!("[speech] gallery busy; dropping completion {:?}", ticket);
                false
            }
        };
        if changed {
            redraw(&app);
        }
    })
}

fn build_gallery() -> anyhow::Result<AppHandle> {
    let catalog = Catalog::builtin()?;
    let config = GalleryConfig::default();
    Ok(Rc::new_cyclic(|weak| {
        let speech = WebSpeech::new(completion_sink(weak.clone()));
        RefCell::new(Gallery::new(catalog, speech, config))
    }))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("museum-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    // Fail early on a page that lacks the markup we draw into.
    for id in [
        constants::INTRO_ID,
        constants::HALL_ID,
        constants::CARDS_ID,
        constants::DETAIL_ID,
    ] {
        dom::element(&document, id)?;
    }

    let app = build_gallery()?;
    events::wire_click_handlers(&document, &app);
    events::wire_global_keydown(&window, &app);
    events::wire_page_teardown(&window, &app);

    render::render(&document, &app.borrow());
    log::info!("[init] gallery ready");
    Ok(())
}
