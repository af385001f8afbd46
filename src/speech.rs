//! `window.speechSynthesis` behind the core's `SpeechEngine` trait.

use museum_core::{GalleryError, GalleryResult, SpeechEngine, SpeechRequest, UtteranceTicket};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Receives the ticket of an utterance that ended on its own.
pub type CompletionSink = Rc<dyn Fn(UtteranceTicket)>;

// Keeps the handlers alive for as long as the utterance may fire them.
struct PendingUtterance {
    ticket: UtteranceTicket,
    utterance: web::SpeechSynthesisUtterance,
    _on_end: Closure<dyn FnMut(web::SpeechSynthesisEvent)>,
    _on_error: Closure<dyn FnMut(web::SpeechSynthesisErrorEvent)>,
}

impl PendingUtterance {
    fn detach(&self) {
        self.utterance.set_onend(None);
        self.utterance.set_onerror(None);
    }
}

pub struct WebSpeech {
    synth: Option<web::SpeechSynthesis>,
    sink: CompletionSink,
    pending: Option<PendingUtterance>,
}

impl WebSpeech {
    pub fn new(sink: CompletionSink) -> Self {
        let synth = lookup_synth();
        if synth.is_none() {
            log::warn!("[speech] speechSynthesis not supported by this browser");
        }
        Self {
            synth,
            sink,
            pending: None,
        }
    }
}

fn lookup_synth() -> Option<web::SpeechSynthesis> {
    let window = web::window()?;
    let present = js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis")).ok()?;
    if !present {
        return None;
    }
    window.speech_synthesis().ok()
}

impl SpeechEngine for WebSpeech {
    fn is_available(&self) -> bool {
        self.synth.is_some()
    }

    fn start(&mut self, request: &SpeechRequest<'_>, ticket: UtteranceTicket) -> GalleryResult<()> {
        // One utterance at a time: drop whatever is queued or speaking first.
        self.cancel();
        let synth = self.synth.as_ref().ok_or_else(|| {
            GalleryError::CapabilityUnavailable("speechSynthesis missing".into())
        })?;

        let utterance = web::SpeechSynthesisUtterance::new_with_text(request.text)
            .map_err(|e| GalleryError::CapabilityUnavailable(format!("{:?}", e)))?;
        utterance.set_lang(request.lang);
        utterance.set_rate(request.rate);

        let sink_end = self.sink.clone();
        let on_end = Closure::wrap(Box::new(move |_ev: web::SpeechSynthesisEvent| {
            sink_end(ticket);
        }) as Box<dyn FnMut(_)>);
        let sink_err = self.sink.clone();
        let on_error = Closure::wrap(Box::new(move |ev: web::SpeechSynthesisErrorEvent| {
            log::warn!("[speech] {:?} error: {:?}", ticket, ev.error());
            sink_err(ticket);
        }) as Box<dyn FnMut(_)>);
        utterance.set_onend(Some(on_end.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        synth.speak(&utterance);
        self.pending = Some(PendingUtterance {
            ticket,
            utterance,
            _on_end: on_end,
            _on_error: on_error,
        });
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            // Detach first so the engine's own "end"/"interrupted" events for
            // this utterance never reach the session.
            pending.detach();
            log::debug!("[speech] dropped {:?}", pending.ticket);
        }
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }
}
