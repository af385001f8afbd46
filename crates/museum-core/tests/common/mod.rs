// Shared fixtures for the core integration tests.

#![allow(dead_code)]

use museum_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct SpeechLog {
    pub started: Vec<(String, String, f32, UtteranceTicket)>,
    pub cancels: usize,
    /// Utterances started and neither cancelled nor finished.
    pub outstanding: usize,
    pub max_outstanding: usize,
}

/// Records every call; completion is delivered by the test itself.
#[derive(Clone)]
pub struct FakeSpeech {
    pub log: Rc<RefCell<SpeechLog>>,
    pub available: bool,
}

impl FakeSpeech {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(SpeechLog::default())),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Mirror of the engine firing its end event.
    pub fn natural_end(&self) {
        let mut log = self.log.borrow_mut();
        log.outstanding = log.outstanding.saturating_sub(1);
    }
}

impl SpeechEngine for FakeSpeech {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, request: &SpeechRequest<'_>, ticket: UtteranceTicket) -> GalleryResult<()> {
        let mut log = self.log.borrow_mut();
        log.started.push((
            request.text.to_string(),
            request.lang.to_string(),
            request.rate,
            ticket,
        ));
        log.outstanding += 1;
        log.max_outstanding = log.max_outstanding.max(log.outstanding);
        Ok(())
    }

    fn cancel(&mut self) {
        let mut log = self.log.borrow_mut();
        log.cancels += 1;
        log.outstanding = 0;
    }
}

pub fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog is valid")
}

pub fn exhibit(position: u32) -> Exhibit {
    catalog()
        .at_position(position)
        .cloned()
        .expect("exhibit at position")
}

pub fn gallery() -> (Gallery<FakeSpeech>, FakeSpeech) {
    let speech = FakeSpeech::new();
    let gallery = Gallery::new(catalog(), speech.clone(), GalleryConfig::default());
    (gallery, speech)
}

pub fn session() -> (DetailSession<FakeSpeech>, FakeSpeech) {
    let speech = FakeSpeech::new();
    (
        DetailSession::new(speech.clone(), SpeechSettings::default()),
        speech,
    )
}
