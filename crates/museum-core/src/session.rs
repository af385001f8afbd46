//! The open-exhibit modal: selected piece, shown image and narration playback.

use crate::config::SpeechSettings;
use crate::error::{GalleryError, GalleryResult};
use crate::exhibit::Exhibit;
use crate::speech::{SpeechEngine, SpeechRequest, UtteranceTicket};
use instant::Instant;

#[derive(Clone, Copy, Debug)]
struct ActiveUtterance {
    ticket: UtteranceTicket,
    started: Instant,
}

pub struct DetailSession<S: SpeechEngine> {
    speech: S,
    settings: SpeechSettings,
    selected: Option<Exhibit>,
    image_index: usize,
    active: Option<ActiveUtterance>,
    next_ticket: u64,
    audio_unavailable: bool,
}

impl<S: SpeechEngine> DetailSession<S> {
    pub fn new(speech: S, settings: SpeechSettings) -> Self {
        Self {
            speech,
            settings,
            selected: None,
            image_index: 0,
            active: None,
            next_ticket: 1,
            audio_unavailable: false,
        }
    }

    pub fn selected(&self) -> Option<&Exhibit> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn current_image_index(&self) -> usize {
        self.image_index
    }

    pub fn current_image(&self) -> Option<&'static str> {
        self.selected
            .as_ref()
            .and_then(|e| e.images.get(self.image_index).copied())
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_ticket(&self) -> Option<UtteranceTicket> {
        self.active.map(|a| a.ticket)
    }

    /// Set once the engine has reported it cannot speak; the play control shows it.
    pub fn audio_unavailable(&self) -> bool {
        self.audio_unavailable
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn speech_mut(&mut self) -> &mut S {
        &mut self.speech
    }

    /// Show `exhibit`, cancelling narration for whatever was open before.
    pub fn open(&mut self, exhibit: &Exhibit) {
        self.cancel_active("open");
        self.selected = Some(exhibit.clone());
        self.image_index = 0;
        log::info!("[detail] open exhibit {} ({})", exhibit.id, exhibit.name);
    }

    pub fn close(&mut self) {
        self.cancel_active("close");
        if let Some(e) = self.selected.take() {
            log::info!("[detail] close exhibit {}", e.id);
        }
        self.image_index = 0;
    }

    /// Switch the shown image. Out-of-range indices leave the state untouched.
    pub fn select_image(&mut self, index: usize) -> GalleryResult<()> {
        let exhibit = self
            .selected
            .as_ref()
            .ok_or(GalleryError::NoExhibitSelected)?;
        let len = exhibit.images.len();
        if index >= len {
            return Err(GalleryError::InvalidImageIndex { index, len });
        }
        self.image_index = index;
        Ok(())
    }

    /// Start narrating the open exhibit.
    pub fn play(&mut self) -> GalleryResult<UtteranceTicket> {
        let exhibit = self
            .selected
            .as_ref()
            .ok_or(GalleryError::NoExhibitSelected)?;
        if self.active.is_some() {
            return Err(GalleryError::AlreadyPlaying);
        }
        if !self.speech.is_available() {
            self.audio_unavailable = true;
            log::warn!("[speech] engine unavailable; narration disabled");
            return Err(GalleryError::CapabilityUnavailable(
                "no speech synthesis on this platform".into(),
            ));
        }

        let ticket = UtteranceTicket(self.next_ticket);
        self.next_ticket += 1;
        let request = SpeechRequest {
            text: exhibit.audio_guide,
            lang: &self.settings.lang,
            rate: self.settings.rate,
        };
        if let Err(e) = self.speech.start(&request, ticket) {
            if matches!(e, GalleryError::CapabilityUnavailable(_)) {
                self.audio_unavailable = true;
            }
            log::warn!("[speech] start failed: {}", e);
            return Err(e);
        }
        log::info!("[speech] start {:?} for exhibit {}", ticket, exhibit.id);
        self.active = Some(ActiveUtterance {
            ticket,
            started: Instant::now(),
        });
        Ok(ticket)
    }

    /// Cancel narration. Does nothing when nothing is playing.
    pub fn stop(&mut self) {
        self.cancel_active("stop");
    }

    /// The single play/stop button.
    pub fn toggle_playback(&mut self) -> GalleryResult<()> {
        if self.is_playing() {
            self.stop();
            Ok(())
        } else {
            self.play().map(|_| ())
        }
    }

    /// Natural end of an utterance. Returns whether it was the active one;
    /// stale tickets from cancelled utterances are ignored.
    pub fn finish_utterance(&mut self, ticket: UtteranceTicket) -> bool {
        match self.active {
            Some(active) if active.ticket == ticket => {
                log::info!(
                    "[speech] {:?} finished after {:.1}s",
                    ticket,
                    active.started.elapsed().as_secs_f32()
                );
                self.active = None;
                true
            }
            _ => {
                log::debug!("[speech] ignoring stale completion {:?}", ticket);
                false
            }
        }
    }

    fn cancel_active(&mut self, reason: &str) {
        if let Some(active) = self.active.take() {
            self.speech.cancel();
            log::info!("[speech] cancel {:?} on {}", active.ticket, reason);
        }
    }
}
