use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::exhibit::{Catalog, Exhibit};
use crate::navigation::{CardLayouts, Navigator};
use crate::session::DetailSession;
use crate::speech::{SpeechEngine, UtteranceTicket};

/// A discrete user action. The frontend maps clicks and keys onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Enter,
    Forward,
    Backward,
    /// Click on the card showing this exhibit id.
    Activate(u32),
    /// Open whatever is centred (keyboard).
    ActivateCentred,
    CloseDetail,
    SelectImage(usize),
    TogglePlayback,
    StopPlayback,
}

/// Everything the corridor screen needs to draw itself.
#[derive(Clone, Debug)]
pub struct HallView<'a> {
    pub cards: CardLayouts<'a>,
    pub position: u32,
    pub max_position: u32,
    pub can_move_backward: bool,
    pub can_move_forward: bool,
}

impl HallView<'_> {
    /// Text for the position badge, e.g. "3 / 5".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.position, self.max_position)
    }
}

/// Everything the modal needs to draw itself.
#[derive(Clone, Debug)]
pub struct DetailView<'a> {
    pub exhibit: &'a Exhibit,
    pub image_index: usize,
    pub image: &'static str,
    pub is_playing: bool,
    pub audio_unavailable: bool,
}

/// Catalog, carousel and modal for one page view.
pub struct Gallery<S: SpeechEngine> {
    catalog: Catalog,
    navigator: Navigator,
    session: DetailSession<S>,
    intro: bool,
}

impl<S: SpeechEngine> Gallery<S> {
    pub fn new(catalog: Catalog, speech: S, config: GalleryConfig) -> Self {
        let navigator = Navigator::for_catalog(&catalog, &config);
        let session = DetailSession::new(speech, config.speech);
        log::info!(
            "[gallery] {} exhibits, positions 0..={}",
            catalog.len(),
            navigator.max_position()
        );
        Self {
            catalog,
            navigator,
            session,
            intro: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn session(&self) -> &DetailSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DetailSession<S> {
        &mut self.session
    }

    pub fn in_intro(&self) -> bool {
        self.intro
    }

    pub fn enter(&mut self) -> bool {
        std::mem::replace(&mut self.intro, false)
    }

    /// Corridor movement is blocked behind the intro screen and the modal.
    fn can_navigate(&self) -> bool {
        !self.intro && !self.session.is_open()
    }

    pub fn forward(&mut self) -> bool {
        self.can_navigate() && self.navigator.move_forward()
    }

    pub fn backward(&mut self) -> bool {
        self.can_navigate() && self.navigator.move_backward()
    }

    /// Card click: opens the modal only for the centred exhibit.
    pub fn activate(&mut self, exhibit_id: u32) -> bool {
        if !self.can_navigate() {
            return false;
        }
        match self.catalog.by_id(exhibit_id) {
            Some(exhibit) if self.navigator.is_selectable(exhibit) => {
                self.session.open(exhibit);
                true
            }
            Some(_) => {
                log::debug!("[gallery] exhibit {} is not centred; click ignored", exhibit_id);
                false
            }
            None => {
                log::warn!("[gallery] click on unknown exhibit {}", exhibit_id);
                false
            }
        }
    }

    pub fn activate_centred(&mut self) -> bool {
        match self.navigator.centred(&self.catalog) {
            Some(exhibit) => {
                let id = exhibit.id;
                self.activate(id)
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) -> bool {
        let was_open = self.session.is_open();
        self.session.close();
        was_open
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        match self.session.select_image(index) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("[detail] {}", e);
                false
            }
        }
    }

    /// Play/stop. A failed start still changes view state when it marks audio
    /// as unavailable, so this reports `true` in that case too.
    pub fn toggle_playback(&mut self) -> bool {
        match self.session.toggle_playback() {
            Ok(()) => true,
            Err(GalleryError::CapabilityUnavailable(_)) => true,
            Err(e) => {
                log::debug!("[detail] playback request rejected: {}", e);
                false
            }
        }
    }

    pub fn stop_playback(&mut self) -> bool {
        let was_playing = self.session.is_playing();
        self.session.stop();
        was_playing
    }

    /// Completion notification from the speech engine.
    pub fn utterance_finished(&mut self, ticket: UtteranceTicket) -> bool {
        self.session.finish_utterance(ticket)
    }

    /// Page is going away: silence the narration.
    pub fn shutdown(&mut self) {
        self.session.stop();
    }

    /// Apply one command; returns whether anything visible changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Enter => self.enter(),
            Command::Forward => self.forward(),
            Command::Backward => self.backward(),
            Command::Activate(id) => self.activate(id),
            Command::ActivateCentred => self.activate_centred(),
            Command::CloseDetail => self.close_detail(),
            Command::SelectImage(i) => self.select_image(i),
            Command::TogglePlayback => self.toggle_playback(),
            Command::StopPlayback => self.stop_playback(),
        }
    }

    pub fn hall_view(&self) -> HallView<'_> {
        HallView {
            cards: self.navigator.card_layouts(&self.catalog),
            position: self.navigator.position(),
            max_position: self.navigator.max_position(),
            can_move_backward: self.navigator.can_move_backward(),
            can_move_forward: self.navigator.can_move_forward(),
        }
    }

    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        let exhibit = self.session.selected()?;
        Some(DetailView {
            exhibit,
            image_index: self.session.current_image_index(),
            image: self.session.current_image()?,
            is_playing: self.session.is_playing(),
            audio_unavailable: self.session.audio_unavailable(),
        })
    }
}
