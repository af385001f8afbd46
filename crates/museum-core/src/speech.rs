use crate::error::GalleryResult;

/// Identifies one started utterance. Tickets increase monotonically so a
/// completion for anything but the active ticket is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtteranceTicket(pub u64);

/// What to say and how.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
    pub lang: &'a str,
    pub rate: f32,
}

/// Text-to-speech capability.
///
/// `start` returns immediately. When the utterance ends on its own the engine
/// reports `ticket` back through whatever completion path the host wired up,
/// which ends in [`crate::DetailSession::finish_utterance`]. After `cancel`
/// the engine should not report the cancelled ticket; the session ignores it
/// if it does.
pub trait SpeechEngine {
    fn is_available(&self) -> bool;
    fn start(&mut self, request: &SpeechRequest<'_>, ticket: UtteranceTicket) -> GalleryResult<()>;
    fn cancel(&mut self);
}
