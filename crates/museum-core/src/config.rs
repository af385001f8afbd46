use crate::constants::*;

/// Speech parameters handed to the engine with every utterance.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechSettings {
    pub lang: String,
    pub rate: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            lang: NARRATION_LANG.to_string(),
            rate: NARRATION_RATE,
        }
    }
}

/// Tunables for the carousel and the narration session.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub visibility_radius: u32,
    pub card_spacing_px: f32,
    pub card_lift_px: f32,
    pub speech: SpeechSettings,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            visibility_radius: VISIBILITY_RADIUS,
            card_spacing_px: CARD_SPACING_PX,
            card_lift_px: CARD_LIFT_PX,
            speech: SpeechSettings::default(),
        }
    }
}
