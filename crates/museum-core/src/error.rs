use thiserror::Error;

/// Everything that can go wrong in the gallery.
///
/// None of these are fatal. Navigation and image-index errors are swallowed by
/// the convenience mutators and only logged; `CapabilityUnavailable` is kept
/// as view state so the play control can show it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalleryError {
    #[error("cannot move to position {attempted}: valid range is 0..={max}")]
    OutOfRangeNavigation { attempted: i64, max: u32 },

    #[error("image index {index} is out of range for {len} image(s)")]
    InvalidImageIndex { index: usize, len: usize },

    #[error("speech synthesis unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("no exhibit is open")]
    NoExhibitSelected,

    #[error("narration is already playing")]
    AlreadyPlaying,

    #[error("invalid exhibit catalog: {0}")]
    InvalidCatalog(String),
}

pub type GalleryResult<T> = std::result::Result<T, GalleryError>;
