// DOM hooks and UI strings for the web frontend. Element ids must match index.html.

// Screens
pub const INTRO_ID: &str = "intro";
pub const HALL_ID: &str = "hall";

// Corridor
pub const CARDS_ID: &str = "cards";
pub const POSITION_LABEL_ID: &str = "position-label";
pub const ENTER_BUTTON_ID: &str = "btn-enter";
pub const BACK_BUTTON_ID: &str = "btn-back";
pub const FORWARD_BUTTON_ID: &str = "btn-forward";

// Detail modal
pub const DETAIL_ID: &str = "detail";
pub const DETAIL_CLOSE_ID: &str = "detail-close";
pub const DETAIL_TITLE_ID: &str = "detail-title";
pub const DETAIL_IMAGE_ID: &str = "detail-image";
pub const DETAIL_DOTS_ID: &str = "detail-dots";
pub const DETAIL_ERA_ID: &str = "detail-era";
pub const DETAIL_DESCRIPTION_ID: &str = "detail-description";
pub const DETAIL_INFO_ID: &str = "detail-info";
pub const DETAIL_AUDIO_TEXT_ID: &str = "detail-audio-text";
pub const AUDIO_BUTTON_ID: &str = "btn-audio";

// Data attributes carried by generated elements
pub const EXHIBIT_ID_ATTR: &str = "data-exhibit-id";
pub const IMAGE_INDEX_ATTR: &str = "data-index";

// CSS classes toggled from Rust
pub const HIDDEN_CLASS: &str = "hidden";
pub const SELECTABLE_CLASS: &str = "selectable";
pub const ACTIVE_DOT_CLASS: &str = "active";
pub const PLAYING_CLASS: &str = "playing";
pub const UNAVAILABLE_CLASS: &str = "unavailable";

// Labels
pub const VIEW_HINT_TEXT: &str = "Нажмите для просмотра";
pub const PLAY_LABEL: &str = "Прослушать";
pub const STOP_LABEL: &str = "Остановить";
pub const UNAVAILABLE_LABEL: &str = "Аудиогид недоступен";
pub const POSITION_PREFIX: &str = "Позиция: ";
