// Shared layout/narration tuning constants used by the core and the web frontend.

// Carousel
pub const VISIBILITY_RADIUS: u32 = 2; // cards further than this from the centre are not rendered
pub const CARD_SPACING_PX: f32 = 300.0; // horizontal distance between neighbouring cards
pub const CARD_LIFT_PX: f32 = 20.0; // vertical drop per step away from the centre
pub const BASE_Z_INDEX: i32 = 10; // stacking order of the centred card

// Per-distance falloff, indexed by |exhibit.position - position|
pub const SCALE_BY_DISTANCE: [f32; 3] = [1.0, 0.7, 0.4];
pub const OPACITY_BY_DISTANCE: [f32; 3] = [1.0, 0.6, 0.3];

// Narration
pub const NARRATION_LANG: &str = "ru-RU";
pub const NARRATION_RATE: f32 = 0.9; // slightly slower than the engine default of 1.0

// First display position in a catalog; navigation position 0 sits just before it
pub const FIRST_DISPLAY_POSITION: u32 = 1;
