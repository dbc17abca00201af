pub const RENDER_WIDTH: i32 = 1400;           // Window width (matches the original 1400px canvas)
pub const RENDER_HEIGHT: i32 = 640;           // Window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_COUNT: usize = 8;             // The width/translation formulas assume exactly 8 cards

pub const ACTIVE_WIDTH_PCT: f32 = 36.84;      // Width of the expanded card (percent of viewport)
pub const INACTIVE_WIDTH_PCT: f32 = 15.79;    // Width of a collapsed card (percent of viewport)

// One active plus seven inactive cards laid end to end: ~147.37% of the viewport,
// so the track always overflows and has to be shifted to reveal the tail cards.
pub const TRACK_WIDTH_PCT: f32 =
    ACTIVE_WIDTH_PCT + (SLIDE_COUNT as f32 - 1.0) * INACTIVE_WIDTH_PCT;

// Furthest the track may shift left before its right edge meets the viewport's.
pub const MAX_TRANSLATE_PCT: f32 = TRACK_WIDTH_PCT - 100.0;

pub const TRANSLATE_DURATION: f32 = 0.5;      // Duration of the track shift animation (seconds)
