use crate::carousel::state::CarouselState;
use crate::constants::*;

/// Card widths and track offset for one frame, all in percent of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub widths: [f32; SLIDE_COUNT],
    pub translate_x: f32,
}

/// Pure projection of the carousel state onto card widths and the track shift.
///
/// The active card gets `ACTIVE_WIDTH_PCT`, every other card
/// `INACTIVE_WIDTH_PCT`. The track is shifted so that exactly one collapsed
/// card stays visible to the left of the active one (at index 0 there is
/// nothing to the left), clamped so the track's right edge never scrolls past
/// the viewport's right edge.
pub fn compute_layout(state: &CarouselState) -> LayoutResult {
    let active = state.active_index();

    let mut widths = [INACTIVE_WIDTH_PCT; SLIDE_COUNT];
    widths[active] = ACTIVE_WIDTH_PCT;

    // Keep the card at active - 1 flush with the viewport's left edge.
    let target = -(active.saturating_sub(1) as f32) * INACTIVE_WIDTH_PCT;
    let translate_x = target.max(-MAX_TRANSLATE_PCT);

    LayoutResult { widths, translate_x }
}
