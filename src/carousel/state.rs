use crate::constants::SLIDE_COUNT;

/// Active-index state machine for the fixed eight-card track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    active_index: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self { active_index: 0 }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Advance to the next card. Saturates at the last index, does not wrap.
    pub fn next(&mut self) {
        if self.active_index < SLIDE_COUNT - 1 {
            self.active_index += 1;
        }
    }

    /// Go back one card. Saturates at 0, does not wrap.
    pub fn prev(&mut self) {
        if self.active_index > 0 {
            self.active_index -= 1;
        }
    }

    /// Jump straight to `index`. Out-of-range indices are a caller bug (clicks
    /// only ever come from rendered cards), so this panics rather than clamps.
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < SLIDE_COUNT,
            "jump_to({index}) out of range for {SLIDE_COUNT} slides"
        );
        self.active_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(CarouselState::new().active_index(), 0);
    }

    #[test]
    fn next_saturates_at_last_index() {
        let mut state = CarouselState::new();
        for _ in 0..SLIDE_COUNT + 3 {
            state.next();
        }
        assert_eq!(state.active_index(), SLIDE_COUNT - 1);
        state.next();
        assert_eq!(state.active_index(), SLIDE_COUNT - 1);
    }

    #[test]
    fn prev_saturates_at_zero() {
        let mut state = CarouselState::new();
        state.prev();
        state.prev();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn jump_to_sets_index_directly() {
        let mut state = CarouselState::new();
        state.jump_to(5);
        assert_eq!(state.active_index(), 5);
        state.jump_to(0);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn jump_to_out_of_range_panics() {
        let mut state = CarouselState::new();
        state.jump_to(SLIDE_COUNT);
    }
}
