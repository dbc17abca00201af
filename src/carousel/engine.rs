use raylib::prelude::*;
use thiserror::Error;

use crate::carousel::layout::{LayoutResult, compute_layout};
use crate::carousel::slide::Slide;
use crate::carousel::state::CarouselState;
use crate::constants::*;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The width/translation formulas assume exactly `SLIDE_COUNT` cards, so
    /// any other count is rejected instead of producing a skewed layout.
    #[error("carousel needs exactly {SLIDE_COUNT} slides, got {0}")]
    InvalidSlideCount(usize),
}

pub struct CarouselEngine {
    slides: Vec<Slide>,
    state: CarouselState,
    layout: LayoutResult,

    // Track shift animation: widths snap, only the translation tweens.
    translate_x: f32,
    translate_from: f32,
    animation_timer: f32,
    is_animating: bool,
}

impl CarouselEngine {
    pub fn new(slides: Vec<Slide>) -> Result<Self, EngineError> {
        if slides.len() != SLIDE_COUNT {
            return Err(EngineError::InvalidSlideCount(slides.len()));
        }
        let state = CarouselState::new();
        let layout = compute_layout(&state);
        let translate_x = layout.translate_x;
        Ok(Self {
            slides,
            state,
            layout,
            translate_x,
            translate_from: translate_x,
            animation_timer: 0.0,
            is_animating: false,
        })
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn next(&mut self) {
        self.state.next();
        self.refresh_layout();
    }

    pub fn prev(&mut self) {
        self.state.prev();
        self.refresh_layout();
    }

    pub fn jump_to(&mut self, index: usize) {
        self.state.jump_to(index);
        self.refresh_layout();
    }

    /// Apply one frame of input. Each mutation is followed immediately by a
    /// layout recomputation, so there is never a stale `LayoutResult`.
    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.prev();
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse_x = rl.get_mouse_position().x;
            // The hit test only ever yields in-range indices, which is what
            // lets jump_to treat out-of-range as a programmer error.
            if let Some(index) = self.card_at(mouse_x, rl.get_screen_width() as f32) {
                self.jump_to(index);
            }
        }
    }

    /// Advance the track shift animation toward the layout target.
    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / TRANSLATE_DURATION).min(1.0);
        self.translate_x = raylib::core::math::lerp(self.translate_from, self.layout.translate_x, t);
        if self.animation_timer >= TRANSLATE_DURATION {
            self.is_animating = false;
            self.translate_x = self.layout.translate_x;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::RAYWHITE);

        let viewport_width = d.get_screen_width() as f32;
        let viewport_height = d.get_screen_height() as f32;
        let card_height = viewport_height * 0.75;
        let card_top = (viewport_height - card_height) / 2.0;

        let mut left = self.translate_x / 100.0 * viewport_width;
        for (index, slide) in self.slides.iter().enumerate() {
            let width = self.layout.widths[index] / 100.0 * viewport_width;
            let bounds = Rectangle::new(left, card_top, width, card_height);
            slide.draw(d, bounds, index == self.state.active_index());
            left += width;
        }
    }

    fn refresh_layout(&mut self) {
        let next = compute_layout(&self.state);
        if next.translate_x != self.layout.translate_x {
            self.translate_from = self.translate_x;
            self.animation_timer = 0.0;
            self.is_animating = true;
        }
        self.layout = next;
    }

    /// Which card spans viewport-pixel `x` at the current animated shift.
    fn card_at(&self, x: f32, viewport_width: f32) -> Option<usize> {
        let mut left = self.translate_x / 100.0 * viewport_width;
        for (index, width_pct) in self.layout.widths.iter().enumerate() {
            let right = left + width_pct / 100.0 * viewport_width;
            if x >= left && x < right {
                return Some(index);
            }
            left = right;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::build_slide_set;

    fn slides(count: usize) -> Vec<Slide> {
        build_slide_set(&[])
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(position, record)| Slide::new(record, None, position))
            .collect()
    }

    #[test]
    fn rejects_anything_but_eight_slides() {
        assert!(matches!(
            CarouselEngine::new(slides(5)),
            Err(EngineError::InvalidSlideCount(5))
        ));
        assert!(matches!(
            CarouselEngine::new(Vec::new()),
            Err(EngineError::InvalidSlideCount(0))
        ));
        assert!(CarouselEngine::new(slides(SLIDE_COUNT)).is_ok());
    }

    #[test]
    fn starts_on_the_first_card_with_no_shift() {
        let engine = CarouselEngine::new(slides(SLIDE_COUNT)).unwrap();
        assert_eq!(engine.active_index(), 0);
        assert_eq!(engine.layout().translate_x, 0.0);
        assert_eq!(engine.layout().widths[0], ACTIVE_WIDTH_PCT);
    }

    #[test]
    fn navigation_recomputes_the_layout() {
        let mut engine = CarouselEngine::new(slides(SLIDE_COUNT)).unwrap();
        engine.next();
        assert_eq!(engine.active_index(), 1);
        assert_eq!(engine.layout().widths[1], ACTIVE_WIDTH_PCT);
        engine.next();
        assert_eq!(engine.layout().translate_x, -INACTIVE_WIDTH_PCT);

        for _ in 0..SLIDE_COUNT {
            engine.next();
        }
        assert_eq!(engine.active_index(), SLIDE_COUNT - 1);
        assert_eq!(engine.layout().translate_x, -MAX_TRANSLATE_PCT);

        engine.jump_to(0);
        assert_eq!(engine.layout().translate_x, 0.0);
    }

    #[test]
    fn track_shift_settles_on_the_layout_target() {
        let mut engine = CarouselEngine::new(slides(SLIDE_COUNT)).unwrap();
        engine.jump_to(3);
        // Mid-animation the shift sits between start and target
        engine.update(TRANSLATE_DURATION / 2.0);
        assert!(engine.translate_x < 0.0);
        assert!(engine.translate_x > engine.layout().translate_x);
        // Past the duration it lands exactly on the target
        engine.update(TRANSLATE_DURATION);
        assert_eq!(engine.translate_x, engine.layout().translate_x);
        assert!(!engine.is_animating);
    }
}
