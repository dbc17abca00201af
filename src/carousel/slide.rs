use raylib::prelude::*;

use crate::icon::Icon;
use crate::slide::SlideRecord;

const HEADING_FONT_SIZE: i32 = 20;
const BODY_FONT_SIZE: i32 = 14;
const CARD_PADDING: f32 = 16.0;

pub struct Slide {
    pub record: SlideRecord,
    image: Option<Texture2D>,
    icon: Icon,
}

impl Slide {
    pub fn new(record: SlideRecord, image: Option<Texture2D>, position: usize) -> Self {
        Self {
            record,
            image,
            icon: Icon::for_position(position),
        }
    }

    /// Draw the card into `bounds`. Only active cards show their body text;
    /// an empty heading simply renders nothing.
    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle, active: bool) {
        // Small horizontal gutter between cards
        let inner = Rectangle::new(bounds.x + 4.0, bounds.y, bounds.width - 8.0, bounds.height);

        match &self.image {
            Some(texture) => {
                // Crop the source so the photo covers the card without distortion
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let card_ratio = inner.width / inner.height;
                let tex_ratio = tex_width / tex_height;
                let source = if tex_ratio > card_ratio {
                    let visible = tex_height * card_ratio;
                    Rectangle::new((tex_width - visible) / 2.0, 0.0, visible, tex_height)
                } else {
                    let visible = tex_width / card_ratio;
                    Rectangle::new(0.0, (tex_height - visible) / 2.0, tex_width, visible)
                };
                d.draw_texture_pro(
                    texture,
                    source,
                    inner,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
                // Scrim so the text stays readable over the photo
                d.draw_rectangle_rec(inner, Color::new(20, 20, 35, 120));
            }
            None => {
                d.draw_rectangle_rec(inner, Color::new(30, 29, 40, 255));
            }
        }
        d.draw_rectangle_lines_ex(inner, 1.0, Color::new(199, 199, 214, 255));

        // Icon chip, top-left
        let chip = Rectangle::new(inner.x + CARD_PADDING, inner.y + CARD_PADDING, 52.0, 36.0);
        d.draw_rectangle_rec(chip, Color::new(194, 212, 255, 255));
        d.draw_text(
            self.icon.glyph(),
            chip.x as i32 + 10,
            chip.y as i32 + 9,
            HEADING_FONT_SIZE,
            Color::new(48, 104, 236, 255),
        );

        // Text block, bottom-anchored
        let text_left = (inner.x + CARD_PADDING) as i32;
        let max_text_width = (inner.width - 2.0 * CARD_PADDING) as i32;
        let bottom = (inner.y + inner.height - CARD_PADDING) as i32;

        let body_lines = if active {
            wrap_text(&self.record.body, BODY_FONT_SIZE, max_text_width)
        } else {
            Vec::new()
        };

        let line_height = BODY_FONT_SIZE + 4;
        let body_height = body_lines.len() as i32 * line_height;
        let gap = if body_lines.is_empty() { 0 } else { 8 };
        let heading_y = bottom - body_height - gap - HEADING_FONT_SIZE;

        d.draw_text(
            &self.record.heading,
            text_left,
            heading_y,
            HEADING_FONT_SIZE,
            Color::WHITE,
        );

        let mut line_y = heading_y + HEADING_FONT_SIZE + gap;
        for line in &body_lines {
            d.draw_text(
                line,
                text_left,
                line_y,
                BODY_FONT_SIZE,
                Color::new(220, 220, 225, 255),
            );
            line_y += line_height;
        }
    }
}

// Greedy word wrap against the default font's metrics.
fn wrap_text(text: &str, font_size: i32, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || measure_text(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// Width of `text` in pixels for the default font (raylib's MeasureText).
fn measure_text(text: &str, font_size: i32) -> i32 {
    let c_text = std::ffi::CString::new(text).unwrap();
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), font_size) }
}
