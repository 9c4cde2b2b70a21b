//! Headless surface for tests
//!
//! Records draw calls instead of producing pixels. Text metrics are fixed:
//! every glyph advances `px / 2` and a line is `px` tall.

use glam::Vec2;

use super::{Color, Surface};
use crate::ui::Rect;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Rect, Color),
    Text {
        text: String,
        px: f32,
        position: Vec2,
        color: Color,
    },
}

/// Surface that stores every draw call it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            calls: Vec::new(),
        }
    }

    /// Text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The recorded call for `text`, if it was drawn
    pub fn text_call(&self, wanted: &str) -> Option<&DrawCall> {
        self.calls
            .iter()
            .find(|call| matches!(call, DrawCall::Text { text, .. } if text == wanted))
    }

    /// Filled rectangles in draw order
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRect(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn measure_text(&self, text: &str, px: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * px * 0.5, px)
    }

    fn draw_text(&mut self, text: &str, px: f32, position: Vec2, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            px,
            position,
            color,
        });
    }
}
