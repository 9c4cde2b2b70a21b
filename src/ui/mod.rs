//! UI layout module

mod rect;

pub use rect::{Anchor, Rect};
