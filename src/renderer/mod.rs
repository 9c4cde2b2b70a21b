//! Rendering module
//!
//! Scenes draw into a CPU canvas; the presenter puts it on screen with wgpu.

mod canvas;
mod font;
mod presenter;
mod quad;
#[cfg(test)]
mod recording;
mod texture;

pub use canvas::{Canvas, Color, Surface, draw_text_centered};
pub use font::{Font, FontError, GlyphBitmap, LineMetrics};
pub use presenter::{Presenter, RendererError};
pub use quad::{FullscreenQuad, QuadVertex};
#[cfg(test)]
pub(crate) use recording::{DrawCall, RecordingSurface};
pub use texture::CanvasTexture;
