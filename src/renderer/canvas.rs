//! Software drawing surface
//!
//! Scenes draw into a [`Surface`]. The window-backed implementation is
//! [`Canvas`], a CPU RGBA framebuffer that the presenter uploads each frame.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::font::{Font, GlyphBitmap};
use crate::ui::Rect;

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity, 255 is opaque
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Pixel bytes in RGBA order
    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Drawing target handed to scenes at render time.
pub trait Surface {
    /// Drawable size in pixels
    fn size(&self) -> Vec2;

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill a rectangle, clipped to the surface
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Size a single line of text would occupy at `px`
    fn measure_text(&self, text: &str, px: f32) -> Vec2;

    /// Draw a single line of text with its bounding box's top-left at `position`
    fn draw_text(&mut self, text: &str, px: f32, position: Vec2, color: Color);
}

/// Draw text centered on `center` and return the box it occupies.
pub fn draw_text_centered(
    surface: &mut dyn Surface,
    text: &str,
    px: f32,
    center: Vec2,
    color: Color,
) -> Rect {
    let mut bounds = Rect::from_center(center, surface.measure_text(text, px));
    bounds.position = bounds.position.round();
    surface.draw_text(text, px, bounds.position, color);
    bounds
}

/// Glyph sizes are bucketed so animated text does not grow the cache without bound.
const GLYPH_SIZE_STEP: f32 = 0.25;
const GLYPH_CACHE_LIMIT: usize = 4096;

/// CPU framebuffer with text support
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    font: Font,
    glyphs: GlyphCache,
}

impl Canvas {
    /// Create a canvas filled with black
    #[must_use]
    pub fn new(width: u32, height: u32, font: Font) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_rgba8(); (width * height) as usize],
            font,
            glyphs: GlyphCache::new(GLYPH_CACHE_LIMIT),
        }
    }

    /// Resize the canvas. Contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::BLACK.to_rgba8(); (width * height) as usize];
    }

    /// Canvas width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixels, row-major
    #[must_use]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Read a single pixel
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
        Some(Color::rgba(r, g, b, a))
    }

    /// Blend `color` into one pixel with the given coverage
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        blend_pixel(&mut self.pixels, self.width, self.height, x, y, color, coverage);
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cached_glyphs", &self.glyphs.len())
            .finish()
    }
}

fn blend_pixel(
    pixels: &mut [[u8; 4]],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: Color,
    coverage: u8,
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let alpha = u32::from(coverage) * u32::from(color.a) / 255;
    if alpha == 0 {
        return;
    }
    let dst = &mut pixels[(y as u32 * width + x as u32) as usize];
    let mix = |s: u8, d: u8| ((u32::from(s) * alpha + u32::from(d) * (255 - alpha)) / 255) as u8;
    *dst = [
        mix(color.r, dst[0]),
        mix(color.g, dst[1]),
        mix(color.b, dst[2]),
        255,
    ];
}

/// Rasterized glyphs keyed by character and size bucket
struct GlyphCache {
    glyphs: FxHashMap<(char, u32), GlyphBitmap>,
    /// Entries kept before the cache starts over
    limit: usize,
}

impl GlyphCache {
    fn new(limit: usize) -> Self {
        Self {
            glyphs: FxHashMap::default(),
            limit,
        }
    }

    fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Cached glyph for `c` at `px`, rasterized at the bucket's size on a miss
    fn get_or_rasterize<F>(&mut self, c: char, px: f32, rasterize: F) -> &GlyphBitmap
    where
        F: FnOnce(char, f32) -> GlyphBitmap,
    {
        let bucket = (px / GLYPH_SIZE_STEP).round() as u32;
        if self.glyphs.len() >= self.limit && !self.glyphs.contains_key(&(c, bucket)) {
            self.glyphs.clear();
        }
        self.glyphs
            .entry((c, bucket))
            .or_insert_with(|| rasterize(c, bucket as f32 * GLYPH_SIZE_STEP))
    }
}

impl Surface for Canvas {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba8());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.position.x.round().clamp(0.0, self.width as f32) as u32;
        let y0 = rect.position.y.round().clamp(0.0, self.height as f32) as u32;
        let x1 = rect.right().round().clamp(0.0, self.width as f32) as u32;
        let y1 = rect.bottom().round().clamp(0.0, self.height as f32) as u32;
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        if color.a == 255 {
            let rgba = color.to_rgba8();
            for y in y0..y1 {
                let row = (y * self.width) as usize;
                self.pixels[row + x0 as usize..row + x1 as usize].fill(rgba);
            }
        } else {
            for y in y0..y1 {
                for x in x0..x1 {
                    self.blend(x as i32, y as i32, color, 255);
                }
            }
        }
    }

    fn measure_text(&self, text: &str, px: f32) -> Vec2 {
        self.font.measure(text, px)
    }

    fn draw_text(&mut self, text: &str, px: f32, position: Vec2, color: Color) {
        let baseline = (position.y + self.font.line_metrics(px).ascent).round() as i32;
        let mut pen_x = position.x;
        let mut prev = None;

        for c in text.chars() {
            if let Some(p) = prev {
                pen_x += self.font.kern(p, c, px);
            }
            prev = Some(c);

            let font = &self.font;
            let glyph = self
                .glyphs
                .get_or_rasterize(c, px, |c, size| font.rasterize(c, size));
            let gx = pen_x.round() as i32 + glyph.offset.0;
            let gy = baseline + glyph.offset.1;
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let coverage = glyph.coverage[row * glyph.width + col];
                    if coverage > 0 {
                        blend_pixel(
                            &mut self.pixels,
                            self.width,
                            self.height,
                            gx + col as i32,
                            gy + row as i32,
                            color,
                            coverage,
                        );
                    }
                }
            }
            pen_x += glyph.advance;
        }
    }
}
