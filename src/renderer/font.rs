//! Font loading and glyph rasterization
//!
//! A thin wrapper over `fontdue`. System fonts are discovered with `fontdb`.

use glam::Vec2;

/// Face shipped with the crate, used when no system font matches
const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Rasterized coverage for one glyph, positioned relative to the pen.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    /// Offset of the bitmap's top-left from (pen x, baseline)
    pub offset: (i32, i32),
    /// Bitmap width in pixels
    pub width: usize,
    /// Bitmap height in pixels
    pub height: usize,
    /// Horizontal advance to the next glyph
    pub advance: f32,
    /// Row-major coverage values, 0..=255
    pub coverage: Vec<u8>,
}

/// Vertical metrics of a line of text at a given size
#[derive(Debug, Clone, Copy, Default)]
pub struct LineMetrics {
    /// Distance from the top of the line to the baseline
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line (positive)
    pub descent: f32,
}

impl LineMetrics {
    /// Total line height
    #[must_use]
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// A loaded font face
pub struct Font {
    inner: fontdue::Font,
}

impl Font {
    /// Load a font from TTF/OTF bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a parseable font
    pub fn from_bytes(bytes: &[u8], index: u32) -> Result<Self, FontError> {
        let settings = fontdue::FontSettings {
            collection_index: index,
            ..fontdue::FontSettings::default()
        };
        let inner = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self { inner })
    }

    /// The face shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled bytes fail to parse
    pub fn bundled() -> Result<Self, FontError> {
        Self::from_bytes(BUNDLED_FONT, 0)
    }

    /// The system sans-serif font, or the bundled face if there is none
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled face cannot be parsed either
    pub fn load_default() -> Result<Self, FontError> {
        Self::from_system().or_else(|err| {
            log::warn!("{err}, using bundled font");
            Self::bundled()
        })
    }

    /// Load the system's default sans-serif font
    ///
    /// # Errors
    ///
    /// Returns an error if no usable system font is installed
    pub fn from_system() -> Result<Self, FontError> {
        use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};

        let mut db = Database::new();
        db.load_system_fonts();

        let id = db
            .query(&Query {
                families: &[
                    Family::SansSerif,
                    Family::Name("DejaVu Sans"),
                    Family::Name("Segoe UI"),
                    Family::Name("Arial"),
                ],
                weight: Weight::NORMAL,
                stretch: Stretch::Normal,
                style: Style::Normal,
            })
            .ok_or(FontError::NotFound)?;

        let face = db.face(id).ok_or(FontError::NotFound)?;

        let bytes: Vec<u8> = match &face.source {
            Source::File(path) => {
                std::fs::read(path).map_err(|e| FontError::Io(e.to_string()))?
            }
            Source::Binary(data) | Source::SharedFile(_, data) => (**data).as_ref().to_vec(),
        };

        log::debug!("Using system font: {}", face.post_script_name);

        Self::from_bytes(&bytes, face.index)
    }

    /// Line metrics at `px`
    #[must_use]
    pub fn line_metrics(&self, px: f32) -> LineMetrics {
        self.inner
            .horizontal_line_metrics(px)
            .map(|lm| LineMetrics {
                ascent: lm.ascent,
                descent: lm.descent.abs(),
            })
            .unwrap_or(LineMetrics {
                ascent: px * 0.8,
                descent: px * 0.2,
            })
    }

    /// Kerning adjustment between two characters
    #[must_use]
    pub fn kern(&self, left: char, right: char, px: f32) -> f32 {
        self.inner.horizontal_kern(left, right, px).unwrap_or(0.0)
    }

    /// Horizontal advance of a single character
    #[must_use]
    pub fn advance(&self, c: char, px: f32) -> f32 {
        self.inner.metrics(c, px).advance_width
    }

    /// Size of a single line of text, in pixels
    #[must_use]
    pub fn measure(&self, text: &str, px: f32) -> Vec2 {
        let mut width = 0.0;
        let mut prev = None;
        for c in text.chars() {
            if let Some(p) = prev {
                width += self.kern(p, c, px);
            }
            width += self.advance(c, px);
            prev = Some(c);
        }
        Vec2::new(width.ceil(), self.line_metrics(px).height().ceil())
    }

    /// Rasterize one character
    #[must_use]
    pub fn rasterize(&self, c: char, px: f32) -> GlyphBitmap {
        let (metrics, coverage) = self.inner.rasterize(c, px);
        GlyphBitmap {
            // fontdue's ymin is the bitmap's bottom relative to the baseline, y up
            offset: (metrics.xmin, -(metrics.height as i32 + metrics.ymin)),
            width: metrics.width,
            height: metrics.height,
            advance: metrics.advance_width,
            coverage,
        }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("glyphs", &self.inner.glyph_count())
            .finish()
    }
}

/// Errors that can occur while loading fonts
#[derive(Debug, Clone, thiserror::Error)]
pub enum FontError {
    /// No suitable system font
    #[error("no usable system font found")]
    NotFound,
    /// IO error reading font file
    #[error("font IO error: {0}")]
    Io(String),
    /// Error parsing font data
    #[error("font parse error: {0}")]
    Parse(String),
}
