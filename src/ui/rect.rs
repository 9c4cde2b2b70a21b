//! Rectangle and layout primitives
//!
//! Screen-space rectangles used for drawing and mouse hit testing.

use glam::Vec2;

/// Anchor point for positioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Top-left corner
    #[default]
    TopLeft,
    /// Center
    Center,
    /// Bottom-left corner
    BottomLeft,
}

impl Anchor {
    /// Get the anchor offset as a normalized vector (0.0 to 1.0)
    #[must_use]
    pub const fn offset(&self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::Center => (0.5, 0.5),
            Self::BottomLeft => (0.0, 1.0),
        }
    }
}

/// An axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Size (width, height)
    pub size: Vec2,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rectangle of `size` centered on `center`
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            position: center - size * 0.5,
            size,
        }
    }

    /// Place a rectangle of `size` at `offset` from an anchor point of the parent.
    ///
    /// The anchor applies to both the parent and the rectangle, so
    /// `Anchor::Center` with a zero offset centers the rectangle.
    #[must_use]
    pub fn anchored(anchor: Anchor, offset: Vec2, size: Vec2, parent_size: Vec2) -> Self {
        let (ox, oy) = anchor.offset();
        Self {
            position: Vec2::new(
                parent_size.x * ox + offset.x - size.x * ox,
                parent_size.y * oy + offset.y - size.y * oy,
            ),
            size,
        }
    }

    /// Right edge
    #[must_use]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Bottom edge
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Center point
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Check if a point is inside the rectangle. Edges count as inside.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.right()
            && point.y >= self.position.y
            && point.y <= self.bottom()
    }
}
