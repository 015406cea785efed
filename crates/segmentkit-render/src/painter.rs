//! Painter trait abstraction.

use kurbo::{Point, Rect, RoundedRect, Vec2};
use peniko::Color;

/// Drop shadow under a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Blur radius.
    pub blur: f64,
    pub offset: Vec2,
}

/// Fill parameters for a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl FillStyle {
    /// A plain fill without shadow.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            shadow: None,
        }
    }

    /// Add a drop shadow.
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Font weight for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Text parameters for a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f64,
    pub weight: FontWeight,
}

impl TextStyle {
    pub fn new(color: Color, size: f64) -> Self {
        Self {
            color,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Trait for drawing backends.
///
/// Coordinates are in the control's local space: `(0, 0)` is the top-left
/// corner of the container.
pub trait Painter {
    /// Fill a rounded rectangle, drawing its shadow first if it has one.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, style: &FillStyle);

    /// Fill a sharp-cornered rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text centered on `center`.
    fn draw_text(&mut self, text: &str, center: Point, style: &TextStyle);
}
