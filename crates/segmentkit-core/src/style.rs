//! Style configuration for the segmented control.
//!
//! The style is an immutable record: the layout engine reads its paddings and
//! the renderer reads its colors, but neither mutates it. Hosts can build one
//! in code or load it from JSON.

use kurbo::Vec2;
use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::error::{SegmentError, SegmentResult};
use crate::time::Duration;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How the interior width is shared between segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthPolicy {
    /// Every segment gets the same width, sized from the widest label.
    Fixed,
    /// Each segment gets a share proportional to its own label width.
    #[default]
    Proportional,
}

/// Visual and layout configuration for a segmented control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentStyle {
    /// Corner radius of the container and the indicator.
    pub corner_radius: f64,
    /// Padding before each label.
    pub item_padding_start: f64,
    /// Padding after each label.
    pub item_padding_end: f64,
    /// Padding above the tallest label.
    pub item_padding_top: f64,
    /// Padding below the tallest label.
    pub item_padding_bottom: f64,
    /// Gap between a segment slot and its neighbours (applied on both sides).
    pub item_fixed_padding: f64,
    /// Width of the separator line between segments.
    pub separator_width: f64,
    /// Extra height added to the tallest label to size the separators.
    pub separator_margin: f64,
    /// Label font size.
    pub text_size: f64,
    /// Width allocation policy.
    pub width_policy: WidthPolicy,
    /// Container fill.
    pub background_color: SerializableColor,
    /// Separator line color.
    pub separator_color: SerializableColor,
    /// Indicator fill.
    pub selected_background_color: SerializableColor,
    /// Label color.
    pub text_color: SerializableColor,
    /// Label color while a pointer is pressed on the segment.
    pub pressed_text_color: SerializableColor,
    /// Indicator drop shadow color.
    pub shadow_color: SerializableColor,
    /// Indicator drop shadow blur radius.
    pub shadow_blur: f64,
    /// Indicator drop shadow offset.
    pub shadow_offset: Vec2,
    /// Duration of the indicator glide, in milliseconds.
    pub animation_duration_ms: u64,
    /// Fraction of the glide after which the indicator shows the new label.
    pub label_swap_fraction: f64,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            corner_radius: 5.0,
            item_padding_start: 10.0,
            item_padding_end: 10.0,
            item_padding_top: 10.0,
            item_padding_bottom: 10.0,
            item_fixed_padding: 2.0,
            separator_width: 1.0,
            separator_margin: 2.0,
            text_size: 13.0,
            width_policy: WidthPolicy::Proportional,
            background_color: SerializableColor::rgb(0xEE, 0xEE, 0xEF),
            separator_color: SerializableColor::rgb(0xCB, 0xCB, 0xCF),
            selected_background_color: SerializableColor::white(),
            text_color: SerializableColor::black(),
            pressed_text_color: SerializableColor::rgb(0x88, 0x88, 0x88),
            shadow_color: SerializableColor::rgb(0xCC, 0xCC, 0xCC),
            shadow_blur: 3.0,
            shadow_offset: Vec2::new(0.0, 2.0),
            animation_duration_ms: 150,
            label_swap_fraction: 0.7,
        }
    }
}

impl SegmentStyle {
    /// A style with every padding and margin set to zero.
    ///
    /// Handy when the host wants segment geometry to match the container
    /// exactly.
    pub fn unpadded() -> Self {
        Self {
            item_padding_start: 0.0,
            item_padding_end: 0.0,
            item_padding_top: 0.0,
            item_padding_bottom: 0.0,
            item_fixed_padding: 0.0,
            separator_width: 0.0,
            separator_margin: 0.0,
            ..Self::default()
        }
    }

    /// Set the width policy.
    pub fn with_width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }

    /// Set the animation duration.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Animation duration as a [`Duration`].
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Horizontal padding consumed by one segment slot, excluding separators.
    pub fn horizontal_item_padding(&self) -> f64 {
        self.item_padding_start + self.item_padding_end + 2.0 * self.item_fixed_padding
    }

    /// Vertical padding added around the tallest label.
    pub fn vertical_padding(&self) -> f64 {
        self.item_padding_top + self.item_padding_bottom + 2.0 * self.item_fixed_padding
    }

    pub fn background(&self) -> Color {
        self.background_color.into()
    }

    pub fn separator(&self) -> Color {
        self.separator_color.into()
    }

    pub fn selected_background(&self) -> Color {
        self.selected_background_color.into()
    }

    pub fn text(&self) -> Color {
        self.text_color.into()
    }

    pub fn pressed_text(&self) -> Color {
        self.pressed_text_color.into()
    }

    pub fn shadow(&self) -> Color {
        self.shadow_color.into()
    }

    /// Check that every size is usable.
    pub fn validate(&self) -> SegmentResult<()> {
        let lengths = [
            ("corner_radius", self.corner_radius),
            ("item_padding_start", self.item_padding_start),
            ("item_padding_end", self.item_padding_end),
            ("item_padding_top", self.item_padding_top),
            ("item_padding_bottom", self.item_padding_bottom),
            ("item_fixed_padding", self.item_fixed_padding),
            ("separator_width", self.separator_width),
            ("separator_margin", self.separator_margin),
            ("shadow_blur", self.shadow_blur),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(SegmentError::InvalidStyle(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(SegmentError::InvalidStyle(format!(
                "text_size must be positive, got {}",
                self.text_size
            )));
        }
        if !(0.0..=1.0).contains(&self.label_swap_fraction) {
            return Err(SegmentError::InvalidStyle(format!(
                "label_swap_fraction must be within [0, 1], got {}",
                self.label_swap_fraction
            )));
        }
        Ok(())
    }

    /// Parse and validate a style from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> SegmentResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to pretty-printed JSON.
    pub fn to_json(&self) -> SegmentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a style from a JSON file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> SegmentResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        log::debug!("Loaded segment style from {:?}", path);
        Ok(style)
    }
}
