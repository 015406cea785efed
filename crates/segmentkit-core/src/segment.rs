//! Segment definitions and text measurement.

use kurbo::Size;

/// Labels a control starts with when the host does not provide any.
pub const DEFAULT_ITEMS: [&str; 3] = ["First", "Second", "Third"];

/// Text measurement capability provided by the host.
///
/// The engine never shapes text itself; it asks the host for the bounding
/// box of each label and lays out from those numbers.
pub trait TextMeasure {
    /// Measure the content bounds of a single-line label.
    fn measure(&self, label: &str) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> Size,
{
    fn measure(&self, label: &str) -> Size {
        self(label)
    }
}

/// Measures every character with the same advance.
///
/// Useful for terminal hosts and for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Width of one character.
    pub advance: f64,
    /// Height of a line.
    pub line_height: f64,
}

impl MonospaceMeasure {
    pub fn new(advance: f64, line_height: f64) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, label: &str) -> Size {
        Size::new(label.chars().count() as f64 * self.advance, self.line_height)
    }
}

/// One selectable item: its label and the label's measured bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Text shown in the segment.
    pub label: String,
    /// Measured content bounds of the label.
    pub content: Size,
}

impl Segment {
    /// Create a segment from an already-measured label.
    pub fn new(label: impl Into<String>, content: Size) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }

    /// Measure a label and wrap it as a segment.
    pub fn measured(label: impl Into<String>, measurer: &dyn TextMeasure) -> Self {
        let label = label.into();
        let content = measurer.measure(&label);
        Self { label, content }
    }

    pub fn content_width(&self) -> f64 {
        self.content.width
    }

    pub fn content_height(&self) -> f64 {
        self.content.height
    }
}

/// Measure a list of labels in order.
pub fn measure_segments<S: AsRef<str>>(labels: &[S], measurer: &dyn TextMeasure) -> Vec<Segment> {
    labels
        .iter()
        .map(|label| Segment::measured(label.as_ref(), measurer))
        .collect()
}
