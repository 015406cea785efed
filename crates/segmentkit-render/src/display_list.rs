//! Recording painter.

use kurbo::{Point, Rect, RoundedRect};
use peniko::Color;

use crate::painter::{FillStyle, Painter, TextStyle};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: RoundedRect,
        style: FillStyle,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        center: Point,
        style: TextStyle,
    },
}

/// A painter that records every call in order.
///
/// Hosts can build a list once per frame and replay it into a real backend
/// with [`DisplayList::replay`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text commands, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &TextStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                text,
                center,
                style,
            } => Some((text.as_str(), *center, style)),
            _ => None,
        })
    }

    /// Recorded sharp rectangles, in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Recorded rounded rectangles, in drawing order.
    pub fn rounded_rects(&self) -> impl Iterator<Item = (&RoundedRect, &FillStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::RoundedRect { rect, style } => Some((rect, style)),
            _ => None,
        })
    }

    /// Play the recorded commands into another painter.
    pub fn replay(&self, painter: &mut dyn Painter) {
        for command in &self.commands {
            match command {
                DrawCommand::RoundedRect { rect, style } => painter.fill_rounded_rect(*rect, style),
                DrawCommand::Rect { rect, color } => painter.fill_rect(*rect, *color),
                DrawCommand::Text {
                    text,
                    center,
                    style,
                } => painter.draw_text(text, *center, style),
            }
        }
    }
}

impl Painter for DisplayList {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, style: &FillStyle) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            style: *style,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, center: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            style: *style,
        });
    }
}
