//! Painter and text measurement backed by egui.

use egui::epaint::Shadow as EguiShadow;
use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect as EguiRect, vec2};
use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;
use segmentkit_core::TextMeasure;
use segmentkit_render::{FillStyle, FontWeight, Painter, TextStyle};

/// Horizontal offset of the second pass used to embolden text.
///
/// egui's default fonts have no bold face, so bold labels are drawn twice.
const SYNTHETIC_BOLD_OFFSET: f32 = 0.6;

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn corner_radius(radius: f64) -> CornerRadius {
    CornerRadius::same(radius.round().clamp(0.0, u8::MAX as f64) as u8)
}

/// Paints into an egui painter, offsetting local coordinates by `origin`.
pub struct EguiPainter<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> EguiPainter<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, point: Point) -> Pos2 {
        self.origin + vec2(point.x as f32, point.y as f32)
    }

    fn rect(&self, rect: Rect) -> EguiRect {
        EguiRect::from_min_max(
            self.pos(Point::new(rect.x0, rect.y0)),
            self.pos(Point::new(rect.x1, rect.y1)),
        )
    }
}

impl Painter for EguiPainter<'_> {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, style: &FillStyle) {
        let target = self.rect(rect.rect());
        // kurbo radii are per corner; the control only ever uses uniform ones
        let radius = corner_radius(rect.radii().top_left);
        if let Some(shadow) = style.shadow {
            let shadow = EguiShadow {
                offset: [
                    shadow.offset.x.round() as i8,
                    shadow.offset.y.round() as i8,
                ],
                blur: shadow.blur.round().clamp(0.0, u8::MAX as f64) as u8,
                spread: 0,
                color: to_color32(shadow.color),
            };
            self.painter.add(shadow.as_shape(target, radius));
        }
        self.painter
            .rect_filled(target, radius, to_color32(style.color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter
            .rect_filled(self.rect(rect), CornerRadius::ZERO, to_color32(color));
    }

    fn draw_text(&mut self, text: &str, center: Point, style: &TextStyle) {
        let pos = self.pos(center);
        let font_id = FontId::proportional(style.size as f32);
        let color = to_color32(style.color);
        self.painter
            .text(pos, Align2::CENTER_CENTER, text, font_id.clone(), color);
        if style.weight == FontWeight::Bold {
            self.painter.text(
                pos + vec2(SYNTHETIC_BOLD_OFFSET, 0.0),
                Align2::CENTER_CENTER,
                text,
                font_id,
                color,
            );
        }
    }
}

/// Measures labels with egui's text layout.
pub struct EguiTextMeasure<'a> {
    painter: &'a egui::Painter,
    font_id: FontId,
}

impl<'a> EguiTextMeasure<'a> {
    pub fn new(painter: &'a egui::Painter, font_id: FontId) -> Self {
        Self { painter, font_id }
    }
}

impl TextMeasure for EguiTextMeasure<'_> {
    fn measure(&self, label: &str) -> Size {
        let galley = self.painter.layout_no_wrap(
            label.to_string(),
            self.font_id.clone(),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        let size = galley.size();
        Size::new(size.x as f64, size.y as f64)
    }
}
