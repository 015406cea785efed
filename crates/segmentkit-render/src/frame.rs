//! Frame composition: turns a control's state into painter calls.

use kurbo::{Point, Rect, RoundedRect};
use segmentkit_core::SegmentControl;

use crate::painter::{FillStyle, FontWeight, Painter, Shadow, TextStyle};

/// Whether the separator in front of segment `index` is drawn.
///
/// Separators touching the segment under the indicator are hidden so the
/// indicator reads as one piece.
pub fn separator_visible(index: usize, displayed: Option<usize>) -> bool {
    match displayed {
        Some(selected) => index != selected && index != selected + 1,
        None => true,
    }
}

/// Paint the whole control: container, separators, labels, then the
/// indicator with its label on top.
pub fn paint_control(control: &SegmentControl, painter: &mut dyn Painter) {
    let layout = control.layout();
    let style = control.style();
    let size = layout.size();
    if size.width <= 0.0 || size.height <= 0.0 {
        return;
    }

    painter.fill_rounded_rect(
        RoundedRect::from_rect(size.to_rect(), style.corner_radius),
        &FillStyle::solid(style.background()),
    );

    let center_y = size.height / 2.0;
    let displayed = control.displayed_index();
    let pressed = control.gesture().is_pressed();
    let separator_top = (size.height - layout.separator_height()) / 2.0;

    for (index, label) in control.items().iter().enumerate() {
        let Some(slot) = layout.item_rect(index) else {
            break;
        };

        if index != 0 && separator_visible(index, displayed) {
            painter.fill_rect(
                Rect::new(
                    slot.x0,
                    separator_top,
                    slot.x0 + style.separator_width,
                    separator_top + layout.separator_height(),
                ),
                style.separator(),
            );
        }

        let color = if pressed && control.touched_index() == Some(index) {
            style.pressed_text()
        } else {
            style.text()
        };
        painter.draw_text(
            label,
            Point::new(slot.center().x, center_y),
            &TextStyle::new(color, style.text_size),
        );
    }

    if let (Some(rect), Some(label)) = (control.indicator_rect(), control.indicator_label()) {
        let shadow = Shadow {
            color: style.shadow(),
            blur: style.shadow_blur,
            offset: style.shadow_offset,
        };
        painter.fill_rounded_rect(
            RoundedRect::from_rect(rect, style.corner_radius),
            &FillStyle::solid(style.selected_background()).with_shadow(shadow),
        );
        let weight = if label.bold {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        };
        painter.draw_text(
            label.text,
            Point::new(rect.center().x, center_y),
            &TextStyle::new(style.text(), style.text_size).with_weight(weight),
        );
    }

    log::trace!(
        "Painted segment control {}x{} (indicator at {})",
        size.width,
        size.height,
        control.selection().indicator_x
    );
}
