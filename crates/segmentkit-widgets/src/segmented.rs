//! The segmented control widget.

use egui::{CursorIcon, FontId, Pos2, Rect, Response, Sense, Ui, Vec2, vec2};
use kurbo::Point;
use segmentkit_core::time::Instant;
use segmentkit_core::{PointerEvent, SegmentControl, SizeConstraint};
use segmentkit_render::paint_control;

use crate::painter::{EguiPainter, EguiTextMeasure};

/// Shows a [`SegmentControl`] and routes egui pointer input into it.
///
/// The control itself is owned by the caller so selection and animation
/// state survive across frames:
///
/// ```ignore
/// let response = SegmentedControl::new(&mut self.mode).show(ui);
/// if response.changed() {
///     println!("selected {:?}", self.mode.selected_index());
/// }
/// ```
pub struct SegmentedControl<'a> {
    control: &'a mut SegmentControl,
    width: Option<f32>,
}

impl<'a> SegmentedControl<'a> {
    pub fn new(control: &'a mut SegmentControl) -> Self {
        Self {
            control,
            width: None,
        }
    }

    /// Force an exact width instead of sizing to content.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Show the control. The response is marked changed when a segment is
    /// committed by the pointer.
    pub fn show(self, ui: &mut Ui) -> Response {
        let width = match self.width {
            Some(width) => SizeConstraint::Exact(width as f64),
            None => SizeConstraint::AtMost(ui.available_width() as f64),
        };
        let font_id = FontId::proportional(self.control.style().text_size as f32);
        let size = self.control.measure(
            width,
            SizeConstraint::Unconstrained,
            &EguiTextMeasure::new(ui.painter(), font_id),
        );

        let (rect, mut response) = ui.allocate_exact_size(
            vec2(size.width as f32, size.height as f32),
            Sense::click_and_drag(),
        );

        let now = Instant::now();
        let committed = forward_pointer(ui, rect, self.control, now);
        self.control.tick(now);

        if ui.is_rect_visible(rect) {
            let mut painter = EguiPainter::new(ui.painter(), rect.min);
            paint_control(self.control, &mut painter);
        }

        if self.control.take_redraw_request() || self.control.is_animating() {
            ui.ctx().request_repaint();
        }
        if let Some(index) = committed {
            log::debug!("Segmented control committed segment {}", index);
            response.mark_changed();
        }
        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

fn local_point(rect: Rect, pos: Pos2) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

/// Translate this frame's pointer state into control events.
fn forward_pointer(
    ui: &Ui,
    rect: Rect,
    control: &mut SegmentControl,
    now: Instant,
) -> Option<usize> {
    let (pos, pressed, released, moved) = ui.input(|i| {
        (
            i.pointer.interact_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta() != Vec2::ZERO,
        )
    });

    let mut committed = None;
    if pressed {
        if let Some(pos) = pos.filter(|pos| rect.contains(*pos)) {
            control.handle_pointer_event(
                PointerEvent::Down {
                    position: local_point(rect, pos),
                },
                now,
            );
        }
    }

    if !control.gesture().is_pressed() {
        return committed;
    }
    match pos {
        Some(pos) if released => {
            committed = control.handle_pointer_event(
                PointerEvent::Up {
                    position: local_point(rect, pos),
                },
                now,
            );
        }
        Some(pos) if moved => {
            control.handle_pointer_event(
                PointerEvent::Move {
                    position: local_point(rect, pos),
                },
                now,
            );
        }
        Some(_) => {}
        None => {
            // Pointer left the window mid-gesture
            let last_x = control.gesture().last_x;
            committed = control.handle_pointer_event(
                PointerEvent::Cancel {
                    position: Point::new(last_x, 0.0),
                },
                now,
            );
        }
    }
    committed
}
