//! Pointer gesture state machine.
//!
//! A press on the selected segment grabs the indicator and lets it follow
//! the pointer; a press anywhere else is a tap candidate. Releasing (or a
//! cancel) resolves the segment to commit and always returns to `Idle`.

use kurbo::Point;

use crate::layout::SegmentLayout;

/// Pointer input in the control's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Cancel { position: Point },
}

impl PointerEvent {
    /// Where the event happened.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Cancel { position } => position,
        }
    }
}

/// Phase of the current pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is pressed.
    #[default]
    Idle,
    /// A pointer is pressed away from the selected segment.
    Tracking,
    /// A pointer grabbed the indicator and is dragging it.
    Dragging,
}

/// What the control should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Nothing visible changed.
    None,
    /// Pressed-state feedback changed.
    Redraw,
    /// The dragged indicator moved to this x.
    MoveIndicator(f64),
    /// The interaction ended on this segment.
    Commit(usize),
}

/// Transient state of one pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub phase: GesturePhase,
    /// Segment under the pointer, for pressed-label feedback.
    pub touched_index: Option<usize>,
    /// Pointer x at press time.
    pub drag_origin_x: f64,
    /// Indicator x at press time.
    pub drag_origin_indicator_x: f64,
    /// Most recent pointer x seen during the interaction.
    pub last_x: f64,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pointer is currently pressed on the control.
    pub fn is_pressed(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Return to `Idle`, forgetting the interaction.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        layout: &SegmentLayout,
        selected: Option<usize>,
        indicator_x: f64,
    ) -> GestureAction {
        let x = event.position().x;
        match event {
            PointerEvent::Down { .. } => self.press(x, layout, selected, indicator_x),
            PointerEvent::Move { .. } => self.drag_to(x, layout),
            PointerEvent::Up { .. } | PointerEvent::Cancel { .. } => {
                self.release(x, layout, indicator_x)
            }
        }
    }

    /// Pointer pressed at `x`.
    pub fn press(
        &mut self,
        x: f64,
        layout: &SegmentLayout,
        selected: Option<usize>,
        indicator_x: f64,
    ) -> GestureAction {
        if self.is_pressed() {
            log::warn!("Pointer down while {:?}; restarting gesture", self.phase);
        }
        let touched = layout.touch_position(x);
        let grabbed = touched.is_some() && touched == selected;
        *self = Self {
            phase: if grabbed {
                GesturePhase::Dragging
            } else {
                GesturePhase::Tracking
            },
            touched_index: touched,
            drag_origin_x: x,
            drag_origin_indicator_x: indicator_x,
            last_x: x,
        };
        GestureAction::Redraw
    }

    /// Pointer moved to `x` while pressed.
    pub fn drag_to(&mut self, x: f64, layout: &SegmentLayout) -> GestureAction {
        match self.phase {
            GesturePhase::Idle => GestureAction::None,
            GesturePhase::Tracking => {
                self.last_x = x;
                self.touched_index = layout.touch_position(x);
                GestureAction::Redraw
            }
            GesturePhase::Dragging => {
                self.last_x = x;
                self.touched_index = layout.touch_position(x);
                let (Some(min_x), Some(max_x)) = (layout.min_selected_x(), layout.max_selected_x())
                else {
                    return GestureAction::Redraw;
                };
                let dest = self.drag_origin_indicator_x - (self.drag_origin_x - x);
                let clamped = dest.max(min_x).min(max_x);
                log::trace!("Dragging indicator to {} (pointer at {})", clamped, x);
                GestureAction::MoveIndicator(clamped)
            }
        }
    }

    /// Pointer released (or cancelled) at `x`.
    ///
    /// A drag resolves from where the indicator ended up; a tap resolves from
    /// the release position. Either way the gesture ends.
    pub fn release(&mut self, x: f64, layout: &SegmentLayout, indicator_x: f64) -> GestureAction {
        let phase = self.phase;
        self.reset();
        let resolved = match phase {
            GesturePhase::Idle => {
                log::warn!("Pointer release without a press; ignoring");
                return GestureAction::None;
            }
            GesturePhase::Tracking => layout.touch_position(x),
            GesturePhase::Dragging => layout.touch_position(indicator_x),
        };
        match resolved {
            Some(index) => GestureAction::Commit(index),
            None => GestureAction::Redraw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SizeConstraint;
    use crate::segment::{DEFAULT_ITEMS, MonospaceMeasure, measure_segments};
    use crate::style::{SegmentStyle, WidthPolicy};

    fn layout() -> SegmentLayout {
        let segments = measure_segments(&DEFAULT_ITEMS, &MonospaceMeasure::new(8.0, 12.0));
        SegmentLayout::compute(
            &segments,
            &SegmentStyle::unpadded().with_width_policy(WidthPolicy::Fixed),
            SizeConstraint::Exact(300.0),
            SizeConstraint::Unconstrained,
        )
    }

    #[test]
    fn test_press_on_selected_starts_drag() {
        let layout = layout();
        let mut gesture = GestureState::new();
        assert_eq!(gesture.press(50.0, &layout, Some(0), 0.0), GestureAction::Redraw);
        assert_eq!(gesture.phase, GesturePhase::Dragging);
        assert_eq!(gesture.touched_index, Some(0));
        assert_eq!(gesture.drag_origin_x, 50.0);
    }

    #[test]
    fn test_press_elsewhere_tracks() {
        let layout = layout();
        let mut gesture = GestureState::new();
        gesture.press(150.0, &layout, Some(0), 0.0);
        assert_eq!(gesture.phase, GesturePhase::Tracking);
        assert_eq!(gesture.touched_index, Some(1));
    }

    #[test]
    fn test_press_outside_tracks_nothing() {
        let layout = layout();
        let mut gesture = GestureState::new();
        gesture.press(-5.0, &layout, None, 0.0);
        assert_eq!(gesture.phase, GesturePhase::Tracking);
        assert_eq!(gesture.touched_index, None);
    }

    #[test]
    fn test_drag_clamps_to_slots() {
        let layout = layout();
        let mut gesture = GestureState::new();
        gesture.press(50.0, &layout, Some(0), 0.0);
        assert_eq!(gesture.drag_to(120.0, &layout), GestureAction::MoveIndicator(70.0));
        assert_eq!(gesture.touched_index, Some(1));
        assert_eq!(gesture.drag_to(290.0, &layout), GestureAction::MoveIndicator(200.0));
        assert_eq!(gesture.drag_to(-100.0, &layout), GestureAction::MoveIndicator(0.0));
        assert_eq!(gesture.touched_index, None);
    }

    #[test]
    fn test_drag_release_resolves_from_indicator() {
        let layout = layout();
        let mut gesture = GestureState::new();
        let down = PointerEvent::Down {
            position: Point::new(50.0, 5.0),
        };
        let moved = PointerEvent::Move {
            position: Point::new(250.0, 5.0),
        };
        assert_eq!(gesture.handle(down, &layout, Some(0), 0.0), GestureAction::Redraw);
        let GestureAction::MoveIndicator(x) = gesture.handle(moved, &layout, Some(0), 0.0) else {
            panic!("expected the indicator to move");
        };
        assert_eq!(x, 200.0);
        let up = PointerEvent::Up {
            position: Point::new(250.0, 5.0),
        };
        assert_eq!(gesture.handle(up, &layout, Some(0), x), GestureAction::Commit(2));
        assert_eq!(gesture.phase, GesturePhase::Idle);
    }

    #[test]
    fn test_tap_release_resolves_from_pointer() {
        let layout = layout();
        let mut gesture = GestureState::new();
        gesture.press(150.0, &layout, Some(0), 0.0);
        assert_eq!(gesture.release(150.0, &layout, 0.0), GestureAction::Commit(1));
        assert!(!gesture.is_pressed());
    }

    #[test]
    fn test_release_outside_only_redraws() {
        let layout = layout();
        let mut gesture = GestureState::new();
        gesture.press(150.0, &layout, Some(0), 0.0);
        assert_eq!(gesture.release(400.0, &layout, 0.0), GestureAction::Redraw);
        assert_eq!(gesture, GestureState::default());
    }

    #[test]
    fn test_cancel_commits_like_release() {
        let layout = layout();
        let mut gesture = GestureState::new();
        gesture.press(250.0, &layout, Some(0), 0.0);
        let cancel = PointerEvent::Cancel {
            position: Point::new(250.0, 0.0),
        };
        assert_eq!(gesture.handle(cancel, &layout, Some(0), 0.0), GestureAction::Commit(2));
    }

    #[test]
    fn test_malformed_sequences_stay_idle() {
        let layout = layout();
        let mut gesture = GestureState::new();
        assert_eq!(gesture.drag_to(10.0, &layout), GestureAction::None);
        assert_eq!(gesture.release(10.0, &layout, 0.0), GestureAction::None);
        assert_eq!(gesture.phase, GesturePhase::Idle);
    }

    #[test]
    fn test_empty_layout_never_commits() {
        let empty = SegmentLayout::default();
        let mut gesture = GestureState::new();
        gesture.press(10.0, &empty, None, 0.0);
        assert_eq!(gesture.drag_to(20.0, &empty), GestureAction::Redraw);
        assert_eq!(gesture.release(20.0, &empty, 0.0), GestureAction::Redraw);
    }
}
