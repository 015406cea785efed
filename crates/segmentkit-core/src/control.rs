//! The segmented control: labels, layout, selection, gestures and animation
//! behind one owner.
//!
//! Hosts drive it once per frame:
//! 1. [`SegmentControl::measure`] with the current size constraints,
//! 2. [`SegmentControl::handle_pointer_event`] for every pointer event,
//! 3. [`SegmentControl::tick`] with the frame time,
//! 4. paint from the accessors, and schedule another frame while
//!    [`SegmentControl::take_redraw_request`] or
//!    [`SegmentControl::is_animating`] says so.

use kurbo::{Rect, Size};

use crate::animation::Animator;
use crate::error::{SegmentError, SegmentResult};
use crate::gesture::{GestureAction, GesturePhase, GestureState, PointerEvent};
use crate::layout::{SegmentLayout, SizeConstraint};
use crate::segment::{DEFAULT_ITEMS, TextMeasure, measure_segments};
use crate::style::SegmentStyle;
use crate::time::Instant;

/// Committed selection and the indicator geometry that represents it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Committed segment. `None` only before anything was ever selected.
    pub selected_index: Option<usize>,
    /// Label of the segment selected before the last commit.
    pub previous_label: Option<String>,
    /// Indicator left edge.
    pub indicator_x: f64,
    /// Indicator width.
    pub indicator_width: f64,
}

/// Text drawn on top of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorLabel<'a> {
    pub text: &'a str,
    /// The indicator has settled on the segment it shows.
    pub bold: bool,
}

/// A segmented control instance.
#[derive(Debug, Clone)]
pub struct SegmentControl {
    labels: Vec<String>,
    style: SegmentStyle,
    layout: SegmentLayout,
    layout_dirty: bool,
    selection: SelectionState,
    gesture: GestureState,
    animator: Animator,
    /// The running glide already shows its target label.
    label_swapped: bool,
    redraw_requested: bool,
}

impl Default for SegmentControl {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS, SegmentStyle::default())
    }
}

impl SegmentControl {
    /// Create a control; the first segment (if any) starts selected.
    ///
    /// The style is taken as is. Styles built in code should go through
    /// [`SegmentStyle::validate`] first; layout ignores negative fixed
    /// padding either way.
    pub fn new<I, S>(labels: I, style: SegmentStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let selected_index = if labels.is_empty() { None } else { Some(0) };
        Self {
            labels,
            style,
            layout: SegmentLayout::default(),
            layout_dirty: true,
            selection: SelectionState {
                selected_index,
                ..SelectionState::default()
            },
            gesture: GestureState::new(),
            animator: Animator::new(),
            label_swapped: false,
            redraw_requested: true,
        }
    }

    /// Replace every label. Takes effect at the next [`measure`](Self::measure).
    ///
    /// The selection survives when it is still in range and falls back to
    /// the first segment otherwise. Any gesture or glide in progress is
    /// dropped.
    pub fn set_items<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self.selection.selected_index = match self.selection.selected_index {
            _ if self.labels.is_empty() => None,
            Some(index) if index < self.labels.len() => Some(index),
            _ => Some(0),
        };
        self.selection.previous_label = None;
        self.gesture.reset();
        self.animator.cancel();
        self.label_swapped = false;
        self.layout_dirty = true;
        self.redraw_requested = true;
        log::debug!("Segment items replaced ({} labels)", self.labels.len());
    }

    pub fn items(&self) -> &[String] {
        &self.labels
    }

    /// Label of segment `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    /// Replace the style. Takes effect at the next [`measure`](Self::measure).
    ///
    /// An invalid style is rejected and the current one kept.
    pub fn set_style(&mut self, style: SegmentStyle) -> SegmentResult<()> {
        if let Err(err) = style.validate() {
            log::warn!("Rejected segment style: {}", err);
            return Err(err);
        }
        self.style = style;
        self.layout_dirty = true;
        self.redraw_requested = true;
        Ok(())
    }

    /// Whether labels or style changed since the last layout pass.
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    /// Measure the labels and lay the control out. Returns the control size.
    ///
    /// An idle indicator snaps to the selected slot; a gliding one keeps its
    /// clock and heads for the slot's new geometry.
    pub fn measure(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
        measurer: &dyn TextMeasure,
    ) -> Size {
        let segments = measure_segments(&self.labels, measurer);
        let layout = SegmentLayout::compute(&segments, &self.style, width, height);
        if layout != self.layout {
            self.layout = layout;
            self.redraw_requested = true;
            self.sync_indicator_to_layout();
        } else if self.layout_dirty {
            self.sync_indicator_to_layout();
        }
        self.layout_dirty = false;
        self.layout.size()
    }

    fn sync_indicator_to_layout(&mut self) {
        let Some(index) = self.selection.selected_index else {
            return;
        };
        let (Some(x), Some(width)) = (self.layout.item_start_x(index), self.layout.item_width(index))
        else {
            return;
        };
        if let Some(job) = self.animator.job() {
            let target = job.target_index;
            if let (Some(x), Some(width)) =
                (self.layout.item_start_x(target), self.layout.item_width(target))
            {
                self.animator.retarget(x, width);
            }
        } else if self.gesture.is_dragging() {
            let (Some(min_x), Some(max_x)) =
                (self.layout.min_selected_x(), self.layout.max_selected_x())
            else {
                return;
            };
            self.selection.indicator_x = self.selection.indicator_x.max(min_x).min(max_x);
        } else {
            self.selection.indicator_x = x;
            self.selection.indicator_width = width;
        }
    }

    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Committed segment.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index
    }

    /// Segment under a pressed pointer.
    pub fn touched_index(&self) -> Option<usize> {
        self.gesture.touched_index
    }

    /// Segment the indicator currently represents: while dragging, the one
    /// a release would commit; the committed one otherwise.
    pub fn displayed_index(&self) -> Option<usize> {
        if self.gesture.phase == GesturePhase::Dragging {
            self.layout
                .touch_position(self.selection.indicator_x)
                .or(self.selection.selected_index)
        } else {
            self.selection.selected_index
        }
    }

    /// Select segment `index` using the current time.
    pub fn set_selected_index(&mut self, index: usize) -> SegmentResult<()> {
        self.select_index(index, Instant::now())
    }

    /// Select segment `index` and glide the indicator there.
    ///
    /// Re-selecting the committed segment still glides, which brings a
    /// displaced indicator home and is a no-op for a resting one. A drag in
    /// progress is abandoned: the glide owns the indicator from here on.
    pub fn select_index(&mut self, index: usize, now: Instant) -> SegmentResult<()> {
        if index >= self.labels.len() {
            log::warn!(
                "Rejected selection of segment {} (only {} segments)",
                index,
                self.labels.len()
            );
            return Err(SegmentError::IndexOutOfRange {
                index,
                len: self.labels.len(),
            });
        }
        if self.gesture.is_dragging() {
            log::debug!("Selection of segment {} ends the drag in progress", index);
            self.gesture.reset();
        }
        self.commit(index, now);
        Ok(())
    }

    fn commit(&mut self, index: usize, now: Instant) {
        self.selection.previous_label = self
            .selection
            .selected_index
            .and_then(|previous| self.labels.get(previous).cloned());
        self.selection.selected_index = Some(index);
        log::debug!(
            "Committed segment {} (previous label {:?})",
            index,
            self.selection.previous_label
        );
        self.animate_to_position(index, now);
        self.redraw_requested = true;
    }

    /// Start the indicator glide towards segment `index` from wherever the
    /// indicator is right now, superseding any glide in flight.
    pub fn animate_to_position(&mut self, index: usize, now: Instant) {
        let (Some(target_x), Some(target_width)) =
            (self.layout.item_start_x(index), self.layout.item_width(index))
        else {
            // Not laid out yet: the next measure pass places the indicator.
            return;
        };
        self.freeze_indicator(now);
        let from = (self.selection.indicator_x, self.selection.indicator_width);
        self.animator.start(
            index,
            from,
            (target_x, target_width),
            self.style.animation_duration(),
            self.style.label_swap_fraction,
            now,
        );
        self.label_swapped = false;
        self.redraw_requested = true;
    }

    /// Write the running glide's current geometry into the selection state.
    fn freeze_indicator(&mut self, now: Instant) {
        if let Some(frame) = self.animator.peek(now) {
            self.selection.indicator_x = frame.x;
            self.selection.indicator_width = frame.width;
        }
    }

    /// Feed a pointer event. Returns the committed segment, if the event
    /// ended an interaction on one.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, now: Instant) -> Option<usize> {
        if matches!(event, PointerEvent::Down { .. }) {
            self.freeze_indicator(now);
        }
        let action = self.gesture.handle(
            event,
            &self.layout,
            self.selection.selected_index,
            self.selection.indicator_x,
        );
        if self.gesture.is_dragging() && matches!(event, PointerEvent::Down { .. }) {
            // The grabbed indicator follows the pointer, not the glide.
            self.animator.cancel();
            self.label_swapped = false;
        }
        match action {
            GestureAction::None => None,
            GestureAction::Redraw => {
                self.redraw_requested = true;
                None
            }
            GestureAction::MoveIndicator(x) => {
                self.selection.indicator_x = x;
                self.redraw_requested = true;
                None
            }
            GestureAction::Commit(index) => {
                self.commit(index, now);
                Some(index)
            }
        }
    }

    /// Advance the indicator animation. Returns whether it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(frame) = self.animator.tick(now) {
            self.selection.indicator_x = frame.x;
            self.selection.indicator_width = frame.width;
            self.label_swapped = frame.show_target_label;
            self.redraw_requested = true;
        }
        self.animator.is_active()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Indicator rectangle, if there is a selection to show.
    pub fn indicator_rect(&self) -> Option<Rect> {
        self.selection.selected_index?;
        if self.layout.is_empty() {
            return None;
        }
        let inset = self.layout.fixed_padding();
        let x = self.selection.indicator_x;
        Some(Rect::new(
            x,
            inset,
            x + self.selection.indicator_width,
            self.layout.size().height - inset,
        ))
    }

    /// Label drawn on the indicator.
    ///
    /// During the first part of a glide the indicator keeps showing the
    /// label it came from; it switches once the glide passes the style's
    /// swap fraction, and turns bold once it has settled.
    pub fn indicator_label(&self) -> Option<IndicatorLabel<'_>> {
        let index = self.displayed_index()?;
        let current = self.label(index)?;
        let text = if self.animator.is_active() && !self.label_swapped {
            self.selection.previous_label.as_deref().unwrap_or(current)
        } else {
            current
        };
        let settled = !self.animator.is_active()
            && self
                .layout
                .item_width(index)
                .is_some_and(|width| (width - self.selection.indicator_width).abs() < 1e-6);
        Some(IndicatorLabel {
            text,
            bold: settled,
        })
    }
}
