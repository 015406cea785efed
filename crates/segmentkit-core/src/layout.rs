//! Layout engine: resolves the control size and the geometry of every slot.
//!
//! Segments sit in one row. Each slot is the segment's allocated width plus
//! `item_fixed_padding` on both sides, so slot `i` spans
//! `[end_offset(i - 1), end_offset(i)]` and its visible area (where the
//! indicator rests) starts `item_fixed_padding` after the slot edge.

use std::collections::VecDeque;

use kurbo::{Rect, Size};

use crate::segment::Segment;
use crate::style::{SegmentStyle, WidthPolicy};

/// Size constraint for one axis, as handed down by the host's measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeConstraint {
    /// The control must be exactly this size.
    Exact(f64),
    /// The control may be at most this size.
    AtMost(f64),
    /// The control picks its natural size.
    #[default]
    Unconstrained,
}

impl SizeConstraint {
    /// Resolve the final extent given the natural (content) extent.
    pub fn resolve(self, natural: f64) -> f64 {
        match self {
            SizeConstraint::Exact(size) => size,
            SizeConstraint::AtMost(size) => natural.min(size),
            SizeConstraint::Unconstrained => natural,
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentLayout {
    size: Size,
    widths: Vec<f64>,
    end_offsets: Vec<f64>,
    separator_height: f64,
    fixed_padding: f64,
}

impl SegmentLayout {
    /// Lay out `segments` inside the given constraints.
    pub fn compute(
        segments: &[Segment],
        style: &SegmentStyle,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Self {
        if segments.is_empty() {
            return Self {
                size: Size::new(width.resolve(0.0), height.resolve(0.0)),
                fixed_padding: style.item_fixed_padding.max(0.0),
                ..Self::default()
            };
        }

        let count = segments.len() as f64;
        let max_content_width = segments
            .iter()
            .map(Segment::content_width)
            .fold(0.0, f64::max);
        let max_content_height = segments
            .iter()
            .map(Segment::content_height)
            .fold(0.0, f64::max);

        let content_width = match style.width_policy {
            WidthPolicy::Fixed => count * max_content_width,
            WidthPolicy::Proportional => segments.iter().map(Segment::content_width).sum(),
        };
        let natural_width = content_width
            + count * style.horizontal_item_padding()
            + (count - 1.0) * style.separator_width;
        let natural_height = max_content_height + style.vertical_padding();

        let size = Size::new(width.resolve(natural_width), height.resolve(natural_height));
        // A container narrower than its slot padding gives up padding first,
        // so the last slot still ends on the container edge.
        let fixed_padding = style
            .item_fixed_padding
            .max(0.0)
            .min(size.width.max(0.0) / (2.0 * count));
        let interior = (size.width - 2.0 * count * fixed_padding).max(0.0);

        let widths = match style.width_policy {
            WidthPolicy::Fixed => vec![interior / count; segments.len()],
            WidthPolicy::Proportional => {
                let contents: Vec<f64> = segments.iter().map(Segment::content_width).collect();
                split_proportional(&contents, interior)
            }
        };

        let mut end_offsets = Vec::with_capacity(widths.len());
        let mut end = 0.0;
        for width in &widths {
            end += width + 2.0 * fixed_padding;
            end_offsets.push(end);
        }

        log::debug!(
            "Segment layout: {} segments, size {}x{}, widths {:?}",
            segments.len(),
            size.width,
            size.height,
            widths
        );

        Self {
            size,
            widths,
            end_offsets,
            separator_height: max_content_height + style.separator_margin,
            fixed_padding,
        }
    }

    /// Resolved control size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of laid-out segments.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Width allocated to each segment's content area.
    pub fn allocated_widths(&self) -> &[f64] {
        &self.widths
    }

    /// Right edge of each slot, padding included.
    pub fn end_offsets(&self) -> &[f64] {
        &self.end_offsets
    }

    /// Height of the separator lines.
    pub fn separator_height(&self) -> f64 {
        self.separator_height
    }

    /// Padding between a slot edge and its content area.
    pub fn fixed_padding(&self) -> f64 {
        self.fixed_padding
    }

    /// Allocated width of segment `index`.
    pub fn item_width(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied()
    }

    /// X where segment `index`'s content area (and a resting indicator) starts.
    pub fn item_start_x(&self, index: usize) -> Option<f64> {
        if index >= self.end_offsets.len() {
            return None;
        }
        let slot_start = if index == 0 {
            0.0
        } else {
            self.end_offsets[index - 1]
        };
        Some(slot_start + self.fixed_padding)
    }

    /// Leftmost indicator position.
    pub fn min_selected_x(&self) -> Option<f64> {
        self.item_start_x(0)
    }

    /// Rightmost indicator position.
    pub fn max_selected_x(&self) -> Option<f64> {
        self.item_start_x(self.len().checked_sub(1)?)
    }

    /// Content rectangle of segment `index`, inset by the fixed padding.
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        let x = self.item_start_x(index)?;
        let width = self.item_width(index)?;
        Some(Rect::new(
            x,
            self.fixed_padding,
            x + width,
            self.size.height - self.fixed_padding,
        ))
    }

    /// Segment under horizontal position `x`.
    ///
    /// Slots are half-open `[start, end)`, except that the outer right edge
    /// still belongs to the last segment. Positions left of the control or
    /// past its right edge hit nothing.
    pub fn touch_position(&self, x: f64) -> Option<usize> {
        if !(x >= 0.0) {
            return None;
        }
        if let Some(index) = self.end_offsets.iter().position(|&end| x < end) {
            return Some(index);
        }
        match self.end_offsets.last() {
            Some(&last) if x == last => Some(self.end_offsets.len() - 1),
            _ => None,
        }
    }
}

/// Share `budget` between segments in proportion to their content widths.
///
/// Consumes the widths as a rotating queue: the front width is divided by
/// the content total still in the queue, scaled by the budget still
/// unassigned, and the result is pushed to the back. The last segment takes
/// whatever budget remains, so the widths always sum to `budget`.
fn split_proportional(contents: &[f64], budget: f64) -> Vec<f64> {
    let mut queue: VecDeque<f64> = contents.iter().copied().collect();
    let mut remaining_total: f64 = contents.iter().sum();
    let mut remaining_budget = budget;

    for consumed in 0..contents.len() {
        let Some(content) = queue.pop_front() else {
            break;
        };
        let remaining_count = contents.len() - consumed;
        let width = if remaining_count == 1 {
            remaining_budget
        } else if remaining_total > 0.0 {
            content / remaining_total * remaining_budget
        } else {
            // Only empty labels left: share what remains evenly.
            remaining_budget / remaining_count as f64
        };
        remaining_total -= content;
        remaining_budget -= width;
        queue.push_back(width);
    }

    queue.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{DEFAULT_ITEMS, MonospaceMeasure, measure_segments};

    fn segments(labels: &[&str]) -> Vec<Segment> {
        measure_segments(labels, &MonospaceMeasure::new(10.0, 16.0))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_constraint_resolve() {
        assert_eq!(SizeConstraint::Exact(50.0).resolve(80.0), 50.0);
        assert_eq!(SizeConstraint::Exact(120.0).resolve(80.0), 120.0);
        assert_eq!(SizeConstraint::AtMost(50.0).resolve(80.0), 50.0);
        assert_eq!(SizeConstraint::AtMost(120.0).resolve(80.0), 80.0);
        assert_eq!(SizeConstraint::Unconstrained.resolve(80.0), 80.0);
    }

    #[test]
    fn test_fixed_width_exact_container() {
        let style = SegmentStyle::unpadded().with_width_policy(WidthPolicy::Fixed);
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &style,
            SizeConstraint::Exact(300.0),
            SizeConstraint::Unconstrained,
        );
        assert_eq!(layout.allocated_widths(), &[100.0, 100.0, 100.0]);
        assert_eq!(layout.end_offsets(), &[100.0, 200.0, 300.0]);
        assert_eq!(layout.size(), Size::new(300.0, 16.0));
    }

    #[test]
    fn test_proportional_exact_container() {
        let style = SegmentStyle::unpadded();
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &style,
            SizeConstraint::Exact(320.0),
            SizeConstraint::Unconstrained,
        );
        let widths = layout.allocated_widths();
        assert!(approx(widths[0], 100.0));
        assert!(approx(widths[1], 120.0));
        assert!(approx(widths[2], 100.0));
        assert!(approx(*layout.end_offsets().last().unwrap(), 320.0));
    }

    #[test]
    fn test_natural_size_with_default_padding() {
        let style = SegmentStyle::default();
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &style,
            SizeConstraint::Unconstrained,
            SizeConstraint::Unconstrained,
        );
        // 160 content + 3 * 24 padding + 2 separators
        assert!(approx(layout.size().width, 234.0));
        assert!(approx(layout.size().height, 40.0));
        assert!(approx(layout.separator_height(), 18.0));

        let fixed = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &style.clone().with_width_policy(WidthPolicy::Fixed),
            SizeConstraint::Unconstrained,
            SizeConstraint::Unconstrained,
        );
        assert!(approx(fixed.size().width, 254.0));
    }

    #[test]
    fn test_at_most_caps_natural_size() {
        let style = SegmentStyle::default();
        let items = segments(&DEFAULT_ITEMS);
        let capped = SegmentLayout::compute(
            &items,
            &style,
            SizeConstraint::AtMost(200.0),
            SizeConstraint::AtMost(30.0),
        );
        assert_eq!(capped.size(), Size::new(200.0, 30.0));

        let roomy = SegmentLayout::compute(
            &items,
            &style,
            SizeConstraint::AtMost(1000.0),
            SizeConstraint::AtMost(1000.0),
        );
        assert!(approx(roomy.size().width, 234.0));
        assert!(approx(roomy.size().height, 40.0));
    }

    #[test]
    fn test_widths_plus_padding_fill_container() {
        let style = SegmentStyle::default();
        for policy in [WidthPolicy::Fixed, WidthPolicy::Proportional] {
            for labels in [&["A"][..], &["Day", "Week"][..], &["One", "Two", "Three", "Four"][..]] {
                let layout = SegmentLayout::compute(
                    &segments(labels),
                    &style.clone().with_width_policy(policy),
                    SizeConstraint::Exact(417.0),
                    SizeConstraint::Unconstrained,
                );
                let padding = 2.0 * labels.len() as f64 * style.item_fixed_padding;
                let total: f64 = layout.allocated_widths().iter().sum();
                assert!(approx(total + padding, 417.0));
                assert!(approx(*layout.end_offsets().last().unwrap(), 417.0));
                assert!(layout.end_offsets().windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_split_proportional_matches_shares() {
        let widths = split_proportional(&[1.0, 2.0, 1.0], 100.0);
        assert!(approx(widths[0], 25.0));
        assert!(approx(widths[1], 50.0));
        assert!(approx(widths[2], 25.0));
        assert!(approx(widths.iter().sum::<f64>(), 100.0));
    }

    #[test]
    fn test_split_proportional_empty_labels() {
        let widths = split_proportional(&[0.0, 0.0, 0.0], 90.0);
        assert_eq!(widths, vec![30.0, 30.0, 30.0]);

        let widths = split_proportional(&[10.0, 0.0, 0.0], 90.0);
        assert_eq!(widths, vec![90.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_layout() {
        let layout = SegmentLayout::compute(
            &[],
            &SegmentStyle::default(),
            SizeConstraint::Exact(100.0),
            SizeConstraint::Unconstrained,
        );
        assert!(layout.is_empty());
        assert_eq!(layout.size(), Size::new(100.0, 0.0));
        assert_eq!(layout.touch_position(10.0), None);
        assert_eq!(layout.item_start_x(0), None);
        assert_eq!(layout.min_selected_x(), None);
        assert_eq!(layout.max_selected_x(), None);
    }

    #[test]
    fn test_interior_never_negative() {
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &SegmentStyle::default(),
            SizeConstraint::Exact(5.0),
            SizeConstraint::Unconstrained,
        );
        assert!(layout.allocated_widths().iter().all(|&w| w == 0.0));
        // Padding shrinks so the slots still fill exactly 5 units
        assert!(approx(layout.fixed_padding(), 5.0 / 6.0));
        assert!(approx(*layout.end_offsets().last().unwrap(), 5.0));
        assert_eq!(layout.touch_position(4.9), Some(2));
        assert_eq!(layout.touch_position(10.0), None);
        assert!(layout.max_selected_x().unwrap() < 5.0);
    }

    #[test]
    fn test_narrow_at_most_keeps_offsets_inside() {
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &SegmentStyle::default(),
            SizeConstraint::AtMost(3.0),
            SizeConstraint::Unconstrained,
        );
        assert_eq!(layout.size().width, 3.0);
        assert!(approx(*layout.end_offsets().last().unwrap(), 3.0));
        assert_eq!(layout.touch_position(3.5), None);
    }

    #[test]
    fn test_negative_fixed_padding_is_ignored() {
        let style = SegmentStyle {
            item_fixed_padding: -4.0,
            ..SegmentStyle::unpadded()
        }
        .with_width_policy(WidthPolicy::Fixed);
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &style,
            SizeConstraint::Exact(300.0),
            SizeConstraint::Unconstrained,
        );
        assert_eq!(layout.fixed_padding(), 0.0);
        assert_eq!(layout.end_offsets(), &[100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_touch_position() {
        let style = SegmentStyle::unpadded().with_width_policy(WidthPolicy::Fixed);
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &style,
            SizeConstraint::Exact(300.0),
            SizeConstraint::Unconstrained,
        );
        assert_eq!(layout.touch_position(-1.0), None);
        assert_eq!(layout.touch_position(0.0), Some(0));
        assert_eq!(layout.touch_position(99.9), Some(0));
        assert_eq!(layout.touch_position(100.0), Some(1));
        assert_eq!(layout.touch_position(150.0), Some(1));
        assert_eq!(layout.touch_position(200.0), Some(2));
        assert_eq!(layout.touch_position(300.0), Some(2));
        assert_eq!(layout.touch_position(300.1), None);
        assert_eq!(layout.touch_position(f64::NAN), None);
    }

    #[test]
    fn test_touch_position_monotonic() {
        let layout = SegmentLayout::compute(
            &segments(&["a", "bbbb", "cc", "ddddddd"]),
            &SegmentStyle::default(),
            SizeConstraint::Exact(333.0),
            SizeConstraint::Unconstrained,
        );
        let mut last = 0;
        let mut x = 0.0;
        while x < 333.0 {
            let index = layout.touch_position(x).unwrap();
            assert!(index >= last);
            last = index;
            x += 0.5;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn test_item_geometry() {
        let layout = SegmentLayout::compute(
            &segments(&DEFAULT_ITEMS),
            &SegmentStyle::default().with_width_policy(WidthPolicy::Fixed),
            SizeConstraint::Exact(312.0),
            SizeConstraint::Exact(40.0),
        );
        // interior = 312 - 12 = 300, so each slot is 104 wide
        assert_eq!(layout.end_offsets(), &[104.0, 208.0, 312.0]);
        assert_eq!(layout.item_start_x(0), Some(2.0));
        assert_eq!(layout.item_start_x(2), Some(210.0));
        assert_eq!(layout.min_selected_x(), Some(2.0));
        assert_eq!(layout.max_selected_x(), Some(210.0));
        assert_eq!(layout.item_rect(1), Some(Rect::new(106.0, 2.0, 206.0, 38.0)));
        assert_eq!(layout.item_rect(3), None);
    }
}
