//! egui integration for the SegmentKit segmented control.
//!
//! - [`SegmentedControl`]: the widget, shown over a caller-owned
//!   [`segmentkit_core::SegmentControl`]
//! - [`EguiPainter`]: paints render-crate calls with an `egui::Painter`
//! - [`EguiTextMeasure`]: measures labels with egui's font layout

pub mod painter;
pub mod segmented;

pub use painter::{EguiPainter, EguiTextMeasure, to_color32};
pub use segmented::SegmentedControl;
