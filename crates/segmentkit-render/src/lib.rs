//! SegmentKit Render Library
//!
//! Drawing abstraction for the segmented control. The control itself never
//! touches a graphics API: [`paint_control`] turns its state into calls on a
//! [`Painter`], which hosts implement on top of whatever they render with.
//! [`DisplayList`] is a recording painter for replay and inspection.

mod display_list;
mod frame;
mod painter;

pub use display_list::{DisplayList, DrawCommand};
pub use frame::{paint_control, separator_visible};
pub use painter::{FillStyle, FontWeight, Painter, Shadow, TextStyle};
