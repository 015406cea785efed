//! SegmentKit Core Library
//!
//! Platform-agnostic engine for a segmented control: a single row of
//! mutually-exclusive labels inside a pill, with a draggable selection
//! indicator that glides between segments.
//!
//! The engine is split the same way the work flows through a frame:
//! - [`layout`]: per-segment widths and offsets for a given size constraint
//! - [`gesture`]: pointer tracking, tap vs drag, commit resolution
//! - [`animation`]: time-based interpolation of the indicator
//! - [`control`]: the [`SegmentControl`] that owns all of the above

pub mod animation;
pub mod control;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod segment;
pub mod style;

pub use animation::{AnimationFrame, AnimationJob, Animator, ease_in_out};
pub use control::{IndicatorLabel, SegmentControl, SelectionState};
pub use error::{SegmentError, SegmentResult};
pub use gesture::{GesturePhase, GestureState, PointerEvent};
pub use layout::{SegmentLayout, SizeConstraint};
pub use segment::{DEFAULT_ITEMS, MonospaceMeasure, Segment, TextMeasure, measure_segments};
pub use style::{SegmentStyle, SerializableColor, WidthPolicy};

/// Clock types used by the animation controller.
///
/// `std::time::Instant` panics on wasm32, so the browser build goes through
/// `web_time` instead.
pub mod time {
    #[cfg(not(target_arch = "wasm32"))]
    pub use std::time::{Duration, Instant};

    #[cfg(target_arch = "wasm32")]
    pub use web_time::{Duration, Instant};
}
