//! Indicator animation.
//!
//! An [`AnimationJob`] is a pure function of elapsed time: sampling it at any
//! instant yields the indicator geometry for that frame. The [`Animator`]
//! holds at most one job and retires it once it has landed.

use std::f64::consts::PI;

use crate::time::{Duration, Instant};

/// Accelerate-then-decelerate curve over `t ∈ [0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Linear interpolation between `a` and `b`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Indicator geometry for one frame of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Indicator left edge.
    pub x: f64,
    /// Indicator width.
    pub width: f64,
    /// Linear fraction of the duration that has elapsed.
    pub fraction: f64,
    /// Whether the indicator should already show the label it is heading to.
    pub show_target_label: bool,
    /// Whether this is the final frame.
    pub finished: bool,
}

/// A single indicator glide from one slot geometry to another.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationJob {
    /// Segment the indicator is heading to.
    pub target_index: usize,
    pub start_x: f64,
    pub target_x: f64,
    pub start_width: f64,
    pub target_width: f64,
    started_at: Instant,
    duration: Duration,
    label_swap_fraction: f64,
}

impl AnimationJob {
    /// Fraction of the duration elapsed at `now`, clamped to `[0, 1]`.
    pub fn elapsed_fraction(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Indicator geometry at `now`.
    ///
    /// The final frame reports the target geometry verbatim so a finished
    /// glide never drifts by a rounding error.
    pub fn sample(&self, now: Instant) -> AnimationFrame {
        let fraction = self.elapsed_fraction(now);
        if fraction >= 1.0 {
            return AnimationFrame {
                x: self.target_x,
                width: self.target_width,
                fraction: 1.0,
                show_target_label: true,
                finished: true,
            };
        }
        let eased = ease_in_out(fraction);
        AnimationFrame {
            x: lerp(self.start_x, self.target_x, eased),
            width: self.start_width + eased * (self.target_width - self.start_width),
            fraction,
            show_target_label: fraction > self.label_swap_fraction,
            finished: false,
        }
    }

    /// Total duration of the glide.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether start and target geometry coincide.
    pub fn is_stationary(&self) -> bool {
        self.start_x == self.target_x && self.start_width == self.target_width
    }
}

/// Owns the (single) active indicator animation.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    job: Option<AnimationJob>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a glide, replacing any job in flight.
    ///
    /// Callers pass the indicator's *current* geometry as `from`; when a job
    /// is being superseded that is its interpolated value, not its target.
    pub fn start(
        &mut self,
        target_index: usize,
        from: (f64, f64),
        to: (f64, f64),
        duration: Duration,
        label_swap_fraction: f64,
        now: Instant,
    ) -> &AnimationJob {
        if self.job.is_some() {
            log::debug!("Superseding indicator animation with one towards {}", target_index);
        }
        let (start_x, start_width) = from;
        let (target_x, target_width) = to;
        self.job.insert(AnimationJob {
            target_index,
            start_x,
            target_x,
            start_width,
            target_width,
            started_at: now,
            duration,
            label_swap_fraction,
        })
    }

    /// Sample the active job, retiring it once finished.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationFrame> {
        let frame = self.job.as_ref()?.sample(now);
        if frame.finished {
            if let Some(job) = self.job.take() {
                log::debug!("Indicator settled on segment {}", job.target_index);
            }
        }
        Some(frame)
    }

    /// Sample the active job without advancing or retiring it.
    pub fn peek(&self, now: Instant) -> Option<AnimationFrame> {
        self.job.as_ref().map(|job| job.sample(now))
    }

    /// Move the destination of the active job, keeping its start and clock.
    pub fn retarget(&mut self, target_x: f64, target_width: f64) {
        if let Some(job) = self.job.as_mut() {
            job.target_x = target_x;
            job.target_width = target_width;
        }
    }

    /// Drop the active job.
    pub fn cancel(&mut self) -> Option<AnimationJob> {
        self.job.take()
    }

    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }
}
