#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! Animations are advanced explicitly by the caller with [`Animation::tick`];
//! nothing here owns a clock or a thread. The host's frame loop decides how
//! often to tick.
//!
//! [`snap::SnapAnimator`] builds on [`Slide`] to move an element's x
//! coordinate to a screen edge.

pub mod snap;

use std::time::Duration;

/// Milliseconds of animation per pixel of travel, before the square root.
pub const SNAP_DURATION_FACTOR: f64 = 150.0;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Cosine ease-in-out: half a cosine period, symmetric around `t = 0.5`.
#[inline]
pub fn accelerate_decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Slide
// ---------------------------------------------------------------------------

/// Interpolates an `i32` value between `from` and `to` over a duration.
///
/// [`Animation::value`] returns the eased progress; use [`Slide::position`]
/// for the interpolated integer. A zero duration is complete immediately and
/// sits at `to`.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    from: i32,
    to: i32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Slide {
    /// Create a new slide from `from` to `to` over `duration`.
    pub fn new(from: i32, to: i32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing: accelerate_decelerate,
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start value.
    pub fn from(&self) -> i32 {
        self.from
    }

    /// End value.
    pub fn to(&self) -> i32 {
        self.to
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated position, truncated toward zero.
    ///
    /// Exactly `from` before the first tick and exactly `to` once complete.
    pub fn position(&self) -> i32 {
        if self.is_complete() {
            return self.to;
        }
        if self.elapsed.is_zero() {
            return self.from;
        }
        let t = f64::from((self.easing)(self.progress()));
        let range = f64::from(self.to) - f64::from(self.from);
        (f64::from(self.from) + range * t) as i32
    }
}

impl Animation for Slide {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

/// Snap duration for a move from `from` to `to`:
/// `round(sqrt(|to - from| * 150))` milliseconds.
#[must_use]
pub fn snap_duration(from: i32, to: i32) -> Duration {
    let distance = f64::from(from.abs_diff(to));
    let millis = (distance * SNAP_DURATION_FACTOR).sqrt().round();
    Duration::from_millis(millis as u64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
