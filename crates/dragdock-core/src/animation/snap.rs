#![forbid(unsafe_code)]

//! Edge-snap animator: one cancellable x-coordinate transition at a time.
//!
//! [`SnapAnimator`] owns at most one [`Slide`]. The host advances it once per
//! frame with [`advance`](SnapAnimator::advance) (or the callback form,
//! [`drive`](SnapAnimator::drive)) and applies the returned x.
//!
//! # Invariants
//!
//! 1. At most one task runs; [`start`](SnapAnimator::start) replaces any
//!    running task without completing it.
//! 2. After [`cancel`](SnapAnimator::cancel) no frame is produced for the
//!    cancelled task, and no completion is reported for it.
//! 3. The final frame of a task carries exactly `to` and `done = true`; no
//!    frame follows it.
//! 4. A zero-length task produces its single final frame on the first
//!    advance, even with `dt = 0`.

use std::time::Duration;

use super::{Animation, Slide, snap_duration};

/// One delivered animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapFrame {
    /// Interpolated x coordinate.
    pub x: i32,
    /// Whether this is the last frame of the task.
    pub done: bool,
}

#[derive(Debug, Clone, Copy)]
struct SnapTask {
    slide: Slide,
    generation: u64,
}

/// Runs a single eased transition from a start x to a target x.
#[derive(Debug, Default)]
pub struct SnapAnimator {
    task: Option<SnapTask>,
    generation: u64,
}

impl SnapAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating from `from_x` to `to_x`, cancelling any running task.
    ///
    /// The duration is [`snap_duration`]. Returns the generation number of
    /// the new task.
    pub fn start(&mut self, from_x: i32, to_x: i32) -> u64 {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let duration = snap_duration(from_x, to_x);
        crate::debug!(
            from_x,
            to_x,
            duration_ms = duration.as_millis() as u64,
            generation = self.generation,
            "snap started"
        );
        self.task = Some(SnapTask {
            slide: Slide::new(from_x, to_x, duration),
            generation: self.generation,
        });
        self.generation
    }

    /// Stop the running task. Idempotent; does not report completion.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            crate::debug!(generation = task.generation, "snap cancelled");
        }
    }

    /// Whether a task is running.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Target x of the running task.
    #[must_use]
    pub fn target(&self) -> Option<i32> {
        self.task.map(|task| task.slide.to())
    }

    /// Duration of the running task.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.task.map(|task| task.slide.duration())
    }

    /// Generation of the most recently started task (0 if none ever ran).
    #[inline]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the running task by `dt`.
    ///
    /// Returns `None` when nothing is running. The task is discarded once its
    /// final frame has been returned.
    pub fn advance(&mut self, dt: Duration) -> Option<SnapFrame> {
        let task = self.task.as_mut()?;
        task.slide.tick(dt);
        let frame = SnapFrame {
            x: task.slide.position(),
            done: task.slide.is_complete(),
        };
        crate::trace!(x = frame.x, done = frame.done, "snap frame");
        if frame.done {
            self.task = None;
        }
        Some(frame)
    }

    /// Callback form of [`advance`](Self::advance).
    ///
    /// Calls `on_tick` with the new x and then `on_done` if the task finished.
    /// Returns whether a task is still running afterwards.
    pub fn drive<T, D>(&mut self, dt: Duration, mut on_tick: T, on_done: D) -> bool
    where
        T: FnMut(i32),
        D: FnOnce(),
    {
        if let Some(frame) = self.advance(dt) {
            on_tick(frame.x);
            if frame.done {
                on_done();
            }
        }
        self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const MS_16: Duration = Duration::from_millis(16);

    #[test]
    fn idle_animator_yields_nothing() {
        let mut anim = SnapAnimator::new();
        assert!(!anim.is_running());
        assert_eq!(anim.advance(MS_16), None);
        assert_eq!(anim.generation(), 0);
    }

    #[test]
    fn zero_length_snap_completes_on_first_advance() {
        let mut anim = SnapAnimator::new();
        anim.start(100, 100);
        assert_eq!(anim.duration(), Some(Duration::ZERO));
        assert_eq!(
            anim.advance(Duration::ZERO),
            Some(SnapFrame { x: 100, done: true })
        );
        assert!(!anim.is_running());
        assert_eq!(anim.advance(MS_16), None);
    }

    #[test]
    fn snap_reaches_target_exactly_once() {
        let mut anim = SnapAnimator::new();
        anim.start(50, 0);
        assert_eq!(anim.duration(), Some(Duration::from_millis(87)));

        let mut frames = Vec::new();
        while let Some(frame) = anim.advance(MS_16) {
            frames.push(frame);
        }
        // 87ms at 16ms per frame: 6 frames (96ms).
        assert_eq!(frames.len(), 6);
        let last = frames.last().copied();
        assert_eq!(last, Some(SnapFrame { x: 0, done: true }));
        assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
    }

    #[test]
    fn cancel_before_first_frame_delivers_nothing() {
        let mut anim = SnapAnimator::new();
        anim.start(0, 300);
        anim.cancel();
        let mut ticks = 0;
        let mut done = 0;
        for _ in 0..10 {
            anim.drive(MS_16, |_| ticks += 1, || done += 1);
        }
        assert_eq!((ticks, done), (0, 0));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut anim = SnapAnimator::new();
        anim.cancel();
        anim.start(0, 10);
        anim.cancel();
        anim.cancel();
        assert!(!anim.is_running());
    }

    #[test]
    fn start_replaces_running_task() {
        let mut anim = SnapAnimator::new();
        let first = anim.start(0, 300);
        anim.advance(MS_16);
        let second = anim.start(200, 0);
        assert!(second > first);
        assert_eq!(anim.target(), Some(0));
        let frame = anim.advance(Duration::from_secs(1));
        assert_eq!(frame, Some(SnapFrame { x: 0, done: true }));
    }

    #[test]
    fn drive_reports_ticks_then_done() {
        let mut anim = SnapAnimator::new();
        anim.start(100, 100);
        let log = RefCell::new(Vec::new());
        let still_running = anim.drive(
            Duration::ZERO,
            |x| log.borrow_mut().push(format!("tick {x}")),
            || log.borrow_mut().push("done".to_string()),
        );
        assert!(!still_running);
        assert_eq!(log.into_inner(), vec!["tick 100", "done"]);
    }
}
