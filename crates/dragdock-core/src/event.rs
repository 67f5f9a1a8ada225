#![forbid(unsafe_code)]

//! Raw pointer events delivered by the host to a draggable element.
//!
//! Positions are sub-pixel floats as reported by the platform. `local` is
//! relative to the element's top-left corner; `global` is relative to the
//! display. The timestamp is carried through but not interpreted.

use std::time::Duration;

use crate::geometry::Point;

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Contact started on the element.
    Down,
    /// Contact moved.
    Move,
    /// Contact lifted.
    Up,
    /// The platform aborted the gesture.
    Cancel,
    /// The pointer left the element's input region.
    Outside,
}

/// A sub-pixel pointer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    #[must_use]
    pub fn delta(self, other: PointerPosition) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    /// Where an element's top-left corner lands if the point `local` inside
    /// it sits under `self`. Truncates toward zero.
    #[inline]
    #[must_use]
    pub fn origin_for(self, local: PointerPosition) -> Point {
        let (x, y) = self.delta(local);
        Point::new(x as i32, y as i32)
    }
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Offset inside the element.
    pub local: PointerPosition,
    /// Absolute display position.
    pub global: PointerPosition,
    /// Platform event time. Reserved.
    pub timestamp: Duration,
}

impl PointerEvent {
    /// Create an event with a zero timestamp.
    #[must_use]
    pub const fn new(kind: PointerKind, local: PointerPosition, global: PointerPosition) -> Self {
        Self {
            kind,
            local,
            global,
            timestamp: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn down(local: PointerPosition, global: PointerPosition) -> Self {
        Self::new(PointerKind::Down, local, global)
    }

    #[must_use]
    pub const fn moved(local: PointerPosition, global: PointerPosition) -> Self {
        Self::new(PointerKind::Move, local, global)
    }

    #[must_use]
    pub const fn up(local: PointerPosition, global: PointerPosition) -> Self {
        Self::new(PointerKind::Up, local, global)
    }

    #[must_use]
    pub const fn cancel(local: PointerPosition, global: PointerPosition) -> Self {
        Self::new(PointerKind::Cancel, local, global)
    }

    #[must_use]
    pub const fn outside(local: PointerPosition, global: PointerPosition) -> Self {
        Self::new(PointerKind::Outside, local, global)
    }

    /// Set the timestamp (builder).
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: Duration) -> Self {
        self.timestamp = timestamp;
        self
    }
}
