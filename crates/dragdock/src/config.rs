#![forbid(unsafe_code)]

//! Controller configuration.

use dragdock_core::geometry::{Point, Rect, TAP_THRESHOLD_PX};

use crate::error::DragError;

/// Configuration for a [`DragController`](crate::controller::DragController).
///
/// Fixed once the controller is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Region the element's bounding box must stay within.
    pub region: Rect,
    /// Where the element is placed on attach.
    pub initial_position: Point,
    /// Animate to the nearest horizontal edge on release.
    /// Default: true
    pub auto_snap_to_edge: bool,
    /// Per-axis travel below which a release counts as a tap.
    /// Default: 5.0 px
    pub tap_threshold: f32,
}

impl DragConfig {
    /// Configuration with edge snapping on and the default tap threshold.
    #[must_use]
    pub fn new(region: Rect, initial_position: Point) -> Self {
        Self {
            region,
            initial_position,
            auto_snap_to_edge: true,
            tap_threshold: TAP_THRESHOLD_PX,
        }
    }

    /// Enable or disable edge snapping (builder).
    #[must_use]
    pub fn auto_snap_to_edge(mut self, enabled: bool) -> Self {
        self.auto_snap_to_edge = enabled;
        self
    }

    /// Set the tap threshold in pixels (builder).
    #[must_use]
    pub fn tap_threshold(mut self, px: f32) -> Self {
        self.tap_threshold = px;
        self
    }

    /// Check the region ordering and the tap threshold.
    pub fn validate(&self) -> Result<(), DragError> {
        let r = self.region;
        if r.left > r.right {
            return Err(DragError::InvalidConfig(format!(
                "region left {} exceeds right {}",
                r.left, r.right
            )));
        }
        if r.top > r.bottom {
            return Err(DragError::InvalidConfig(format!(
                "region top {} exceeds bottom {}",
                r.top, r.bottom
            )));
        }
        if !self.tap_threshold.is_finite() || self.tap_threshold < 0.0 {
            return Err(DragError::InvalidConfig(format!(
                "tap threshold {} must be a non-negative number",
                self.tap_threshold
            )));
        }
        Ok(())
    }
}
