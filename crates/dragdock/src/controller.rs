#![forbid(unsafe_code)]

//! Pointer-driven drag state machine for a single floating element.
//!
//! [`DragController`] turns raw [`PointerEvent`]s into surface positions:
//! it tracks the contact, clamps the element into the configured region,
//! tells taps from drags, and optionally slides the element to the nearest
//! horizontal edge on release.
//!
//! # State machine
//!
//! | Phase    | Event            | Effect                                   | Next               |
//! |----------|------------------|------------------------------------------|--------------------|
//! | any      | Down             | cancel snap, open session, press         | Dragging           |
//! | Dragging | Move             | clamp, reposition if changed             | Dragging           |
//! | Dragging | Up               | click if tap, unpress, snap if enabled   | Idle or Snapping   |
//! | Dragging | Cancel / Outside | unpress, snap if enabled                 | Idle or Snapping   |
//! | Snapping | final frame      |                                          | Idle               |
//!
//! Move, Up, Cancel, and Outside without an open session are rejected with
//! [`DragOutcome::Ignored`]. Every event is consumed either way.
//!
//! # Invariants
//!
//! 1. The surface is only repositioned on Move and on snap frames, and only
//!    when the position actually changes.
//! 2. Tap detection uses raw pointer travel, never the clamped travel.
//! 3. At most one snap runs; a new press cancels it before anything else.
//! 4. `position()` is always the last position the host accepted.
//!
//! # Failure Modes
//!
//! | Failure                    | Cause                        | Result                          |
//! |----------------------------|------------------------------|---------------------------------|
//! | `attach` before `configure`| caller bug                   | [`DragError::NotConfigured`]    |
//! | host rejects a reposition  | permission, surface gone     | error returned, position kept   |
//! | host rejects a snap frame  | same                         | snap cancelled, phase Idle      |
//! | `detach` twice             | caller                       | no-op                           |

use std::time::Duration;

use dragdock_core::animation::snap::SnapAnimator;
use dragdock_core::event::{PointerEvent, PointerKind, PointerPosition};
use dragdock_core::geometry::{Point, clamp, is_tap, nearest_edge_x};

use crate::config::DragConfig;
use crate::error::DragError;
use crate::host::{Element, SurfaceHost};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Public view of the controller's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No contact, no animation.
    Idle,
    /// A pointer is down on the element.
    Dragging,
    /// The element is sliding to an edge.
    Snapping,
}

/// Anchors recorded at pointer-down, discarded at release.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Touch offset inside the element, so it doesn't jump under the finger.
    pointer_start_local: PointerPosition,
    /// Absolute touch-down point, for tap detection.
    pointer_start_global: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging(DragSession),
    Snapping,
}

impl Phase {
    fn public(self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Dragging(_) => DragPhase::Dragging,
            Self::Snapping => DragPhase::Snapping,
        }
    }
}

/// Element state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementState {
    /// Last position the host accepted.
    pub current_position: Point,
    pub is_pressed: bool,
}

/// Why an event had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// No element is attached.
    Detached,
    /// Move / Up / Cancel / Outside arrived without a preceding Down.
    NoSession,
}

/// What a consumed pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragOutcome {
    /// A drag session opened.
    Pressed,
    /// The element moved to this position.
    Moved(Point),
    /// The move clamped to the current position; nothing was sent.
    Held,
    /// The contact lifted.
    Released { tapped: bool, snapping: bool },
    /// The platform aborted the gesture or the pointer left the region.
    Cancelled { snapping: bool },
    /// The event was not legal in the current phase.
    Ignored(IgnoreReason),
}

impl DragOutcome {
    /// Pointer events are always consumed by the drag surface.
    #[inline]
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        true
    }
}

#[derive(Debug)]
struct Attachment<E, H> {
    element: E,
    host: H,
}

// ---------------------------------------------------------------------------
// DragController
// ---------------------------------------------------------------------------

/// Drag-to-move controller for one floating element.
///
/// Configure it, [`attach`](Self::attach) an element and a host, then feed
/// pointer events through [`handle_pointer`](Self::handle_pointer) and frame
/// time through [`tick`](Self::tick). Everything runs on the caller's thread.
#[derive(Debug)]
pub struct DragController<E, H> {
    config: Option<DragConfig>,
    attachment: Option<Attachment<E, H>>,
    state: ElementState,
    phase: Phase,
    animator: SnapAnimator,
}

impl<E, H> Default for DragController<E, H> {
    fn default() -> Self {
        Self {
            config: None,
            attachment: None,
            state: ElementState::default(),
            phase: Phase::Idle,
            animator: SnapAnimator::new(),
        }
    }
}

impl<E, H> DragController<E, H>
where
    E: Element,
    H: SurfaceHost<E>,
{
    /// Create an unconfigured controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with `config` already applied.
    pub fn with_config(config: DragConfig) -> Result<Self, DragError> {
        let mut controller = Self::new();
        controller.configure(config)?;
        Ok(controller)
    }

    /// Set the configuration. Rejected while attached.
    pub fn configure(&mut self, config: DragConfig) -> Result<(), DragError> {
        if self.attachment.is_some() {
            return Err(DragError::AlreadyAttached);
        }
        config.validate()?;
        self.config = Some(config);
        Ok(())
    }

    /// Current configuration, if any.
    #[must_use]
    pub fn config(&self) -> Option<&DragConfig> {
        self.config.as_ref()
    }

    /// Show `element` through `host` at the initial position and start
    /// accepting pointer events.
    ///
    /// On a host failure nothing is attached and both values are dropped.
    pub fn attach(&mut self, element: E, mut host: H) -> Result<(), DragError> {
        if self.attachment.is_some() {
            return Err(DragError::AlreadyAttached);
        }
        let config = self.config.ok_or(DragError::NotConfigured)?;

        if let Err(err) = host.place(&element, config.initial_position) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "surface place failed");
            return Err(err.into());
        }

        self.state = ElementState {
            current_position: config.initial_position,
            is_pressed: false,
        };
        self.phase = Phase::Idle;
        self.attachment = Some(Attachment { element, host });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            x = config.initial_position.x,
            y = config.initial_position.y,
            "drag controller attached"
        );
        Ok(())
    }

    /// Stop accepting events, cancel any snap, and remove the surface.
    ///
    /// An open drag session is discarded without a click or snap. Calling
    /// this while detached is a no-op.
    pub fn detach(&mut self) -> Result<(), DragError> {
        let Some(mut attachment) = self.attachment.take() else {
            return Ok(());
        };
        self.animator.cancel();
        self.phase = Phase::Idle;
        if self.state.is_pressed {
            attachment.element.set_pressed(false);
            self.state.is_pressed = false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("drag controller detached");

        if let Err(err) = attachment.host.remove(&attachment.element) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "surface remove failed");
            return Err(err.into());
        }
        Ok(())
    }

    /// Whether an element is attached.
    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase.public()
    }

    /// Last position accepted by the host.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        self.state.current_position
    }

    /// Whether the element is currently pressed.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed
    }

    /// Snapshot of the element state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> ElementState {
        self.state
    }

    /// Target x of the running snap.
    #[must_use]
    pub fn snap_target(&self) -> Option<i32> {
        self.animator.target()
    }

    /// Duration of the running snap.
    #[must_use]
    pub fn snap_duration(&self) -> Option<Duration> {
        self.animator.duration()
    }

    /// The attached element.
    #[must_use]
    pub fn element(&self) -> Option<&E> {
        self.attachment.as_ref().map(|a| &a.element)
    }

    /// The attached surface host.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.attachment.as_ref().map(|a| &a.host)
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Feed one pointer event.
    ///
    /// The event is always consumed; the outcome says what it did. Host
    /// failures while moving the surface are returned as errors.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<DragOutcome, DragError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "drag_pointer",
            kind = ?event.kind,
            x = event.global.x,
            y = event.global.y,
            phase = ?self.phase.public()
        )
        .entered();

        if self.attachment.is_none() {
            return Ok(DragOutcome::Ignored(IgnoreReason::Detached));
        }
        match event.kind {
            PointerKind::Down => Ok(self.on_down(event)),
            PointerKind::Move => self.on_move(event),
            PointerKind::Up => self.on_up(event),
            PointerKind::Cancel | PointerKind::Outside => self.on_cancel(),
        }
    }

    /// Advance a running snap by `dt` of frame time.
    ///
    /// Does nothing unless the phase is [`DragPhase::Snapping`].
    pub fn tick(&mut self, dt: Duration) -> Result<(), DragError> {
        if self.phase != Phase::Snapping {
            return Ok(());
        }
        self.step_snap(dt)
    }

    fn on_down(&mut self, event: PointerEvent) -> DragOutcome {
        self.animator.cancel();
        self.phase = Phase::Dragging(DragSession {
            pointer_start_local: event.local,
            pointer_start_global: event.global,
        });
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.element.set_pressed(true);
        }
        self.state.is_pressed = true;

        #[cfg(feature = "tracing")]
        tracing::debug!("drag session opened");
        DragOutcome::Pressed
    }

    fn on_move(&mut self, event: PointerEvent) -> Result<DragOutcome, DragError> {
        let Phase::Dragging(session) = self.phase else {
            return Ok(DragOutcome::Ignored(IgnoreReason::NoSession));
        };
        let (Some(config), Some(attachment)) = (self.config, self.attachment.as_mut()) else {
            return Ok(DragOutcome::Ignored(IgnoreReason::Detached));
        };

        let proposed = event.global.origin_for(session.pointer_start_local);
        let next = clamp(proposed, attachment.element.size(), config.region);
        if next == self.state.current_position {
            return Ok(DragOutcome::Held);
        }

        if let Err(err) = attachment.host.reposition(&attachment.element, next) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, x = next.x, y = next.y, "surface reposition failed");
            return Err(err.into());
        }
        self.state.current_position = next;
        Ok(DragOutcome::Moved(next))
    }

    fn on_up(&mut self, event: PointerEvent) -> Result<DragOutcome, DragError> {
        let Phase::Dragging(session) = self.phase else {
            return Ok(DragOutcome::Ignored(IgnoreReason::NoSession));
        };
        let Some(config) = self.config else {
            return Ok(DragOutcome::Ignored(IgnoreReason::Detached));
        };

        let (dx, dy) = event.global.delta(session.pointer_start_global);
        let tapped = is_tap(dx, dy, config.tap_threshold);
        self.phase = Phase::Idle;

        if let Some(attachment) = self.attachment.as_mut() {
            if tapped {
                attachment.element.dispatch_click();
            }
            attachment.element.set_pressed(false);
        }
        self.state.is_pressed = false;

        #[cfg(feature = "tracing")]
        tracing::debug!(dx, dy, tapped, "drag session released");

        let snapping = config.auto_snap_to_edge && self.start_snap()?;
        Ok(DragOutcome::Released { tapped, snapping })
    }

    fn on_cancel(&mut self) -> Result<DragOutcome, DragError> {
        if !matches!(self.phase, Phase::Dragging(_)) {
            return Ok(DragOutcome::Ignored(IgnoreReason::NoSession));
        }
        self.phase = Phase::Idle;
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.element.set_pressed(false);
        }
        self.state.is_pressed = false;

        #[cfg(feature = "tracing")]
        tracing::debug!("drag session cancelled");

        let auto_snap = self.config.is_some_and(|c| c.auto_snap_to_edge);
        let snapping = auto_snap && self.start_snap()?;
        Ok(DragOutcome::Cancelled { snapping })
    }

    // -----------------------------------------------------------------------
    // Snapping
    // -----------------------------------------------------------------------

    /// Start sliding toward the nearest edge. Returns whether the snap is
    /// still running after its first (zero-time) frame.
    fn start_snap(&mut self) -> Result<bool, DragError> {
        let (Some(config), Some(attachment)) = (self.config, self.attachment.as_ref()) else {
            return Ok(false);
        };
        let size = attachment.element.size();
        let screen = attachment.host.display_size();
        let from = self.state.current_position.x;
        let to = nearest_edge_x(self.state.current_position, size, config.region, screen.width);

        self.animator.start(from, to);
        self.phase = Phase::Snapping;
        self.step_snap(Duration::ZERO)?;
        Ok(self.phase == Phase::Snapping)
    }

    fn step_snap(&mut self, dt: Duration) -> Result<(), DragError> {
        let Some(frame) = self.animator.advance(dt) else {
            self.phase = Phase::Idle;
            return Ok(());
        };

        if frame.x != self.state.current_position.x {
            let next = self.state.current_position.with_x(frame.x);
            let Some(attachment) = self.attachment.as_mut() else {
                self.animator.cancel();
                self.phase = Phase::Idle;
                return Ok(());
            };
            if let Err(err) = attachment.host.reposition(&attachment.element, next) {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, x = next.x, "snap frame rejected, cancelling snap");
                self.animator.cancel();
                self.phase = Phase::Idle;
                return Err(err.into());
            }
            self.state.current_position = next;
        }

        if frame.done {
            self.phase = Phase::Idle;
            #[cfg(feature = "tracing")]
            tracing::debug!(x = frame.x, "snap finished");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
