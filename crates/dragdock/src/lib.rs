#![forbid(unsafe_code)]

//! Drag-to-move controller for a floating element, with edge snapping.
//!
//! The host application implements [`Element`] and [`SurfaceHost`], attaches
//! them to a [`DragController`], and forwards pointer events and frame time.
//!
//! ```
//! use std::time::Duration;
//! use dragdock::{DragConfig, DragController, DragPhase};
//! use dragdock::testing::{RecordingElement, RecordingHost};
//! use dragdock_core::event::{PointerEvent, PointerPosition};
//! use dragdock_core::geometry::{DisplaySize, ElementSize, Point, Rect};
//!
//! let config = DragConfig::new(Rect::new(0, 0, 400, 800), Point::new(150, 100));
//! let mut controller = DragController::with_config(config)?;
//! controller.attach(
//!     RecordingElement::new(ElementSize::new(100, 50)),
//!     RecordingHost::new(DisplaySize::new(400, 800)),
//! )?;
//!
//! let local = PointerPosition::new(10.0, 10.0);
//! controller.handle_pointer(PointerEvent::down(local, PointerPosition::new(160.0, 110.0)))?;
//! controller.handle_pointer(PointerEvent::moved(local, PointerPosition::new(100.0, 300.0)))?;
//! controller.handle_pointer(PointerEvent::up(local, PointerPosition::new(100.0, 300.0)))?;
//!
//! while controller.phase() == DragPhase::Snapping {
//!     controller.tick(Duration::from_millis(16))?;
//! }
//! assert_eq!(controller.position(), Point::new(0, 290));
//! # Ok::<(), dragdock::DragError>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod host;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::DragConfig;
pub use controller::{DragController, DragOutcome, DragPhase, ElementState, IgnoreReason};
pub use error::{DragError, HostError};
pub use host::{Element, SurfaceHost};
