#![forbid(unsafe_code)]

//! Core: placement geometry, pointer events, and edge-snap animation.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
