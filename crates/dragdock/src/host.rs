#![forbid(unsafe_code)]

//! Collaborator traits: the draggable element and the surface host.
//!
//! The controller never renders anything. It reads the element's size,
//! toggles its pressed state, fires clicks, and asks the host to place,
//! move, and remove the floating surface that shows the element.

use dragdock_core::geometry::{DisplaySize, ElementSize, Point};

use crate::error::HostError;

/// The element being dragged.
pub trait Element {
    /// Current measured size. May change between calls; zero before layout.
    fn size(&self) -> ElementSize;

    /// Show or clear the pressed visual state.
    fn set_pressed(&mut self, pressed: bool);

    /// Deliver a click, as if the element had been tapped.
    fn dispatch_click(&mut self);
}

/// Platform facility that shows the element in a floating surface.
pub trait SurfaceHost<E: Element> {
    /// Show `element` with its top-left corner at `position`.
    ///
    /// Idempotent; the first call creates the surface.
    fn place(&mut self, element: &E, position: Point) -> Result<(), HostError>;

    /// Move the surface showing `element`.
    fn reposition(&mut self, element: &E, position: Point) -> Result<(), HostError>;

    /// Tear down the surface showing `element`.
    fn remove(&mut self, element: &E) -> Result<(), HostError>;

    /// Physical size of the display.
    fn display_size(&self) -> DisplaySize;
}
