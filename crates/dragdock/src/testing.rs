#![forbid(unsafe_code)]

//! Recording test doubles for [`Element`] and [`SurfaceHost`].
//!
//! Both doubles share their state through `Rc`, so a test can keep a clone
//! as a handle after moving the original into a controller.

use std::cell::RefCell;
use std::rc::Rc;

use dragdock_core::geometry::{DisplaySize, ElementSize, Point};

use crate::error::HostError;
use crate::host::{Element, SurfaceHost};

// ---------------------------------------------------------------------------
// RecordingElement
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct ElementRecord {
    size: ElementSize,
    pressed: bool,
    pressed_changes: Vec<bool>,
    clicks: usize,
}

/// An element with a settable size that records presses and clicks.
#[derive(Debug, Clone, Default)]
pub struct RecordingElement {
    record: Rc<RefCell<ElementRecord>>,
}

impl RecordingElement {
    #[must_use]
    pub fn new(size: ElementSize) -> Self {
        let element = Self::default();
        element.set_size(size);
        element
    }

    /// Change the size reported to the controller.
    pub fn set_size(&self, size: ElementSize) {
        self.record.borrow_mut().size = size;
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.record.borrow().pressed
    }

    /// Every `set_pressed` call, in order.
    #[must_use]
    pub fn pressed_changes(&self) -> Vec<bool> {
        self.record.borrow().pressed_changes.clone()
    }

    #[must_use]
    pub fn clicks(&self) -> usize {
        self.record.borrow().clicks
    }
}

impl Element for RecordingElement {
    fn size(&self) -> ElementSize {
        self.record.borrow().size
    }

    fn set_pressed(&mut self, pressed: bool) {
        let mut record = self.record.borrow_mut();
        record.pressed = pressed;
        record.pressed_changes.push(pressed);
    }

    fn dispatch_click(&mut self) {
        self.record.borrow_mut().clicks += 1;
    }
}

// ---------------------------------------------------------------------------
// RecordingHost
// ---------------------------------------------------------------------------

/// A surface host call that succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Place(Point),
    Reposition(Point),
    Remove,
}

#[derive(Debug, Default)]
struct HostRecord {
    display: DisplaySize,
    calls: Vec<HostCall>,
    fail_next: Option<HostError>,
}

/// A surface host that logs successful calls and can inject one failure.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    record: Rc<RefCell<HostRecord>>,
}

impl RecordingHost {
    #[must_use]
    pub fn new(display: DisplaySize) -> Self {
        let host = Self::default();
        host.set_display_size(display);
        host
    }

    /// Change the reported display size (e.g. after rotation).
    pub fn set_display_size(&self, display: DisplaySize) {
        self.record.borrow_mut().display = display;
    }

    /// Make the next place / reposition / remove fail with `err`.
    pub fn fail_next(&self, err: HostError) {
        self.record.borrow_mut().fail_next = Some(err);
    }

    /// All successful calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<HostCall> {
        self.record.borrow().calls.clone()
    }

    /// Positions of successful repositions, in order.
    #[must_use]
    pub fn repositions(&self) -> Vec<Point> {
        self.record
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Reposition(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.record.borrow_mut().calls.clear();
    }

    fn record(&self, call: HostCall) -> Result<(), HostError> {
        let mut record = self.record.borrow_mut();
        if let Some(err) = record.fail_next.take() {
            return Err(err);
        }
        record.calls.push(call);
        Ok(())
    }
}

impl<E: Element> SurfaceHost<E> for RecordingHost {
    fn place(&mut self, _element: &E, position: Point) -> Result<(), HostError> {
        self.record(HostCall::Place(position))
    }

    fn reposition(&mut self, _element: &E, position: Point) -> Result<(), HostError> {
        self.record(HostCall::Reposition(position))
    }

    fn remove(&mut self, _element: &E) -> Result<(), HostError> {
        self.record(HostCall::Remove)
    }

    fn display_size(&self) -> DisplaySize {
        self.record.borrow().display
    }
}
