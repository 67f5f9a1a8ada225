#![forbid(unsafe_code)]

//! Geometric primitives and placement math.
//!
//! All coordinates are absolute device pixels with the origin at the top-left
//! of the display. The functions here are pure: they never read or mutate
//! anything besides their arguments.

/// Total travel (per axis) below which a press/release pair counts as a tap.
pub const TAP_THRESHOLD_PX: f32 = 5.0;

/// An absolute pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, saturating at the `i32` range.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Same point with a different x.
    #[inline]
    #[must_use]
    pub const fn with_x(self, x: i32) -> Self {
        Self { x, y: self.y }
    }
}

/// Measured size of the draggable element.
///
/// Read from the element whenever it is needed; elements may resize between
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementSize {
    pub width: i32,
    pub height: i32,
}

impl ElementSize {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether the element has not been measured yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Physical display dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplaySize {
    pub width: i32,
    pub height: i32,
}

impl DisplaySize {
    /// Create a new display size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A region described by its four edges.
///
/// Invariant for a valid rect: `left <= right` and `top <= bottom`. Used as
/// the allowed region for the element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle. Does not check the edge ordering; see
    /// [`Rect::try_new`] for a checked constructor.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle, returning `None` if the edges are inverted.
    #[inline]
    pub const fn try_new(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        let rect = Self::new(left, top, right, bottom);
        if rect.is_valid() { Some(rect) } else { None }
    }

    /// Rectangle covering a whole display.
    #[inline]
    pub const fn from_display(size: DisplaySize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Horizontal extent.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether `left <= right` and `top <= bottom`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Whether a box of `size` placed at `origin` lies fully inside.
    #[inline]
    pub const fn contains_box(&self, origin: Point, size: ElementSize) -> bool {
        origin.x >= self.left
            && origin.y >= self.top
            && origin.x.saturating_add(size.width) <= self.right
            && origin.y.saturating_add(size.height) <= self.bottom
    }
}

/// Clamp one axis. The low edge wins when the span is too small for the
/// element.
#[inline]
fn clamp_axis(pos: i32, extent: i32, low: i32, high: i32) -> i32 {
    if pos < low {
        low
    } else if pos.saturating_add(extent) > high {
        high.saturating_sub(extent).max(low)
    } else {
        pos
    }
}

/// Constrain `proposed` so that the element's box stays within `region`.
///
/// Each axis is handled independently: below the start edge snaps to the
/// start edge, past the end edge snaps to `end - extent`. When the region is
/// narrower (or shorter) than the element the axis is pinned to its start
/// edge and the end edge is not enforced.
///
/// A zero-size element is not pinned wholesale: interior points are kept
/// as-is and only positions before the start edge move to it.
#[must_use]
pub fn clamp(proposed: Point, size: ElementSize, region: Rect) -> Point {
    Point {
        x: clamp_axis(proposed.x, size.width, region.left, region.right),
        y: clamp_axis(proposed.y, size.height, region.top, region.bottom),
    }
}

/// Target x for an edge snap.
///
/// Compares the element's horizontal centre against the midpoint of the
/// physical screen (not of `region`) and picks `region.left` or
/// `region.right - width`. Halving is integer division.
#[must_use]
pub fn nearest_edge_x(current: Point, size: ElementSize, region: Rect, screen_width: i32) -> i32 {
    let center = current.x.saturating_add(size.width / 2);
    if center < screen_width / 2 {
        region.left
    } else {
        region.right.saturating_sub(size.width)
    }
}

/// Whether a total displacement of `(dx, dy)` counts as a tap.
#[inline]
#[must_use]
pub fn is_tap(dx: f32, dy: f32, threshold_px: f32) -> bool {
    dx.abs() < threshold_px && dy.abs() < threshold_px
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: Rect = Rect::new(0, 0, 400, 800);
    const SIZE: ElementSize = ElementSize::new(100, 50);

    #[test]
    fn clamp_inside_is_unchanged() {
        let p = Point::new(150, 100);
        assert_eq!(clamp(p, SIZE, REGION), p);
    }

    #[test]
    fn clamp_right_overflow() {
        assert_eq!(
            clamp(Point::new(440, 140), SIZE, REGION),
            Point::new(300, 140)
        );
    }

    #[test]
    fn clamp_left_and_top_underflow() {
        assert_eq!(clamp(Point::new(-20, -5), SIZE, REGION), Point::new(0, 0));
    }

    #[test]
    fn clamp_bottom_overflow() {
        assert_eq!(
            clamp(Point::new(10, 790), SIZE, REGION),
            Point::new(10, 750)
        );
    }

    #[test]
    fn clamp_axes_are_independent() {
        assert_eq!(
            clamp(Point::new(-1, 900), SIZE, REGION),
            Point::new(0, 750)
        );
    }

    #[test]
    fn clamp_zero_size_pins_to_start_when_before() {
        let p = clamp(Point::new(-10, -10), ElementSize::default(), REGION);
        assert_eq!(p, Point::new(0, 0));
    }

    #[test]
    fn clamp_narrow_region_pins_to_start_edges() {
        let narrow = Rect::new(10, 20, 50, 40);
        assert_eq!(clamp(Point::new(0, 0), SIZE, narrow), Point::new(10, 20));
        assert_eq!(clamp(Point::new(30, 30), SIZE, narrow), Point::new(10, 20));
        assert_eq!(clamp(Point::new(90, 90), SIZE, narrow), Point::new(10, 20));
    }

    #[test]
    fn clamp_zero_size_keeps_interior_points() {
        let p = Point::new(150, 100);
        assert_eq!(clamp(p, ElementSize::default(), REGION), p);
    }

    #[test]
    fn nearest_edge_uses_screen_midpoint() {
        // Region right half of an 800 screen; element centre at 450 > 400.
        let region = Rect::new(0, 0, 600, 800);
        assert_eq!(
            nearest_edge_x(Point::new(400, 0), SIZE, region, 800),
            500
        );
        // Same element on a 1000-wide screen is left of the midpoint.
        assert_eq!(nearest_edge_x(Point::new(400, 0), SIZE, region, 1000), 0);
    }

    #[test]
    fn nearest_edge_exact_midpoint_goes_right() {
        // centre = 150 + 50 = 200 == 400 / 2
        assert_eq!(
            nearest_edge_x(Point::new(150, 0), SIZE, REGION, 400),
            300
        );
    }

    #[test]
    fn tap_threshold_is_strict() {
        assert!(is_tap(2.0, -3.0, TAP_THRESHOLD_PX));
        assert!(is_tap(4.99, 4.99, TAP_THRESHOLD_PX));
        assert!(!is_tap(5.0, 0.0, TAP_THRESHOLD_PX));
        assert!(!is_tap(0.0, -5.0, TAP_THRESHOLD_PX));
    }

    #[test]
    fn point_offset_saturates() {
        assert_eq!(Point::new(1, 2).offset(3, -4), Point::new(4, -2));
        assert_eq!(Point::new(i32::MAX, 0).offset(1, 0).x, i32::MAX);
    }

    #[test]
    fn unmeasured_size_is_empty() {
        assert!(ElementSize::default().is_empty());
        assert!(ElementSize::new(10, 0).is_empty());
        assert!(!SIZE.is_empty());
    }

    #[test]
    fn rect_try_new_rejects_inverted() {
        assert!(Rect::try_new(10, 0, 5, 10).is_none());
        assert!(Rect::try_new(0, 10, 5, 0).is_none());
        assert_eq!(Rect::try_new(0, 0, 0, 0), Some(Rect::default()));
    }

    #[test]
    fn rect_from_display() {
        let r = Rect::from_display(DisplaySize::new(1080, 1920));
        assert_eq!((r.width(), r.height()), (1080, 1920));
    }

    #[test]
    fn contains_box_edges_inclusive() {
        assert!(REGION.contains_box(Point::new(300, 750), SIZE));
        assert!(!REGION.contains_box(Point::new(301, 750), SIZE));
    }
}
