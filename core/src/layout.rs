//! Widget geometry and the parent-relative anchoring rule.

use crate::display::{Point, Rect, Size, Vector};

pub const LEFT_ALIGN: f32 = 0.0;
pub const RIGHT_ALIGN: f32 = 1.0;
pub const TOP_ALIGN: f32 = 0.0;
pub const BOTTOM_ALIGN: f32 = 1.0;

/// Which side of the parent a widget is anchored to, as a fraction per axis.
///
/// Anything up to and including `0.5` anchors to the near edge (left/top), anything above
/// anchors to the far edge. Values are not clamped; out-of-range fractions simply place the
/// widget outside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment { horizontal: LEFT_ALIGN, vertical: TOP_ALIGN };
    pub const TOP_RIGHT: Alignment = Alignment { horizontal: RIGHT_ALIGN, vertical: TOP_ALIGN };
    pub const BOTTOM_LEFT: Alignment = Alignment { horizontal: LEFT_ALIGN, vertical: BOTTOM_ALIGN };
    pub const BOTTOM_RIGHT: Alignment =
        Alignment { horizontal: RIGHT_ALIGN, vertical: BOTTOM_ALIGN };

    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Alignment { horizontal, vertical }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::TOP_LEFT
    }
}

/// Stored geometry of a widget.
///
/// `position` is the widget's offset from its anchor (mirrored when anchored to a far edge),
/// `size` its extent. The default is a zero-sized widget anchored top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub position: Point,
    pub size: Size,
    pub alignment: Alignment,
}

impl Layout {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Layout {
            position: Point::new(x, y),
            size: Size::new(width, height),
            alignment: Alignment::TOP_LEFT,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The widget's own rectangle, in the frame its parent translated to.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Whether `point` (relative to the same frame as [`rect`](Layout::rect)) lies inside
    /// the widget. The right and bottom edges are exclusive.
    pub fn in_bounds(&self, point: Point) -> bool {
        let x = point.x - self.position.x;
        let y = point.y - self.position.y;

        !(x < 0.0 || x >= self.size.width || y < 0.0 || y >= self.size.height)
    }
}

/// Computes where a child's frame sits inside its parent's frame.
///
/// The anchor interpolates between the parent's *position* and its *size* (not between its
/// corners), then a far-edge anchored child is pulled back by its own size and twice its own
/// offset so that its far corner lands on the anchor:
///
/// ```text
/// x1 = px + h * (pw - px)        amt = h <= 0.5 ? 0 : 1
/// x2 = amt * (width + x * 2)     offset.x = x1 - x2
/// ```
///
/// and likewise on the vertical axis. Existing layouts depend on this exact rule.
pub fn anchor_offset(parent: &Layout, child: &Layout) -> Vector {
    let h = child.alignment.horizontal;
    let v = child.alignment.vertical;

    let x1 = parent.position.x + h * (parent.size.width - parent.position.x);
    let y1 = parent.position.y + v * (parent.size.height - parent.position.y);

    let amt_x = if h <= 0.5 { 0.0 } else { 1.0 };
    let amt_y = if v <= 0.5 { 0.0 } else { 1.0 };

    let x2 = amt_x * (child.size.width + child.position.x * 2.0);
    let y2 = amt_y * (child.size.height + child.position.y * 2.0);

    Vector::new(x1 - x2, y1 - y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::approx_eq;

    fn epsilon_vector(a: Vector, b: Vector) {
        assert!(approx_eq!(f32, a.x, b.x, epsilon = 0.0001), "{:?} != {:?}", a, b);
        assert!(approx_eq!(f32, a.y, b.y, epsilon = 0.0001), "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_top_left_anchor_is_parent_position() {
        let parent = Layout::new(0.0, 0.0, 100.0, 100.0);
        let child = Layout::new(10.0, 10.0, 20.0, 20.0);
        epsilon_vector(anchor_offset(&parent, &child), Vector::new(0.0, 0.0));

        let parent = Layout::new(5.0, 7.0, 100.0, 100.0);
        epsilon_vector(anchor_offset(&parent, &child), Vector::new(5.0, 7.0));
    }

    #[test]
    fn test_bottom_right_anchor_mirrors_offset() {
        let parent = Layout::new(0.0, 0.0, 800.0, 600.0);
        let child = Layout::new(10.0, 60.0, 80.0, 40.0).with_alignment(Alignment::BOTTOM_RIGHT);

        let offset = anchor_offset(&parent, &child);
        epsilon_vector(offset, Vector::new(800.0 - 100.0, 600.0 - 160.0));

        // the child's rectangle ends up `position` away from the far corner
        let rect = child.rect();
        assert!(approx_eq!(f32, rect.max_x() + offset.x, 790.0, epsilon = 0.0001));
        assert!(approx_eq!(f32, rect.max_y() + offset.y, 540.0, epsilon = 0.0001));
    }

    #[test]
    fn test_mixed_anchor() {
        let parent = Layout::new(0.0, 0.0, 800.0, 600.0);
        let child = Layout::new(10.0, 10.0, 80.0, 40.0).with_alignment(Alignment::BOTTOM_LEFT);
        epsilon_vector(anchor_offset(&parent, &child), Vector::new(0.0, 540.0));
    }

    #[test]
    fn test_anchor_uses_parent_position_not_corner() {
        // parent at (20, 40) sized 100x100: a right/bottom anchor lands on (100, 100), not on
        // the parent's far corner (120, 140)
        let parent = Layout::new(20.0, 40.0, 100.0, 100.0);
        let child = Layout::new(0.0, 0.0, 10.0, 10.0).with_alignment(Alignment::BOTTOM_RIGHT);
        epsilon_vector(anchor_offset(&parent, &child), Vector::new(90.0, 90.0));

        // halfway interpolates between position and size
        let child = Layout::new(0.0, 0.0, 10.0, 10.0).with_alignment(Alignment::new(0.5, 0.5));
        epsilon_vector(anchor_offset(&parent, &child), Vector::new(60.0, 70.0));
    }

    #[test]
    fn test_half_is_near_edge() {
        let parent = Layout::new(0.0, 0.0, 100.0, 100.0);
        let near = Layout::new(1.0, 1.0, 10.0, 10.0).with_alignment(Alignment::new(0.5, 0.5));
        let far = Layout::new(1.0, 1.0, 10.0, 10.0).with_alignment(Alignment::new(0.51, 0.51));

        epsilon_vector(anchor_offset(&parent, &near), Vector::new(50.0, 50.0));
        epsilon_vector(anchor_offset(&parent, &far), Vector::new(51.0 - 12.0, 51.0 - 12.0));
    }

    #[test]
    fn test_out_of_range_alignment_is_not_clamped() {
        let parent = Layout::new(0.0, 0.0, 100.0, 100.0);
        let child = Layout::new(0.0, 0.0, 10.0, 10.0).with_alignment(Alignment::new(2.0, -1.0));
        epsilon_vector(anchor_offset(&parent, &child), Vector::new(190.0, -100.0));
    }

    #[test]
    fn test_in_bounds_is_half_open() {
        let layout = Layout::new(10.0, 10.0, 20.0, 20.0);

        assert!(layout.in_bounds(Point::new(10.0, 10.0)));
        assert!(layout.in_bounds(Point::new(29.9, 29.9)));
        assert!(!layout.in_bounds(Point::new(30.0, 15.0)));
        assert!(!layout.in_bounds(Point::new(15.0, 30.0)));
        assert!(!layout.in_bounds(Point::new(9.9, 15.0)));
        assert!(!Layout::default().in_bounds(Point::new(0.0, 0.0)));
    }
}
