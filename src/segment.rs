//! Sum type for path segments.

use super::{BoundingBox, CubicBezier, Point};

/// A path command over a small closed set of segment kinds.
///
/// `Move` lifts the pen and places it on a new start point without drawing
/// anything; `Cubic` draws a cubic Bezier curve. The set is closed on purpose
/// and can grow variants (line, arc) without touching the container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathSegment {
    Move(Point),
    Cubic(CubicBezier),
}

impl PathSegment {
    /// Return the point the pen rests on after the segment.
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Move(p) => *p,
            PathSegment::Cubic(curve) => curve.end(),
        }
    }

    /// Bounding box of the drawn geometry. A `Move` draws nothing and has
    /// none; in particular its point does not participate in path bounds.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            PathSegment::Move(_) => None,
            PathSegment::Cubic(curve) => Some(curve.bounding_box()),
        }
    }
}

impl From<CubicBezier> for PathSegment {
    fn from(curve: CubicBezier) -> Self {
        PathSegment::Cubic(curve)
    }
}

// tinyvec-backed storage needs a Default item
impl Default for PathSegment {
    fn default() -> Self {
        PathSegment::Move(Point::default())
    }
}
