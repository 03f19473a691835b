use core::slice;

use tinyvec::ArrayVec;

use super::{BoundingBox, CubicBezier, PathSegment, Point};

/// A path composed of move/curve segments, with fixed capacity N.
pub struct Path<const N: usize>
where
    [PathSegment; N]: tinyvec::Array<Item = PathSegment>,
{
    segments: ArrayVec<[PathSegment; N]>,
}

impl<const N: usize> Path<N>
where
    [PathSegment; N]: tinyvec::Array<Item = PathSegment>,
{
    pub fn new() -> Self {
        Path {
            segments: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.len() == 0
    }

    pub fn segments(&self) -> slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    pub fn push(&mut self, segment: PathSegment) -> bool {
        if self.segments.len() < self.segments.capacity() {
            self.segments.push(segment);
            true
        } else {
            false
        }
    }

    pub fn push_move(&mut self, point: Point) -> bool {
        self.push(PathSegment::Move(point))
    }

    pub fn push_cubic(&mut self, curve: CubicBezier) -> bool {
        self.push(curve.into())
    }

    /// Return the bounding box across all segments, the element-wise min/max
    /// fold of the per-segment boxes. `Move` segments draw nothing and are
    /// skipped; None if no segment drew anything.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bounds = BoundingBox::empty();
        let mut drawn = false;
        for segment in self.segments.iter() {
            if let Some(segment_bounds) = segment.bounding_box() {
                bounds = bounds.union(&segment_bounds);
                drawn = true;
            }
        }
        if drawn {
            Some(bounds)
        } else {
            None
        }
    }
}

impl<const N: usize> Default for Path<N>
where
    [PathSegment; N]: tinyvec::Array<Item = PathSegment>,
{
    fn default() -> Self {
        Self::new()
    }
}
