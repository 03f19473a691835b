use super::{NativeFloat, Point};

/// Smallest axis-aligned rectangle containing a curve or a set of curves.
///
/// Whenever at least one point has been folded in, `min_x <= max_x` and
/// `min_y <= max_y` hold. The [`empty`](BoundingBox::empty) value inverts
/// the infinities so it acts as the identity of [`union`](BoundingBox::union).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min_x: NativeFloat,
    pub max_x: NativeFloat,
    pub min_y: NativeFloat,
    pub max_y: NativeFloat,
}

impl BoundingBox {
    pub fn new(
        min_x: NativeFloat,
        max_x: NativeFloat,
        min_y: NativeFloat,
        max_y: NativeFloat,
    ) -> Self {
        BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// The box containing nothing: every fold replaces the infinities.
    pub fn empty() -> Self {
        BoundingBox {
            min_x: NativeFloat::INFINITY,
            max_x: NativeFloat::NEG_INFINITY,
            min_y: NativeFloat::INFINITY,
            max_y: NativeFloat::NEG_INFINITY,
        }
    }

    /// Grow the box (in place) to contain `p`.
    pub fn expand(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Element-wise min/max fold of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> NativeFloat {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> NativeFloat {
        self.max_y - self.min_y
    }

    /// True if `p` lies inside or on the border of the box.
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }
}
