#[allow(unused_imports)]
use num_traits::Float;
use tinyvec::ArrayVec;

use super::{BoundingBox, NativeFloat, Point, EPSILON};

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  B(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub(crate) start: Point,
    pub(crate) ctrl1: Point,
    pub(crate) ctrl2: Point,
    pub(crate) end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial.
    /// At t=0 and t=1 this returns the endpoints exactly.
    pub fn eval(&self, t: NativeFloat) -> Point {
        let one_t = 1.0 - t;
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (3.0 * one_t * one_t * t)
            + self.ctrl2 * (3.0 * one_t * t * t)
            + self.end * (t * t * t)
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm.
    pub fn eval_casteljau(&self, t: NativeFloat) -> Point {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Return the exact axis-aligned bounding box of the curve.
    ///
    /// Candidate parameters are the curve endpoints (t=0, t=1) plus every real
    /// root of the derivative on either axis that falls into [0, 1]; the curve
    /// is evaluated on both axes at every candidate and the box is the min/max
    /// of the evaluated coordinates. Intermediate control points can't form a
    /// boundary, so the box is tight up to floating point rounding. Total over
    /// finite inputs; non-finite coordinates propagate per IEEE-754.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut candidates: ArrayVec<[NativeFloat; 6]> = ArrayVec::new();
        candidates.push(0.0);
        candidates.push(1.0);
        candidates.extend(derivative_roots(
            self.start.x,
            self.ctrl1.x,
            self.ctrl2.x,
            self.end.x,
        ));
        candidates.extend(derivative_roots(
            self.start.y,
            self.ctrl1.y,
            self.ctrl2.y,
            self.end.y,
        ));
        // only extrema inside the curve interval are meaningful
        candidates.retain(|t| (0.0..=1.0).contains(t));

        let mut bounds = BoundingBox::empty();
        for &t in candidates.iter() {
            bounds.expand(self.eval(t));
        }
        bounds
    }
}

/// Real roots of the curve derivative along one axis with control coordinates
/// v0..v3. The derivative is quadratic, a*t^2 + b*t + c with
/// ```a = 3(-v0 + 3v1 - 3v2 + v3),  b = 6(v0 - 2v1 + v2),  c = 3(v1 - v0)```
/// Roots are returned unfiltered; callers clip to the curve interval.
fn derivative_roots(
    v0: NativeFloat,
    v1: NativeFloat,
    v2: NativeFloat,
    v3: NativeFloat,
) -> ArrayVec<[NativeFloat; 2]> {
    let mut roots = ArrayVec::new();

    let a = 3.0 * (-v0 + 3.0 * v1 - 3.0 * v2 + v3);
    let b = 6.0 * (v0 - 2.0 * v1 + v2);
    let c = 3.0 * (v1 - v0);

    // degenerates to a linear derivative (or a constant one with no root)
    if a.abs() < EPSILON {
        if b.abs() > EPSILON {
            roots.push(-c / b);
        }
        return roots;
    }

    let delta = b * b - 4.0 * a * c;
    if delta >= 0.0 {
        let sqrt_delta = delta.sqrt();
        roots.push((-b + sqrt_delta) / (2.0 * a));
        roots.push((-b - sqrt_delta) / (2.0 * a));
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    // First curve of the analyzed outline, large enough to exercise extrema
    // on both axes away from the endpoints.
    fn sample_curve() -> CubicBezier {
        CubicBezier::new(
            Point::new(29.157, 7.334),
            Point::new(19.849, -2.873),
            Point::new(5.314, 6.426),
            Point::new(1.491, 29.737),
        )
    }

    #[test]
    fn eval_equivalence_casteljau() {
        // both eval methods should agree for well conditioned inputs
        let bezier = CubicBezier::new(
            Point::new(0.0, 1.77),
            Point::new(1.1, -1.0),
            Point::new(4.3, 3.0),
            Point::new(3.2, -4.0),
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as NativeFloat * 1.0 / (nsteps as NativeFloat);
            let err = bezier.eval(t) - bezier.eval_casteljau(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn bounding_box_contains_samples() {
        // the box must contain every sampled curve point, and the sampled
        // extrema must come close to the box border (tightness)
        let bezier = sample_curve();
        let bounds = bezier.bounding_box();

        let mut sampled = BoundingBox::empty();
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as NativeFloat * 1.0 / (nsteps as NativeFloat);
            let p = bezier.eval_casteljau(t);
            assert!(bounds.min_x - 1e-6 <= p.x && p.x <= bounds.max_x + 1e-6);
            assert!(bounds.min_y - 1e-6 <= p.y && p.y <= bounds.max_y + 1e-6);
            sampled.expand(p);
        }

        // a 1e-3 grid leaves only a tiny sliver near a smooth extremum
        assert!((bounds.min_x - sampled.min_x).abs() < 1e-3);
        assert!((bounds.max_x - sampled.max_x).abs() < 1e-3);
        assert!((bounds.min_y - sampled.min_y).abs() < 1e-3);
        assert!((bounds.max_y - sampled.max_y).abs() < 1e-3);
    }

    #[test]
    fn bounding_box_reference_values() {
        // extrema derived independently by solving the derivative quadratics
        let bounds = sample_curve().bounding_box();

        assert!((bounds.min_x - 1.491).abs() < 1e-6);
        assert!((bounds.max_x - 29.157).abs() < 1e-6);
        assert!((bounds.min_y - 3.223924187599).abs() < 1e-6);
        assert!((bounds.max_y - 29.737).abs() < 1e-6);
    }

    #[test]
    fn bounding_box_contains_endpoints() {
        let bezier = sample_curve();
        let bounds = bezier.bounding_box();

        assert!(bounds.contains(bezier.start));
        assert!(bounds.contains(bezier.end));
    }

    #[test]
    fn bounding_box_interior_extremum_exceeds_endpoints() {
        // second curve of the analyzed outline: its topmost point lies at an
        // interior parameter, slightly above either endpoint
        let bezier = CubicBezier::new(
            Point::new(1.491, 29.737),
            Point::new(1.525, 29.74),
            Point::new(8.008, 21.517),
            Point::new(8.021, 21.457),
        );
        let bounds = bezier.bounding_box();

        assert!(bounds.max_y > bezier.start.y);
        assert!(bounds.max_y > bezier.end.y);
        assert!((bounds.max_y - 29.737000820668).abs() < 1e-6);
    }

    #[test]
    fn bounding_box_degenerate_point() {
        let p = Point::new(2.0, 3.0);
        let bounds = CubicBezier::new(p, p, p, p).bounding_box();

        assert_eq!(bounds, BoundingBox::new(2.0, 2.0, 3.0, 3.0));
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn bounding_box_colinear_line() {
        // control points evenly spaced on a straight line degenerate the
        // curve to that line; the box is spanned by the endpoints exactly
        let bezier = CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        );

        assert_eq!(bezier.bounding_box(), BoundingBox::new(0.0, 3.0, 0.0, 3.0));
    }

    #[test]
    fn bounding_box_mirror_symmetry() {
        // reversing the control points and negating every coordinate mirrors
        // the curve through the origin, so the bounds negate (and swap roles)
        let bezier = sample_curve();
        let mirrored = CubicBezier::new(
            bezier.end * -1.0,
            bezier.ctrl2 * -1.0,
            bezier.ctrl1 * -1.0,
            bezier.start * -1.0,
        );

        let bounds = bezier.bounding_box();
        let mirrored_bounds = mirrored.bounding_box();

        assert!((mirrored_bounds.min_x + bounds.max_x).abs() < EPSILON);
        assert!((mirrored_bounds.max_x + bounds.min_x).abs() < EPSILON);
        assert!((mirrored_bounds.min_y + bounds.max_y).abs() < EPSILON);
        assert!((mirrored_bounds.max_y + bounds.min_y).abs() < EPSILON);
    }

    #[test]
    fn bounding_box_is_deterministic() {
        // pure function, no hidden state: repeated calls are bit-identical
        let bezier = sample_curve();

        assert_eq!(bezier.bounding_box(), bezier.bounding_box());
    }
}
