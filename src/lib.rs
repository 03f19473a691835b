//! Exact axis-aligned bounding boxes for cubic Bézier curves and paths.
//!
//! The extrema of a cubic Bézier curve along a coordinate axis lie either at
//! the curve endpoints or at parameters where the derivative along that axis
//! vanishes. Since the derivative of a cubic is quadratic in t, those
//! parameters are available in closed form, which makes the resulting box
//! tight (up to floating point rounding) rather than an approximation from
//! sampling or from the control point hull.
//!
//! The crate provides the curve type itself ([`CubicBezier`]), a fixed
//! capacity [`Path`] of move/curve segments with an aggregate bounding box,
//! and a [`report`] module deriving box metrics for console output.
#![cfg_attr(not(test), no_std)]

mod bounding_box;
mod cubic_bezier;
mod path;
mod point;
mod segment;

pub mod report;

pub use bounding_box::BoundingBox;
pub use cubic_bezier::CubicBezier;
pub use path::Path;
pub use point::Point;
pub use segment::PathSegment;

/// The native float type of all coordinates.
pub type NativeFloat = f64;

/// Below this magnitude a polynomial coefficient is treated as zero when
/// classifying the derivative (quadratic vs. degenerate-linear vs. constant).
pub(crate) const EPSILON: NativeFloat = 1e-9;
