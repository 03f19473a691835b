//! Presentation layer: derived box metrics and the console analysis report.
//!
//! Numeric computation stays in the curve and path types; this module only
//! consumes computed boxes. Output goes through `core::fmt::Write` so the
//! library itself needs neither `std` nor an allocator.

use core::fmt::{self, Write};

use super::{BoundingBox, NativeFloat, Path, PathSegment};

/// Reference constant printed for visual comparison of the aspect ratios.
pub const GOLDEN_RATIO: NativeFloat = 1.61803398875;

/// Summary statistics of a bounding box.
///
/// A zero height (or width) yields an infinite or NaN aspect ratio which is
/// propagated as-is per IEEE-754 rather than trapped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxMetrics {
    pub width: NativeFloat,
    pub height: NativeFloat,
    pub aspect_wh: NativeFloat,
    pub aspect_hw: NativeFloat,
}

impl BoxMetrics {
    pub fn of(bounds: &BoundingBox) -> Self {
        let width = bounds.width();
        let height = bounds.height();
        BoxMetrics {
            width,
            height,
            aspect_wh: width / height,
            aspect_hw: height / width,
        }
    }
}

/// Write the per-segment and aggregate analysis of `path` to `out`.
///
/// Prints each curve's control points and bounds, then the total box, its
/// metrics and the golden ratio for reference. The prose layout is
/// informational only; the numeric values are what matters.
pub fn write_analysis<W, const N: usize>(out: &mut W, path: &Path<N>) -> fmt::Result
where
    W: Write,
    [PathSegment; N]: tinyvec::Array<Item = PathSegment>,
{
    writeln!(out, "Segments Analysis:")?;
    for segment in path.segments() {
        match segment {
            PathSegment::Move(p) => {
                writeln!(out, "  Move to: ({}, {})", p.x, p.y)?;
            }
            PathSegment::Cubic(curve) => {
                let bounds = curve.bounding_box();
                writeln!(
                    out,
                    "  Segment: [({}, {}), ({}, {}), ({}, {}), ({}, {})]",
                    curve.start.x,
                    curve.start.y,
                    curve.ctrl1.x,
                    curve.ctrl1.y,
                    curve.ctrl2.x,
                    curve.ctrl2.y,
                    curve.end.x,
                    curve.end.y,
                )?;
                write_bounds(out, "    Bounds: ", &bounds)?;
            }
        }
    }
    writeln!(out, "--------------------")?;

    match path.bounding_box() {
        Some(total) => {
            let metrics = BoxMetrics::of(&total);
            write_bounds(out, "Total Bounding Box: ", &total)?;
            writeln!(out, "Width: {:.4}", metrics.width)?;
            writeln!(out, "Height: {:.4}", metrics.height)?;
            writeln!(out, "Aspect Ratio (W/H): {:.4}", metrics.aspect_wh)?;
            writeln!(out, "Aspect Ratio (H/W): {:.4}", metrics.aspect_hw)?;
        }
        None => {
            writeln!(out, "Total Bounding Box: none (no curve segments)")?;
        }
    }
    writeln!(out, "Golden Ratio (phi): {:.4}", GOLDEN_RATIO)
}

fn write_bounds<W: Write>(out: &mut W, label: &str, bounds: &BoundingBox) -> fmt::Result {
    writeln!(
        out,
        "{}x[{:.4}, {:.4}] y[{:.4}, {:.4}]",
        label, bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
    )
}
