//! Open and closed 2D polylines.

use ashlar_kernel_math::Point2;

use crate::SketchError;

/// A 2D polyline, open or closed.
#[derive(Debug, Clone)]
pub struct Path2 {
    points: Vec<Point2>,
    closed: bool,
}

impl Path2 {
    /// Build an open path from points.
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// The path's points in order.
    pub fn to_points(&self) -> &[Point2] {
        &self.points
    }

    /// Whether the path has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the path: the last point connects back to the first.
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }
}

/// Circular arc about the origin from `start_angle` to `end_angle`
/// (radians, counter-clockwise), subdividing the swept angle into
/// `segments` equal steps. Both endpoints are included.
///
/// Fails on a non-positive radius; this is the kernel-level fault that
/// unvalidated builder parameters propagate into.
pub fn arc(
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: u32,
) -> Result<Path2, SketchError> {
    if radius <= 0.0 {
        return Err(SketchError::NonPositiveRadius(radius));
    }
    let segments = segments.max(1);
    let sweep = end_angle - start_angle;
    let points = (0..=segments)
        .map(|i| {
            let theta = start_angle + sweep * f64::from(i) / f64::from(segments);
            Point2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    Ok(Path2::from_points(points))
}
