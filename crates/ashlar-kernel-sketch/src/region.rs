//! Closed, filled planar regions.

use ashlar_kernel_math::{Point2, Vec2};
use ashlar_kernel_mesh::AlignMode;

use crate::path::Path2;
use crate::SketchError;

/// A closed, simple polygon with counter-clockwise winding.
///
/// Construction normalizes the winding, so downstream extrusion and
/// clipping can rely on it.
#[derive(Debug, Clone)]
pub struct Region2 {
    points: Vec<Point2>,
}

impl Region2 {
    /// Build a region from an ordered point loop.
    ///
    /// Clockwise input is reversed; loops with fewer than three points
    /// or zero enclosed area are rejected.
    pub fn from_points(points: Vec<Point2>) -> Result<Self, SketchError> {
        if points.len() < 3 {
            return Err(SketchError::TooFewPoints(points.len()));
        }
        let signed = signed_area(&points);
        if signed.abs() < 1e-12 {
            return Err(SketchError::DegenerateRegion);
        }
        let mut points = points;
        if signed < 0.0 {
            points.reverse();
        }
        Ok(Self { points })
    }

    /// Fill a closed path into a region.
    pub fn from_path(path: &Path2) -> Result<Self, SketchError> {
        Self::from_points(path.to_points().to_vec())
    }

    /// Axis-aligned rectangle of the given size, centered at the origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, SketchError> {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_points(vec![
            Point2::new(-hw, -hh),
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ])
    }

    /// Side-angle-side triangle: sides `a` and `b` with the included
    /// angle between them, first side along +X from the origin.
    pub fn triangle_sas(a: f64, included_angle: f64, b: f64) -> Result<Self, SketchError> {
        Self::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(a, 0.0),
            Point2::new(
                a - b * included_angle.cos(),
                b * included_angle.sin(),
            ),
        ])
    }

    /// The boundary loop, counter-clockwise.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Enclosed area (always positive).
    pub fn area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Axis-aligned bounding box.
    pub fn bounding_box(&self) -> (Point2, Point2) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Bounding-box dimensions (width, height).
    pub fn dimensions(&self) -> Vec2 {
        let (min, max) = self.bounding_box();
        max - min
    }

    /// Translate by `v`.
    pub fn translate(&self, v: Vec2) -> Self {
        Self {
            points: self.points.iter().map(|p| p + v).collect(),
        }
    }

    /// Mirror across the line through `origin` with the given normal.
    ///
    /// The winding is re-normalized to counter-clockwise afterwards.
    pub fn mirror(&self, normal: Vec2, origin: Point2) -> Self {
        let n = normal.normalize();
        let mut points: Vec<Point2> = self
            .points
            .iter()
            .map(|p| p - 2.0 * (p - origin).dot(&n) * n)
            .collect();
        points.reverse();
        Self { points }
    }

    /// Reposition per-axis bounding-box extrema to zero.
    pub fn align(&self, modes: [AlignMode; 2]) -> Self {
        let (min, max) = self.bounding_box();
        let pick = |mode: AlignMode, lo: f64, hi: f64| match mode {
            AlignMode::Min => -lo,
            AlignMode::Center => -(lo + hi) / 2.0,
            AlignMode::Max => -hi,
            AlignMode::Keep => 0.0,
        };
        self.translate(Vec2::new(
            pick(modes[0], min.x, max.x),
            pick(modes[1], min.y, max.y),
        ))
    }

    /// Intersection with `clip` via Sutherland-Hodgman clipping.
    ///
    /// `clip` must be convex; `self` may be any simple polygon. Fails
    /// when the overlap is empty or degenerate.
    pub fn intersection(&self, clip: &Region2) -> Result<Self, SketchError> {
        let mut output = self.points.clone();
        let m = clip.points.len();
        for i in 0..m {
            let a = clip.points[i];
            let b = clip.points[(i + 1) % m];
            let input = std::mem::take(&mut output);
            if input.is_empty() {
                break;
            }
            // Keep points on the left of the CCW clip edge a->b.
            let inside = |p: &Point2| cross2(&(b - a), &(p - a)) >= -1e-12;
            let n = input.len();
            for j in 0..n {
                let cur = input[j];
                let next = input[(j + 1) % n];
                let cur_in = inside(&cur);
                let next_in = inside(&next);
                if cur_in {
                    output.push(cur);
                }
                if cur_in != next_in {
                    if let Some(x) = line_intersection(&cur, &next, &a, &b) {
                        output.push(x);
                    }
                }
            }
        }
        Self::from_points(output)
    }
}

fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

fn cross2(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

fn line_intersection(p1: &Point2, p2: &Point2, a: &Point2, b: &Point2) -> Option<Point2> {
    let r = p2 - p1;
    let s = b - a;
    let denom = cross2(&r, &s);
    if denom.abs() < 1e-15 {
        return None;
    }
    let t = cross2(&(a - p1), &s) / denom;
    Some(p1 + r * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rectangle_area_and_dimensions() {
        let r = Region2::rectangle(4.0, 2.0).unwrap();
        assert!((r.area() - 8.0).abs() < 1e-12);
        assert!((r.dimensions() - Vec2::new(4.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn test_winding_normalized_to_ccw() {
        // Clockwise input.
        let r = Region2::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ])
        .unwrap();
        assert!(signed_area(r.points()) > 0.0);
    }

    #[test]
    fn test_triangle_sas_right_angle() {
        let t = Region2::triangle_sas(3.0, PI / 2.0, 4.0).unwrap();
        assert!((t.area() - 6.0).abs() < 1e-12);
        assert!((t.dimensions() - Vec2::new(3.0, 4.0)).norm() < 1e-9);
    }

    #[test]
    fn test_mirror_preserves_area() {
        let t = Region2::triangle_sas(3.0, PI / 2.0, 4.0).unwrap();
        let m = t.mirror(Vec2::new(1.0, 0.0), Point2::new(1.0, 0.0));
        assert!((m.area() - t.area()).abs() < 1e-12);
        let (min, max) = m.bounding_box();
        // x range [0,3] reflects about x=1 to [-1,2].
        assert!((min.x + 1.0).abs() < 1e-12 && (max.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersection_of_offset_squares() {
        let a = Region2::rectangle(2.0, 2.0).unwrap();
        let b = a.translate(Vec2::new(1.0, 1.0));
        let lens = a.intersection(&b).unwrap();
        assert!((lens.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_intersection_fails() {
        let a = Region2::rectangle(1.0, 1.0).unwrap();
        let b = a.translate(Vec2::new(5.0, 0.0));
        assert!(a.intersection(&b).is_err());
    }

    #[test]
    fn test_align_center_min() {
        let r = Region2::rectangle(2.0, 2.0)
            .unwrap()
            .translate(Vec2::new(7.0, 7.0))
            .align([AlignMode::Center, AlignMode::Min]);
        let (min, max) = r.bounding_box();
        assert!((min.x + 1.0).abs() < 1e-12 && (max.x - 1.0).abs() < 1e-12);
        assert!(min.y.abs() < 1e-12);
    }
}
