//! Revolve operation: sweep a region about the +Z axis.

use std::f64::consts::PI;

use ashlar_kernel_math::Point3;
use ashlar_kernel_mesh::{Polygon, Solid};

use crate::region::Region2;
use crate::triangulate::ear_clip;
use crate::SketchError;

/// Revolve a CCW profile about the +Z axis through `angle` radians,
/// subdividing the sweep into `segments` steps.
///
/// Profile point `(x, y)` at sweep angle θ maps to
/// `(x·cosθ, x·sinθ, y)`: local X is the radial offset, local Y the
/// height. Partial sweeps are closed with flat start/end caps.
///
/// # Errors
///
/// - `InvalidAngle` if `angle` is not in `(0, 2π]`
/// - `ProfileCrossesAxis` if any profile vertex has `x < 0`
pub fn revolve(region: &Region2, angle: f64, segments: u32) -> Result<Solid, SketchError> {
    if angle <= 0.0 || angle > 2.0 * PI + 1e-9 {
        return Err(SketchError::InvalidAngle(angle));
    }
    if region.points().iter().any(|p| p.x < -1e-9) {
        return Err(SketchError::ProfileCrossesAxis);
    }
    let segments = segments.max(3);
    let is_full = (angle - 2.0 * PI).abs() < 1e-9;

    let pts = region.points();
    let n = pts.len();
    let place = |i: usize, step: u32| -> Point3 {
        let theta = angle * f64::from(step) / f64::from(segments);
        let (s, c) = theta.sin_cos();
        Point3::new(pts[i].x * c, pts[i].x * s, pts[i].y)
    };

    let mut polygons: Vec<Polygon> = Vec::new();

    // Lateral faces: one quad per profile edge per sweep step. Edges on
    // the axis collapse; Polygon::new drops what degenerates.
    for i in 0..n {
        let j = (i + 1) % n;
        for step in 0..segments {
            let quad = vec![
                place(i, step),
                place(i, step + 1),
                place(j, step + 1),
                place(j, step),
            ];
            polygons.extend(Polygon::new(dedup_loop(quad)));
        }
    }

    // Caps close a partial sweep. At θ=0 the mapped CCW triangulation
    // already faces -Y (outward); the far cap is rotated and reversed.
    if !is_full {
        let tris = ear_clip(pts);
        for t in &tris {
            let [i0, i1, i2] = *t;
            polygons.extend(Polygon::new(vec![
                place(i0, 0),
                place(i1, 0),
                place(i2, 0),
            ]));
            polygons.extend(Polygon::new(vec![
                place(i2, segments),
                place(i1, segments),
                place(i0, segments),
            ]));
        }
    }

    Ok(Solid::from_polygons(polygons))
}

fn dedup_loop(mut verts: Vec<Point3>) -> Vec<Point3> {
    verts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if verts.len() > 1 {
        let first = verts[0];
        if (verts[verts.len() - 1] - first).norm() < 1e-12 {
            verts.pop();
        }
    }
    verts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashlar_kernel_math::Vec2;

    fn ngon_area_factor(segments: u32, angle: f64) -> f64 {
        // Polygonal approximation shrinks swept area by sin(d)/d per step.
        let d = angle / f64::from(segments);
        d.sin() / d
    }

    #[test]
    fn test_full_revolve_ring_volume() {
        // Rectangle x in [1,2], y in [0,1] swept 2π: washer,
        // V = π (R² - r²) h, discretized.
        let profile = Region2::rectangle(1.0, 1.0)
            .unwrap()
            .translate(Vec2::new(1.5, 0.5));
        let solid = revolve(&profile, 2.0 * PI, 64).unwrap();
        let expected = PI * (4.0 - 1.0); // h = 1
        let v = solid.volume();
        assert!(
            (v - expected).abs() / expected < 0.01,
            "expected ~{expected}, got {v}"
        );
    }

    #[test]
    fn test_half_revolve_is_half_volume() {
        let profile = Region2::rectangle(1.0, 1.0)
            .unwrap()
            .translate(Vec2::new(1.5, 0.5));
        let full = revolve(&profile, 2.0 * PI, 96).unwrap();
        let half = revolve(&profile, PI, 48).unwrap();
        assert!((half.volume() - full.volume() / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_half_revolve_stays_in_upper_half_plane() {
        let profile = Region2::rectangle(1.0, 1.0)
            .unwrap()
            .translate(Vec2::new(1.5, 0.5));
        let half = revolve(&profile, PI, 48).unwrap();
        let (min, max) = half.bounding_box().unwrap();
        assert!(min.y > -1e-9);
        assert!((max.x - 2.0).abs() < 1e-9 && (min.x + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_revolve_solid_disc() {
        // Square touching the axis: solid cylinder.
        let profile = Region2::rectangle(2.0, 1.0)
            .unwrap()
            .translate(Vec2::new(1.0, 0.5));
        let solid = revolve(&profile, 2.0 * PI, 64).unwrap();
        let expected = PI * 4.0 * ngon_area_factor(64, 2.0 * PI);
        let v = solid.volume();
        assert!((v - expected).abs() / expected < 0.01, "got {v}");
    }

    #[test]
    fn test_invalid_inputs() {
        let profile = Region2::rectangle(1.0, 1.0)
            .unwrap()
            .translate(Vec2::new(1.0, 0.0));
        assert!(matches!(
            revolve(&profile, 0.0, 16),
            Err(SketchError::InvalidAngle(_))
        ));
        assert!(matches!(
            revolve(&profile, 7.0, 16),
            Err(SketchError::InvalidAngle(_))
        ));
        let crossing = Region2::rectangle(2.0, 1.0).unwrap();
        assert!(matches!(
            revolve(&crossing, PI, 16),
            Err(SketchError::ProfileCrossesAxis)
        ));
    }
}
