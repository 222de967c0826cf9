//! Solid primitives.

use ashlar_kernel_math::{Point3, Vec3};

use crate::polygon::Polygon;
use crate::solid::Solid;

/// Axis-aligned box of the given size, centered at the origin.
///
/// Six quad facets with outward normals, CCW when viewed from outside.
pub fn cuboid(size: Vec3) -> Solid {
    let h = size / 2.0;
    let v = |sx: f64, sy: f64, sz: f64| Point3::new(sx * h.x, sy * h.y, sz * h.z);

    let corners = [
        v(-1.0, -1.0, -1.0), // 0
        v(1.0, -1.0, -1.0),  // 1
        v(1.0, 1.0, -1.0),   // 2
        v(-1.0, 1.0, -1.0),  // 3
        v(-1.0, -1.0, 1.0),  // 4
        v(1.0, -1.0, 1.0),   // 5
        v(1.0, 1.0, 1.0),    // 6
        v(-1.0, 1.0, 1.0),   // 7
    ];

    // Faces: bottom, top, front (-y), back (+y), left (-x), right (+x).
    let faces: [[usize; 4]; 6] = [
        [0, 3, 2, 1],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [2, 3, 7, 6],
        [0, 4, 7, 3],
        [1, 2, 6, 5],
    ];

    let polygons = faces
        .iter()
        .filter_map(|f| Polygon::new(f.iter().map(|&i| corners[i]).collect()))
        .collect();
    Solid::from_polygons(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_normals_point_outward() {
        let c = cuboid(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(c.polygons().len(), 6);
        for poly in c.polygons() {
            // Facet centroid dotted with its normal must be positive for
            // an origin-centered convex solid with outward windings.
            let centroid: Vec3 = poly
                .vertices
                .iter()
                .map(|p| p.coords)
                .sum::<Vec3>()
                / poly.vertices.len() as f64;
            assert!(poly.plane.normal.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn test_degenerate_cuboid_is_flat() {
        let c = cuboid(Vec3::new(2.0, 2.0, 0.0));
        // Side faces collapse; only top/bottom survive plane derivation.
        assert!(c.polygons().len() < 6);
        assert!(c.volume().abs() < 1e-12);
    }
}
