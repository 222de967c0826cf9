//! Linear extrusion of regions into prisms.

use ashlar_kernel_math::{Point3, Vec3};
use ashlar_kernel_mesh::{Polygon, Solid};

use crate::region::Region2;
use crate::triangulate::ear_clip;

/// Extrude a region along +Z by `height`, base in the XY plane.
pub fn extrude_linear(region: &Region2, height: f64) -> Solid {
    prism(
        region,
        Point3::origin(),
        Vec3::x(),
        Vec3::y(),
        Vec3::z(),
        height,
    )
}

/// Sweep a region along an arbitrary straight direction.
///
/// The region's local X/Y map onto `u`/`v` from `origin`; the sweep
/// runs `length` along `dir`. `(u, v, dir)` must form a right-handed
/// basis for outward facet windings.
pub fn prism(
    region: &Region2,
    origin: Point3,
    u: Vec3,
    v: Vec3,
    dir: Vec3,
    length: f64,
) -> Solid {
    let map = |px: f64, py: f64| origin + u * px + v * py;
    let offset = dir * length;
    let pts = region.points();
    let n = pts.len();

    let mut polygons: Vec<Polygon> = Vec::with_capacity(n + 2 * (n - 2));

    // Side walls: CCW boundary cross sweep direction faces outward.
    for i in 0..n {
        let j = (i + 1) % n;
        let a = map(pts[i].x, pts[i].y);
        let b = map(pts[j].x, pts[j].y);
        polygons.extend(Polygon::new(vec![a, b, b + offset, a + offset]));
    }

    // Caps: bottom winds against (u x v), top with it.
    for t in ear_clip(pts) {
        let [i0, i1, i2] = t;
        let (a, b, c) = (
            map(pts[i0].x, pts[i0].y),
            map(pts[i1].x, pts[i1].y),
            map(pts[i2].x, pts[i2].y),
        );
        polygons.extend(Polygon::new(vec![c, b, a]));
        polygons.extend(Polygon::new(vec![a + offset, b + offset, c + offset]));
    }

    Solid::from_polygons(polygons)
}
