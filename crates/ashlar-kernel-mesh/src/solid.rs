//! The `Solid` value type: transforms, alignment, and measurement.

use ashlar_kernel_math::{Point3, Transform, Vec3};

use crate::polygon::Polygon;

/// Per-axis alignment mode for [`Solid::align`].
///
/// Each axis repositions the chosen bounding-box extremum (or midpoint)
/// to zero; `Keep` leaves the axis untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    /// Move so the bounding-box minimum sits at zero.
    Min,
    /// Move so the bounding-box center sits at zero.
    Center,
    /// Move so the bounding-box maximum sits at zero.
    Max,
    /// Leave this axis unchanged.
    #[default]
    Keep,
}

/// An immutable polygon-soup solid.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Build a solid from facets. The caller guarantees outward windings.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// The facets of this solid.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Consume the solid, yielding its facets.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Concatenate disjoint solids into one, without boolean work.
    pub fn merged<I: IntoIterator<Item = Solid>>(parts: I) -> Self {
        let mut polygons = Vec::new();
        for part in parts {
            polygons.extend(part.polygons);
        }
        Self { polygons }
    }

    /// True when the solid has no facets.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Apply an affine transform, returning a new solid.
    ///
    /// Planes are re-derived from the mapped vertices. When the
    /// transform reverses orientation (mirrors), windings are flipped so
    /// facets keep facing outward. Facets degenerated by the transform
    /// are dropped.
    pub fn transformed(&self, t: &Transform) -> Self {
        let flip = t.flips_orientation();
        let polygons = self
            .polygons
            .iter()
            .filter_map(|poly| {
                let mut verts: Vec<Point3> =
                    poly.vertices.iter().map(|v| t.apply_point(v)).collect();
                if flip {
                    verts.reverse();
                }
                Polygon::new(verts)
            })
            .collect();
        Self { polygons }
    }

    /// Translate by `v`.
    pub fn translate(&self, v: Vec3) -> Self {
        self.transformed(&Transform::translation(v))
    }

    /// Rotate about the world X, Y, then Z axes by `angles` radians.
    pub fn rotate_xyz(&self, angles: Vec3) -> Self {
        self.transformed(&Transform::rotation_xyz(angles))
    }

    /// Mirror across the plane through `origin` with the given normal.
    pub fn mirror(&self, normal: Vec3, origin: Point3) -> Self {
        self.transformed(&Transform::reflection(normal, origin))
    }

    /// Axis-aligned bounding box, `None` for an empty solid.
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let mut verts = self.polygons.iter().flat_map(|p| p.vertices.iter());
        let first = *verts.next()?;
        let mut min = first;
        let mut max = first;
        for v in verts {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        Some((min, max))
    }

    /// Bounding-box dimensions; zero for an empty solid.
    pub fn dimensions(&self) -> Vec3 {
        match self.bounding_box() {
            Some((min, max)) => max - min,
            None => Vec3::zeros(),
        }
    }

    /// Reposition per-axis bounding-box extrema to zero.
    pub fn align(&self, modes: [AlignMode; 3]) -> Self {
        let Some((min, max)) = self.bounding_box() else {
            return self.clone();
        };
        let mut offset = Vec3::zeros();
        for i in 0..3 {
            offset[i] = match modes[i] {
                AlignMode::Min => -min[i],
                AlignMode::Center => -(min[i] + max[i]) / 2.0,
                AlignMode::Max => -max[i],
                AlignMode::Keep => 0.0,
            };
        }
        self.translate(offset)
    }

    /// Enclosed volume via the divergence theorem.
    ///
    /// Each facet is fan-triangulated and contributes the signed volume
    /// of its origin tetrahedra. Exact for watertight solids with
    /// outward windings; internal facet pairs with opposite orientation
    /// cancel.
    pub fn volume(&self) -> f64 {
        let mut six_v = 0.0;
        for poly in &self.polygons {
            let v0 = poly.vertices[0].coords;
            for i in 1..poly.vertices.len() - 1 {
                let v1 = poly.vertices[i].coords;
                let v2 = poly.vertices[i + 1].coords;
                six_v += v0.dot(&v1.cross(&v2));
            }
        }
        six_v / 6.0
    }
}
