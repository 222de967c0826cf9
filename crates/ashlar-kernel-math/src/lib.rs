#![warn(missing_docs)]

//! Math types for the ashlar geometry kernel.
//!
//! Thin wrappers around nalgebra providing the types the solid builders
//! work with: 2D/3D points and vectors, affine transforms (including
//! plane reflections), and tolerance constants.

use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance below which two points are considered coincident.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance set.
    pub const DEFAULT: Tolerance = Tolerance { linear: 1e-9 };
}

/// A 4x4 affine transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `v`.
    pub fn translation(v: Vec3) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = v.x;
        m[(1, 3)] = v.y;
        m[(2, 3)] = v.z;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Tait-Bryan rotation: X by `angles.x`, then Y by `angles.y`, then Z
    /// by `angles.z`, all about the fixed world axes.
    pub fn rotation_xyz(angles: Vec3) -> Self {
        Self::rotation_x(angles.x)
            .then(&Self::rotation_y(angles.y))
            .then(&Self::rotation_z(angles.z))
    }

    /// Reflection across the plane through `origin` with the given normal.
    ///
    /// The normal does not need to be unit length. Reflections reverse
    /// orientation; see [`Transform::flips_orientation`].
    pub fn reflection(normal: Vec3, origin: Point3) -> Self {
        let n = normal.normalize();
        // Householder matrix I - 2nn^T, conjugated by the origin offset.
        let mut m = Matrix4::identity();
        for i in 0..3 {
            for j in 0..3 {
                m[(i, j)] = if i == j { 1.0 } else { 0.0 } - 2.0 * n[i] * n[j];
            }
        }
        let d = n.dot(&origin.coords);
        m[(0, 3)] = 2.0 * d * n.x;
        m[(1, 3)] = 2.0 * d * n.y;
        m[(2, 3)] = 2.0 * d * n.z;
        Self { matrix: m }
    }

    /// Compose: apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// True when the linear part has negative determinant (mirrors and
    /// other orientation-reversing maps). Polygon windings must be
    /// reversed after applying such a transform.
    pub fn flips_orientation(&self) -> bool {
        self.matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
