//! Planar facets and plane-side splitting.
//!
//! The split routine follows the csg.js classification scheme: each
//! vertex is tested against the plane with a fixed epsilon, the polygon
//! is binned as coplanar/front/back/spanning, and spanning polygons are
//! cut along the plane with interpolated vertices.

use ashlar_kernel_math::{Point3, Vec3};

/// Distance-from-plane epsilon used for vertex classification.
pub const PLANE_EPSILON: f64 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Which side of a plane a polygon lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSide {
    /// Entirely within the plane.
    Coplanar,
    /// Entirely on the normal side.
    Front,
    /// Entirely on the anti-normal side.
    Back,
    /// Crosses the plane.
    Spanning,
}

/// An oriented plane in Hessian normal form (`normal · p = w`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance from the origin along the normal.
    pub w: f64,
}

impl Plane {
    /// Plane through three points, `None` if they are collinear.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Option<Plane> {
        let n = (b - a).cross(&(c - a));
        let len = n.norm();
        if len < 1e-12 {
            return None;
        }
        let normal = n / len;
        Some(Plane {
            normal,
            w: normal.dot(&a.coords),
        })
    }

    /// Reverse the plane orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance of `p` from the plane.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.w
    }
}

/// A planar facet with three or more vertices, wound counter-clockwise
/// when viewed from the outside of its solid.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertex loop.
    pub vertices: Vec<Point3>,
    /// Supporting plane; normal points out of the solid.
    pub plane: Plane,
}

impl Polygon {
    /// Build a polygon from a vertex loop. Returns `None` for loops with
    /// fewer than three vertices or no well-defined plane.
    ///
    /// The plane is derived with Newell's method so nearly-collinear
    /// leading vertices do not produce a bogus normal.
    pub fn new(vertices: Vec<Point3>) -> Option<Polygon> {
        if vertices.len() < 3 {
            return None;
        }
        let mut n = Vec3::zeros();
        for i in 0..vertices.len() {
            let a = &vertices[i];
            let b = &vertices[(i + 1) % vertices.len()];
            n.x += (a.y - b.y) * (a.z + b.z);
            n.y += (a.z - b.z) * (a.x + b.x);
            n.z += (a.x - b.x) * (a.y + b.y);
        }
        let len = n.norm();
        if len < 1e-12 {
            return None;
        }
        let normal = n / len;
        let w = normal.dot(&vertices[0].coords);
        Some(Polygon {
            vertices,
            plane: Plane { normal, w },
        })
    }

    /// Reverse the winding and the plane orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classify this polygon against `plane`.
    pub fn side_of(&self, plane: &Plane) -> PolygonSide {
        let mut polygon_type = COPLANAR;
        for v in &self.vertices {
            let t = plane.signed_distance(v);
            polygon_type |= if t < -PLANE_EPSILON {
                BACK
            } else if t > PLANE_EPSILON {
                FRONT
            } else {
                COPLANAR
            };
        }
        match polygon_type {
            FRONT => PolygonSide::Front,
            BACK => PolygonSide::Back,
            SPANNING => PolygonSide::Spanning,
            _ => PolygonSide::Coplanar,
        }
    }
}

/// Split `polygon` by `plane`, distributing the pieces into the four
/// output bins. Coplanar polygons go front or back by normal agreement.
pub fn split_polygon(
    plane: &Plane,
    polygon: &Polygon,
    coplanar_front: &mut Vec<Polygon>,
    coplanar_back: &mut Vec<Polygon>,
    front: &mut Vec<Polygon>,
    back: &mut Vec<Polygon>,
) {
    match polygon.side_of(plane) {
        PolygonSide::Coplanar => {
            if plane.normal.dot(&polygon.plane.normal) > 0.0 {
                coplanar_front.push(polygon.clone());
            } else {
                coplanar_back.push(polygon.clone());
            }
        }
        PolygonSide::Front => front.push(polygon.clone()),
        PolygonSide::Back => back.push(polygon.clone()),
        PolygonSide::Spanning => {
            let n = polygon.vertices.len();
            let mut f: Vec<Point3> = Vec::with_capacity(n + 1);
            let mut b: Vec<Point3> = Vec::with_capacity(n + 1);
            for i in 0..n {
                let j = (i + 1) % n;
                let vi = polygon.vertices[i];
                let vj = polygon.vertices[j];
                let ti = plane.signed_distance(&vi);
                let tj = plane.signed_distance(&vj);
                if ti >= -PLANE_EPSILON {
                    f.push(vi);
                }
                if ti <= PLANE_EPSILON {
                    b.push(vi);
                }
                if (ti < -PLANE_EPSILON && tj > PLANE_EPSILON)
                    || (ti > PLANE_EPSILON && tj < -PLANE_EPSILON)
                {
                    let t = ti / (ti - tj);
                    let v = vi + (vj - vi) * t;
                    f.push(v);
                    b.push(v);
                }
            }
            if let Some(p) = Polygon::new(f) {
                front.push(p);
            }
            if let Some(p) = Polygon::new(b) {
                back.push(p);
            }
        }
    }
}
