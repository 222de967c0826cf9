#![warn(missing_docs)]

//! Polygon-soup solid representation for the ashlar kernel.
//!
//! A [`Solid`] is an immutable bag of planar facets with outward-facing
//! windings. Every operation (transform, align, boolean downstream)
//! returns a new value. This is the 3D data model the arch and roof
//! builders compose; watertightness is the producer's responsibility and
//! is never re-validated here.

mod polygon;
mod primitives;
mod solid;
mod stl;

pub use polygon::{split_polygon, Plane, Polygon, PolygonSide, PLANE_EPSILON};
pub use primitives::cuboid;
pub use solid::{AlignMode, Solid};
pub use stl::write_stl;
