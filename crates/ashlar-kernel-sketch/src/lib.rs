#![warn(missing_docs)]

//! Planar sketch operations for the ashlar kernel.
//!
//! Provides 2D paths and filled regions, plus the extrude and revolve
//! operations that lift them into polygon-soup solids.
//!
//! # Example
//!
//! ```
//! use ashlar_kernel_sketch::{Region2, extrude_linear};
//!
//! let profile = Region2::rectangle(4.0, 2.0).unwrap();
//! let slab = extrude_linear(&profile, 1.0);
//! assert!((slab.volume() - 8.0).abs() < 1e-9);
//! ```

mod extrude;
mod path;
mod region;
mod revolve;
mod triangulate;

pub use extrude::{extrude_linear, prism};
pub use path::{arc, Path2};
pub use region::Region2;
pub use revolve::revolve;
pub use triangulate::ear_clip;

use thiserror::Error;

/// Errors from sketch-based operations.
#[derive(Debug, Clone, Error)]
pub enum SketchError {
    /// Arc or circle radius is not strictly positive.
    #[error("non-positive radius: {0}")]
    NonPositiveRadius(f64),

    /// Too few points to form a region.
    #[error("region needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// The point loop encloses no area.
    #[error("degenerate region: enclosed area is zero")]
    DegenerateRegion,

    /// Revolution angle is invalid (must be in (0, 2π]).
    #[error("invalid revolution angle: {0} radians")]
    InvalidAngle(f64),

    /// A profile vertex lies on the negative side of the revolution axis.
    #[error("profile crosses the revolution axis")]
    ProfileCrossesAxis,
}
