#![warn(missing_docs)]

//! ashlar — parametric architectural solids.
//!
//! Builders that derive arches and roofs from numeric design parameters
//! (radii, spans, pitch angles, wall thickness, trim dimensions) and,
//! optionally, a 2D cross-section profile. Results are either flat 2D
//! regions for downstream extrusion or fully composed 3D solids.
//!
//! Every builder is a pure pipeline over immutable values: parameters →
//! derived scalars → primitive shapes → transforms → booleans → final
//! alignment. Nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use ashlar::arches::{one_pt_arch, ArchParams, ArchShape};
//!
//! let params = ArchParams { arc_radius: 5.0, arch_width: 0.0 };
//! let arch = one_pt_arch(&params, None).unwrap();
//! let ArchShape::Region(region) = arch else { unreachable!() };
//! // Half-disc of radius 5, as a 48-segment polygon.
//! assert!((region.area() - std::f64::consts::PI * 12.5).abs() < 0.1);
//! ```

pub mod arches;
pub mod roofs;

use thiserror::Error;

/// Errors surfaced by the builders.
///
/// Builders perform no parameter validation of their own; whatever the
/// geometry kernel or trim provider rejects comes through unmodified.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A sketch/kernel operation failed.
    #[error(transparent)]
    Sketch(#[from] ashlar_kernel_sketch::SketchError),

    /// The trim provider failed.
    #[error(transparent)]
    Trim(#[from] ashlar_trim::TrimError),
}
