#![warn(missing_docs)]

//! Trim-family provider for architectural builders.
//!
//! A trim family is a named set of moulding cross-section profiles
//! parameterized by a unit depth/height, plus an assembler that turns a
//! profile into a rectangular-frame moulding solid. Roof builders pull
//! their rafter trim from here.

mod family;
mod moulding;

pub use family::{CrownSize, TrimCatalog, TrimFamily, TrimUnit};
pub use moulding::frame_moulding;

use thiserror::Error;

/// Errors from the trim provider.
#[derive(Debug, Clone, Error)]
pub enum TrimError {
    /// No family registered under the requested name.
    #[error("unknown trim family: {0}")]
    UnknownFamily(String),

    /// Profile construction failed (degenerate unit dimensions).
    #[error(transparent)]
    Sketch(#[from] ashlar_kernel_sketch::SketchError),
}
