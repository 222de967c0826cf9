//! Circle-based arch builders.
//!
//! Input 2D profiles must be centered at the origin. With a profile the
//! builders return a revolved 3D solid; without one they return the
//! flat arch outline as a filled region.

use std::f64::consts::{FRAC_PI_2, PI};

use ashlar_kernel_csg::{subtract, union};
use ashlar_kernel_math::{Point2, Point3, Vec2, Vec3};
use ashlar_kernel_mesh::{cuboid, AlignMode, Solid};
use ashlar_kernel_sketch::{arc, revolve, Region2};
use serde::{Deserialize, Serialize};

use crate::BuildError;

/// Angular tessellation for arch revolutions and outlines.
const ARCH_SEGMENTS: u32 = 48;

/// Arch design parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchParams {
    /// Arc radius.
    pub arc_radius: f64,
    /// Arch width; meaningful only for the two-centre variant.
    #[serde(default)]
    pub arch_width: f64,
}

/// An arch result: flat region (no profile given) or solid (profile
/// given).
#[derive(Debug, Clone)]
pub enum ArchShape {
    /// 2D arch outline for downstream extrusion.
    Region(Region2),
    /// Composed 3D arch solid.
    Solid(Solid),
}

impl ArchShape {
    /// The region, if this is a 2D result.
    pub fn as_region(&self) -> Option<&Region2> {
        match self {
            ArchShape::Region(r) => Some(r),
            ArchShape::Solid(_) => None,
        }
    }

    /// The solid, if this is a 3D result.
    pub fn as_solid(&self) -> Option<&Solid> {
        match self {
            ArchShape::Region(_) => None,
            ArchShape::Solid(s) => Some(s),
        }
    }
}

/// Semicircular arch outline: 48-segment arc from 0 to π, closed.
fn base_arch_region(arc_radius: f64) -> Result<Region2, BuildError> {
    let path = arc(arc_radius, 0.0, PI, ARCH_SEGMENTS)?.close();
    Ok(Region2::from_path(&path)?)
}

/// Stand a revolved arch upright and settle it on the ground plane:
/// centered in both horizontal axes, lowest point at elevation zero.
fn upright(solid: Solid) -> Solid {
    solid
        .rotate_xyz(Vec3::new(FRAC_PI_2, 0.0, 0.0))
        .align([AlignMode::Center, AlignMode::Center, AlignMode::Min])
}

/// Builds a one-centre (semicircular) arch.
///
/// With `profile`, the profile is offset outward by `arc_radius` and
/// revolved 180° about the vertical axis. Without it, the flat
/// semicircular outline is returned.
///
/// The radius is not validated; a non-positive value fails inside the
/// kernel and that error is returned as-is.
pub fn one_pt_arch(
    params: &ArchParams,
    profile: Option<&Region2>,
) -> Result<ArchShape, BuildError> {
    let arc_rad = params.arc_radius;

    match profile {
        Some(profile) => {
            let shifted = profile.translate(Vec2::new(arc_rad, 0.0));
            let base_arch = revolve(&shifted, PI, ARCH_SEGMENTS)?;
            Ok(ArchShape::Solid(upright(base_arch)))
        }
        None => Ok(ArchShape::Region(base_arch_region(arc_rad)?)),
    }
}

/// Builds a two-centre (pointed) arch from a pair of mirrored
/// semicircular arches meeting at `arc_radius - arch_width / 2`.
///
/// `arch_width = 2 × arc_radius` degenerates to the semicircular arch.
/// `arch_width > 2 × arc_radius` is unsupported: the construction is
/// carried out anyway and the result is undefined.
pub fn two_pt_arch(
    params: &ArchParams,
    profile: Option<&Region2>,
) -> Result<ArchShape, BuildError> {
    let arc_rad = params.arc_radius;
    let arch_wth = params.arch_width;
    let mirror_axis = arc_rad - arch_wth / 2.0;

    match profile {
        Some(profile) => {
            let dims = profile.dimensions();
            let shifted = profile.translate(Vec2::new(dims.x / 2.0 + arc_rad, 0.0));
            let base_arch = revolve(&shifted, PI, ARCH_SEGMENTS)?;

            // Carve off everything beyond the meeting point, keeping
            // the box clear of the profile vertically (1.25 factor).
            let cutaway_size = arch_wth.max(arc_rad) * 2.0;
            let cutaway_offset = cutaway_size / -2.0 + mirror_axis;
            let arch_cutaway = cuboid(Vec3::new(cutaway_size, cutaway_size, dims.y * 1.25))
                .translate(Vec3::new(cutaway_offset, cutaway_size / 2.0, 0.0));
            let cut_arch = subtract(&base_arch, &arch_cutaway);

            let reflected =
                cut_arch.mirror(Vec3::x(), Point3::new(mirror_axis, 0.0, 0.0));
            Ok(ArchShape::Solid(upright(union(&cut_arch, &reflected))))
        }
        None => {
            let base_arch = base_arch_region(arc_rad)?;
            let reflected = base_arch.mirror(Vec2::x(), Point2::new(mirror_axis, 0.0));
            let lens = base_arch.intersection(&reflected)?;
            Ok(ArchShape::Region(
                lens.align([AlignMode::Center, AlignMode::Min]),
            ))
        }
    }
}

/// Three-centre arch. Not yet available: always `None`, never an error
/// and never an empty shape. Callers must treat `None` as "feature
/// unavailable".
pub fn three_pt_arch(_params: &ArchParams, _profile: Option<&Region2>) -> Option<ArchShape> {
    None
}

/// Four-centre arch. Not yet available; see [`three_pt_arch`].
pub fn four_pt_arch(_params: &ArchParams, _profile: Option<&Region2>) -> Option<ArchShape> {
    None
}
