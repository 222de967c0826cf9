//! Shed and gable roof builders.
//!
//! A shed roof is a structural support wedge (optionally hollowed for
//! the room below) with a layered covering assembly — bottom trim
//! rafter, sheathing, shingles — rotated flush onto the inclined face.
//! A gable roof is a shed half-roof built in gable mode, trimmed at the
//! ridge plane, mirrored, and unioned.

use std::f64::consts::FRAC_PI_2;

use ashlar_kernel_csg::{subtract, union, union_all};
use ashlar_kernel_math::{Point3, Vec3};
use ashlar_kernel_mesh::{cuboid, AlignMode, Solid};
use ashlar_kernel_sketch::{extrude_linear, Region2};
use ashlar_trim::{frame_moulding, CrownSize, TrimCatalog, TrimUnit};
use serde::{Deserialize, Serialize};

use crate::BuildError;

/// Main roof axis: the direction the ridge (or the shed's level edge)
/// runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Ridge along X.
    #[default]
    X,
    /// Ridge along Y.
    Y,
}

impl Axis {
    /// Index into `[x, y]` span vectors.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The orthogonal axis.
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Roof construction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofOpts {
    /// Keep the support wedge solid (no room cavity).
    pub solid: bool,
    /// Reserved; accepted but not acted on yet.
    pub no_wall: bool,
    /// Build a half-roof for mirroring into a gable: the cavity clears
    /// a single bounding wall instead of two.
    pub gable_mode: bool,
}

/// Roof design parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofParams {
    /// Spans along X and Y of the area to cover.
    pub roof_span_size: [f64; 2],
    /// Overhang on each axis.
    #[serde(default = "default_overhang")]
    pub roof_overhang_size: [f64; 2],
    /// Pitch angle from horizontal, in radians.
    pub roof_pitch: f64,
    /// Main roof axis.
    #[serde(default)]
    pub roof_axis: Axis,
    /// Construction flags.
    #[serde(default)]
    pub roof_opts: RoofOpts,
    /// Thickness of the walls bounding the room cavity.
    #[serde(default)]
    pub wall_thickness: f64,
    /// Trim family for the rafter moulding.
    #[serde(default = "default_trim_family")]
    pub trim_family: String,
    /// Trim unit cross-section (depth, height).
    pub trim_unit_size: TrimUnit,
    /// Shingle layer thickness; derived from the trim profile when
    /// absent.
    #[serde(default)]
    pub shingle_layer_thickness: Option<f64>,
    /// Reserved; sheathing thickness currently derives from the trim
    /// profile.
    #[serde(default)]
    pub shingle_sheathing_thickness: Option<f64>,
}

fn default_overhang() -> [f64; 2] {
    [1.0, 1.0]
}

fn default_trim_family() -> String {
    "aranea".to_string()
}

/// Derived roof measurements for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRoofSpecs {
    /// Rise of a single-slope roof across the orthogonal span.
    pub shed_roof_height: f64,
    /// Slope length of that single-slope roof.
    pub shed_roof_hypot: f64,
    /// Rise of a ridge roof (half the shed rise).
    pub gable_roof_height: f64,
    /// Slope length measured against the full orthogonal span.
    pub gable_roof_hypot: f64,
}

/// Derived roof measurements, indexed by main axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoofSpecs {
    /// Specs for a roof running along X.
    pub x: AxisRoofSpecs,
    /// Specs for a roof running along Y.
    pub y: AxisRoofSpecs,
}

impl RoofSpecs {
    /// Specs for the given main axis.
    pub fn axis(&self, axis: Axis) -> &AxisRoofSpecs {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Pure trigonometric derivation of roof heights and slope lengths.
///
/// The rise of a roof sloping across one axis is driven by the span
/// along the orthogonal axis. Recomputed on every call; never cached.
pub fn basic_roof_specs(roof_span_size: [f64; 2], roof_pitch: f64) -> RoofSpecs {
    let per_axis = |other_span: f64| {
        let shed_roof_height = roof_pitch.tan() * other_span;
        let gable_roof_height = shed_roof_height / 2.0;
        AxisRoofSpecs {
            shed_roof_height,
            shed_roof_hypot: other_span.hypot(shed_roof_height),
            gable_roof_height,
            gable_roof_hypot: other_span.hypot(gable_roof_height),
        }
    };
    RoofSpecs {
        x: per_axis(roof_span_size[1]),
        y: per_axis(roof_span_size[0]),
    }
}

/// Roof builder bound to a trim catalog.
///
/// Holds no other state; every build method is a pure pipeline over its
/// parameters.
#[derive(Debug, Clone)]
pub struct RoofBuilder {
    trim: TrimCatalog,
}

impl Default for RoofBuilder {
    fn default() -> Self {
        Self::new(TrimCatalog::default())
    }
}

impl RoofBuilder {
    /// Bind a roof builder to a trim catalog.
    pub fn new(trim: TrimCatalog) -> Self {
        Self { trim }
    }

    /// Builds a single-slope (shed) roof.
    ///
    /// Parameters are not validated; degenerate spans or pitches fail
    /// inside the kernel and the error surfaces unmodified.
    pub fn build_shed_roof(&self, params: &RoofParams) -> Result<Solid, BuildError> {
        let specs = basic_roof_specs(params.roof_span_size, params.roof_pitch);
        let main_idx = params.roof_axis.index();
        let other_idx = params.roof_axis.other().index();

        let axis_span = params.roof_span_size[main_idx];
        let roof_span = params.roof_span_size[other_idx];
        let axis_specs = specs.axis(params.roof_axis);
        let roof_height = axis_specs.shed_roof_height;
        let roof_hypot = axis_specs.shed_roof_hypot;

        let min_corner = [AlignMode::Min, AlignMode::Min, AlignMode::Min];

        // Support wedge: right-triangle cross section extruded along
        // the main axis, slope ascending across the other axis.
        let base_triangle = Region2::triangle_sas(roof_span, FRAC_PI_2, roof_height)?;
        let base_prism = extrude_linear(&base_triangle, axis_span)
            .rotate_xyz(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2))
            .align([AlignMode::Center, AlignMode::Center, AlignMode::Min]);

        let roof_support = if params.roof_opts.solid {
            base_prism.align(min_corner)
        } else {
            // Room cavity. Gable mode keeps a single bounding wall, so
            // the cavity widens by one wall thickness and shifts flush
            // against the remaining wall.
            let wt = params.wall_thickness;
            let wall_count = if params.roof_opts.gable_mode { 1.0 } else { 2.0 };
            let room_size = Vec3::new(
                axis_span - 2.0 * wt,
                roof_span - wall_count * wt,
                roof_height,
            );
            let mut room_cutaway =
                cuboid(room_size).align([AlignMode::Center, AlignMode::Center, AlignMode::Min]);
            if params.roof_opts.gable_mode {
                room_cutaway = room_cutaway.translate(Vec3::new(0.0, wt / 2.0, 0.0));
            }
            subtract(&base_prism, &room_cutaway).align(min_corner)
        };

        // Covering assembly: trim rafter, sheathing, shingles.
        let family = self
            .trim
            .family(&params.trim_family, params.trim_unit_size)?;
        let trim_profile = family.crown(CrownSize::ExtraSmall)?;
        let profile_dims = trim_profile.dimensions();
        let trim_depth = params.trim_unit_size.depth;

        let rafter_len = [
            2.0 * trim_depth + roof_hypot,
            2.0 * trim_depth + axis_span,
        ];
        let rafter = frame_moulding([rafter_len[1], rafter_len[0], profile_dims.y], &trim_profile)
            .align([AlignMode::Center, AlignMode::Center, AlignMode::Min]);

        let sheathing_thickness = profile_dims.y * 0.6667;
        let sheathing_size = Vec3::new(
            2.0 * params.roof_overhang_size[main_idx] + rafter_len[1],
            2.0 * params.roof_overhang_size[other_idx] + rafter_len[0],
            sheathing_thickness,
        );
        let sheathing = cuboid(sheathing_size).translate(Vec3::new(
            0.0,
            0.0,
            profile_dims.y + sheathing_size.z / 2.0,
        ));

        let shingle_thickness = params
            .shingle_layer_thickness
            .unwrap_or(profile_dims.y * 0.6667);
        let shingles_size = Vec3::new(
            3.0 * trim_depth + sheathing_size.x,
            3.0 * trim_depth + sheathing_size.y,
            shingle_thickness,
        );
        let shingles = cuboid(shingles_size).translate(Vec3::new(
            0.0,
            0.0,
            profile_dims.y + sheathing_size.z + shingles_size.z / 2.0,
        ));

        let roof_assembly = union_all(&[rafter, sheathing, shingles]);

        // Center the assembly on the slope footprint, then tilt it
        // flush onto the inclined face.
        let adj_assembly = roof_assembly.align(min_corner).translate(Vec3::new(
            (shingles_size.x - axis_span) / -2.0,
            (shingles_size.y - roof_hypot) / -2.0,
            0.0,
        ));
        let rotated_assembly = adj_assembly.rotate_xyz(Vec3::new(params.roof_pitch, 0.0, 0.0));

        let mut final_shape = union(&roof_support, &rotated_assembly);
        if params.roof_axis == Axis::Y {
            final_shape = final_shape.rotate_xyz(Vec3::new(0.0, 0.0, FRAC_PI_2));
        }
        Ok(final_shape)
    }

    /// Builds a ridge (gable) roof from two mirrored shed halves.
    pub fn build_gable_roof(&self, params: &RoofParams) -> Result<Solid, BuildError> {
        let specs = basic_roof_specs(params.roof_span_size, params.roof_pitch);
        let gable_height = specs.axis(params.roof_axis).gable_roof_height;

        // The ridge bisects the orthogonal span.
        let span = params.roof_span_size;
        let half_span = match params.roof_axis {
            Axis::X => [span[0], span[1] / 2.0],
            Axis::Y => [span[0] / 2.0, span[1]],
        };

        let mut half_params = params.clone();
        half_params.roof_span_size = half_span;
        half_params.roof_opts.gable_mode = true;

        // The half-span shed rise equals the full gable rise; dropping
        // the half by half of it centers the ridge vertically.
        let half_offset = match params.roof_axis {
            Axis::X => Vec3::new(
                half_span[0] / -2.0,
                -half_span[1],
                gable_height / -2.0,
            ),
            Axis::Y => Vec3::new(
                half_span[0],
                half_span[1] / -2.0,
                gable_height / -2.0,
            ),
        };
        let half_roof = self.build_shed_roof(&half_params)?.translate(half_offset);

        // Trim covering material protruding past the ridge plane.
        let cut_size = Vec3::new(
            half_span[0] + 50.0,
            half_span[1] + 50.0,
            gable_height + 50.0,
        );
        let cut_box = match params.roof_axis {
            Axis::X => cuboid(cut_size).align([
                AlignMode::Center,
                AlignMode::Min,
                AlignMode::Center,
            ]),
            Axis::Y => cuboid(cut_size).align([
                AlignMode::Max,
                AlignMode::Center,
                AlignMode::Center,
            ]),
        };
        let cut_roof = subtract(&half_roof, &cut_box);

        let mirror_normal = match params.roof_axis {
            Axis::X => Vec3::y(),
            Axis::Y => Vec3::x(),
        };
        let mirrored = cut_roof.mirror(mirror_normal, Point3::origin());
        Ok(union(&cut_roof, &mirrored))
    }

    /// Hip (four-slope) roof. Not yet available: always `None`, never
    /// an error and never an empty solid. Reserved extension point.
    pub fn build_hip_roof(&self, _params: &RoofParams) -> Option<Solid> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shed_params() -> RoofParams {
        RoofParams {
            roof_span_size: [10.0, 6.0],
            roof_overhang_size: [1.0, 1.0],
            roof_pitch: 0.5f64.atan(),
            roof_axis: Axis::X,
            roof_opts: RoofOpts::default(),
            wall_thickness: 0.2,
            trim_family: "aranea".to_string(),
            trim_unit_size: TrimUnit {
                depth: 0.1,
                height: 0.1,
            },
            shingle_layer_thickness: None,
            shingle_sheathing_thickness: None,
        }
    }

    #[test]
    fn test_basic_roof_specs_identities() {
        let specs = basic_roof_specs([3.0, 4.0], 0.7);
        let t = 0.7f64.tan();
        assert!((specs.x.shed_roof_height - t * 4.0).abs() < 1e-12);
        assert!((specs.x.shed_roof_hypot - 4.0f64.hypot(t * 4.0)).abs() < 1e-12);
        assert!((specs.x.gable_roof_height - t * 2.0).abs() < 1e-12);
        assert!((specs.x.gable_roof_hypot - 4.0f64.hypot(t * 2.0)).abs() < 1e-12);
        assert!((specs.y.shed_roof_height - t * 3.0).abs() < 1e-12);
        assert!((specs.y.shed_roof_hypot - 3.0f64.hypot(t * 3.0)).abs() < 1e-12);
        assert!((specs.y.gable_roof_height - t * 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_shed_wedge_height_from_orthogonal_span() {
        // tan(pitch) = 0.5 across the 6-unit Y span: 3-unit rise.
        let params = shed_params();
        let specs = basic_roof_specs(params.roof_span_size, params.roof_pitch);
        assert!((specs.x.shed_roof_height - 3.0).abs() < 1e-12);

        let builder = RoofBuilder::default();
        let roof = builder.build_shed_roof(&params).unwrap();
        let dims = roof.dimensions();
        // Wedge plus covering: at least the wedge everywhere.
        assert!(dims.x >= 10.0 - 1e-9);
        assert!(dims.y >= 6.0 - 1e-9);
        assert!(dims.z >= 3.0 - 1e-9);
        assert!(roof.volume() > 0.0);
    }

    #[test]
    fn test_shed_solid_opt_keeps_more_material() {
        let builder = RoofBuilder::default();
        let hollow = builder.build_shed_roof(&shed_params()).unwrap();
        let mut solid_params = shed_params();
        solid_params.roof_opts.solid = true;
        let solid = builder.build_shed_roof(&solid_params).unwrap();
        // Cavity: (10 - 0.4) x (6 - 0.4) x 3 wedge cut.
        assert!(solid.volume() > hollow.volume() + 1.0);
    }

    #[test]
    fn test_shed_axis_y_swaps_footprint() {
        let builder = RoofBuilder::default();
        let mut params = shed_params();
        params.roof_axis = Axis::Y;
        let roof = builder.build_shed_roof(&params).unwrap();
        let dims = roof.dimensions();
        // The final quarter turn lays the 10-unit slope span along X
        // and the 6-unit main span along Y.
        assert!(dims.x >= 10.0 - 1e-9);
        assert!(dims.y >= 6.0 - 1e-9);
        // Slope across the 10-unit span: 5-unit rise.
        assert!(dims.z >= 5.0 - 1e-9);
    }

    fn tight_gable_params() -> RoofParams {
        // Near-zero trim and overhang so the covering barely perturbs
        // the ridge-height measurement.
        RoofParams {
            roof_span_size: [4.0, 6.0],
            roof_overhang_size: [1e-3, 1e-3],
            roof_pitch: 0.5,
            roof_axis: Axis::X,
            roof_opts: RoofOpts::default(),
            wall_thickness: 0.2,
            trim_family: "aranea".to_string(),
            trim_unit_size: TrimUnit {
                depth: 1e-3,
                height: 1e-3,
            },
            shingle_layer_thickness: None,
            shingle_sheathing_thickness: None,
        }
    }

    #[test]
    fn test_gable_ridge_height() {
        let params = tight_gable_params();
        let gable_height = basic_roof_specs(params.roof_span_size, params.roof_pitch)
            .x
            .gable_roof_height;
        let roof = RoofBuilder::default().build_gable_roof(&params).unwrap();
        let dims = roof.dimensions();
        assert!(
            (dims.z - gable_height).abs() < 0.02,
            "rise {} vs gable height {gable_height}",
            dims.z
        );
    }

    #[test]
    fn test_gable_is_mirror_symmetric_about_ridge() {
        let params = tight_gable_params();
        let roof = RoofBuilder::default().build_gable_roof(&params).unwrap();
        let v = roof.volume();
        assert!(v > 0.0);
        let (min, max) = roof.bounding_box().unwrap();
        // Ridge plane is y = 0 for an X-axis roof.
        assert!((min.y + max.y).abs() < 1e-6);
        let clip = cuboid(Vec3::new(
            (max.x - min.x) * 2.0,
            max.y - min.y,
            (max.z - min.z) * 2.0,
        ))
        .translate(Vec3::new(0.0, (max.y - min.y) / 2.0, (min.z + max.z) / 2.0));
        let half = subtract(&roof, &clip);
        assert!(
            (half.volume() - v / 2.0).abs() / v < 0.005,
            "half {} of {v}",
            half.volume()
        );
    }

    #[test]
    fn test_gable_axis_y() {
        let mut params = tight_gable_params();
        params.roof_axis = Axis::Y;
        let roof = RoofBuilder::default().build_gable_roof(&params).unwrap();
        let (min, max) = roof.bounding_box().unwrap();
        // Ridge plane is x = 0 for a Y-axis roof.
        assert!((min.x + max.x).abs() < 1e-6);
        let gable_height = basic_roof_specs(params.roof_span_size, params.roof_pitch)
            .y
            .gable_roof_height;
        assert!(((max.z - min.z) - gable_height).abs() < 0.02);
    }

    #[test]
    fn test_determinism() {
        let builder = RoofBuilder::default();
        let a = builder.build_shed_roof(&shed_params()).unwrap();
        let b = builder.build_shed_roof(&shed_params()).unwrap();
        assert_eq!(a.volume(), b.volume());
        assert_eq!(a.bounding_box(), b.bounding_box());
    }

    #[test]
    fn test_unknown_trim_family_propagates() {
        let mut params = shed_params();
        params.trim_family = "ionic".to_string();
        let err = RoofBuilder::default()
            .build_shed_roof(&params)
            .unwrap_err();
        assert!(matches!(err, BuildError::Trim(_)));
    }

    #[test]
    fn test_hip_roof_stub_returns_none() {
        assert!(RoofBuilder::default()
            .build_hip_roof(&shed_params())
            .is_none());
    }
}
