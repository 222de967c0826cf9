//! Assembling profiles into linear moulding solids.

use ashlar_kernel_math::{Point3, Vec3};
use ashlar_kernel_mesh::{AlignMode, Solid};
use ashlar_kernel_sketch::{prism, Region2};

/// Assemble a profile into a rectangular-frame moulding.
///
/// `size` is `[x footprint, y footprint, height]`; the height is
/// expected to match the profile's own height (the frame's vertical
/// extent comes from the profile). The result is centered in X/Y with
/// its base at Z = 0, profile face outward on all four sides.
///
/// Corners are butt-jointed: the X-running strips span the full
/// footprint and the Y-running strips fill the gap between them, so the
/// four pieces tile the frame without overlap.
pub fn frame_moulding(size: [f64; 3], profile: &Region2) -> Solid {
    let [w, l, _] = size;
    let depth = profile.dimensions().x;

    // Strip with the profile's +X facing -Y, swept along X.
    let front = prism(
        profile,
        Point3::origin(),
        -Vec3::y(),
        Vec3::z(),
        -Vec3::x(),
        w,
    )
    .align([AlignMode::Center, AlignMode::Center, AlignMode::Min])
    .translate(Vec3::new(0.0, -(l - depth) / 2.0, 0.0));
    let back = front.mirror(Vec3::y(), Point3::origin());

    let mut parts = vec![front, back];

    let gap = l - 2.0 * depth;
    if gap > 0.0 {
        // Strip with the profile's +X facing -X, swept along Y.
        let left = prism(
            profile,
            Point3::origin(),
            -Vec3::x(),
            Vec3::z(),
            Vec3::y(),
            gap,
        )
        .align([AlignMode::Center, AlignMode::Center, AlignMode::Min])
        .translate(Vec3::new(-(w - depth) / 2.0, 0.0, 0.0));
        let right = left.mirror(Vec3::x(), Point3::origin());
        parts.push(left);
        parts.push(right);
    }

    Solid::merged(parts)
}
