//! Trim families and their crown profiles.

use ashlar_kernel_math::Point2;
use ashlar_kernel_mesh::AlignMode;
use ashlar_kernel_sketch::Region2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::TrimError;

/// Unit cross-section dimensions for a trim family: depth (horizontal,
/// into the moulding) and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimUnit {
    /// Profile depth.
    pub depth: f64,
    /// Profile height.
    pub height: f64,
}

/// Crown profile size step within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrownSize {
    /// Exactly one unit deep and high.
    ExtraSmall,
    /// 1.5 units.
    Small,
    /// 2 units.
    Medium,
}

impl CrownSize {
    fn scale(self) -> f64 {
        match self {
            CrownSize::ExtraSmall => 1.0,
            CrownSize::Small => 1.5,
            CrownSize::Medium => 2.0,
        }
    }
}

/// Registry of available trim families.
///
/// The default catalog registers the `aranea` family.
#[derive(Debug, Clone)]
pub struct TrimCatalog {
    names: Vec<&'static str>,
}

impl Default for TrimCatalog {
    fn default() -> Self {
        Self { names: vec!["aranea"] }
    }
}

impl TrimCatalog {
    /// Look up a family by name, binding it to the given unit size.
    pub fn family(&self, name: &str, unit: TrimUnit) -> Result<TrimFamily, TrimError> {
        if !self.names.contains(&name) {
            return Err(TrimError::UnknownFamily(name.to_string()));
        }
        Ok(TrimFamily {
            name: name.to_string(),
            unit,
        })
    }
}

/// A trim family bound to a unit size; yields moulding profiles.
#[derive(Debug, Clone)]
pub struct TrimFamily {
    name: String,
    unit: TrimUnit,
}

impl TrimFamily {
    /// The family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound unit size.
    pub fn unit(&self) -> TrimUnit {
        self.unit
    }

    /// A crown moulding cross-section of the given size step, centered
    /// at the origin. The extra-small crown measures exactly one unit
    /// deep and one unit high.
    pub fn crown(&self, size: CrownSize) -> Result<Region2, TrimError> {
        let d = self.unit.depth * size.scale();
        let h = self.unit.height * size.scale();
        // The aranea crown: flat back, short fillet at the base, then a
        // quarter-round sweep up to the top lip.
        let mut pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(d, 0.0),
            Point2::new(d, 0.15 * h),
        ];
        let steps = 8;
        for i in 1..=steps {
            let t = FRAC_PI_2 * f64::from(i) / f64::from(steps);
            pts.push(Point2::new(
                0.2 * d + 0.8 * d * t.cos(),
                0.15 * h + 0.85 * h * t.sin(),
            ));
        }
        pts.push(Point2::new(0.0, h));
        let region = Region2::from_points(pts)?;
        Ok(region.align([AlignMode::Center, AlignMode::Center]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> TrimUnit {
        TrimUnit {
            depth: 0.1,
            height: 0.1,
        }
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        let catalog = TrimCatalog::default();
        assert!(matches!(
            catalog.family("corinthian", unit()),
            Err(TrimError::UnknownFamily(_))
        ));
    }

    #[test]
    fn test_crown_extra_small_matches_unit() {
        let family = TrimCatalog::default().family("aranea", unit()).unwrap();
        let profile = family.crown(CrownSize::ExtraSmall).unwrap();
        let dims = profile.dimensions();
        assert!((dims.x - 0.1).abs() < 1e-12);
        assert!((dims.y - 0.1).abs() < 1e-12);
        // Centered at the origin.
        let (min, max) = profile.bounding_box();
        assert!((min.x + max.x).abs() < 1e-12);
        assert!((min.y + max.y).abs() < 1e-12);
    }

    #[test]
    fn test_crown_sizes_scale() {
        let family = TrimCatalog::default().family("aranea", unit()).unwrap();
        let xs = family.crown(CrownSize::ExtraSmall).unwrap();
        let md = family.crown(CrownSize::Medium).unwrap();
        assert!((md.dimensions().x - 2.0 * xs.dimensions().x).abs() < 1e-12);
        assert!((md.area() - 4.0 * xs.area()).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_unit_propagates_kernel_error() {
        let family = TrimCatalog::default()
            .family(
                "aranea",
                TrimUnit {
                    depth: 0.0,
                    height: 0.0,
                },
            )
            .unwrap();
        assert!(matches!(
            family.crown(CrownSize::ExtraSmall),
            Err(TrimError::Sketch(_))
        ));
    }
}
