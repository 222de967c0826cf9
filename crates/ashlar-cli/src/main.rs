//! ashlar CLI - build architectural solids from TOML part specs.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use ashlar::arches::{one_pt_arch, two_pt_arch, ArchParams, ArchShape};
use ashlar::roofs::{basic_roof_specs, RoofBuilder, RoofParams};
use ashlar_kernel_mesh::{write_stl, Solid};
use ashlar_kernel_sketch::Region2;
use ashlar_trim::TrimCatalog;

#[derive(Parser)]
#[command(name = "ashlar")]
#[command(about = "Parametric arch and roof builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a part from a TOML spec and export it as binary STL
    Build {
        /// Input part spec (.toml)
        input: PathBuf,
        /// Output STL file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print derived roof measurements for a span and pitch as JSON
    Specs {
        /// Roof span along X and Y
        #[arg(long, num_args = 2, value_delimiter = ',')]
        span: Vec<f64>,
        /// Pitch angle in degrees
        #[arg(long)]
        pitch: f64,
    },
}

/// Rectangular cross-section profile for revolved arches.
#[derive(Debug, Deserialize)]
struct ProfileSpec {
    width: f64,
    height: f64,
}

impl ProfileSpec {
    fn to_region(&self) -> Result<Region2> {
        Region2::rectangle(self.width, self.height)
            .context("invalid arch profile")
    }
}

/// A buildable part, tagged by kind.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum PartSpec {
    OnePtArch {
        #[serde(flatten)]
        params: ArchParams,
        profile: Option<ProfileSpec>,
    },
    TwoPtArch {
        #[serde(flatten)]
        params: ArchParams,
        profile: Option<ProfileSpec>,
    },
    ShedRoof {
        #[serde(flatten)]
        params: RoofParams,
    },
    GableRoof {
        #[serde(flatten)]
        params: RoofParams,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => build_part(&input, &output),
        Commands::Specs { span, pitch } => print_specs(&span, pitch),
    }
}

fn build_part(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let spec: PartSpec = toml::from_str(&text)
        .with_context(|| format!("parsing {}", input.display()))?;

    let solid = evaluate(&spec)?;

    let file = fs::File::create(output)
        .with_context(|| format!("creating {}", output.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_stl(&solid, &mut writer)?;
    println!(
        "Wrote {} ({} faces)",
        output.display(),
        solid.polygons().len()
    );
    Ok(())
}

fn evaluate(spec: &PartSpec) -> Result<Solid> {
    let solid = match spec {
        PartSpec::OnePtArch { params, profile } => {
            let region = profile.as_ref().map(|p| p.to_region()).transpose()?;
            into_solid(one_pt_arch(params, region.as_ref())?)?
        }
        PartSpec::TwoPtArch { params, profile } => {
            let region = profile.as_ref().map(|p| p.to_region()).transpose()?;
            into_solid(two_pt_arch(params, region.as_ref())?)?
        }
        PartSpec::ShedRoof { params } => {
            RoofBuilder::new(TrimCatalog::default()).build_shed_roof(params)?
        }
        PartSpec::GableRoof { params } => {
            RoofBuilder::new(TrimCatalog::default()).build_gable_roof(params)?
        }
    };
    Ok(solid)
}

fn into_solid(shape: ArchShape) -> Result<Solid> {
    match shape {
        ArchShape::Solid(solid) => Ok(solid),
        ArchShape::Region(_) => {
            bail!("flat arch outlines cannot be exported as STL; supply a profile")
        }
    }
}

fn print_specs(span: &[f64], pitch_deg: f64) -> Result<()> {
    if span.len() != 2 {
        bail!("--span expects exactly two values, e.g. --span 10,6");
    }
    let specs = basic_roof_specs([span[0], span[1]], pitch_deg.to_radians());
    println!("{}", serde_json::to_string_pretty(&specs)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_arch_spec() {
        let spec: PartSpec = toml::from_str(
            r#"
            kind = "two-pt-arch"
            arc_radius = 3.0
            arch_width = 4.0
            profile = { width = 1.0, height = 1.0 }
            "#,
        )
        .unwrap();
        let solid = evaluate(&spec).unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_parses_roof_spec() {
        let spec: PartSpec = toml::from_str(
            r#"
            kind = "gable-roof"
            roof_span_size = [10.0, 6.0]
            roof_pitch = 0.4636
            wall_thickness = 0.2
            trim_unit_size = { depth = 0.1, height = 0.1 }
            "#,
        )
        .unwrap();
        let solid = evaluate(&spec).unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_flat_outline_is_rejected() {
        let spec: PartSpec = toml::from_str(
            r#"
            kind = "one-pt-arch"
            arc_radius = 5.0
            "#,
        )
        .unwrap();
        assert!(evaluate(&spec).is_err());
    }
}
