//! Binary STL export.

use std::io::{self, Write};

use crate::solid::Solid;

/// Write a solid as binary STL.
///
/// Facets are fan-triangulated; the facet normal is taken from the
/// supporting plane. The 80-byte header carries a fixed signature.
pub fn write_stl<W: Write>(solid: &Solid, mut w: W) -> io::Result<()> {
    let mut header = [0u8; 80];
    let sig = b"ashlar binary stl";
    header[..sig.len()].copy_from_slice(sig);
    w.write_all(&header)?;

    let tri_count: usize = solid
        .polygons()
        .iter()
        .map(|p| p.vertices.len().saturating_sub(2))
        .sum();
    w.write_all(&(tri_count as u32).to_le_bytes())?;

    for poly in solid.polygons() {
        let n = poly.plane.normal;
        for i in 1..poly.vertices.len() - 1 {
            for &f in &[n.x, n.y, n.z] {
                w.write_all(&(f as f32).to_le_bytes())?;
            }
            for v in [&poly.vertices[0], &poly.vertices[i], &poly.vertices[i + 1]] {
                for &f in &[v.x, v.y, v.z] {
                    w.write_all(&(f as f32).to_le_bytes())?;
                }
            }
            w.write_all(&0u16.to_le_bytes())?;
        }
    }
    Ok(())
}
