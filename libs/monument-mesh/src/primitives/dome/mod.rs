//! Hemispherical dome primitive.

use config::constants::{DEFAULT_DOME_RINGS, DEFAULT_DOME_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

use super::{require_positive, require_segments};
use crate::error::MeshResult;
use crate::geometry::Geometry;

/// Parameters of a hemisphere whose base circle sits at `y_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomeSpec {
    pub radius: f64,
    /// Longitude steps around the Y axis
    pub segments: u32,
    /// Latitude bands from pole to equator
    pub rings: u32,
    pub y_offset: f64,
}

impl Default for DomeSpec {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: DEFAULT_DOME_SEGMENTS,
            rings: DEFAULT_DOME_RINGS,
            y_offset: 0.0,
        }
    }
}

/// Creates a latitude/longitude hemisphere.
///
/// Rings run from the pole (`ring = 0`) down to the equator
/// (`ring = rings`), `segments` vertices each. Normals point from the base
/// centre `(0, y_offset, 0)` to the vertex. The pole ring collapses to a
/// single point and its triangles are degenerate.
///
/// # Example
///
/// ```rust
/// use monument_mesh::{create_dome, DomeSpec};
///
/// let dome = create_dome(&DomeSpec { radius: 0.85, segments: 24, rings: 14, y_offset: 0.8 }).unwrap();
/// assert_eq!(dome.vertex_count(), 15 * 24);
/// assert_eq!(dome.triangle_count(), 2 * 14 * 24);
/// ```
pub fn create_dome(spec: &DomeSpec) -> MeshResult<Geometry> {
    let &DomeSpec {
        radius,
        segments,
        rings,
        y_offset,
    } = spec;

    require_positive("dome", "radius", radius)?;
    require_segments("dome", "segments", segments)?;
    require_segments("dome", "rings", rings)?;

    let mut mesh = Geometry::with_capacity(
        ((rings + 1) * segments) as usize,
        (2 * rings * segments) as usize,
    );

    for ring in 0..=rings {
        let v = ring as f64 / rings as f64;
        let phi = (v * PI) / 2.0;
        let y = phi.cos() * radius + y_offset;
        let radial = phi.sin() * radius;

        for seg in 0..segments {
            let u = seg as f64 / segments as f64;
            let theta = u * PI * 2.0;
            let x = theta.cos() * radial;
            let z = theta.sin() * radial;

            let dy = y - y_offset;
            let length = (x * x + dy * dy + z * z).sqrt();
            let length = if length == 0.0 { 1.0 } else { length };
            mesh.push_vertex(
                DVec3::new(x, y, z),
                DVec3::new(x / length, dy / length, z / length),
            );
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * segments + seg;
            let next = current + segments;
            let next_seg = ring * segments + (seg + 1) % segments;
            let next_seg_next_ring = next_seg + segments;

            mesh.push_triangle(current, next_seg, next);
            mesh.push_triangle(next_seg, next_seg_next_ring, next);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests;
