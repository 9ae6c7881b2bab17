//! Cylinder and cone frustum primitive.

use glam::DVec3;
use std::f64::consts::PI;

use super::{require_positive, require_segments};
use crate::error::{MeshError, MeshResult};
use crate::geometry::Geometry;

/// Parameters of a cylinder or cone frustum centred at `y_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderSpec {
    /// Number of radial segments (at least 3)
    pub segments: u32,
    /// Radius of the top ring
    pub radius_top: f64,
    /// Radius of the bottom ring
    pub radius_bottom: f64,
    /// Height along Y
    pub height: f64,
    /// Vertical position of the centre
    pub y_offset: f64,
}

/// Creates a cylinder or cone frustum.
///
/// The side wall is built from `segments` top/bottom vertex pairs with
/// radial normals. Each cap is a separate fan with its own vertices and a
/// flat `±Y` normal, so caps shade distinctly from the curved wall.
///
/// Layout: `2n` side vertices, then the top centre and `n` top ring
/// vertices, then the bottom centre and `n` bottom ring vertices
/// (`4n + 2` vertices, `4n` triangles).
///
/// # Example
///
/// ```rust
/// use monument_mesh::{create_cylinder, CylinderSpec};
///
/// let mesh = create_cylinder(&CylinderSpec {
///     segments: 8,
///     radius_top: 1.0,
///     radius_bottom: 1.0,
///     height: 2.0,
///     y_offset: 0.0,
/// })
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 34);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn create_cylinder(spec: &CylinderSpec) -> MeshResult<Geometry> {
    let &CylinderSpec {
        segments,
        radius_top,
        radius_bottom,
        height,
        y_offset,
    } = spec;

    require_segments("cylinder", "segments", segments)?;
    require_positive("cylinder", "height", height)?;
    if radius_top < 0.0 || radius_bottom < 0.0 {
        return Err(MeshError::invalid_parameter(
            "cylinder",
            format!("radii must be non-negative: top={radius_top}, bottom={radius_bottom}"),
        ));
    }

    let n = segments as usize;
    let mut mesh = Geometry::with_capacity(4 * n + 2, 4 * n);
    let y_top = height / 2.0 + y_offset;
    let y_bottom = -height / 2.0 + y_offset;

    let angles: Vec<(f64, f64)> = (0..segments)
        .map(|i| {
            let theta = (i as f64 / segments as f64) * PI * 2.0;
            (theta.cos(), theta.sin())
        })
        .collect();

    // Side wall
    let mut side_top = Vec::with_capacity(n);
    let mut side_bottom = Vec::with_capacity(n);
    for &(cos, sin) in &angles {
        let normal = DVec3::new(cos, 0.0, sin);
        side_top.push(mesh.push_vertex(DVec3::new(radius_top * cos, y_top, radius_top * sin), normal));
        side_bottom.push(mesh.push_vertex(
            DVec3::new(radius_bottom * cos, y_bottom, radius_bottom * sin),
            normal,
        ));
    }
    for i in 0..n {
        let next = (i + 1) % n;
        mesh.push_triangle(side_top[i], side_bottom[i], side_bottom[next]);
        mesh.push_triangle(side_top[i], side_bottom[next], side_top[next]);
    }

    // Top cap
    let top_center = mesh.push_vertex(DVec3::new(0.0, y_top, 0.0), DVec3::Y);
    let top_ring: Vec<u32> = angles
        .iter()
        .map(|&(cos, sin)| {
            mesh.push_vertex(DVec3::new(radius_top * cos, y_top, radius_top * sin), DVec3::Y)
        })
        .collect();
    for i in 0..n {
        mesh.push_triangle(top_center, top_ring[(i + 1) % n], top_ring[i]);
    }

    // Bottom cap
    let bottom_center = mesh.push_vertex(DVec3::new(0.0, y_bottom, 0.0), DVec3::NEG_Y);
    let bottom_ring: Vec<u32> = angles
        .iter()
        .map(|&(cos, sin)| {
            mesh.push_vertex(
                DVec3::new(radius_bottom * cos, y_bottom, radius_bottom * sin),
                DVec3::NEG_Y,
            )
        })
        .collect();
    for i in 0..n {
        mesh.push_triangle(bottom_center, bottom_ring[i], bottom_ring[(i + 1) % n]);
    }

    Ok(mesh)
}
