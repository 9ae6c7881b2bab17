//! Axis-aligned box primitive.

use glam::DVec3;

use super::require_positive;
use crate::error::MeshResult;
use crate::geometry::Geometry;

/// Parameters of a box centred on the Y axis at `y_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
    /// Vertical position of the centre
    pub y_offset: f64,
}

impl BoxSpec {
    /// A cube of edge `size` centred at the origin.
    pub fn cube(size: f64) -> Self {
        Self {
            width: size,
            height: size,
            depth: size,
            y_offset: 0.0,
        }
    }
}

/// Face normals and corner sign patterns in emission order:
/// front, back, top, bottom, right, left.
const FACES: [(DVec3, [[f64; 3]; 4]); 6] = [
    (
        DVec3::Z,
        [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    ),
    (
        DVec3::NEG_Z,
        [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
    ),
    (
        DVec3::Y,
        [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    ),
    (
        DVec3::NEG_Y,
        [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    ),
    (
        DVec3::X,
        [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    ),
    (
        DVec3::NEG_X,
        [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    ),
];

/// Creates a box with 24 vertices (4 per face) and 12 triangles.
///
/// Corners are duplicated per face so every face carries a uniform flat
/// normal. Each quad is split along its `0–2` diagonal.
///
/// # Example
///
/// ```rust
/// use monument_mesh::{create_box, BoxSpec};
///
/// let mesh = create_box(&BoxSpec { width: 2.0, height: 1.0, depth: 0.5, y_offset: 0.0 }).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// ```
pub fn create_box(spec: &BoxSpec) -> MeshResult<Geometry> {
    require_positive("box", "width", spec.width)?;
    require_positive("box", "height", spec.height)?;
    require_positive("box", "depth", spec.depth)?;

    let half = DVec3::new(spec.width / 2.0, spec.height / 2.0, spec.depth / 2.0);
    let mut mesh = Geometry::with_capacity(24, 12);

    for (normal, corners) in FACES {
        let start = mesh.vertex_count() as u32;
        for [sx, sy, sz] in corners {
            // Sign multiplication keeps corner values exact (±half)
            let corner = DVec3::new(sx * half.x, sy * half.y + spec.y_offset, sz * half.z);
            mesh.push_vertex(corner, normal);
        }
        mesh.push_triangle(start, start + 1, start + 2);
        mesh.push_triangle(start, start + 2, start + 3);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests;
