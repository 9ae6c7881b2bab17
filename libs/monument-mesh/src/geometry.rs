//! # Geometry
//!
//! Indexed triangle mesh with per-vertex normals and optional per-vertex
//! colors. Attribute arrays are parallel: row `i` of positions, normals and
//! colors describes vertex `i`.

use glam::DVec3;

use crate::color::Rgb;
use crate::error::{MeshError, MeshResult};

/// An indexed triangle mesh.
///
/// Colors are optional on freshly built primitives; geometry without colors
/// is treated as full white when merged or exported.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use monument_mesh::Geometry;
///
/// let mut geometry = Geometry::new();
/// let a = geometry.push_vertex(DVec3::ZERO, DVec3::Y);
/// let b = geometry.push_vertex(DVec3::X, DVec3::Y);
/// let c = geometry.push_vertex(DVec3::Z, DVec3::Y);
/// geometry.push_triangle(a, c, b);
/// assert_eq!(geometry.index_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Vertex positions (object-space meters)
    pub(crate) positions: Vec<DVec3>,
    /// Unit vertex normals
    pub(crate) normals: Vec<DVec3>,
    /// Optional vertex colors
    pub(crate) colors: Option<Vec<Rgb>>,
    /// Triangle indices into `positions`
    pub(crate) triangles: Vec<[u32; 3]>,
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a geometry with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            colors: None,
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of entries in the flat index list.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the geometry has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the vertex colors, if any were assigned.
    #[inline]
    pub fn colors(&self) -> Option<&[Rgb]> {
        self.colors.as_deref()
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Colors resolved for export: the assigned colors when they cover every
    /// vertex, full white otherwise.
    pub fn resolved_colors(&self) -> Vec<Rgb> {
        match &self.colors {
            Some(colors) if colors.len() == self.positions.len() => colors.clone(),
            _ => vec![Rgb::WHITE; self.positions.len()],
        }
    }

    /// Flat index list `[i0, i1, i2, ...]`.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Per-axis minimum and maximum of all positions, `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions[1..]
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Checks the structural invariants: parallel attribute arrays and every
    /// index inside the vertex range.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count {
            return Err(MeshError::invalid_topology(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                vertex_count
            )));
        }
        if let Some(colors) = &self.colors {
            if colors.len() != vertex_count {
                return Err(MeshError::invalid_topology(format!(
                    "{} colors for {} vertices",
                    colors.len(),
                    vertex_count
                )));
            }
        }
        if let Some(index) = self
            .triangles
            .iter()
            .flatten()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(MeshError::invalid_topology(format!(
                "index {index} out of range for {vertex_count} vertices"
            )));
        }
        Ok(())
    }

    /// Triangles resolved to their corner positions.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles.iter().map(move |tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }

    /// Exports positions as a flat f32 array for the binary container.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as a flat f32 array.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports resolved colors as a flat f32 RGB array.
    pub fn colors_f32(&self) -> Vec<f32> {
        self.resolved_colors()
            .iter()
            .flat_map(|c| [c.r as f32, c.g as f32, c.b as f32])
            .collect()
    }
}

fn flatten_f32(vectors: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
