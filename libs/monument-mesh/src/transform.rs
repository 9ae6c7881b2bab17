//! # Mesh Transforms
//!
//! Geometric operators used to compose primitives into monuments. Every
//! operator exists in two forms: an in-place `&mut self` method and a pure
//! variant returning a new geometry.

use config::constants::LEAN_NORMAL_FACTOR;
use glam::DVec3;

use crate::color::Rgb;
use crate::geometry::Geometry;

impl Geometry {
    /// Replaces all vertex colors with a single solid color.
    pub fn set_uniform_color(&mut self, color: Rgb) {
        self.colors = Some(vec![color; self.positions.len()]);
    }

    /// Returns the geometry tagged with a single solid color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monument_mesh::{create_box, BoxSpec, Rgb};
    ///
    /// let red = Rgb::new(1.0, 0.0, 0.0);
    /// let cube = create_box(&BoxSpec::cube(1.0)).unwrap().with_color(red);
    /// assert!(cube.colors().unwrap().iter().all(|c| *c == red));
    /// ```
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.set_uniform_color(color);
        self
    }

    /// Translates every position by `offset`. Normals are unchanged.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Returns a translated copy.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Self {
        let mut clone = self.clone();
        clone.translate(offset);
        clone
    }

    /// Rotates positions and normals about the Y axis by `angle` radians.
    ///
    /// Applies `x' = x·cos − z·sin`, `z' = x·sin + z·cos`. Rotation keeps
    /// normals unit length, so they are not renormalized.
    pub fn rotate_y(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let rotate = |v: &mut DVec3| {
            let (x, z) = (v.x, v.z);
            v.x = x * cos - z * sin;
            v.z = x * sin + z * cos;
        };
        self.positions.iter_mut().for_each(rotate);
        self.normals.iter_mut().for_each(rotate);
    }

    /// Returns a copy rotated about the Y axis.
    #[must_use]
    pub fn rotated_y(&self, angle: f64) -> Self {
        let mut clone = self.clone();
        clone.rotate_y(angle);
        clone
    }

    /// Shears the geometry along +X proportionally to height.
    ///
    /// Each vertex moves by `factor · (y − minY) / (maxY − minY)`; a flat
    /// geometry uses a height range of 1. Normals get `factor · 0.4` added to
    /// their X component and are renormalized. The normal update is an
    /// approximation, not the exact inverse-transpose.
    pub fn lean(&mut self, factor: f64) {
        let (min_y, max_y) = self
            .positions
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let range = max_y - min_y;
        let range = if range == 0.0 || !range.is_finite() { 1.0 } else { range };

        for p in &mut self.positions {
            p.x += (p.y - min_y) / range * factor;
        }

        for n in &mut self.normals {
            n.x += factor * LEAN_NORMAL_FACTOR;
            let length = n.length();
            if length > 0.0 {
                *n /= length;
            }
        }
    }

    /// Returns a leaned copy.
    #[must_use]
    pub fn leaned(&self, factor: f64) -> Self {
        let mut clone = self.clone();
        clone.lean(factor);
        clone
    }

    /// Appends `other`, rebasing its indices past the current vertices.
    ///
    /// Colors are resolved on both sides so the result always carries a
    /// color per vertex. A color array that does not cover every vertex
    /// counts as white.
    pub fn append(&mut self, other: &Geometry) {
        let offset = self.positions.len() as u32;
        let vertex_count = self.positions.len();
        let colors = self.colors.get_or_insert_with(Vec::new);
        if colors.len() != vertex_count {
            colors.clear();
            colors.resize(vertex_count, Rgb::WHITE);
        }
        match &other.colors {
            Some(theirs) if theirs.len() == other.positions.len() => colors.extend_from_slice(theirs),
            _ => colors.resize(colors.len() + other.positions.len(), Rgb::WHITE),
        }

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Concatenates geometries in order into a new geometry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monument_mesh::{create_box, BoxSpec, Geometry};
    ///
    /// let a = create_box(&BoxSpec::cube(1.0)).unwrap();
    /// let b = create_box(&BoxSpec::cube(2.0)).unwrap();
    /// let merged = Geometry::merge([&a, &b]);
    /// assert_eq!(merged.vertex_count(), 48);
    /// assert_eq!(merged.triangles()[12], [24, 25, 26]);
    /// ```
    pub fn merge<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> Geometry {
        let mut merged = Geometry::new();
        merged.colors = Some(Vec::new());
        for geometry in geometries {
            merged.append(geometry);
        }
        merged
    }
}
