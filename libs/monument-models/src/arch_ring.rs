//! Arch ring composite: columns placed evenly on a circle, capped by an
//! annular platform band.

use config::constants::ARCH_BAND_HEIGHT;
use glam::DVec3;
use monument_mesh::{create_box, create_cylinder, BoxSpec, CylinderSpec, Geometry, MeshResult, Rgb};
use std::f64::consts::PI;

/// Parameters of an arch ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchRingSpec {
    /// Number of columns
    pub segments: u32,
    /// Distance of the column centres from the Y axis
    pub radius: f64,
    /// Total height including the platform band
    pub height: f64,
    /// Column width (tangential)
    pub width: f64,
    /// Column depth (radial)
    pub depth: f64,
    /// Base of the columns
    pub y_offset: f64,
    pub color: Rgb,
    pub platform_color: Rgb,
}

/// Builds an arch ring.
///
/// Each column is a box of height `height − band`, rotated to its angular
/// position and moved onto the ring. The platform is a cylinder with twice
/// the column count, radius `radius + depth / 2`, centred on the column tops.
/// Columns come first in the merged result, the platform last.
pub fn create_arch_ring(spec: &ArchRingSpec) -> MeshResult<Geometry> {
    let column_height = spec.height - ARCH_BAND_HEIGHT;
    let platform = create_cylinder(&CylinderSpec {
        segments: spec.segments * 2,
        radius_top: spec.radius + spec.depth / 2.0,
        radius_bottom: spec.radius + spec.depth / 2.0,
        height: ARCH_BAND_HEIGHT,
        y_offset: spec.y_offset + column_height,
    })?
    .with_color(spec.platform_color);

    let column = create_box(&BoxSpec {
        width: spec.width,
        height: column_height,
        depth: spec.depth,
        y_offset: column_height / 2.0,
    })?
    .with_color(spec.color);

    let columns: Vec<Geometry> = (0..spec.segments)
        .map(|i| {
            let angle = (i as f64 / spec.segments as f64) * PI * 2.0;
            let mut placed = column.rotated_y(angle);
            placed.translate(DVec3::new(angle.cos() * spec.radius, 0.0, angle.sin() * spec.radius));
            placed.translate(DVec3::new(0.0, spec.y_offset, 0.0));
            placed
        })
        .collect();

    Ok(Geometry::merge(columns.iter().chain([&platform])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn spec() -> ArchRingSpec {
        ArchRingSpec {
            segments: 12,
            radius: 0.54,
            height: 0.32,
            width: 0.12,
            depth: 0.18,
            y_offset: 0.78,
            color: Rgb::new(0.5, 0.4, 0.3),
            platform_color: Rgb::new(0.9, 0.8, 0.7),
        }
    }

    #[test]
    fn test_arch_ring_counts() {
        let ring = create_arch_ring(&spec()).unwrap();
        // 12 boxes + one 24-segment cylinder
        assert_eq!(ring.vertex_count(), 12 * 24 + 4 * 24 + 2);
        assert_eq!(ring.triangle_count(), 12 * 12 + 4 * 24);
        ring.validate().unwrap();
    }

    #[test]
    fn test_columns_sit_on_ring() {
        let s = spec();
        let ring = create_arch_ring(&s).unwrap();
        for (i, column) in ring.positions()[..12 * 24].chunks(24).enumerate() {
            let centre = column.iter().copied().sum::<DVec3>() / 24.0;
            let angle = (i as f64 / 12.0) * PI * 2.0;
            assert_abs_diff_eq!(centre.x, angle.cos() * s.radius, epsilon = 1e-9);
            assert_abs_diff_eq!(centre.z, angle.sin() * s.radius, epsilon = 1e-9);
            let min_y = column.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            assert_abs_diff_eq!(min_y, s.y_offset, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_platform_caps_columns() {
        let s = spec();
        let ring = create_arch_ring(&s).unwrap();
        let (_, max) = ring.bounding_box().unwrap();
        assert_abs_diff_eq!(max.y, s.y_offset + s.height - ARCH_BAND_HEIGHT / 2.0, epsilon = 1e-9);
        let colors = ring.colors().unwrap();
        assert_eq!(colors[0], s.color);
        assert_eq!(*colors.last().unwrap(), s.platform_color);
    }
}
