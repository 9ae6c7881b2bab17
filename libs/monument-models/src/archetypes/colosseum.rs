//! Amphitheater: stacked circular tiers ringed by two arcades.

use monument_mesh::{create_cylinder, mix_color, CylinderSpec, Geometry, MeshResult, Rgb};

use crate::arch_ring::{create_arch_ring, ArchRingSpec};

const BASE: &str = "#b27a46";
const LIGHT: &str = "#dec4a0";
const PALE: &str = "#f0e3d2";

fn tier(radius_top: f64, radius_bottom: f64, height: f64, y_offset: f64) -> CylinderSpec {
    CylinderSpec {
        segments: 32,
        radius_top,
        radius_bottom,
        height,
        y_offset,
    }
}

/// Builds the colosseum mesh.
pub fn build() -> MeshResult<Geometry> {
    let lower = create_cylinder(&tier(1.4, 1.48, 0.4, -0.5))?.with_color(Rgb::from_hex(BASE)?);
    let podium = create_cylinder(&tier(1.32, 1.35, 0.25, -0.2))?.with_color(mix_color(BASE, 0.2)?);
    let middle = create_cylinder(&tier(1.22, 1.25, 0.4, 0.15))?.with_color(Rgb::from_hex(LIGHT)?);
    let upper = create_cylinder(&tier(1.05, 1.1, 0.32, 0.6))?.with_color(Rgb::from_hex(PALE)?);
    let rim = create_cylinder(&tier(1.15, 1.15, 0.12, 0.85))?.with_color(mix_color(PALE, 0.15)?);

    let arch_ring_lower = create_arch_ring(&ArchRingSpec {
        segments: 18,
        radius: 1.18,
        height: 0.45,
        width: 0.18,
        depth: 0.32,
        y_offset: -0.05,
        color: mix_color(LIGHT, -0.15)?,
        platform_color: mix_color(LIGHT, 0.08)?,
    })?;
    let arch_ring_upper = create_arch_ring(&ArchRingSpec {
        segments: 16,
        radius: 1.0,
        height: 0.35,
        width: 0.16,
        depth: 0.28,
        y_offset: 0.4,
        color: mix_color(PALE, -0.12)?,
        platform_color: mix_color(PALE, 0.05)?,
    })?;

    let crown = create_cylinder(&tier(0.6, 0.75, 0.18, 0.95))?.with_color(mix_color(PALE, -0.2)?);

    Ok(Geometry::merge([
        &lower,
        &podium,
        &middle,
        &upper,
        &rim,
        &arch_ring_lower,
        &arch_ring_upper,
        &crown,
    ]))
}
