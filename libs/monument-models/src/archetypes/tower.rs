//! Leaning bell tower: banded drum stack with a window arcade, sheared as a
//! whole.

use monument_mesh::{create_cylinder, mix_color, CylinderSpec, Geometry, MeshResult, Rgb};

use crate::arch_ring::{create_arch_ring, ArchRingSpec};

const BASE: &str = "#d9cdbb";
const STRIPE: &str = "#c4b49f";
const HIGHLIGHT: &str = "#f0e6d9";
const ROOF: &str = "#c48a4f";
const SHADOW: &str = "#ae8f6b";

/// Horizontal offset of the tower top relative to its base.
pub const LEAN_FACTOR: f64 = 0.3;

fn storey(segments: u32, radius_top: f64, radius_bottom: f64, height: f64, y_offset: f64) -> CylinderSpec {
    CylinderSpec {
        segments,
        radius_top,
        radius_bottom,
        height,
        y_offset,
    }
}

/// Builds the tower mesh, leaned by [`LEAN_FACTOR`].
pub fn build() -> MeshResult<Geometry> {
    let base_color = Rgb::from_hex(BASE)?;
    let stripe_color = Rgb::from_hex(STRIPE)?;

    let base = create_cylinder(&storey(20, 0.72, 0.78, 0.35, -0.85))?.with_color(Rgb::from_hex(SHADOW)?);
    let lower = create_cylinder(&storey(20, 0.55, 0.6, 0.6, -0.45))?.with_color(base_color);
    let middle = create_cylinder(&storey(20, 0.5, 0.55, 0.6, 0.05))?.with_color(Rgb::from_hex(HIGHLIGHT)?);
    let upper = create_cylinder(&storey(20, 0.45, 0.5, 0.5, 0.5))?.with_color(base_color);
    let bell_chamber = create_cylinder(&storey(20, 0.48, 0.48, 0.28, 0.85))?.with_color(stripe_color);
    let cap = create_cylinder(&storey(20, 0.3, 0.45, 0.28, 1.05))?.with_color(Rgb::from_hex(ROOF)?);
    let spire = create_cylinder(&storey(16, 0.05, 0.2, 0.45, 1.25))?.with_color(mix_color(ROOF, -0.15)?);

    let stripe_lower = create_cylinder(&storey(20, 0.6, 0.6, 0.08, -0.2))?.with_color(stripe_color);
    let stripe_middle = create_cylinder(&storey(20, 0.55, 0.55, 0.08, 0.3))?.with_color(stripe_color);
    let stripe_upper = create_cylinder(&storey(20, 0.5, 0.5, 0.08, 0.7))?.with_color(stripe_color);

    let windows = create_arch_ring(&ArchRingSpec {
        segments: 12,
        radius: 0.54,
        height: 0.32,
        width: 0.12,
        depth: 0.18,
        y_offset: 0.78,
        color: mix_color(SHADOW, -0.2)?,
        platform_color: mix_color(SHADOW, 0.1)?,
    })?;

    let mut merged = Geometry::merge([
        &base,
        &lower,
        &middle,
        &upper,
        &bell_chamber,
        &cap,
        &spire,
        &stripe_lower,
        &stripe_middle,
        &stripe_upper,
        &windows,
    ]);
    merged.lean(LEAN_FACTOR);
    Ok(merged)
}
