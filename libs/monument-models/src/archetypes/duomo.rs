//! Domed cathedral: cruciform nave, drum, dome and lantern.

use glam::DVec3;
use monument_mesh::{
    create_box, create_cylinder, create_dome, mix_color, BoxSpec, CylinderSpec, DomeSpec,
    Geometry, MeshResult, Rgb,
};

const BASE: &str = "#dcd4c5";
const ACCENT: &str = "#c2b6a1";
const DOME: &str = "#94a28f";
const DOME_LIGHT: &str = "#aeb9a5";
const ROOF: &str = "#c57c4a";

fn block(width: f64, depth: f64, height: f64, y_offset: f64) -> BoxSpec {
    BoxSpec {
        width,
        height,
        depth,
        y_offset,
    }
}

fn drum(segments: u32, radius_top: f64, radius_bottom: f64, height: f64, y_offset: f64) -> CylinderSpec {
    CylinderSpec {
        segments,
        radius_top,
        radius_bottom,
        height,
        y_offset,
    }
}

/// Builds the duomo mesh.
pub fn build() -> MeshResult<Geometry> {
    let base_color = Rgb::from_hex(BASE)?;
    let accent = Rgb::from_hex(ACCENT)?;
    let roof = Rgb::from_hex(ROOF)?;
    let dome_light = Rgb::from_hex(DOME_LIGHT)?;

    let base = create_box(&block(2.0, 1.4, 0.3, -0.65))?.with_color(base_color);
    let nave = create_box(&block(1.2, 1.0, 0.8, -0.1))?.with_color(accent);
    let transept = create_box(&block(0.6, 1.3, 0.7, -0.05))?
        .with_color(accent)
        .translated(DVec3::new(0.0, 0.05, 0.0));
    let facade = create_box(&block(1.0, 0.3, 0.9, -0.05))?
        .with_color(base_color)
        .translated(DVec3::new(0.0, 0.0, 0.65));

    let drum_ring = create_cylinder(&drum(24, 0.62, 0.72, 0.5, 0.45))?
        .with_color(mix_color(DOME, -0.1)?);
    let dome = create_dome(&DomeSpec {
        radius: 0.85,
        segments: 24,
        rings: 14,
        y_offset: 0.8,
    })?
    .with_color(Rgb::from_hex(DOME)?);
    let lantern_base = create_cylinder(&drum(18, 0.24, 0.28, 0.25, 1.4))?.with_color(dome_light);
    let lantern = create_cylinder(&drum(12, 0.12, 0.18, 0.35, 1.6))?.with_color(dome_light);
    let spire = create_cylinder(&drum(12, 0.02, 0.08, 0.35, 1.85))?
        .with_color(mix_color(DOME_LIGHT, -0.3)?);

    let side_chapel = create_box(&block(0.5, 0.6, 0.5, -0.25))?
        .with_color(base_color)
        .translated(DVec3::new(0.9, -0.05, 0.0));
    let side_chapel_mirror = side_chapel.translated(DVec3::new(-1.8, 0.0, 0.0));

    let front_roof = create_box(&block(1.0, 0.6, 0.2, 0.35))?
        .with_color(roof)
        .translated(DVec3::new(0.0, 0.4, 0.5));
    let side_roof = create_box(&block(0.6, 1.0, 0.18, 0.2))?
        .with_color(roof)
        .translated(DVec3::new(0.6, 0.3, 0.0));
    let side_roof_mirror = side_roof.translated(DVec3::new(-1.2, 0.0, 0.0));

    Ok(Geometry::merge([
        &base,
        &nave,
        &transept,
        &facade,
        &drum_ring,
        &dome,
        &lantern_base,
        &lantern,
        &spire,
        &side_chapel,
        &side_chapel_mirror,
        &front_roof,
        &side_roof,
        &side_roof_mirror,
    ]))
}
