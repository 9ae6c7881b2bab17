//! # Primitives
//!
//! Builders for the basic solids monuments are assembled from. Every builder
//! returns a fresh [`Geometry`](crate::Geometry) centred on the Y axis and
//! shifted vertically by its `y_offset`.

pub mod cuboid;
pub mod cylinder;
pub mod dome;

pub use cuboid::{create_box, BoxSpec};
pub use cylinder::{create_cylinder, CylinderSpec};
pub use dome::{create_dome, DomeSpec};

use config::constants::MIN_SEGMENTS;

use crate::error::{MeshError, MeshResult};

fn require_segments(primitive: &'static str, name: &str, value: u32) -> MeshResult<()> {
    if value < MIN_SEGMENTS {
        return Err(MeshError::invalid_parameter(
            primitive,
            format!("{name} must be at least {MIN_SEGMENTS}: {value}"),
        ));
    }
    Ok(())
}

fn require_positive(primitive: &'static str, name: &str, value: f64) -> MeshResult<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(MeshError::invalid_parameter(
            primitive,
            format!("{name} must be positive: {value}"),
        ));
    }
    Ok(())
}
