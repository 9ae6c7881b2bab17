//! # Monument Mesh
//!
//! Procedural geometry for the low-poly monument previews.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cylinder, box, dome) → transform (color, translate, rotate, lean) → merge
//! ```
//!
//! All geometry calculations use f64 internally. Conversion to f32 only
//! happens when a geometry is serialized into a binary container.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use monument_mesh::{create_box, BoxSpec, Geometry, Rgb};
//!
//! let column = create_box(&BoxSpec { width: 0.2, height: 1.0, depth: 0.2, y_offset: 0.5 })
//!     .unwrap()
//!     .with_color(Rgb::from_hex("#dec4a0").unwrap());
//! let shifted = column.translated(DVec3::new(1.0, 0.0, 0.0));
//! let merged = Geometry::merge([&column, &shifted]);
//! assert_eq!(merged.vertex_count(), 48);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod primitives;
pub mod transform;

pub use color::{mix_color, Rgb};
pub use error::{MeshError, MeshResult};
pub use geometry::Geometry;
pub use primitives::{
    create_box, create_cylinder, create_dome, BoxSpec, CylinderSpec, DomeSpec,
};
