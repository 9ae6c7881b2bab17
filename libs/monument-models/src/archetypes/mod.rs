//! # Archetypes
//!
//! One fixed recipe per monument. Recipes use literal palettes and shape
//! parameters only, so their output is reproducible byte-for-byte.

pub mod colosseum;
pub mod duomo;
pub mod tower;

use std::fmt;
use std::str::FromStr;

use monument_mesh::{Geometry, MeshResult};

use crate::error::ModelError;

/// The monuments with a procedural model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Amphitheater
    Colosseum,
    /// Domed cathedral
    Duomo,
    /// Leaning tower
    Tower,
}

impl Archetype {
    /// Every archetype, in generation order.
    pub const ALL: [Archetype; 3] = [Archetype::Colosseum, Archetype::Duomo, Archetype::Tower];

    /// Slug of the monument; also the model file stem.
    pub fn slug(self) -> &'static str {
        match self {
            Archetype::Colosseum => "colosseum",
            Archetype::Duomo => "duomo",
            Archetype::Tower => "tower",
        }
    }

    /// Runs the recipe.
    pub fn build(self) -> MeshResult<Geometry> {
        match self {
            Archetype::Colosseum => colosseum::build(),
            Archetype::Duomo => duomo::build(),
            Archetype::Tower => tower::build(),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Archetype {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.slug() == s)
            .ok_or_else(|| ModelError::UnknownArchetype(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
