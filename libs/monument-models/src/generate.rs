//! Batch generation: build each archetype and write it to `<dir>/<slug>.glb`.

use std::path::{Path, PathBuf};

use config::constants::MODEL_EXTENSION;
use config::settings::GeneratorConfig;
use rayon::prelude::*;
use tracing::info;

use crate::archetypes::Archetype;
use crate::error::ModelError;

/// Summary of one written model file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModel {
    pub archetype: Archetype,
    pub path: PathBuf,
    pub vertex_count: usize,
    pub index_count: usize,
    pub byte_length: usize,
}

/// Path of the model file for `archetype` inside `dir`.
pub fn model_path(dir: &Path, archetype: Archetype) -> PathBuf {
    dir.join(format!("{}.{MODEL_EXTENSION}", archetype.slug()))
}

/// Builds and writes a single archetype.
pub fn generate(archetype: Archetype, dir: &Path) -> Result<GeneratedModel, ModelError> {
    let geometry = archetype.build()?;
    let path = model_path(dir, archetype);
    let byte_length = monument_glb::write_glb(&path, &geometry)?;

    info!(
        slug = archetype.slug(),
        path = %path.display(),
        vertices = geometry.vertex_count(),
        indices = geometry.index_count(),
        bytes = byte_length,
        "generated model"
    );

    Ok(GeneratedModel {
        archetype,
        path,
        vertex_count: geometry.vertex_count(),
        index_count: geometry.index_count(),
        byte_length,
    })
}

/// Generates `archetypes` (every archetype when empty) into the configured
/// directory.
///
/// With `config.parallel` each archetype is built on the rayon pool; the
/// returned summaries keep the requested order either way. The first
/// failure aborts the run.
pub fn generate_all(
    config: &GeneratorConfig,
    archetypes: &[Archetype],
) -> Result<Vec<GeneratedModel>, ModelError> {
    let archetypes = if archetypes.is_empty() {
        &Archetype::ALL[..]
    } else {
        archetypes
    };
    let dir = config.models_dir.as_path();

    if config.parallel {
        archetypes
            .par_iter()
            .map(|&archetype| generate(archetype, dir))
            .collect()
    } else {
        archetypes
            .iter()
            .map(|&archetype| generate(archetype, dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_all_writes_every_model() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::new(dir.path().join("models"), true).unwrap();
        let models = generate_all(&config, &[]).unwrap();

        assert_eq!(models.len(), 3);
        for (model, archetype) in models.iter().zip(Archetype::ALL) {
            assert_eq!(model.archetype, archetype);
            let metadata = std::fs::metadata(&model.path).unwrap();
            assert_eq!(metadata.len() as usize, model.byte_length);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let dir = tempdir().unwrap();
        let first = generate(Archetype::Colosseum, &dir.path().join("a")).unwrap();
        let second = generate(Archetype::Colosseum, &dir.path().join("b")).unwrap();

        assert_eq!(first.vertex_count, second.vertex_count);
        assert_eq!(first.index_count, second.index_count);
        assert_eq!(first.byte_length, second.byte_length);
        assert_eq!(
            std::fs::read(&first.path).unwrap(),
            std::fs::read(&second.path).unwrap()
        );
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let dir = tempdir().unwrap();
        let parallel = GeneratorConfig::new(dir.path().join("p"), true).unwrap();
        let sequential = GeneratorConfig::new(dir.path().join("s"), false).unwrap();
        let only = [Archetype::Tower, Archetype::Duomo];

        let a = generate_all(&parallel, &only).unwrap();
        let b = generate_all(&sequential, &only).unwrap();
        assert_eq!(a[0].archetype, Archetype::Tower);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(std::fs::read(&x.path).unwrap(), std::fs::read(&y.path).unwrap());
        }
    }

    #[test]
    fn test_regeneration_overwrites() {
        let dir = tempdir().unwrap();
        let path = model_path(dir.path(), Archetype::Duomo);
        std::fs::write(&path, b"stale").unwrap();
        let model = generate(Archetype::Duomo, dir.path()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap().len(), model.byte_length);
    }
}
