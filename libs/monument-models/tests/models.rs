//! Generated model files read back through the container reader.

use config::settings::GeneratorConfig;
use monument_glb::GlbFile;
use monument_models::{generate_all, Archetype};

#[test]
fn test_generated_files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), true).unwrap();
    let models = generate_all(&config, &[]).unwrap();

    for model in &models {
        let geometry = model.archetype.build().unwrap();
        let file = GlbFile::read(&model.path).unwrap();

        assert_eq!(file.positions().unwrap().len(), geometry.vertex_count());
        assert_eq!(file.indices().unwrap(), geometry.indices());
        let summary = file.summary().unwrap();
        assert_eq!(summary.index_count, model.index_count);
        assert!(summary.has_colors);
    }
}

#[test]
fn test_file_names_follow_slugs() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), false).unwrap();
    generate_all(&config, &[Archetype::Tower]).unwrap();

    assert!(dir.path().join("tower.glb").is_file());
    assert!(!dir.path().join("colosseum.glb").exists());
}

#[test]
fn test_every_archetype_fits_sixteen_bit_indices() {
    for archetype in Archetype::ALL {
        let geometry = archetype.build().unwrap();
        assert!(geometry.vertex_count() <= usize::from(u16::MAX) + 1);
    }
}
