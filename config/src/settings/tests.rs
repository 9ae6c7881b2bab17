//! Tests for the validated settings.

use super::*;

#[test]
fn default_settings_are_valid() {
    let generator = GeneratorConfig::default();
    assert_eq!(generator.models_dir, PathBuf::from(DEFAULT_MODELS_DIR));
    assert!(generator.parallel);

    let import = ImportConfig::default();
    assert_eq!(import.http_timeout, Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS));
    assert_eq!(import.wikidata_endpoint, WIKIDATA_ENDPOINT);
    assert_eq!(import.overpass_endpoint, OVERPASS_ENDPOINT);
}

#[test]
fn generator_rejects_empty_dir() {
    assert_eq!(
        GeneratorConfig::new("", false).unwrap_err(),
        ConfigError::EmptyPath("models_dir")
    );
}

#[test]
fn import_validates_inputs() {
    assert_eq!(
        ImportConfig::new(0, WIKIDATA_ENDPOINT, OVERPASS_ENDPOINT).unwrap_err(),
        ConfigError::InvalidTimeout(0)
    );
    assert_eq!(
        ImportConfig::new(1_000, "ftp://wikidata", OVERPASS_ENDPOINT).unwrap_err(),
        ConfigError::InvalidEndpoint("ftp://wikidata".to_string())
    );
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::EmptyPath("store");
    assert!(err.to_string().contains("store"));
}
