//! Round-trip tests for config persistence on disk.

use form_pages_config::{Config, LogLevel, PageSeed};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(!path.exists(), "loading must not create the file");
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = Config {
        scroll_amount: 64.0,
        log_level: LogLevel::Debug,
        pages: vec![PageSeed::new(10, "Welcome"), PageSeed::new(11, "Thanks")],
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tab_bar_height: 0.0\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}
