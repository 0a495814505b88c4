use depsolve_core::config::{dirs_path, GlobalConfig, VersionOrder};

#[test]
fn test_global_config_default_order_is_precedence() {
    let config = GlobalConfig::default();
    assert_eq!(config.resolve.version_order, VersionOrder::Precedence);
    assert!(config.resolve.prereleases);
}

#[test]
fn test_global_config_default_baseline() {
    let config = GlobalConfig::default();
    assert_eq!(config.verify.baseline, vec!["pip", "setuptools", "wheel"]);
}

#[test]
fn test_global_config_defaults_from_empty_toml() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert!(config.trace.enabled);
    assert!(config.resolve.prereleases);
    assert_eq!(config.verify.baseline.len(), 3);
}

#[test]
fn test_dirs_path_contains_depsolve() {
    let path = dirs_path();
    assert!(path.ends_with(".depsolve"));
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[resolve]
version-order = "lexical"
prereleases = false

[verify]
baseline = ["setuptools"]

[trace]
enabled = false
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.resolve.version_order, VersionOrder::Lexical);
    assert!(!config.resolve.prereleases);
    assert_eq!(config.verify.baseline, vec!["setuptools"]);
    assert!(!config.trace.enabled);
}

#[test]
fn test_load_from_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[resolve]\nversion-order = \"lexical\"\n").unwrap();
    let config = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(config.resolve.version_order, VersionOrder::Lexical);
}

#[test]
fn test_load_from_malformed_path_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[resolve\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}

#[test]
fn test_version_order_from_str() {
    assert_eq!("Lexical".parse::<VersionOrder>().unwrap(), VersionOrder::Lexical);
    assert_eq!(
        "precedence".parse::<VersionOrder>().unwrap(),
        VersionOrder::Precedence
    );
    assert!("newest".parse::<VersionOrder>().is_err());
    assert_eq!(VersionOrder::Lexical.to_string(), "lexical");
}
