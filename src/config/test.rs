use super::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config_creation() {
    let config = BookstoreConfig::default();

    assert_eq!(
        config.server.http_addr,
        "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(
        config.server.grpc_addr,
        "127.0.0.1:8082".parse::<SocketAddr>().unwrap()
    );
    assert!(config.server.enable_http);
    assert!(config.server.enable_grpc);
    assert_eq!(config.server.shutdown_timeout, Duration::from_secs(5));

    assert_eq!(config.store.seed, SeedSet::Demo);
    assert!(config.store.default_theme.is_none());

    assert!(config.fault.enabled);
    assert_eq!(config.fault.signal_key, "x-grpc-test");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.logging.log_requests);
}

#[test]
fn test_config_validation_valid() {
    let config = BookstoreConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_same_addresses() {
    let mut config = BookstoreConfig::default();
    config.server.grpc_addr = config.server.http_addr;

    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("HTTP and gRPC addresses cannot be the same"));

    // Sharing an address is fine when only one transport runs
    config.server.enable_grpc = false;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_no_transport() {
    let mut config = BookstoreConfig::default();
    config.server.enable_http = false;
    config.server.enable_grpc = false;

    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("At least one of HTTP and gRPC must be enabled"));
}

#[test]
fn test_config_validation_signal_key() {
    let mut config = BookstoreConfig::default();
    config.fault.signal_key = String::new();
    assert!(config
        .validate()
        .unwrap_err()
        .to_string()
        .contains("Fault signal key cannot be empty"));

    config.fault.signal_key = "X-Grpc-Test".to_string();
    assert!(config
        .validate()
        .unwrap_err()
        .to_string()
        .contains("Invalid fault signal key"));

    config.fault.signal_key = "x-fault_2".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_invalid_log_level() {
    let mut config = BookstoreConfig::default();
    config.logging.level = "invalid_level".to_string();

    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid log level"));
}

#[test]
fn test_toml_serialization_deserialization() {
    let mut config = BookstoreConfig::default();
    config.store.default_theme = Some("Unsorted".to_string());

    let toml_content = toml::to_string_pretty(&config).expect("Failed to serialize to TOML");
    assert!(!toml_content.is_empty());

    let deserialized = BookstoreConfig::from_toml(&toml_content).expect("Failed to deserialize");

    assert_eq!(config.server.http_addr, deserialized.server.http_addr);
    assert_eq!(config.server.grpc_addr, deserialized.server.grpc_addr);
    assert_eq!(config.store, deserialized.store);
    assert_eq!(config.fault, deserialized.fault);
    assert_eq!(config.logging.level, deserialized.logging.level);
}

#[test]
fn test_toml_parsing_partial_sections() {
    let toml_content = r#"
[server]
http_addr = "0.0.0.0:9000"

[store]
seed = "classic"
default_theme = "General"

[fault]
signal_key = "x-test-fault"

[logging]
level = "debug"
format = "json"
"#;

    let config = BookstoreConfig::from_toml(toml_content).expect("Failed to parse TOML");

    assert_eq!(
        config.server.http_addr,
        "0.0.0.0:9000".parse::<SocketAddr>().unwrap()
    );
    // Unspecified fields fall back to defaults
    assert_eq!(
        config.server.grpc_addr,
        "127.0.0.1:8082".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(config.store.seed, SeedSet::Classic);
    assert_eq!(config.store.default_theme.as_deref(), Some("General"));
    assert_eq!(config.fault.signal_key, "x-test-fault");
    assert!(config.fault.enabled);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.logging.enable_colors);
}

#[test]
fn test_empty_toml_is_default() {
    let config = BookstoreConfig::from_toml("").expect("Empty TOML should parse");
    assert_eq!(config.store.seed, SeedSet::Demo);
    assert_eq!(config.fault.signal_key, DEFAULT_SIGNAL_KEY);
}

#[test]
fn test_file_io_operations() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("test_config.toml");

    let mut original_config = BookstoreConfig::default();
    original_config.store.seed = SeedSet::Empty;

    original_config
        .to_file(&config_path)
        .expect("Failed to save config to file");
    assert!(config_path.exists());

    let loaded_config =
        BookstoreConfig::from_file(&config_path).expect("Failed to load config from file");

    assert_eq!(loaded_config.store.seed, SeedSet::Empty);
    assert_eq!(original_config.logging.level, loaded_config.logging.level);
}

#[test]
fn test_file_io_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid_config.toml");

    fs::write(&config_path, "invalid toml content [[[").expect("Failed to write file");

    match BookstoreConfig::from_file(&config_path).unwrap_err() {
        ConfigError::Parse(msg) => assert!(!msg.is_empty()),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_file_io_invalid_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("bad_level.toml");

    fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").expect("Failed to write file");

    match BookstoreConfig::from_file(&config_path).unwrap_err() {
        ConfigError::Validation(msg) => assert!(msg.contains("loud")),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn test_file_io_nonexistent_file() {
    match BookstoreConfig::from_file("/nonexistent/path/config.toml").unwrap_err() {
        ConfigError::Io(_) => (),
        other => panic!("Expected IO error, got {other:?}"),
    }
}

#[test]
fn test_default_config_paths() {
    let paths = BookstoreConfig::default_config_paths();
    assert!(paths.len() >= 3);

    assert_eq!(paths[0], PathBuf::from("bookstore.toml"));
    let combined = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    assert!(combined.contains("/etc/bookstore"));
}

#[test]
#[serial]
fn test_load_default_prefers_working_directory_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp_dir.path().join("bookstore.toml"),
        "[store]\nseed = \"empty\"\n",
    )
    .expect("Failed to write file");

    let previous = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(temp_dir.path()).expect("chdir");
    let result = BookstoreConfig::load_default();
    std::env::set_current_dir(previous).expect("restore cwd");

    assert_eq!(result.expect("config should load").store.seed, SeedSet::Empty);
}

#[test]
fn test_duration_serialization_with_serde_with() {
    let config = BookstoreConfig::default();
    let toml_content = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_content.contains("shutdown_timeout = 5000"));
}

#[test]
fn test_shutdown_timeout_secs_rounds_up() {
    let config = BookstoreConfig::from_toml("[server]\nshutdown_timeout = 999\n")
        .expect("Failed to parse config");
    assert_eq!(config.server.shutdown_timeout_secs(), 1);

    let config = BookstoreConfig::from_toml("[server]\nshutdown_timeout = 3000\n")
        .expect("Failed to parse config");
    assert_eq!(config.server.shutdown_timeout_secs(), 3);

    let config = BookstoreConfig::from_toml("[server]\nshutdown_timeout = 0\n")
        .expect("Failed to parse config");
    assert_eq!(config.server.shutdown_timeout_secs(), 0);
}

#[test]
fn test_seed_set_serialization() {
    for seed in [SeedSet::Demo, SeedSet::Classic, SeedSet::Empty] {
        let serialized = serde_json::to_string(&seed).expect("Failed to serialize seed");
        let deserialized: SeedSet =
            serde_json::from_str(&serialized).expect("Failed to deserialize seed");
        assert_eq!(seed, deserialized);
    }
    assert_eq!(serde_json::to_string(&SeedSet::Classic).unwrap(), "\"classic\"");
}
