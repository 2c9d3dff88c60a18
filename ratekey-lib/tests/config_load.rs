use ratekey_lib::config::load_from_path;
use ratekey_lib::RateKeyError;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_full_file() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
cache_key_prefix = "rl_"

[logging]
level = "debug"
show_target = true

[filters.ip]
allowlist = ["10.0.0.0/8", "::1/128"]
denylist = ["192.0.2.0/24"]

[filters.user_id]
allowlist = ["svc-health"]
denylist = ["abuser-1", "abuser-2"]
"#
    )?;

    let config = load_from_path(file.path())?;
    assert_eq!(config.cache_key_prefix, "rl_");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.show_target);
    assert_eq!(config.filters.ip.allowlist.len(), 2);
    assert_eq!(config.filters.ip.denylist[0].to_string(), "192.0.2.0/24");
    assert_eq!(config.filters.user_id.allowlist, vec!["svc-health".to_string()]);
    assert_eq!(config.filters.user_id.denylist.len(), 2);
    Ok(())
}

#[test]
fn test_config_defaults_for_missing_sections(
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, r#"cache_key_prefix = "edge_""#)?;

    let config = load_from_path(file.path())?;
    assert_eq!(config.cache_key_prefix, "edge_");
    assert_eq!(config.logging.level, "info");
    assert!(config.filters.ip.allowlist.is_empty());
    assert!(config.filters.user_id.denylist.is_empty());
    Ok(())
}

#[test]
fn test_config_missing_file() {
    let result = load_from_path(Path::new("/nonexistent/ratekey.toml"));
    assert!(matches!(result, Err(RateKeyError::Io(ref e)) if e.kind() == ErrorKind::NotFound));
}

#[test]
fn test_config_invalid_toml() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "cache_key_prefix = ")?;

    let result = load_from_path(file.path());
    assert!(matches!(result, Err(RateKeyError::Config(ref msg)) if msg.contains("parse")));
    Ok(())
}

#[test]
fn test_config_invalid_cidr_names_entry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[filters.ip]
denylist = ["10.0.0.0/33"]
"#
    )?;

    let result = load_from_path(file.path());
    assert!(matches!(result, Err(RateKeyError::Config(ref msg)) if msg.contains("10.0.0.0/33")));
    Ok(())
}

#[test]
fn test_bundled_sample_config_is_valid() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/basic.toml");
    let config = load_from_path(path)?;
    assert_eq!(config.cache_key_prefix, "ratelimit_");
    assert_eq!(config.filters.ip.allowlist.len(), 2);
    Ok(())
}
