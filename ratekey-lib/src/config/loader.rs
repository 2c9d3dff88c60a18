use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{RateKeyError, Result};

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let txt = fs::read_to_string(p)?;
    load_from_str(&txt)
}

pub fn load_from_str(txt: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(txt)
        .map_err(|e| RateKeyError::Config(format!("Failed to parse config: {e}")))?;

    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<()> {
    if cfg.cache_key_prefix.chars().any(char::is_whitespace) {
        return Err(RateKeyError::Config(format!(
            "cache_key_prefix must not contain whitespace: {:?}",
            cfg.cache_key_prefix
        )));
    }

    let user_ids = &cfg.filters.user_id;
    if user_ids.allowlist.iter().chain(&user_ids.denylist).any(|id| id.is_empty()) {
        return Err(RateKeyError::Config("user id filter lists must not contain empty ids".into()));
    }

    Ok(())
}
