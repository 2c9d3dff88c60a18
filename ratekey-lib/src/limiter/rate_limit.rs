use serde::Deserialize;

use super::unit::RateLimitUnit;

/// A matched rate limit definition.
///
/// Only `unit` participates in key generation; the remaining fields travel with
/// the limit for the counter store.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests allowed per `unit`
    pub requests_per_unit: u32,
    /// Window unit
    pub unit: RateLimitUnit,
    /// Optional human readable name, e.g. the config path that produced the limit
    #[serde(default)]
    pub name: Option<String>,
}

impl RateLimit {
    pub fn new(requests_per_unit: u32, unit: RateLimitUnit) -> Self {
        Self { requests_per_unit, unit, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_name() -> Result<(), toml::de::Error> {
        let limit: RateLimit = toml::from_str(
            r#"
requests_per_unit = 20
unit = "MINUTE"
name = "edge.remote_address"
"#,
        )?;
        assert_eq!(
            limit,
            RateLimit::new(20, RateLimitUnit::Minute).with_name("edge.remote_address")
        );
        Ok(())
    }

    #[test]
    fn test_name_is_optional() -> Result<(), toml::de::Error> {
        let limit: RateLimit = toml::from_str("requests_per_unit = 1\nunit = \"second\"")?;
        assert_eq!(limit.name, None);
        assert!(limit.unit.is_per_second());
        Ok(())
    }
}
