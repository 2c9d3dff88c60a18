use ipnet::IpNet;
use serde::Deserialize;

/// Filter lists consulted during key generation
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct FiltersConfig {
    /// Remote address allow/deny lists
    #[serde(default)]
    pub ip: IpFilterConfig,
    /// User id allow/deny lists
    #[serde(default)]
    pub user_id: UserIdFilterConfig,
}

/// IP filtering (ACL) configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct IpFilterConfig {
    /// Addresses in these networks bypass rate limiting entirely
    /// Supports CIDR notation: ["127.0.0.1/32", "192.168.1.0/24", "::1/128"]
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_ip_networks")]
    pub allowlist: Vec<IpNet>,
    /// Addresses in these networks share the blocked counter
    /// Supports CIDR notation: ["10.0.0.0/8", "172.16.0.0/12"]
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_ip_networks")]
    pub denylist: Vec<IpNet>,
}

/// User id filtering configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct UserIdFilterConfig {
    /// User ids that bypass rate limiting entirely
    #[serde(default)]
    pub allowlist: Vec<String>,
    /// User ids that share the blocked counter
    #[serde(default)]
    pub denylist: Vec<String>,
}

/// Custom deserializer for IP networks that reports the offending entry
fn deserialize_ip_networks<'de, D>(deserializer: D) -> Result<Vec<IpNet>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let strings: Vec<String> = Vec::deserialize(deserializer)?;
    let mut networks = Vec::with_capacity(strings.len());

    for s in strings {
        match s.parse::<IpNet>() {
            Ok(net) => networks.push(net),
            Err(e) => {
                return Err(serde::de::Error::custom(format!("Invalid IP network '{}': {}", s, e)));
            }
        }
    }

    Ok(networks)
}
