use ipnet::IpNet;
use std::net::IpAddr;

use super::{Filter, FilterAction};
use crate::config::IpFilterConfig;

/// Classifies remote addresses against CIDR allow/deny lists.
///
/// # Logic:
/// - Unparsable address: `Error`
/// - Address in the denylist: `Deny` (checked first, so it wins over the allowlist)
/// - Address in the allowlist: `Allow`
/// - Otherwise: `Error`, the address is not listed
#[derive(Debug, Clone, Default)]
pub struct IpFilter {
    allowlist: Vec<IpNet>,
    denylist: Vec<IpNet>,
}

impl IpFilter {
    pub fn new(config: &IpFilterConfig) -> Self {
        Self { allowlist: config.allowlist.clone(), denylist: config.denylist.clone() }
    }

    pub fn is_empty(&self) -> bool {
        self.allowlist.is_empty() && self.denylist.is_empty()
    }

    /// Classify an already parsed address.
    pub fn evaluate_ip(&self, ip: IpAddr) -> FilterAction {
        if self.denylist.iter().any(|net| net.contains(&ip)) {
            return FilterAction::Deny;
        }
        if self.allowlist.iter().any(|net| net.contains(&ip)) {
            return FilterAction::Allow;
        }
        FilterAction::Error(format!("remote address {ip} is not listed"))
    }
}

impl Filter for IpFilter {
    fn evaluate(&self, value: &str) -> FilterAction {
        match value.trim().parse::<IpAddr>() {
            Ok(ip) => self.evaluate_ip(ip),
            Err(e) => FilterAction::Error(format!("invalid IP address '{value}': {e}")),
        }
    }
}
