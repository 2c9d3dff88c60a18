use ahash::AHashSet;

use super::{Filter, FilterAction};
use crate::config::UserIdFilterConfig;

/// Classifies user ids against exact-match allow/deny sets.
///
/// The denylist is checked first; an id in neither set yields `Error`.
#[derive(Debug, Clone, Default)]
pub struct UserIdFilter {
    allowlist: AHashSet<String>,
    denylist: AHashSet<String>,
}

impl UserIdFilter {
    pub fn new(config: &UserIdFilterConfig) -> Self {
        Self {
            allowlist: config.allowlist.iter().cloned().collect(),
            denylist: config.denylist.iter().cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allowlist.is_empty() && self.denylist.is_empty()
    }
}

impl Filter for UserIdFilter {
    fn evaluate(&self, value: &str) -> FilterAction {
        if value.is_empty() {
            return FilterAction::Error("empty user id".to_string());
        }
        if self.denylist.contains(value) {
            return FilterAction::Deny;
        }
        if self.allowlist.contains(value) {
            return FilterAction::Allow;
        }
        FilterAction::Error(format!("user id {value} is not listed"))
    }
}
