//! Allow/deny classification of descriptor values.
//!
//! Filters are consulted by the cache key generator for the edge per-IP domain.
//! A verdict of [`FilterAction::Allow`] bypasses rate limiting, [`FilterAction::Deny`]
//! redirects the request onto the shared blocked counter, and
//! [`FilterAction::Error`] leaves key generation unchanged.
//!
//! Implementations must be in-memory and non-blocking: they run on the request
//! hot path for every descriptor entry they are asked about.

mod ip;
mod user_id;

pub use ip::IpFilter;
pub use user_id::UserIdFilter;

use std::sync::Arc;

use crate::config::FiltersConfig;

/// Verdict returned by a [`Filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Value is allowlisted; skip enforcement
    Allow,
    /// Value is denylisted; count against the blocked key
    Deny,
    /// No verdict could be reached; carries the reason
    Error(String),
}

impl FilterAction {
    pub fn is_allow(&self) -> bool {
        matches!(self, FilterAction::Allow)
    }

    pub fn is_deny(&self) -> bool {
        matches!(self, FilterAction::Deny)
    }

    /// Reason attached to an [`FilterAction::Error`] verdict.
    pub fn reason(&self) -> Option<&str> {
        match self {
            FilterAction::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Classifies a raw descriptor value against allow/deny lists.
pub trait Filter: Send + Sync {
    fn evaluate(&self, value: &str) -> FilterAction;
}

impl<F: Filter + ?Sized> Filter for &F {
    fn evaluate(&self, value: &str) -> FilterAction {
        (**self).evaluate(value)
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn evaluate(&self, value: &str) -> FilterAction {
        (**self).evaluate(value)
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn evaluate(&self, value: &str) -> FilterAction {
        (**self).evaluate(value)
    }
}

/// Filter that never reaches a verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFilter;

impl Filter for NoopFilter {
    fn evaluate(&self, _value: &str) -> FilterAction {
        FilterAction::Error("filtering disabled".to_string())
    }
}

/// The IP and user id filters built from configuration.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub ip: Arc<IpFilter>,
    pub user_id: Arc<UserIdFilter>,
}

impl FilterSet {
    pub fn from_config(config: &FiltersConfig) -> Self {
        Self {
            ip: Arc::new(IpFilter::new(&config.ip)),
            user_id: Arc::new(UserIdFilter::new(&config.user_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_helpers() {
        assert!(FilterAction::Allow.is_allow());
        assert!(FilterAction::Deny.is_deny());
        assert_eq!(FilterAction::Allow.reason(), None);
        assert_eq!(FilterAction::Error("boom".into()).reason(), Some("boom"));
    }

    #[test]
    fn test_noop_never_decides() {
        let action = NoopFilter.evaluate("1.2.3.4");
        assert!(!action.is_allow() && !action.is_deny());
        assert_eq!(action.reason(), Some("filtering disabled"));
    }

    fn evaluate_with<F: Filter>(filter: F) -> FilterAction {
        filter.evaluate("x")
    }

    #[test]
    fn test_wrappers_delegate() {
        let expected = NoopFilter.evaluate("x");
        let boxed: Box<dyn Filter> = Box::new(NoopFilter);
        let shared: Arc<dyn Filter> = Arc::new(NoopFilter);
        assert_eq!(evaluate_with(boxed), expected);
        assert_eq!(evaluate_with(shared), expected);
        assert_eq!(evaluate_with(&NoopFilter), expected);
    }
}
