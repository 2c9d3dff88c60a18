use super::buffer_pool::BufferPool;
use super::descriptor::Descriptor;
use super::rate_limit::RateLimit;
use super::unit::window_start;
use crate::filter::{Filter, FilterAction};

/// Separator written after the domain and after every entry key and value.
pub const SEPARATOR: char = '_';
/// Domain whose descriptors are checked against the IP and user id filters.
pub const EDGE_PER_IP_DOMAIN: &str = "edge_proxy_per_ip";
pub const ENTRY_KEY_REMOTE_ADDR: &str = "remote_address";
pub const ENTRY_KEY_USER_ID: &str = "user_id";
/// Shared key that every denied request of the edge domain counts against.
pub const CACHE_KEY_BLOCKED: &str = "_user_blocked";

/// Key of the shared counter for one descriptor in one time window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CacheKey {
    /// Counter key; empty when the request must not be rate limited
    pub key: String,
    /// True if the key belongs to a limit with a `Second` unit
    pub per_second: bool,
}

impl CacheKey {
    /// Key telling the counter store to skip enforcement.
    pub fn bypass() -> Self {
        Self { key: String::new(), per_second: false }
    }

    pub fn blocked() -> Self {
        Self { key: CACHE_KEY_BLOCKED.to_string(), per_second: false }
    }

    pub fn is_bypass(&self) -> bool {
        self.key.is_empty()
    }

    pub fn is_blocked(&self) -> bool {
        self.key == CACHE_KEY_BLOCKED
    }
}

/// Builds cache keys for limit lookups.
///
/// The generator is shared by all request handlers; its only mutable state is the
/// internal buffer pool, so `generate_cache_key` can be called concurrently.
#[derive(Debug)]
pub struct CacheKeyGenerator {
    prefix: String,
    pool: BufferPool,
}

impl CacheKeyGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_pool(prefix, BufferPool::new())
    }

    pub fn with_pool(prefix: impl Into<String>, pool: BufferPool) -> Self {
        Self { prefix: prefix.into(), pool }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of pooled buffers currently idle.
    pub fn idle_buffers(&self) -> usize {
        self.pool.idle()
    }

    /// Generate the cache key for a limit lookup.
    ///
    /// # Arguments
    /// * `domain` - Rate limit domain
    /// * `descriptor` - Ordered descriptor entries
    /// * `limit` - Matched limit; `None` yields a bypass key
    /// * `now` - Current unix time in seconds
    /// * `ip_filter` - Consulted for `remote_address` entries of the edge domain
    /// * `uid_filter` - Consulted for `user_id` entries of the edge domain
    ///
    /// # Returns
    /// * an empty key when there is no limit or a filter allows the request
    /// * [`CACHE_KEY_BLOCKED`] when a filter denies the request
    /// * `<prefix><domain>_<k>_<v>_..._<bucket>` otherwise
    pub fn generate_cache_key(
        &self,
        domain: &str,
        descriptor: &Descriptor,
        limit: Option<&RateLimit>,
        now: i64,
        ip_filter: &dyn Filter,
        uid_filter: &dyn Filter,
    ) -> CacheKey {
        let Some(limit) = limit else {
            return CacheKey::bypass();
        };

        // Returned to the pool on every exit, including the filter short-circuits.
        let mut buf = self.pool.acquire();

        buf.push_str(&self.prefix);
        buf.push_str(domain);
        buf.push(SEPARATOR);

        let edge_domain = domain == EDGE_PER_IP_DOMAIN;
        for entry in descriptor {
            if edge_domain {
                tracing::debug!(
                    key = %entry.key,
                    value = %entry.value,
                    "checking descriptor entry"
                );

                if entry.key == ENTRY_KEY_REMOTE_ADDR {
                    match ip_filter.evaluate(&entry.value) {
                        FilterAction::Allow => return CacheKey::bypass(),
                        FilterAction::Deny => return CacheKey::blocked(),
                        FilterAction::Error(reason) => tracing::warn!("{reason}"),
                    }
                } else if entry.key == ENTRY_KEY_USER_ID {
                    match uid_filter.evaluate(&entry.value) {
                        FilterAction::Allow => return CacheKey::bypass(),
                        FilterAction::Deny => return CacheKey::blocked(),
                        FilterAction::Error(_) => {}
                    }
                }
            }

            buf.push_str(&entry.key);
            buf.push(SEPARATOR);
            buf.push_str(&entry.value);
            buf.push(SEPARATOR);
        }

        buf.push_display(window_start(now, limit.unit));

        CacheKey { key: buf.as_str().to_owned(), per_second: limit.unit.is_per_second() }
    }
}
