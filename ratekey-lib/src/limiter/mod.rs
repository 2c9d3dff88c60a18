//! Cache key generation for a distributed rate limiter.
//!
//! Every node that shares a counter backend must derive byte-identical keys for the
//! same logical request, so the layout produced here is a compatibility surface:
//!
//! ```text
//! <prefix><domain>_<key1>_<value1>_<key2>_<value2>_<bucket>
//! ```
//!
//! where `bucket` is `now` floored to the window size of the matched limit's unit.
//!
//! # Components
//!
//! 1. **Unit** (`unit.rs`): rate limit units and their window size in seconds.
//! 2. **Descriptor** (`descriptor.rs`): ordered key/value dimensions of a request.
//! 3. **RateLimit** (`rate_limit.rs`): the matched limit definition.
//! 4. **BufferPool** (`buffer_pool.rs`): sharded pool of reusable string buffers.
//! 5. **CacheKeyGenerator** (`cache_key.rs`): assembles the key, consulting the
//!    IP and user-id filters for the edge domain.
//!
//! # Example Usage
//!
//! ```ignore
//! use ratekey_lib::{CacheKeyGenerator, Descriptor, NoopFilter, RateLimit, RateLimitUnit};
//!
//! let generator = CacheKeyGenerator::new("rl_");
//! let descriptor = Descriptor::from_pairs([("k1", "v1")]);
//! let limit = RateLimit::new(10, RateLimitUnit::Minute);
//!
//! let key = generator.generate_cache_key(
//!     "foo",
//!     &descriptor,
//!     Some(&limit),
//!     125,
//!     &NoopFilter,
//!     &NoopFilter,
//! );
//! assert_eq!(key.key, "rl_foo_k1_v1_120");
//! ```

mod buffer_pool;
mod cache_key;
mod descriptor;
mod rate_limit;
mod unit;

pub use buffer_pool::{BufferPool, PooledBuffer};
pub use cache_key::{
    CacheKey, CacheKeyGenerator, CACHE_KEY_BLOCKED, EDGE_PER_IP_DOMAIN, ENTRY_KEY_REMOTE_ADDR,
    ENTRY_KEY_USER_ID, SEPARATOR,
};
pub use descriptor::{Descriptor, DescriptorEntry};
pub use rate_limit::RateLimit;
pub use unit::{unit_to_divider, window_start, RateLimitUnit};
