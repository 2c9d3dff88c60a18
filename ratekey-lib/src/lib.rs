#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod filter;
pub mod limiter;
pub mod telemetry;

pub use config::{load_from_path, Config};
pub use error::{RateKeyError, Result};
pub use filter::{Filter, FilterAction, FilterSet, IpFilter, NoopFilter, UserIdFilter};
pub use limiter::{
    unit_to_divider, CacheKey, CacheKeyGenerator, Descriptor, DescriptorEntry, RateLimit,
    RateLimitUnit,
};
