use thiserror::Error;

/// Errors raised at the configuration and command-line boundaries.
///
/// Cache key generation itself never fails; see [`crate::limiter::CacheKeyGenerator`].
#[derive(Error, Debug)]
pub enum RateKeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid rate limit unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid descriptor entry: {0}")]
    InvalidEntry(String),
}

pub type Result<T> = std::result::Result<T, RateKeyError>;
