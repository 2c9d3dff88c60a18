mod filter;
mod loader;
mod types;

pub use filter::{FiltersConfig, IpFilterConfig, UserIdFilterConfig};
pub use loader::{load_from_path, load_from_str};
pub use types::{Config, LoggingConfig};
