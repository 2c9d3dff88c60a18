#![forbid(unsafe_code)]

use clap::Parser;
use ratekey_lib::{
    config::load_from_path, telemetry::init_tracing, CacheKey, CacheKeyGenerator, Config,
    Descriptor, FilterSet, RateKeyError, RateLimit, RateLimitUnit,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute distributed rate limit cache keys")]
struct Cli {
    /// Path to configuration TOML file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE", env = "RATEKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Rate limit domain
    #[arg(short, long)]
    domain: String,

    /// Descriptor entry as KEY=VALUE; repeat to add entries in order
    #[arg(short, long = "entry", value_name = "KEY=VALUE", value_parser = parse_entry)]
    entries: Vec<(String, String)>,

    /// Unit of the matched limit; omit when no limit matches
    #[arg(short, long)]
    unit: Option<RateLimitUnit>,

    /// Unix time in seconds (defaults to now)
    #[arg(long)]
    now: Option<i64>,
}

fn parse_entry(raw: &str) -> Result<(String, String), RateKeyError> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| RateKeyError::InvalidEntry(format!("expected KEY=VALUE, got '{raw}'")))
}

fn render(key: &CacheKey) -> String {
    format!("key={} per_second={}", key.key, key.per_second)
}

fn unix_now() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or(0)
}

fn main() {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => match load_from_path(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("failed to load configuration: {err}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Err(err) = init_tracing(&cfg.logging.level, cfg.logging.show_target) {
        eprintln!("failed to initialize tracing: {err}");
        std::process::exit(1);
    }

    let generator = CacheKeyGenerator::new(cfg.cache_key_prefix.clone());
    let filters = FilterSet::from_config(&cfg.filters);
    let descriptor = Descriptor::from_pairs(cli.entries);
    let limit = cli.unit.map(|unit| RateLimit::new(0, unit));
    let now = cli.now.unwrap_or_else(unix_now);

    info!(domain = %cli.domain, entries = descriptor.len(), ?cli.unit, now, "generating cache key");

    let key = generator.generate_cache_key(
        &cli.domain,
        &descriptor,
        limit.as_ref(),
        now,
        filters.ip.as_ref(),
        filters.user_id.as_ref(),
    );
    if key.is_blocked() {
        warn!(domain = %cli.domain, "request denied by filter");
    }

    println!("{}", render(&key));
}
