//! Micro benchmarks for cache key generation.
//! Pure CPU - no network, no IO.
//!
//! ```bash
//! cargo bench --bench bench_cache_key
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratekey_lib::config::load_from_str;
use ratekey_lib::limiter::EDGE_PER_IP_DOMAIN;
use ratekey_lib::{CacheKeyGenerator, Descriptor, FilterSet, NoopFilter, RateLimit, RateLimitUnit};
use std::hint::black_box;

const FILTERS: &str = r#"
[filters.ip]
allowlist = ["10.0.0.0/8"]
denylist = ["192.0.2.0/24"]

[filters.user_id]
allowlist = ["svc-health"]
denylist = ["abuser"]
"#;

fn descriptor_with(entries: usize) -> Descriptor {
    (0..entries).fold(Descriptor::default(), |mut d, i| {
        d.push(format!("key{i}"), format!("value-{i}"));
        d
    })
}

fn bench_generate(c: &mut Criterion) {
    let generator = CacheKeyGenerator::new("rl_");
    let limit = RateLimit::new(100, RateLimitUnit::Minute);

    let mut group = c.benchmark_group("generate_cache_key");
    for entries in [1usize, 4, 16] {
        let descriptor = descriptor_with(entries);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(entries), &descriptor, |b, d| {
            b.iter(|| {
                generator.generate_cache_key(
                    black_box("api"),
                    black_box(d),
                    Some(&limit),
                    black_box(1_700_000_123),
                    &NoopFilter,
                    &NoopFilter,
                )
            })
        });
    }
    group.finish();
}

fn bench_edge_filters(c: &mut Criterion) {
    let generator = CacheKeyGenerator::new("rl_");
    let limit = RateLimit::new(100, RateLimitUnit::Second);
    let config = match load_from_str(FILTERS) {
        Ok(config) => config,
        Err(e) => panic!("benchmark filter config is invalid: {e}"),
    };
    let filters = FilterSet::from_config(&config.filters);

    let cases = [
        ("unlisted", Descriptor::from_pairs([("remote_address", "1.2.3.4"), ("user_id", "a")])),
        ("denied", Descriptor::from_pairs([("remote_address", "192.0.2.9")])),
        ("allowed", Descriptor::from_pairs([("remote_address", "10.1.1.1")])),
    ];

    let mut group = c.benchmark_group("generate_cache_key_edge");
    for (name, descriptor) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                generator.generate_cache_key(
                    EDGE_PER_IP_DOMAIN,
                    black_box(descriptor),
                    Some(&limit),
                    black_box(1_700_000_123),
                    filters.ip.as_ref(),
                    filters.user_id.as_ref(),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(cache_key_benches, bench_generate, bench_edge_filters);
criterion_main!(cache_key_benches);
