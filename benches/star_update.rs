// Star update benchmarks
//
// Measures one simulation tick across star counts, with the desktop stride of 1
// and the mobile stride of 2.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_engine::particles::{explode_star, populate_stars, update_stars};
use starfield_engine::{detect_environment, DeviceSignals, StarData, StarfieldConfig};
use std::time::Duration;

const STAR_COUNTS: &[usize] = &[1_500, 6_000, 50_000];
const MOBILE_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile";

fn seeded_field(config: &StarfieldConfig, count: usize) -> (StarData, StdRng) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut stars = StarData::new(count);
    populate_stars(&mut stars, config, &mut rng);
    (stars, rng)
}

fn bench_update_desktop(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let env = detect_environment(&config, &DeviceSignals::default());
    let mut group = c.benchmark_group("star_update_desktop");

    for &count in STAR_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (mut stars, mut rng) = seeded_field(&config, count);
            let mut frame = 0u64;
            b.iter(|| {
                frame += 1;
                let changes = update_stars(
                    &mut stars,
                    &config,
                    &env,
                    &mut rng,
                    black_box(1.0 / 60.0),
                    frame as f64 * 16.0,
                    frame,
                );
                black_box(changes);
            });
        });
    }

    group.finish();
}

fn bench_update_mobile_stride(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let signals = DeviceSignals::default().with_user_agent(MOBILE_AGENT);
    let env = detect_environment(&config, &signals);
    let mut group = c.benchmark_group("star_update_mobile");

    for &count in STAR_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (mut stars, mut rng) = seeded_field(&config, count);
            let mut frame = 0u64;
            b.iter(|| {
                frame += 1;
                black_box(update_stars(
                    &mut stars,
                    &config,
                    &env,
                    &mut rng,
                    1.0 / 60.0,
                    frame as f64 * 16.0,
                    frame,
                ));
            });
        });
    }

    group.finish();
}

fn bench_update_with_explosions(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let env = detect_environment(&config, &DeviceSignals::default());
    let count = 6_000;
    let (mut stars, mut rng) = seeded_field(&config, count);

    // A tenth of the field mid-explosion
    for index in (0..count).step_by(10) {
        explode_star(&mut stars, &config, &mut rng, index, 0.0);
    }

    c.bench_function("star_update_exploding_tenth", |b| {
        b.iter(|| {
            black_box(update_stars(
                &mut stars,
                &config,
                &env,
                &mut rng,
                1.0 / 60.0,
                black_box(500.0),
                0,
            ));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_update_desktop, bench_update_mobile_stride, bench_update_with_explosions
);
criterion_main!(benches);
