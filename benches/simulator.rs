//! Benchmarks for CPU-side stepping.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;

use confetti::spawn::{spawn_particle, SpawnContext};
use confetti::time::ManualClock;
use confetti::{advance, ConfettiConfig, Particle, ParticleSimulator, Physics, Viewport};

const VIEWPORT: Viewport = Viewport::new(1920.0, 100_000.0);

fn particles(count: u64) -> Vec<Particle> {
    let config = ConfettiConfig::default();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut ctx = SpawnContext::new(&mut rng, VIEWPORT);
    (0..count).map(|id| spawn_particle(&config, &mut ctx, id)).collect()
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let physics = Physics::from(&ConfettiConfig::default());

    for count in [20u64, 1_000, 10_000] {
        let input = particles(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| black_box(advance(input.clone(), 1, physics, VIEWPORT)))
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("default_burst_3s", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let mut sim = ParticleSimulator::new(
                ConfettiConfig::default(),
                SmallRng::seed_from_u64(1),
                clock.clone(),
            )
            .unwrap();
            sim.set_viewport(Viewport::new(1920.0, 1080.0));
            sim.start(Duration::from_millis(3000));
            while sim.is_active() {
                clock.advance(Duration::from_millis(16));
                black_box(sim.step());
            }
        })
    });
}

criterion_group!(benches, bench_advance, bench_full_run);
criterion_main!(benches);
