//! Hot-path benchmark: burst spawn + full update at typical pool sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use verve_core::math::Vec2;
use verve_core::rng::FxRng;
use verve_particles::{ParticlePreset, ParticleSystem};

fn bench_burst_and_update(c: &mut Criterion) {
    c.bench_function("burst_300_update", |b| {
        let preset = ParticlePreset {
            count: 300,
            ..ParticlePreset::explosion()
        };
        let mut system = ParticleSystem::new(300);
        let mut rng = FxRng::from_seed(1);

        b.iter(|| {
            system.clear();
            system.spawn_burst(Vec2::ZERO, &preset, &mut rng);
            for _ in 0..10 {
                black_box(system.update(1.0 / 60.0));
            }
        });
    });

    c.bench_function("steady_state_update_256", |b| {
        let mut system = ParticleSystem::new(256);
        let mut rng = FxRng::from_seed(2);
        system.spawn_burst(Vec2::ZERO, &ParticlePreset::confetti(), &mut rng);

        b.iter(|| {
            system.spawn_trail(Vec2::ZERO, &ParticlePreset::trail(), &mut rng);
            black_box(system.update(1.0 / 60.0));
        });
    });
}

criterion_group!(benches, bench_burst_and_update);
criterion_main!(benches);
