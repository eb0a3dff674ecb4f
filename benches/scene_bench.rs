use arena_physics::{bodies::game_zone, BodyBuilder, Level, Scene, Vector};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn populated_scene(count: usize) -> Scene {
    let mut rng = StdRng::seed_from_u64(42);
    let bodies = (0..count).map(|_| {
        BodyBuilder::falling()
            .position(Vector::new(rng.gen_range(1.0..60.0), rng.gen_range(1.0..20.0)))
            .velocity(Vector::new(rng.gen_range(-0.5..0.5), 0.0))
            .elasticity(rng.gen_range(0.0..1.0))
            .mass(rng.gen_range(0.5..3.0))
    });

    let mut scene = Level::new("bench")
        .with_bodies(game_zone(64.0))
        .with_bodies(bodies)
        .build()
        .expect("bench level is valid");
    scene.refresh_display(80.0, 70.0, 0.0, 0.0);
    scene
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_tick");
    for count in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut scene = populated_scene(count);
            b.iter(|| {
                scene.tick();
                black_box(scene.events().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
