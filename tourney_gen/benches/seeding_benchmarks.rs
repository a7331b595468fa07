use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tourney_gen::{SeedRandomizer, TourneyGenerator, TourneyOptions};

/// Helper to create a roster with N competitors
fn setup_roster(n_competitors: usize) -> TourneyGenerator {
    let mut generator = TourneyGenerator::new(TourneyOptions::new("Chess"))
        .expect("game name is set");
    for i in 0..n_competitors {
        generator.add_competitor(format!("player{i}"));
    }
    generator
}

/// Benchmark seeding rosters of increasing size
fn bench_generate_random_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_random_seeds");

    for size in [8usize, 64, 512, 4096] {
        let mut generator = setup_roster(size);
        let mut randomizer = SeedRandomizer::from_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                generator.generate_random_seeds_with(&mut randomizer);
                black_box(generator.get_competitor(0));
            })
        });
    }

    group.finish();
}

/// Benchmark rendering the roster listing
fn bench_display_competitors(c: &mut Criterion) {
    let mut generator = setup_roster(512);
    generator.generate_random_seeds();

    c.bench_function("display_competitors_512", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            generator
                .display_competitors(&mut out)
                .expect("writing to a Vec cannot fail");
            black_box(out)
        })
    });
}

criterion_group!(
    benches,
    bench_generate_random_seeds,
    bench_display_competitors
);
criterion_main!(benches);
