//! Criterion benchmarks for the bitstring GA.
//!
//! Uses synthetic problems (OneMax, adjacent-bit transitions) to measure
//! engine overhead independent of any domain.

use bitgarden::random::create_rng;
use bitgarden::selection::{self, SelectionScheme};
use bitgarden::{Breeder, Garden, GardenConfig, Genome, Population};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn one_max(g: &Genome) -> f64 {
    g.count_ones() as f64
}

fn transitions(g: &Genome) -> f64 {
    g.bits().windows(2).filter(|w| w[0] != w[1]).count() as f64
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_next_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_gen_onemax");
    group.sample_size(20);

    for (pop, len) in [(20usize, 16usize), (100, 64), (500, 256)] {
        let config = GardenConfig::new(pop, len).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_l{}", pop, len), pop),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut garden = Garden::new(one_max, config.clone()).unwrap();
                    for _ in 0..10 {
                        garden.next_gen().unwrap();
                    }
                    black_box(garden.max_fitness())
                })
            },
        );
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.sample_size(20);

    let mut rng = create_rng(7);
    let population =
        Population::from_genomes((0..1_000).map(|_| Genome::random(64, &mut rng))).unwrap();

    for scheme in [SelectionScheme::TruncatedShares, SelectionScheme::Continuous] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", scheme)),
            &scheme,
            |b, &scheme| {
                let mut rng = create_rng(42);
                b.iter(|| {
                    let sel = selection::evaluate(
                        black_box(&population),
                        &transitions,
                        scheme,
                        false,
                        &mut rng,
                    )
                    .unwrap();
                    black_box(sel)
                })
            },
        );
    }
    group.finish();
}

fn bench_breed_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("breed_population");
    group.sample_size(20);

    for &len in &[16usize, 128, 1024] {
        let mut rng = create_rng(3);
        let population =
            Population::from_genomes((0..200).map(|_| Genome::random(len, &mut rng))).unwrap();
        let chosen: Vec<usize> = (0..200).collect();
        let breeder = Breeder::new(0.7, 0.02).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            let mut rng = create_rng(42);
            b.iter(|| {
                let next = breeder
                    .breed_population(black_box(&population), &chosen, &mut rng)
                    .unwrap();
                black_box(next)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_gen, bench_selection, bench_breed_population);
criterion_main!(benches);
