use cobble::cards::{DeckBuilder, SymbolPool};
use cobble::catalogue;
use cobble::plane::ProjectivePlane;
use cobble::GameRng;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("ProjectivePlane");

    for order in [2u32, 5, 7, 11] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| ProjectivePlane::new(order));
        });
    }
    group.finish();
}

fn bench_deck(c: &mut Criterion) {
    let mut group = c.benchmark_group("DeckBuild");

    for order in [2u32, 5, 7] {
        let builder = DeckBuilder::new(order);
        let pool = SymbolPool::new(catalogue::generated(builder.required_symbols()));
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter(|| builder.build(&pool).unwrap());
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let builder = DeckBuilder::new(7);
    let pool = SymbolPool::new(catalogue::generated(builder.required_symbols()));
    let deck = builder.build(&pool).unwrap();
    let mut rng = GameRng::new(42);

    c.bench_function("Shuffle_57", |b| {
        b.iter(|| {
            let mut d = deck.clone();
            d.shuffle(&mut rng);
            d
        });
    });
}

criterion_group!(benches, bench_plane, bench_deck, bench_shuffle);
criterion_main!(benches);
