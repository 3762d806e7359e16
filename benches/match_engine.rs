use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use memory_match::{deal, DealRng, EngineConfig, MatchEngine, NullSink, TileId};

/// Tile ids grouped into pairs by face.
fn pairs_of(engine: &MatchEngine) -> Vec<(TileId, TileId)> {
    let mut sorted: Vec<_> = engine.board().iter().map(|t| (t.face, t.id)).collect();
    sorted.sort();
    sorted.chunks(2).map(|c| (c[0].1, c[1].1)).collect()
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = DealRng::new(12345);

    c.bench_function("deal_32_pairs", |b| {
        b.iter(|| deal(black_box(32), &mut rng))
    });
}

fn bench_perfect_game(c: &mut Criterion) {
    let mut rng = DealRng::new(12345);
    let mut engine = MatchEngine::new(deal(32, &mut rng).unwrap(), EngineConfig::default());
    let pairs = pairs_of(&engine);

    c.bench_function("perfect_game_32_pairs", |b| {
        b.iter(|| {
            engine.restart(NullSink);
            for &(first, second) in &pairs {
                engine.select(black_box(first), NullSink);
                engine.select(black_box(second), NullSink);
            }
        })
    });
}

fn bench_mismatch_cycle(c: &mut Criterion) {
    let mut rng = DealRng::new(12345);
    let mut engine = MatchEngine::new(deal(32, &mut rng).unwrap(), EngineConfig::default());
    let pairs = pairs_of(&engine);
    let (a, b2) = (pairs[0].0, pairs[1].0);

    c.bench_function("mismatch_and_hide", |b| {
        b.iter(|| {
            engine.select(a, NullSink);
            engine.select(b2, NullSink);
            engine.tick(black_box(Duration::from_secs(1)), NullSink);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut rng = DealRng::new(12345);
    let engine = MatchEngine::new(deal(32, &mut rng).unwrap(), EngineConfig::default());

    c.bench_function("snapshot_to_bytes", |b| {
        b.iter(|| engine.snapshot().to_bytes())
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_perfect_game,
    bench_mismatch_cycle,
    bench_snapshot
);
criterion_main!(benches);
