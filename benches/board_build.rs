use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_pairs::assets::AssetPool;
use memory_pairs::board::BoardBuilder;
use memory_pairs::core::GameRng;

fn bench_board_build(c: &mut Criterion) {
    let assets = AssetPool::numbered(64, 4);

    c.bench_function("build 4x4", |b| {
        let builder = BoardBuilder::new(4, 4);
        b.iter(|| builder.build(black_box(&assets), &GameRng::new(42)))
    });

    // Rejection sampling gets slower as the grid fills up
    c.bench_function("build 8x8", |b| {
        let builder = BoardBuilder::new(8, 8);
        b.iter(|| builder.build(black_box(&assets), &GameRng::new(42)))
    });
}

criterion_group!(benches, bench_board_build);
criterion_main!(benches);
