//! Criterion micro-benchmarks for decoding and rendering machine
//! descriptions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plenum_bench::{net_ladder_pixels, serpentine_layout, serpentine_pixels};
use plenum_engine::Circuit;
use plenum_grid::Layout;

/// Benchmark: decode a ~10K-pixel serpentine image, no nets.
fn bench_decode_serpentine_10k(c: &mut Criterion) {
    let pixels = serpentine_pixels(100, 99);

    c.bench_function("decode_serpentine_10k", |b| {
        b.iter(|| black_box(Layout::from_pixels(100, 99, &pixels).unwrap()));
    });
}

/// Benchmark: decode an image whose off-palette pixels mint 63 nets.
fn bench_decode_net_ladder_64(c: &mut Criterion) {
    let pixels = net_ladder_pixels(64);

    c.bench_function("decode_net_ladder_64", |b| {
        b.iter(|| black_box(Layout::from_pixels(3, 127, &pixels).unwrap()));
    });
}

/// Benchmark: render a ~10K-cell machine back to its glyph diagram.
fn bench_render_diagram_10k(c: &mut Criterion) {
    let circuit = Circuit::new(serpentine_layout(100, 99));

    c.bench_function("render_diagram_10k", |b| {
        b.iter(|| black_box(circuit.to_diagram()));
    });
}

criterion_group!(
    benches,
    bench_decode_serpentine_10k,
    bench_decode_net_ladder_64,
    bench_render_diagram_10k
);
criterion_main!(benches);
