//! Benchmarks for decode + layout throughput.
//!
//! Run with: cargo bench -p hanfont-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hanfont_text::TextLayout;
use std::hint::black_box;

/// ASCII-only text of various lengths
fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Ideographic text (one cell per char)
fn ideograph_text(len: usize) -> String {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Mixed ASCII and ideographs
fn mixed_text(len: usize) -> String {
    "Hello \u{4E16}\u{754C}! Test \u{6D4B}\u{8BD5}. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let layout = TextLayout::new(16);
    let mut group = c.benchmark_group("measure");
    for len in [16usize, 128, 1024] {
        for (name, text) in [
            ("ascii", ascii_text(len)),
            ("ideograph", ideograph_text(len)),
            ("mixed", mixed_text(len)),
        ] {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &text, |b, text| {
                b.iter(|| layout.measure(black_box(text)));
            });
        }
    }
    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let layout = TextLayout::new(16);
    let mut group = c.benchmark_group("wrap");
    for len in [64usize, 512] {
        let text = mixed_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", len), &text, |b, text| {
            b.iter(|| layout.wrap(black_box(text), 120));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_measure, bench_wrap);
criterion_main!(benches);
