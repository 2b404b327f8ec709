//! Criterion benchmarks for the character/cell lookup tables.
//!
//! Every character of every conversion goes through one or two of these
//! lookups, so they set the floor for transcoding throughput.
//!
//! Run with:
//! ```bash
//! cargo bench --package braille-core --bench cellmap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use braille_core::cellmap::Cell;
use braille_core::CharacterMap;

// ── Representative inputs ────────────────────────────────────────────────────

/// Letters, accented vowels, digits and signs seen in ordinary Spanish prose.
const BENCH_CHARS: &[char] = &[
    'a', 'e', 'o', 's', 'n', 'ñ', 'á', 'é', 'ü', 'H', 'Ñ', ' ', '1', '0', ',', '.', '¿', '?',
    '€',
];

/// Cells covering letters, digits, punctuation, markers and unmapped patterns.
const BENCH_CELLS: &[char] = &[
    '⠁', '⠓', '⠕', '⠻', '⠷', '⠀', '⠂', '⠄', '⠢', '⠼', '⠨', '⣿',
];

// ── Benchmarks: construction ─────────────────────────────────────────────────

fn bench_build(c: &mut Criterion) {
    c.bench_function("cellmap_new", |b| b.iter(CharacterMap::new));
}

// ── Benchmarks: forward lookups ──────────────────────────────────────────────

fn bench_forward_lookups(c: &mut Criterion) {
    let map = CharacterMap::new();
    let mut group = c.benchmark_group("cellmap_forward");

    group.bench_with_input(BenchmarkId::new("cell_for_letter", "lower"), &'h', |b, &ch| {
        b.iter(|| map.cell_for_letter(black_box(ch)))
    });

    group.bench_with_input(BenchmarkId::new("cell_for_letter", "upper"), &'Ñ', |b, &ch| {
        b.iter(|| map.cell_for_letter(black_box(ch)))
    });

    group.bench_function("is_supported_batch_19", |b| {
        b.iter(|| {
            BENCH_CHARS
                .iter()
                .filter(|&&ch| map.is_supported_spanish_character(black_box(ch)))
                .count()
        })
    });

    group.finish();
}

// ── Benchmarks: inverse lookups ──────────────────────────────────────────────

fn bench_inverse_lookups(c: &mut Criterion) {
    let map = CharacterMap::new();
    let mut group = c.benchmark_group("cellmap_inverse");

    group.bench_function("letter_for_cell_batch_12", |b| {
        b.iter(|| {
            BENCH_CELLS
                .iter()
                .filter_map(|&cell| map.letter_for_cell(black_box(cell)))
                .count()
        })
    });

    group.bench_function("punctuation_for_cell_batch_12", |b| {
        b.iter(|| {
            BENCH_CELLS
                .iter()
                .filter_map(|&cell| map.punctuation_for_cell(black_box(cell)))
                .count()
        })
    });

    group.finish();
}

// ── Benchmarks: mirroring ────────────────────────────────────────────────────

fn bench_mirror(c: &mut Criterion) {
    let map = CharacterMap::new();
    let mut group = c.benchmark_group("cellmap_mirror");

    group.bench_function("mirror_cell_single", |b| {
        b.iter(|| map.mirror_cell(black_box('⠓')))
    });

    // All 256 patterns, the full domain of the reflection.
    group.bench_function("mirror_all_256", |b| {
        b.iter(|| {
            (0..=u8::MAX)
                .map(|dots| Cell::from_dots(black_box(dots)).mirrored())
                .fold(0u32, |acc, cell| acc.wrapping_add(u32::from(cell.dots())))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_forward_lookups,
    bench_inverse_lookups,
    bench_mirror,
);
criterion_main!(benches);
