// Criterion benchmark suite for the matching engine.
//
// Run: cargo bench
// Specific group: cargo bench -- quantifier
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use patina::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_of(element: char, len: usize) -> Vec<char> {
    vec![element; len]
}

// ---------------------------------------------------------------------------
// 1. quantifier -- greedy vs lazy over a uniform run
// ---------------------------------------------------------------------------

fn bench_quantifier(c: &mut Criterion) {
    let greedy = Repeat::plus(One::eq('a'));
    let lazy = Repeat::plus(One::eq('a')).lazy(true);

    let mut group = c.benchmark_group("quantifier");
    for &len in &[16usize, 64, 256] {
        let hay = run_of('a', len);

        group.bench_with_input(BenchmarkId::new("greedy_plus", len), &hay, |b, hay| {
            b.iter(|| black_box(greedy.match_anchored(black_box(hay))));
        });
        group.bench_with_input(BenchmarkId::new("lazy_plus", len), &hay, |b, hay| {
            b.iter(|| black_box(lazy.match_anchored(black_box(hay))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. search -- scanning past a long foreign prefix
// ---------------------------------------------------------------------------

fn bench_search(c: &mut Criterion) {
    let needle = Literal::new(['a', 'b']);
    let absent = One::eq('z');

    let mut group = c.benchmark_group("search");
    for &len in &[16usize, 64, 256] {
        let mut hay = run_of('x', len);
        hay.extend(['a', 'b']);

        group.bench_with_input(BenchmarkId::new("literal_suffix", len), &hay, |b, hay| {
            b.iter(|| black_box(needle.search(black_box(hay))));
        });
        group.bench_with_input(BenchmarkId::new("no_match", len), &hay, |b, hay| {
            b.iter(|| black_box(absent.search(black_box(hay))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. nested -- quantifier inside quantifier
// ---------------------------------------------------------------------------

fn bench_nested(c: &mut Criterion) {
    let word = Sequence::new()
        .then(Repeat::plus(One::eq('x')))
        .then(Repeat::plus(One::eq('x')));
    let pattern = Sequence::new()
        .then(Repeat::plus(word))
        .then(One::eq('y'));

    let mut group = c.benchmark_group("nested");
    for &len in &[8usize, 12, 16] {
        let mut hay = run_of('x', len);
        hay.push('y');
        group.bench_with_input(BenchmarkId::new("first_candidate", len), &hay, |b, hay| {
            b.iter(|| black_box(pattern.match_anchored(black_box(hay))));
        });
    }
    for &len in &[8usize, 10, 12] {
        // No 'y' anywhere, so the whole candidate space is enumerated.
        let hay = run_of('x', len);
        group.bench_with_input(
            BenchmarkId::new("exhaustive_failure", len),
            &hay,
            |b, hay| {
                b.iter(|| black_box(pattern.match_anchored(black_box(hay))));
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. find_iter -- repeated scans over alternating runs
// ---------------------------------------------------------------------------

fn bench_find_iter(c: &mut Criterion) {
    let pattern = Repeat::plus(One::eq('a'));

    let mut group = c.benchmark_group("find_iter");
    for &runs in &[4usize, 16, 64] {
        let mut hay = Vec::new();
        for _ in 0..runs {
            hay.extend(['a', 'a', 'b', ' ']);
        }
        group.bench_with_input(BenchmarkId::new("runs", runs), &hay, |b, hay| {
            b.iter(|| black_box(pattern.find_iter(black_box(hay)).count()));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 5. span_set -- capture span bookkeeping
// ---------------------------------------------------------------------------

fn bench_span_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_set");

    group.bench_function("insert_adjacent", |b| {
        b.iter(|| {
            let mut set = SpanSet::new(Span::new(0, 1));
            for i in 1..64 {
                set.insert(Span::new(i, i + 1));
            }
            black_box(set)
        });
    });

    group.bench_function("insert_disjoint", |b| {
        b.iter(|| {
            let mut set = SpanSet::new(Span::new(0, 1));
            for i in 1..64 {
                set.insert(Span::new(i * 2, i * 2 + 1));
            }
            black_box(set)
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_quantifier,
    bench_search,
    bench_nested,
    bench_find_iter,
    bench_span_set,
);
criterion_main!(benches);
