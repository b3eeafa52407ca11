// benches/pattern_bench.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filesift::FilterPattern;

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_pattern", |b| {
        b.iter(|| FilterPattern::compile(black_box("img_*_draft*.png")))
    });
}

fn bench_match_exact(c: &mut Criterion) {
    let pattern = FilterPattern::compile("report.txt");
    c.bench_function("match_exact", |b| {
        b.iter(|| pattern.matches(black_box("report.txt")))
    });
}

fn bench_match_suffix(c: &mut Criterion) {
    let pattern = FilterPattern::compile("*.txt");
    c.bench_function("match_suffix", |b| {
        b.iter(|| pattern.matches(black_box("a_rather_long_file_name_2024.txt")))
    });
}

fn bench_match_interior_segments(c: &mut Criterion) {
    let pattern = FilterPattern::compile("img_*_draft*.png");
    c.bench_function("match_interior_segments", |b| {
        b.iter(|| pattern.matches(black_box("img_0042_birthday_draft_final.png")))
    });
}

fn bench_match_miss(c: &mut Criterion) {
    let pattern = FilterPattern::compile("img_*_draft*.png");
    c.bench_function("match_miss", |b| {
        b.iter(|| pattern.matches(black_box("img_0042_birthday_final.jpeg")))
    });
}

criterion_group!(
    benches,
    bench_compile,
    bench_match_exact,
    bench_match_suffix,
    bench_match_interior_segments,
    bench_match_miss
);
criterion_main!(benches);
