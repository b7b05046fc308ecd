//! Benchmarks for task classification.
//!
//! Every pattern of every category is tried against the lower-cased text, so
//! cost grows with text length rather than with the number of matches.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flowmode_engine::TaskClassifier;

fn bench_classify_short(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier/short");
    let classifier = TaskClassifier::new();

    let inputs = [
        ("bug_fix", "fix login bug crash"),
        ("architecture", "design system architecture"),
        ("no_match", "tidy the quarterly offsite agenda"),
        ("chinese", "修复登录崩溃"),
    ];

    for (name, input) in &inputs {
        group.bench_with_input(BenchmarkId::from_parameter(*name), *input, |b, i| {
            b.iter(|| classifier.classify(black_box(i)));
        });
    }

    group.finish();
}

fn bench_classify_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier/throughput");
    let classifier = TaskClassifier::new();

    for repeat in [1usize, 10, 100] {
        let input = "refactor the payment module and add integration tests. ".repeat(repeat);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &input, |b, i| {
            b.iter(|| classifier.classify(black_box(i.as_str())));
        });
    }

    group.finish();
}

fn bench_classifier_construction(c: &mut Criterion) {
    c.bench_function("classifier/new", |b| b.iter(TaskClassifier::new));
}

criterion_group!(
    benches,
    bench_classify_short,
    bench_classify_throughput,
    bench_classifier_construction
);
criterion_main!(benches);
