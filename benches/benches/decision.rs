//! Benchmarks for rule scoring, profiling and the full decision pipeline.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flowmode_engine::infrastructure::decision_log::NullDecisionSink;
use flowmode_engine::{
    ComplexityTier, DecisionContext, DecisionEngine, ProjectProfile, ProjectProfiler,
    RuleEvaluator, TaskCategory, Urgency,
};
use std::fs;
use tempfile::TempDir;

fn bench_score_flows(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules/score_flows");
    let evaluator = RuleEvaluator::default();

    for tier in ComplexityTier::ALL {
        let profile = ProjectProfile {
            team_size: 6,
            complexity: tier,
            has_tests: true,
            ..ProjectProfile::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(tier), &profile, |b, p| {
            b.iter(|| {
                evaluator.score_flows(black_box(TaskCategory::Refactoring), p, Urgency::Medium)
            });
        });
    }

    group.finish();
}

fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiler/analyze");
    let profiler = ProjectProfiler::new();

    for files in [10usize, 200] {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("Cargo.toml"), "[dependencies]\nserde = \"1\"\n")
            .expect("write manifest");
        fs::create_dir_all(dir.path().join("src/nested")).expect("create dirs");
        for i in 0..files {
            fs::write(dir.path().join(format!("src/nested/m{i}.rs")), "").expect("write file");
        }
        group.bench_with_input(BenchmarkId::from_parameter(files), dir.path(), |b, p| {
            b.iter(|| profiler.analyze(black_box(p)));
        });
    }

    group.finish();
}

fn bench_decide(c: &mut Criterion) {
    let dir = TempDir::new().expect("tempdir");
    let engine = DecisionEngine::builder()
        .project_root(dir.path())
        .decision_sink(NullDecisionSink)
        .build();
    let ctx = DecisionContext::new().with_team_size(4);

    c.bench_function("engine/decide", |b| {
        b.iter(|| engine.decide(black_box("fix login bug crash"), &ctx));
    });
}

criterion_group!(benches, bench_score_flows, bench_profile, bench_decide);
criterion_main!(benches);
