//! Benchmarks for course splitting
//!
//! Covers the three strategies on the standard calendar plus a full
//! generation pass:
//! - Strategy selection and part estimation without materialising parts
//! - `plan` for single-block, same-day and multi-day durations
//! - `CourseScheduler::generate` for a realistic course and learner load
//!
//! Platform: Cross-platform (pure computation, CI-safe)

use course_scheduler::CourseScheduler;
use course_scheduler::test_utils::{learners_at, monday, sample_courses, standard_criteria, standard_splitter};
use course_scheduler::{SplitRequest, TimeBlockConfiguration};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_strategy_selection(c: &mut Criterion) {
    let splitter = standard_splitter();

    let mut group = c.benchmark_group("strategy_selection");

    group.bench_function("determine_strategy", |b| {
        b.iter(|| black_box(splitter.determine_strategy(black_box(10.0))))
    });

    group.bench_function("estimate_total_parts", |b| {
        b.iter(|| black_box(splitter.estimate_total_parts(black_box(10.0))))
    });

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let splitter = standard_splitter();
    let request = SplitRequest::new("Forklift Operation", 1, monday());

    let mut group = c.benchmark_group("plan");

    for (label, duration) in [("single_block", 3.0), ("same_day", 6.0), ("multi_day", 20.0)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &duration, |b, &duration| {
            b.iter(|| black_box(splitter.plan(black_box(duration), &request)))
        });
    }

    group.finish();
}

fn bench_configuration(c: &mut Criterion) {
    let criteria = standard_criteria();

    c.bench_function("time_block_configuration_from_criteria", |b| {
        b.iter(|| black_box(TimeBlockConfiguration::from_criteria(black_box(&criteria))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let scheduler = CourseScheduler::new(&standard_criteria()).expect("standard criteria are valid");
    let courses = sample_courses();

    let mut group = c.benchmark_group("generate");

    for learner_count in [10usize, 100, 1000] {
        let mut learners = learners_at("Plant A", learner_count / 2);
        learners.extend(learners_at("Plant B", learner_count - learner_count / 2));

        group.throughput(Throughput::Elements(learner_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(learner_count), &learners, |b, learners| {
            b.iter(|| black_box(scheduler.generate(black_box(&courses), black_box(learners))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategy_selection, bench_plan, bench_configuration, bench_generate);
criterion_main!(benches);
