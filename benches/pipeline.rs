use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gaussian_overlap::{compute_group_statistics, detect, reference_scenario, sample, OverlapAnalysis};

fn bench_pipeline(c: &mut Criterion) {
    let components = reference_scenario();
    let points = sample(&components, 3334, 42).unwrap();

    let mut group = c.benchmark_group("gaussian_overlap");
    group.sample_size(20);

    group.bench_function("sample_10k", |b| {
        b.iter(|| black_box(sample(&components, 3334, 42).unwrap().len()));
    });

    group.bench_function("group_statistics_10k", |b| {
        b.iter(|| black_box(compute_group_statistics(&points, &components).unwrap()));
    });

    group.bench_function("detect_10k", |b| {
        b.iter(|| black_box(detect(&points, &components, 0.20).unwrap().overlap_count));
    });

    group.bench_function("full_analysis_10k", |b| {
        b.iter(|| {
            let report = OverlapAnalysis::new().population(10_002).run().unwrap();
            black_box(report.overlap.overlap_fraction)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
