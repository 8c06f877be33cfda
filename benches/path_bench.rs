use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use synchro_path::{MotionOptions, PlanFile, Pose, SplinePath};

fn bench_plan_parsing(c: &mut Criterion) {
    let plan_content = include_str!("../tests/fixtures/square_plan.toml");

    c.bench_function("plan_parse_square", |b| {
        b.iter(|| {
            let plan = PlanFile::parse(black_box(plan_content)).expect("Plan parse failed");
            black_box(plan.waypoints.len())
        })
    });
}

/// Zickzack-Bahn mit abwechselndem Heading.
fn build_zigzag_waypoints(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 2.0;
            let y = if i % 2 == 0 { 0.0 } else { 1.5 };
            let heading = if i % 3 == 0 { 0.0 } else { 0.4 * (i % 5) as f64 };
            Pose::new(x, y, heading)
        })
        .collect()
}

fn bench_path_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_construction");
    let options = MotionOptions::default();

    for &count in &[10usize, 100usize, 1_000usize] {
        let waypoints = build_zigzag_waypoints(count);

        group.bench_with_input(BenchmarkId::new("new", count), &waypoints, |b, wp| {
            b.iter(|| {
                let path = SplinePath::new(black_box(wp), &options).expect("Bahn muss bauen");
                black_box(path.duration())
            })
        });
    }

    group.finish();
}

fn bench_path_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_sampling");
    let options = MotionOptions::default();

    for &count in &[10usize, 1_000usize] {
        let path = SplinePath::new(&build_zigzag_waypoints(count), &options)
            .expect("Bahn muss bauen");
        let sample_times: Vec<f64> = (0..1024)
            .map(|i| path.duration() * i as f64 / 1023.0)
            .collect();

        group.bench_with_input(BenchmarkId::new("pose_batch", count), &path, |b, p| {
            b.iter(|| {
                let mut sum = 0.0;
                for &t in &sample_times {
                    sum += p.pose(black_box(t)).heading;
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("velocity_batch", count), &path, |b, p| {
            b.iter(|| {
                let mut sum = 0.0;
                for &t in &sample_times {
                    sum += p.velocity(black_box(t)).position.x;
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

criterion_group!(
    path_benches,
    bench_plan_parsing,
    bench_path_construction,
    bench_path_sampling
);
criterion_main!(path_benches);
