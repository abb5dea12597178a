//! Benchmark motion problem construction.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marga_opt::nlp::RecordingProblem;
use marga_opt::{
    Constraint, Drivetrain, InitialGuessPoint, Obstacle, Path, Point2D, Waypoint, build_problem,
};

/// Build a zig-zag course with a polygonal bumper and box obstacles.
fn obstacle_course(waypoints: usize, intervals: usize) -> Path {
    let bumpers = Obstacle::new(
        0.1,
        vec![
            Point2D::new(0.35, 0.3),
            Point2D::new(-0.35, 0.3),
            Point2D::new(-0.35, -0.3),
            Point2D::new(0.35, -0.3),
        ],
    );

    let mut path = Path::new(Vec::new(), bumpers);
    for index in 0..waypoints {
        let x = index as f64 * 2.0;
        let y = if index % 2 == 0 { 0.0 } else { 1.5 };
        path.waypoints
            .push(Waypoint::fixed_pose(x, y, 0.0, intervals));
    }

    for index in 1..waypoints {
        let x = index as f64 * 2.0 - 1.0;
        path.global_constraints
            .push(Constraint::Obstacle(Obstacle::new(
                0.2,
                vec![
                    Point2D::new(x, 3.0),
                    Point2D::new(x + 0.5, 3.0),
                    Point2D::new(x + 0.5, 3.5),
                    Point2D::new(x, 3.5),
                ],
            )));
    }

    path
}

fn bench_build_problem(c: &mut Criterion) {
    let drivetrain = Drivetrain::default();
    let mut group = c.benchmark_group("build_problem");

    for &waypoints in &[2usize, 4, 8] {
        let path = obstacle_course(waypoints, 20);
        group.bench_with_input(
            BenchmarkId::from_parameter(waypoints),
            &path,
            |b, path| {
                b.iter(|| {
                    let mut backend = RecordingProblem::new();
                    build_problem(&mut backend, &drivetrain, black_box(path)).unwrap();
                    backend
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_problem);
criterion_main!(benches);
