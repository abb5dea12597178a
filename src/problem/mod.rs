//! Time-optimal motion problem construction.
//!
//! [`build_problem`] is the crate's entry point: it validates a [`Path`],
//! allocates the sampled pose and timestep variables, applies every
//! constraint at the samples it owns, seeds the initial guess, and installs
//! the total-time objective. The result is a [`MotionProblem`] holding the
//! variable handles; solving is the backend's job, after which
//! [`MotionProblem::solution`] reads the optimized trajectory back out.

pub mod collision;
pub mod grid;
pub mod guess;
pub mod sets;

use log::{debug, trace};

use crate::drivetrain::Drivetrain;
use crate::error::{ProblemError, Result};
use crate::nlp::{Expression, NlpProblem, Relation};
use crate::obstacle::Obstacle;
use crate::path::{Constraint, Path};

pub use grid::SampleGrid;
pub use guess::{InitialGuess, linear_initial_guess};

/// Decision variables of a constructed motion problem.
///
/// Handle containers are parallel to the sample grid: `x`, `y` and `theta`
/// have one handle per sample; `dt` has one handle per control interval,
/// with all intervals of a segment sharing the segment's timestep variable.
/// Nothing is mutated after construction.
#[derive(Debug)]
pub struct MotionProblem<E> {
    x: Vec<E>,
    y: Vec<E>,
    theta: Vec<E>,
    dt: Vec<E>,
    dt_segments: Vec<E>,
    grid: SampleGrid,
}

impl<E> MotionProblem<E> {
    /// X position handle per sample.
    pub fn x(&self) -> &[E] {
        &self.x
    }

    /// Y position handle per sample.
    pub fn y(&self) -> &[E] {
        &self.y
    }

    /// Heading handle per sample.
    pub fn theta(&self) -> &[E] {
        &self.theta
    }

    /// Timestep handle per control interval (segment-shared).
    pub fn dt(&self) -> &[E] {
        &self.dt
    }

    /// One timestep handle per segment.
    pub fn dt_segments(&self) -> &[E] {
        &self.dt_segments
    }

    /// The sample grid this problem was laid out on.
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Read the optimized trajectory after a successful solve.
    pub fn solution<P: NlpProblem<Expr = E>>(&self, problem: &P) -> TrajectorySolution {
        TrajectorySolution {
            x: self.x.iter().map(|e| problem.solution_value(e)).collect(),
            y: self.y.iter().map(|e| problem.solution_value(e)).collect(),
            theta: self
                .theta
                .iter()
                .map(|e| problem.solution_value(e))
                .collect(),
            dt: self.dt.iter().map(|e| problem.solution_value(e)).collect(),
        }
    }
}

/// Numeric trajectory read back from a solved problem.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectorySolution {
    /// X position per sample (meters).
    pub x: Vec<f64>,
    /// Y position per sample (meters).
    pub y: Vec<f64>,
    /// Heading per sample (radians).
    pub theta: Vec<f64>,
    /// Timestep per control interval (seconds).
    pub dt: Vec<f64>,
}

impl TrajectorySolution {
    /// Cumulative time per sample, starting at zero (seconds).
    pub fn timestamps(&self) -> Vec<f64> {
        let mut stamps = Vec::with_capacity(self.dt.len() + 1);
        let mut elapsed = 0.0;
        stamps.push(elapsed);
        for dt in &self.dt {
            elapsed += dt;
            stamps.push(elapsed);
        }
        stamps
    }

    /// Total trajectory time (seconds).
    pub fn total_time(&self) -> f64 {
        self.dt.iter().sum()
    }
}

/// Build the time-optimal motion problem for a path.
///
/// Validates the inputs, allocates decision variables over the sample grid,
/// applies global, segment, and waypoint constraints at the samples they
/// own, seeds every variable from the piecewise-linear initial guess, and
/// installs the total-time objective. On error nothing has been added to
/// the backend.
pub fn build_problem<P: NlpProblem>(
    problem: &mut P,
    drivetrain: &Drivetrain,
    path: &Path,
) -> Result<MotionProblem<P::Expr>> {
    validate_path(path)?;

    let grid = SampleGrid::from_path(path);
    debug!(
        "building motion problem: {} waypoints, {} samples, {} segments",
        grid.waypoint_count(),
        grid.sample_count(),
        grid.segment_count()
    );

    let motion = allocate_variables(problem, grid);
    apply_dynamics_constraints(problem, drivetrain, &motion);
    apply_path_constraints(problem, path, &motion);

    let guess = guess::linear_initial_guess(path);
    for sample in 0..motion.grid.sample_count() {
        problem.set_initial(&motion.x[sample], guess.x[sample]);
        problem.set_initial(&motion.y[sample], guess.y[sample]);
        problem.set_initial(&motion.theta[sample], guess.theta[sample]);
    }

    Ok(motion)
}

/// Allocate pose and timestep variables and install the objective.
///
/// Each segment gets one timestep variable, constrained nonnegative, seeded
/// with 5.0/Nᵢ (about five seconds per segment), and replicated across the
/// segment's intervals in the flat `dt` layout. The objective is the total
/// time ΣNᵢ·dtᵢ.
fn allocate_variables<P: NlpProblem>(problem: &mut P, grid: SampleGrid) -> MotionProblem<P::Expr> {
    let samples = grid.sample_count();
    let x: Vec<_> = (0..samples).map(|_| problem.decision_variable()).collect();
    let y: Vec<_> = (0..samples).map(|_| problem.decision_variable()).collect();
    let theta: Vec<_> = (0..samples).map(|_| problem.decision_variable()).collect();

    let mut dt = Vec::with_capacity(grid.interval_count());
    let mut dt_segments = Vec::with_capacity(grid.segment_count());
    let mut total_time: Option<P::Expr> = None;

    for segment in 0..grid.segment_count() {
        let intervals = grid.segment_intervals(segment);
        let dt_segment = problem.decision_variable();
        problem.subject_to(Relation::greater_equal(
            dt_segment.clone(),
            <P::Expr>::constant(0.0),
        ));
        problem.set_initial(&dt_segment, 5.0 / intervals as f64);

        for _ in 0..intervals {
            dt.push(dt_segment.clone());
        }

        let segment_time = dt_segment.clone() * intervals as f64;
        total_time = Some(match total_time {
            Some(accumulated) => accumulated + segment_time,
            None => segment_time,
        });
        dt_segments.push(dt_segment);
    }

    if let Some(total_time) = total_time {
        problem.minimize(total_time);
    }

    MotionProblem {
        x,
        y,
        theta,
        dt,
        dt_segments,
        grid,
    }
}

/// Differential-drive dynamics between consecutive samples.
///
/// TODO: emit wheel-speed and force/torque balance constraints linking
/// consecutive samples through each segment's timestep.
fn apply_dynamics_constraints<P: NlpProblem>(
    _problem: &mut P,
    _drivetrain: &Drivetrain,
    _motion: &MotionProblem<P::Expr>,
) {
}

/// Walk the path and apply every constraint at the samples it owns.
fn apply_path_constraints<P: NlpProblem>(
    problem: &mut P,
    path: &Path,
    motion: &MotionProblem<P::Expr>,
) {
    let first_sample = motion.grid.waypoint_sample(0);
    apply_constraints(problem, motion, first_sample, &path.global_constraints, path);
    apply_constraints(
        problem,
        motion,
        first_sample,
        &path.waypoints[0].waypoint_constraints,
        path,
    );

    for (index, waypoint) in path.waypoints.iter().enumerate().skip(1) {
        let intervals = waypoint.control_interval_count;
        let segment_start = motion.grid.waypoint_sample(index - 1) + 1;
        trace!(
            "waypoint {}: samples {}..{}",
            index,
            segment_start,
            segment_start + intervals
        );

        for offset in 0..intervals {
            let sample = segment_start + offset;
            apply_constraints(problem, motion, sample, &path.global_constraints, path);
            if offset + 1 < intervals {
                apply_constraints(problem, motion, sample, &waypoint.segment_constraints, path);
            } else {
                apply_constraints(problem, motion, sample, &waypoint.waypoint_constraints, path);
            }
        }
    }
}

/// Apply a list of constraints at one sample.
fn apply_constraints<P: NlpProblem>(
    problem: &mut P,
    motion: &MotionProblem<P::Expr>,
    sample: usize,
    constraints: &[Constraint],
    path: &Path,
) {
    for constraint in constraints {
        apply_constraint(problem, motion, sample, constraint, &path.bumpers);
    }
}

/// Route one constraint to its encoder at one sample.
fn apply_constraint<P: NlpProblem>(
    problem: &mut P,
    motion: &MotionProblem<P::Expr>,
    sample: usize,
    constraint: &Constraint,
    bumpers: &Obstacle,
) {
    let x = &motion.x[sample];
    let y = &motion.y[sample];
    let theta = &motion.theta[sample];

    match constraint {
        Constraint::Translation(region) => sets::apply_region(problem, x, y, region),
        Constraint::Heading(interval) => sets::apply_interval(problem, theta, interval),
        Constraint::Pose {
            translation,
            heading,
        } => {
            sets::apply_region(problem, x, y, translation);
            sets::apply_interval(problem, theta, heading);
        }
        Constraint::Obstacle(obstacle) => {
            collision::apply_obstacle_constraint(problem, x, y, theta, bumpers, obstacle)
        }
    }
}

/// Validate a path before construction touches the backend.
fn validate_path(path: &Path) -> Result<()> {
    if path.waypoints.len() < 2 {
        return Err(ProblemError::TooFewWaypoints(path.waypoints.len()));
    }
    validate_polygon(&path.bumpers)?;
    validate_constraints(&path.global_constraints)?;

    for (index, waypoint) in path.waypoints.iter().enumerate() {
        if index > 0 && waypoint.control_interval_count == 0 {
            return Err(ProblemError::ZeroControlIntervals { index });
        }
        if waypoint.initial_guess_points.is_empty() {
            return Err(ProblemError::MissingGuessPoints { index });
        }
        validate_constraints(&waypoint.waypoint_constraints)?;
        validate_constraints(&waypoint.segment_constraints)?;
    }
    Ok(())
}

fn validate_constraints(constraints: &[Constraint]) -> Result<()> {
    for constraint in constraints {
        if let Constraint::Obstacle(obstacle) = constraint {
            validate_polygon(obstacle)?;
        }
    }
    Ok(())
}

fn validate_polygon(polygon: &Obstacle) -> Result<()> {
    if polygon.points.is_empty() {
        return Err(ProblemError::EmptyPolygon);
    }
    if polygon.safety_distance < 0.0 {
        return Err(ProblemError::NegativeSafetyDistance(polygon.safety_distance));
    }
    Ok(())
}
