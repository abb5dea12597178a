//! Error types for problem construction.

use thiserror::Error;

/// Errors raised while validating a motion-planning problem.
///
/// Validation runs before any decision variable is allocated, so a failed
/// build leaves the solver backend untouched.
#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("a path needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("waypoint {index} has zero control intervals")]
    ZeroControlIntervals { index: usize },

    #[error("waypoint {index} has no initial guess points")]
    MissingGuessPoints { index: usize },

    #[error("polygon has no corners")]
    EmptyPolygon,

    #[error("negative safety distance: {0}")]
    NegativeSafetyDistance(f64),
}

pub type Result<T> = std::result::Result<T, ProblemError>;
