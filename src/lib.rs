//! # Marga-Opt: Time-Optimal Motion Planning Problem Builder
//!
//! Formulates time-optimal trajectory planning for a wheeled mobile robot
//! as a nonlinear program and hands it to an external optimization backend.
//! Given a piecewise path (waypoints with geometric constraints and an
//! initial-guess skeleton), the robot's bumper polygon, and obstacles, the
//! builder emits a fully populated problem whose variables are the sampled
//! pose trajectory and per-segment timesteps, whose objective is total
//! elapsed time, and whose constraints encode waypoint poses, path-wide
//! geometric bounds, and obstacle avoidance.
//!
//! The crate builds problems; it does not solve them. Backends implement
//! the narrow [`nlp::NlpProblem`] trait (expression factory + constraint
//! sink); [`nlp::RecordingProblem`] is the in-crate reference that records
//! the problem as structured values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga_opt::{build_problem, Drivetrain, InitialGuessPoint, Obstacle, Path, Waypoint};
//! use marga_opt::nlp::RecordingProblem;
//!
//! // Two waypoints, four control intervals, a round-ish bumper.
//! let path = Path::new(
//!     vec![
//!         Waypoint::fixed_pose(0.0, 0.0, 0.0, 0),
//!         Waypoint::fixed_pose(4.0, 0.0, 0.0, 4),
//!     ],
//!     Obstacle::point(0.0, 0.0, 0.2),
//! );
//!
//! let mut backend = RecordingProblem::new();
//! let motion = build_problem(&mut backend, &Drivetrain::default(), &path).unwrap();
//!
//! // ... hand `backend` to a solver, feed the result back, then:
//! let trajectory = motion.solution(&backend);
//! println!("total time: {:.2}s", trajectory.total_time());
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental value types (`Point2D`, `Interval`, `Region2D`)
//! - [`path`]: the input data model (`Path`, `Waypoint`, `Constraint`)
//! - [`obstacle`]: polygon records for obstacles and the robot bumper
//! - [`drivetrain`]: robot physical parameters
//! - [`nlp`]: the solver adapter traits and the recording backend
//! - [`problem`]: the builder: variable layout, constraint encoders,
//!   collision encoder, initial-guess generation
//!
//! ## Construction Flow
//!
//! ```text
//!   Path ──► validate ──► SampleGrid ──► allocate x/y/θ/dt
//!                                             │
//!                        per sample ──► dispatch constraints
//!                        (global / segment / waypoint)
//!                                             │
//!                        interpolate guess ──► seed variables
//!                                             │
//!                                     MotionProblem
//! ```
//!
//! Construction is single-threaded and synchronous; two problems built in
//! sequence share nothing.

pub mod core;
pub mod drivetrain;
pub mod error;
pub mod nlp;
pub mod obstacle;
pub mod path;
pub mod problem;

pub use crate::core::{EllipseDirection, Interval, Point2D, Region2D};
pub use drivetrain::Drivetrain;
pub use error::{ProblemError, Result};
pub use obstacle::Obstacle;
pub use path::{Constraint, InitialGuessPoint, Path, Waypoint};
pub use problem::{MotionProblem, TrajectorySolution, build_problem};
