//! Solver adapter interface.
//!
//! The problem builder never talks to a nonlinear solver directly. It is
//! generic over [`NlpProblem`], a narrow expression-factory-plus-constraint-
//! sink contract that real backends wrap their native handles behind.
//! [`recording::RecordingProblem`] is the in-crate implementation: it records
//! the problem as structured values, which makes it both the reference for
//! backend authors and the mock the test suite asserts against.

pub mod recording;
pub mod traits;

pub use recording::{RecordingProblem, SymExpr};
pub use traits::{Comparison, Expression, NlpProblem, Relation};
