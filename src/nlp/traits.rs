//! Traits for nonlinear optimization backends.

use std::ops::{Add, Div, Mul, Sub};

/// A symbolic scalar in a solver backend's expression language.
///
/// Handles are lightweight and cheap to clone; the builder stores them by
/// value in its sample arrays. The algebra is the minimum the problem
/// builder needs: the four arithmetic operators against both expressions
/// and numeric constants, plus sine and cosine for rotating bumper corners
/// by the sampled heading.
pub trait Expression:
    Clone
    + Add<Self, Output = Self>
    + Add<f64, Output = Self>
    + Sub<Self, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<Self, Output = Self>
    + Mul<f64, Output = Self>
    + Div<Self, Output = Self>
    + Div<f64, Output = Self>
{
    /// Lift a numeric constant into the expression language.
    fn constant(value: f64) -> Self;

    /// Sine of this expression.
    fn sin(&self) -> Self;

    /// Cosine of this expression.
    fn cos(&self) -> Self;

    /// Square of this expression.
    fn squared(&self) -> Self {
        self.clone() * self.clone()
    }
}

/// How the two sides of a [`Relation`] compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `lhs == rhs`
    Equal,
    /// `lhs <= rhs`
    LessEqual,
    /// `lhs >= rhs`
    GreaterEqual,
}

/// A constraint as a structured value: two operand trees and a comparison.
///
/// Keeping constraints structured (rather than opaque boolean handles) lets
/// recording backends support exact-match assertions in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Relation<E> {
    /// Left-hand operand.
    pub lhs: E,
    /// Comparison operator.
    pub comparison: Comparison,
    /// Right-hand operand.
    pub rhs: E,
}

impl<E> Relation<E> {
    /// `lhs == rhs`
    pub fn equal(lhs: E, rhs: E) -> Self {
        Self {
            lhs,
            comparison: Comparison::Equal,
            rhs,
        }
    }

    /// `lhs <= rhs`
    pub fn less_equal(lhs: E, rhs: E) -> Self {
        Self {
            lhs,
            comparison: Comparison::LessEqual,
            rhs,
        }
    }

    /// `lhs >= rhs`
    pub fn greater_equal(lhs: E, rhs: E) -> Self {
        Self {
            lhs,
            comparison: Comparison::GreaterEqual,
            rhs,
        }
    }
}

/// A nonlinear program under construction.
///
/// The builder drives this interface in one pass: allocate variables, add
/// constraints, seed initial values, install the objective. After an
/// external solve, [`NlpProblem::solution_value`] reads optimized values
/// back out of expressions.
///
/// # Example
///
/// ```rust,ignore
/// use marga_opt::nlp::{Expression, NlpProblem, RecordingProblem, Relation, SymExpr};
///
/// let mut problem = RecordingProblem::new();
/// let x = problem.decision_variable();
/// problem.subject_to(Relation::greater_equal(x.clone(), SymExpr::constant(0.0)));
/// problem.minimize(x.clone() * 2.0);
/// ```
pub trait NlpProblem {
    /// Backend expression handle.
    type Expr: Expression;

    /// Allocate a fresh decision variable.
    fn decision_variable(&mut self) -> Self::Expr;

    /// Add a constraint.
    fn subject_to(&mut self, relation: Relation<Self::Expr>);

    /// Seed a decision variable with an initial value.
    ///
    /// `variable` must be a handle returned by
    /// [`NlpProblem::decision_variable`], not a compound expression.
    fn set_initial(&mut self, variable: &Self::Expr, value: f64);

    /// Install the objective to minimize. One objective per problem; a
    /// second call replaces the first.
    fn minimize(&mut self, objective: Self::Expr);

    /// Numeric value of an expression after a successful solve.
    fn solution_value(&self, expr: &Self::Expr) -> f64;
}
