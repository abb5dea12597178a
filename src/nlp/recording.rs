//! In-memory recording backend.
//!
//! [`RecordingProblem`] implements [`NlpProblem`] by storing the problem as
//! structured values: an operator tree per expression, a [`Relation`] per
//! constraint, and flat vectors for initial values. It serves two roles:
//! the mock the test suite asserts exact constraint trees against, and the
//! hand-off format a real solver binding consumes (walk the recorded
//! constraints, translate each tree, then feed the optimized assignment
//! back with [`RecordingProblem::set_assignment`]).

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::traits::{Expression, NlpProblem, Relation};

/// Symbolic expression as an operator tree.
#[derive(Clone, Debug, PartialEq)]
pub enum SymExpr {
    /// Decision variable by allocation index.
    Variable(usize),
    /// Numeric constant.
    Constant(f64),
    /// Sum of the operands.
    Add(Box<SymExpr>, Box<SymExpr>),
    /// Difference of the operands.
    Sub(Box<SymExpr>, Box<SymExpr>),
    /// Product of the operands.
    Mul(Box<SymExpr>, Box<SymExpr>),
    /// Quotient of the operands.
    Div(Box<SymExpr>, Box<SymExpr>),
    /// Sine of the operand.
    Sin(Box<SymExpr>),
    /// Cosine of the operand.
    Cos(Box<SymExpr>),
}

impl SymExpr {
    /// Evaluate the tree against an assignment of variable values.
    ///
    /// `values[i]` is the value of `Variable(i)`; the slice must cover every
    /// variable appearing in the tree.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        match self {
            SymExpr::Variable(index) => values[*index],
            SymExpr::Constant(value) => *value,
            SymExpr::Add(a, b) => a.evaluate(values) + b.evaluate(values),
            SymExpr::Sub(a, b) => a.evaluate(values) - b.evaluate(values),
            SymExpr::Mul(a, b) => a.evaluate(values) * b.evaluate(values),
            SymExpr::Div(a, b) => a.evaluate(values) / b.evaluate(values),
            SymExpr::Sin(a) => a.evaluate(values).sin(),
            SymExpr::Cos(a) => a.evaluate(values).cos(),
        }
    }

    /// Variable index if this expression is a bare decision variable.
    pub fn variable_index(&self) -> Option<usize> {
        match self {
            SymExpr::Variable(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymExpr::Variable(index) => write!(f, "v{}", index),
            SymExpr::Constant(value) => write!(f, "{}", value),
            SymExpr::Add(a, b) => write!(f, "({} + {})", a, b),
            SymExpr::Sub(a, b) => write!(f, "({} - {})", a, b),
            SymExpr::Mul(a, b) => write!(f, "({} * {})", a, b),
            SymExpr::Div(a, b) => write!(f, "({} / {})", a, b),
            SymExpr::Sin(a) => write!(f, "sin({})", a),
            SymExpr::Cos(a) => write!(f, "cos({})", a),
        }
    }
}

impl Add for SymExpr {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        SymExpr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Add<f64> for SymExpr {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        SymExpr::Add(Box::new(self), Box::new(SymExpr::Constant(rhs)))
    }
}

impl Sub for SymExpr {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        SymExpr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Sub<f64> for SymExpr {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        SymExpr::Sub(Box::new(self), Box::new(SymExpr::Constant(rhs)))
    }
}

impl Mul for SymExpr {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        SymExpr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Mul<f64> for SymExpr {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        SymExpr::Mul(Box::new(self), Box::new(SymExpr::Constant(rhs)))
    }
}

impl Div for SymExpr {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        SymExpr::Div(Box::new(self), Box::new(rhs))
    }
}

impl Div<f64> for SymExpr {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        SymExpr::Div(Box::new(self), Box::new(SymExpr::Constant(rhs)))
    }
}

impl Expression for SymExpr {
    fn constant(value: f64) -> Self {
        SymExpr::Constant(value)
    }

    fn sin(&self) -> Self {
        SymExpr::Sin(Box::new(self.clone()))
    }

    fn cos(&self) -> Self {
        SymExpr::Cos(Box::new(self.clone()))
    }
}

/// An [`NlpProblem`] that records everything it is given.
#[derive(Debug, Default)]
pub struct RecordingProblem {
    variable_count: usize,
    constraints: Vec<Relation<SymExpr>>,
    initial_values: Vec<f64>,
    assignment: Vec<f64>,
    objective: Option<SymExpr>,
}

impl RecordingProblem {
    /// Create an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of decision variables allocated so far.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// All recorded constraints, in emission order.
    pub fn constraints(&self) -> &[Relation<SymExpr>] {
        &self.constraints
    }

    /// Initial value per variable (0.0 until seeded).
    pub fn initial_values(&self) -> &[f64] {
        &self.initial_values
    }

    /// The recorded objective, if one has been installed.
    pub fn objective(&self) -> Option<&SymExpr> {
        self.objective.as_ref()
    }

    /// Replace the variable assignment [`NlpProblem::solution_value`] reads.
    ///
    /// Until this is called the assignment mirrors the initial values, so
    /// `solution_value` evaluates expressions at the initial guess.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per variable.
    pub fn set_assignment(&mut self, values: Vec<f64>) {
        assert_eq!(
            values.len(),
            self.variable_count,
            "assignment needs one value per variable"
        );
        self.assignment = values;
    }
}

impl NlpProblem for RecordingProblem {
    type Expr = SymExpr;

    fn decision_variable(&mut self) -> SymExpr {
        let index = self.variable_count;
        self.variable_count += 1;
        self.initial_values.push(0.0);
        self.assignment.push(0.0);
        SymExpr::Variable(index)
    }

    fn subject_to(&mut self, relation: Relation<SymExpr>) {
        self.constraints.push(relation);
    }

    fn set_initial(&mut self, variable: &SymExpr, value: f64) {
        match variable.variable_index() {
            Some(index) => {
                self.initial_values[index] = value;
                self.assignment[index] = value;
            }
            None => panic!("set_initial expects a decision variable, got {}", variable),
        }
    }

    fn minimize(&mut self, objective: SymExpr) {
        self.objective = Some(objective);
    }

    fn solution_value(&self, expr: &SymExpr) -> f64 {
        expr.evaluate(&self.assignment)
    }
}
