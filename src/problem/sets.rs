//! Scalar encodings of declarative geometric sets.
//!
//! Turns [`Interval`] and [`Region2D`] values into (in)equalities over
//! symbolic scalars. All angles entering the encodings are numeric, so
//! their sines and cosines fold to constants.

use crate::core::{EllipseDirection, Interval, Region2D};
use crate::nlp::{Expression, NlpProblem, Relation};

/// Constrain a symbolic scalar to an interval.
///
/// An exact interval emits a single equality; otherwise each finite bound
/// emits its inequality (either, both, or neither).
pub fn apply_interval<P: NlpProblem>(problem: &mut P, scalar: &P::Expr, interval: &Interval) {
    if interval.is_exact() {
        problem.subject_to(Relation::equal(
            scalar.clone(),
            <P::Expr>::constant(interval.lower),
        ));
        return;
    }
    if interval.is_lower_bounded() {
        problem.subject_to(Relation::greater_equal(
            scalar.clone(),
            <P::Expr>::constant(interval.lower),
        ));
    }
    if interval.is_upper_bounded() {
        problem.subject_to(Relation::less_equal(
            scalar.clone(),
            <P::Expr>::constant(interval.upper),
        ));
    }
}

/// Constrain a symbolic 2D point `(sx, sy)` to a planar region.
pub fn apply_region<P: NlpProblem>(problem: &mut P, sx: &P::Expr, sy: &P::Expr, region: &Region2D) {
    match region {
        Region2D::Rectangular { x_bound, y_bound } => {
            apply_interval(problem, sx, x_bound);
            apply_interval(problem, sy, y_bound);
        }
        Region2D::Linear { angle } => {
            // (sx, sy) collinear with the direction at `angle`:
            // sx sin(angle) == sy cos(angle)
            problem.subject_to(Relation::equal(
                sx.clone() * angle.sin(),
                sy.clone() * angle.cos(),
            ));
        }
        Region2D::Elliptical {
            x_radius,
            y_radius,
            direction,
        } => {
            let level = sx.squared() / (x_radius * x_radius) + sy.squared() / (y_radius * y_radius);
            let one = <P::Expr>::constant(1.0);
            let relation = match direction {
                EllipseDirection::Inside => Relation::less_equal(level, one),
                EllipseDirection::Centered => Relation::equal(level, one),
                EllipseDirection::Outside => Relation::greater_equal(level, one),
            };
            problem.subject_to(relation);
        }
        Region2D::Cone { bearing } => {
            // Bearing of (sx, sy) within [bearing.lower, bearing.upper]:
            // one half-plane per side of the sector.
            problem.subject_to(Relation::greater_equal(
                sx.clone() * bearing.upper.sin(),
                sy.clone() * bearing.upper.cos(),
            ));
            problem.subject_to(Relation::less_equal(
                sx.clone() * bearing.lower.sin(),
                sy.clone() * bearing.lower.cos(),
            ));
        }
    }
}
