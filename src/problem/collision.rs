//! Bumper-to-obstacle clearance constraints.
//!
//! For one sampled pose, keeps the robot bumper polygon at least the
//! combined safety distance away from an obstacle polygon. Bumper corners
//! live in the robot frame and are rotated by the sampled heading and
//! translated by the sampled position, so their world coordinates are
//! symbolic; obstacle corners are numeric.
//!
//! All clearance constraints compare squared distances against the squared
//! combined safety distance.

use crate::core::Point2D;
use crate::nlp::{Expression, NlpProblem, Relation};
use crate::obstacle::Obstacle;

/// World position of a bumper corner for the sampled pose.
///
/// The corner is decomposed into polar form (r, φ) in the robot frame; its
/// world position is (x + r·cos(φ + θ), y + r·sin(φ + θ)). A corner at the
/// robot origin is the pose position itself.
fn corner_world<E: Expression>(x: &E, y: &E, theta: &E, corner: Point2D) -> (E, E) {
    if corner.x == 0.0 && corner.y == 0.0 {
        return (x.clone(), y.clone());
    }
    let radius = corner.length();
    let rotated = theta.clone() + corner.angle();
    (
        x.clone() + rotated.cos() * radius,
        y.clone() + rotated.sin() * radius,
    )
}

/// Squared distance from point `p` to the line through `a` and `b`.
///
/// Projects `p` onto the carrier line without clamping the parameter to the
/// segment, so this is the line-infinite distance rather than the true
/// segment distance. Clamping would need min/max operations the expression
/// algebra does not carry; the symmetric corner sweeps cover endpoint
/// proximity.
fn projected_distance_squared<E: Expression>(a: &(E, E), b: &(E, E), p: &(E, E)) -> E {
    let lx = b.0.clone() - a.0.clone();
    let ly = b.1.clone() - a.1.clone();
    let vx = p.0.clone() - a.0.clone();
    let vy = p.1.clone() - a.1.clone();
    let t = (vx * lx.clone() + vy * ly.clone()) / (lx.squared() + ly.squared());
    let foot_x = a.0.clone() + t.clone() * lx;
    let foot_y = a.1.clone() + t * ly;
    (foot_x - p.0.clone()).squared() + (foot_y - p.1.clone()).squared()
}

/// Emit clearance constraints between the bumper and one obstacle at one
/// sampled pose.
///
/// Point bumper against point obstacle emits a single squared-distance
/// constraint. Otherwise two sweeps run: every bumper edge against every
/// obstacle corner, and every obstacle edge against every bumper corner,
/// one constraint each.
pub fn apply_obstacle_constraint<P: NlpProblem>(
    problem: &mut P,
    x: &P::Expr,
    y: &P::Expr,
    theta: &P::Expr,
    bumpers: &Obstacle,
    obstacle: &Obstacle,
) {
    let clearance = bumpers.safety_distance + obstacle.safety_distance;
    let min_squared = clearance * clearance;

    if bumpers.corner_count() == 1 && obstacle.corner_count() == 1 {
        let (wx, wy) = corner_world(x, y, theta, bumpers.points[0]);
        let target = obstacle.points[0];
        let distance_squared = (<P::Expr>::constant(target.x) - wx).squared()
            + (<P::Expr>::constant(target.y) - wy).squared();
        problem.subject_to(Relation::greater_equal(
            distance_squared,
            <P::Expr>::constant(min_squared),
        ));
        return;
    }

    let world: Vec<(P::Expr, P::Expr)> = bumpers
        .points
        .iter()
        .map(|&corner| corner_world(x, y, theta, corner))
        .collect();

    // Bumper edges against obstacle corners.
    for (start, end) in bumpers.edge_indices() {
        for corner in &obstacle.points {
            let target = (
                <P::Expr>::constant(corner.x),
                <P::Expr>::constant(corner.y),
            );
            let distance_squared =
                projected_distance_squared(&world[start], &world[end], &target);
            problem.subject_to(Relation::greater_equal(
                distance_squared,
                <P::Expr>::constant(min_squared),
            ));
        }
    }

    // Obstacle edges against bumper corners.
    for (start, end) in obstacle.edge_indices() {
        let a = (
            <P::Expr>::constant(obstacle.points[start].x),
            <P::Expr>::constant(obstacle.points[start].y),
        );
        let b = (
            <P::Expr>::constant(obstacle.points[end].x),
            <P::Expr>::constant(obstacle.points[end].y),
        );
        for corner in &world {
            let distance_squared = projected_distance_squared(&a, &b, corner);
            problem.subject_to(Relation::greater_equal(
                distance_squared,
                <P::Expr>::constant(min_squared),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Comparison, RecordingProblem, SymExpr};
    use approx::assert_relative_eq;

    fn pose_variables(problem: &mut RecordingProblem) -> (SymExpr, SymExpr, SymExpr) {
        (
            problem.decision_variable(),
            problem.decision_variable(),
            problem.decision_variable(),
        )
    }

    #[test]
    fn test_point_point_single_constraint() {
        let mut problem = RecordingProblem::new();
        let (x, y, theta) = pose_variables(&mut problem);

        let bumpers = Obstacle::point(0.0, 0.0, 0.25);
        let obstacle = Obstacle::point(1.0, 0.0, 0.25);
        apply_obstacle_constraint(&mut problem, &x, &y, &theta, &bumpers, &obstacle);

        let expected = Relation::greater_equal(
            (SymExpr::constant(1.0) - x).squared() + (SymExpr::constant(0.0) - y).squared(),
            SymExpr::constant(0.25),
        );
        assert_eq!(problem.constraints(), &[expected]);
    }

    #[test]
    fn test_triangle_bumper_square_obstacle_sweep_count() {
        let mut problem = RecordingProblem::new();
        let (x, y, theta) = pose_variables(&mut problem);

        let bumpers = Obstacle::new(
            0.0,
            vec![
                Point2D::new(0.3, 0.0),
                Point2D::new(-0.3, 0.2),
                Point2D::new(-0.3, -0.2),
            ],
        );
        let obstacle = Obstacle::new(
            0.0,
            vec![
                Point2D::new(2.0, 2.0),
                Point2D::new(3.0, 2.0),
                Point2D::new(3.0, 3.0),
                Point2D::new(2.0, 3.0),
            ],
        );
        apply_obstacle_constraint(&mut problem, &x, &y, &theta, &bumpers, &obstacle);

        // 3 bumper edges x 4 obstacle corners + 4 obstacle edges x 3 bumper
        // corners.
        assert_eq!(problem.constraints().len(), 24);
        assert!(problem
            .constraints()
            .iter()
            .all(|relation| relation.comparison == Comparison::GreaterEqual));
    }

    #[test]
    fn test_point_bumper_against_segment_obstacle() {
        let mut problem = RecordingProblem::new();
        let (x, y, theta) = pose_variables(&mut problem);

        let bumpers = Obstacle::point(0.0, 0.0, 0.0);
        let obstacle = Obstacle::new(
            0.5,
            vec![Point2D::new(1.0, -1.0), Point2D::new(1.0, 1.0)],
        );
        apply_obstacle_constraint(&mut problem, &x, &y, &theta, &bumpers, &obstacle);

        // No bumper edges; one obstacle edge against one bumper corner.
        assert_eq!(problem.constraints().len(), 1);

        // At the origin the robot is 1 m from the line x = 1.
        let relation = &problem.constraints()[0];
        assert_relative_eq!(problem.solution_value(&relation.lhs), 1.0);
        assert_relative_eq!(problem.solution_value(&relation.rhs), 0.25);
    }

    #[test]
    fn test_corner_world_rotation() {
        let mut problem = RecordingProblem::new();
        let (x, y, theta) = pose_variables(&mut problem);
        problem.set_initial(&x, 1.0);
        problem.set_initial(&y, 2.0);
        problem.set_initial(&theta, std::f64::consts::FRAC_PI_2);

        // A corner 1 m ahead in the robot frame ends up 1 m left in world.
        let (wx, wy) = corner_world(&x, &y, &theta, Point2D::new(1.0, 0.0));
        assert_relative_eq!(problem.solution_value(&wx), 1.0, epsilon = 1e-12);
        assert_relative_eq!(problem.solution_value(&wy), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unclamped_projection_uses_carrier_line() {
        let mut problem = RecordingProblem::new();
        let (x, y, theta) = pose_variables(&mut problem);
        problem.set_initial(&x, 5.0);
        problem.set_initial(&y, 1.0);

        // Robot is beyond the segment's end; the projection still lands on
        // the carrier line, so the distance is the perpendicular 1 m, not
        // the 4.12 m to the nearest endpoint.
        let bumpers = Obstacle::point(0.0, 0.0, 0.0);
        let obstacle = Obstacle::new(
            0.0,
            vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)],
        );
        apply_obstacle_constraint(&mut problem, &x, &y, &theta, &bumpers, &obstacle);

        let relation = &problem.constraints()[0];
        assert_relative_eq!(problem.solution_value(&relation.lhs), 1.0);
    }
}
