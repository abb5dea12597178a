//! Piecewise path description: waypoints, constraints, and guess skeleton.

use serde::{Deserialize, Serialize};

use crate::core::{Interval, Region2D};
use crate::obstacle::Obstacle;

/// A pose the initial-guess interpolation passes through.
///
/// Guess points are numeric seeds only; they do not constrain the solution.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct InitialGuessPoint {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Heading in radians (CCW from +X).
    pub heading: f64,
}

impl InitialGuessPoint {
    /// Create a new guess point.
    #[inline]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }
}

/// A geometric constraint attached to samples of the trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// Constrain the sampled position to a planar region.
    Translation(Region2D),
    /// Constrain the sampled heading to an interval.
    Heading(Interval),
    /// Constrain position and heading at the same sample.
    Pose {
        /// Admissible region for the position.
        translation: Region2D,
        /// Admissible interval for the heading.
        heading: Interval,
    },
    /// Keep the robot bumper clear of an obstacle polygon.
    Obstacle(Obstacle),
}

/// One waypoint of a piecewise path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Number of control intervals in the segment ending at this waypoint.
    /// Unused for the first waypoint of a path (no segment leads into it).
    pub control_interval_count: usize,
    /// Guess skeleton for the segment ending here (at least one point).
    /// The last entry seeds the waypoint sample itself.
    pub initial_guess_points: Vec<InitialGuessPoint>,
    /// Constraints applied at this waypoint's sample only.
    pub waypoint_constraints: Vec<Constraint>,
    /// Constraints applied at the interior samples of the segment ending
    /// at this waypoint.
    pub segment_constraints: Vec<Constraint>,
}

impl Waypoint {
    /// Create a waypoint with a single guess point and no constraints.
    pub fn new(control_interval_count: usize, guess: InitialGuessPoint) -> Self {
        Self {
            control_interval_count,
            initial_guess_points: vec![guess],
            waypoint_constraints: Vec::new(),
            segment_constraints: Vec::new(),
        }
    }

    /// Create a waypoint pinned to an exact pose, seeded with the same pose.
    pub fn fixed_pose(x: f64, y: f64, heading: f64, control_interval_count: usize) -> Self {
        let mut waypoint = Self::new(control_interval_count, InitialGuessPoint::new(x, y, heading));
        waypoint.waypoint_constraints.push(Constraint::Pose {
            translation: Region2D::exact_point(x, y),
            heading: Interval::exact(heading),
        });
        waypoint
    }
}

/// A piecewise path: ordered waypoints, the robot bumper, and constraints
/// that apply at every sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Waypoints in traversal order (at least two).
    pub waypoints: Vec<Waypoint>,
    /// Robot bumper polygon in the robot frame.
    pub bumpers: Obstacle,
    /// Constraints applied at every sample of the trajectory.
    pub global_constraints: Vec<Constraint>,
}

impl Path {
    /// Create a path from waypoints and a bumper polygon.
    pub fn new(waypoints: Vec<Waypoint>, bumpers: Obstacle) -> Self {
        Self {
            waypoints,
            bumpers,
            global_constraints: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pose_waypoint() {
        let waypoint = Waypoint::fixed_pose(1.0, 2.0, 0.5, 10);
        assert_eq!(waypoint.control_interval_count, 10);
        assert_eq!(waypoint.initial_guess_points.len(), 1);
        assert_eq!(waypoint.initial_guess_points[0].x, 1.0);

        match &waypoint.waypoint_constraints[..] {
            [Constraint::Pose {
                translation,
                heading,
            }] => {
                assert_eq!(*translation, Region2D::exact_point(1.0, 2.0));
                assert_eq!(*heading, Interval::exact(0.5));
            }
            other => panic!("unexpected constraints: {:?}", other),
        }
    }
}
