//! Differential-drive robot parameters.

use serde::{Deserialize, Serialize};

/// Physical parameters of a differential-drive robot.
///
/// Carried through problem construction for the dynamics constraints; the
/// current builder emits kinematic and geometric constraints only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drivetrain {
    /// Robot mass in kilograms.
    pub mass: f64,
    /// Moment of inertia about the vertical axis in kg·m².
    pub moment_of_inertia: f64,
    /// Distance between the left and right wheel contact points in meters.
    pub trackwidth: f64,
    /// Wheel radius in meters.
    pub wheel_radius: f64,
    /// Maximum wheel angular velocity in rad/s.
    pub wheel_max_angular_velocity: f64,
}

impl Default for Drivetrain {
    fn default() -> Self {
        Self {
            mass: 50.0,
            moment_of_inertia: 6.0,
            trackwidth: 0.5,
            wheel_radius: 0.08,
            wheel_max_angular_velocity: 70.0,
        }
    }
}
