//! Planar admissible regions for translation constraints.

use serde::{Deserialize, Serialize};

use super::Interval;

/// Which side of an ellipse boundary is admissible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EllipseDirection {
    /// Points on or inside the boundary.
    Inside,
    /// Points exactly on the boundary.
    Centered,
    /// Points on or outside the boundary.
    Outside,
}

/// A region of the plane a 2D quantity may be constrained to.
///
/// Regions are declarative and solver-agnostic; the problem builder turns
/// them into scalar (in)equalities in the backend's expression language.
/// The variant set is closed, so consumers dispatch with exhaustive `match`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Region2D {
    /// Axis-aligned box: independent interval bounds on x and y.
    Rectangular {
        /// Bound on the x component.
        x_bound: Interval,
        /// Bound on the y component.
        y_bound: Interval,
    },
    /// Line through the origin at the given angle (radians, CCW from +X).
    Linear {
        /// Direction of the admissible line.
        angle: f64,
    },
    /// Origin-centered ellipse with the given semi-axes.
    Elliptical {
        /// Semi-axis along x (meters, > 0).
        x_radius: f64,
        /// Semi-axis along y (meters, > 0).
        y_radius: f64,
        /// Admissible side of the boundary.
        direction: EllipseDirection,
    },
    /// Sector: points whose bearing from the origin lies in `bearing`.
    Cone {
        /// Admissible bearing range (radians).
        bearing: Interval,
    },
}

impl Region2D {
    /// Region pinning the 2D quantity to exactly `(x, y)`.
    pub fn exact_point(x: f64, y: f64) -> Self {
        Region2D::Rectangular {
            x_bound: Interval::exact(x),
            y_bound: Interval::exact(y),
        }
    }
}
