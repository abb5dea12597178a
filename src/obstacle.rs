//! Obstacle and bumper polygons.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// A convex polygon with a safety padding, in corner order.
///
/// The same record describes both obstacles (corners in the world frame) and
/// the robot bumper (corners in the robot frame). Interpretation by corner
/// count: one corner is a point, two are a line segment, three or more form
/// a closed polygon (the closing edge from the last corner back to the first
/// exists only from three corners up).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Euclidean padding (meters, ≥ 0) added to every clearance constraint
    /// this polygon participates in.
    pub safety_distance: f64,
    /// Corners in order (at least one).
    pub points: Vec<Point2D>,
}

impl Obstacle {
    /// Create a polygon from corners and a safety padding.
    pub fn new(safety_distance: f64, points: Vec<Point2D>) -> Self {
        Self {
            safety_distance,
            points,
        }
    }

    /// Single-point obstacle.
    pub fn point(x: f64, y: f64, safety_distance: f64) -> Self {
        Self::new(safety_distance, vec![Point2D::new(x, y)])
    }

    /// Number of corners.
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.points.len()
    }

    /// Corner index pairs forming the polygon's edges.
    ///
    /// Consecutive corners always pair up; the closing edge from the last
    /// corner back to the first is present only when there are at least
    /// three corners.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        let n = self.points.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n.saturating_sub(1) {
            edges.push((i, i + 1));
        }
        if n >= 3 {
            edges.push((n - 1, 0));
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Obstacle {
        Obstacle::new(
            0.1,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(0.0, 1.0),
            ],
        )
    }

    #[test]
    fn test_point_has_no_edges() {
        let p = Obstacle::point(1.0, 2.0, 0.0);
        assert_eq!(p.corner_count(), 1);
        assert!(p.edge_indices().is_empty());
    }

    #[test]
    fn test_segment_has_one_edge() {
        let seg = Obstacle::new(0.0, vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        assert_eq!(seg.edge_indices(), vec![(0, 1)]);
    }

    #[test]
    fn test_polygon_closes() {
        let sq = square();
        assert_eq!(sq.edge_indices(), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_triangle_closes() {
        let tri = Obstacle::new(
            0.0,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(0.5, 1.0),
            ],
        );
        assert_eq!(tri.edge_indices(), vec![(0, 1), (1, 2), (2, 0)]);
    }
}
