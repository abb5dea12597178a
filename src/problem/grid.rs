//! Sample-grid bookkeeping and decision-variable layout.
//!
//! The trajectory is discretized into samples partitioned across segments.
//! With W waypoints and Nᵢ control intervals in the segment ending at
//! waypoint i, there are K = ΣNᵢ intervals and S = K + 1 samples; waypoint i
//! sits at sample ΣⱼNⱼ for j ≤ i (waypoint 0 at sample 0). Segments are
//! indexed from zero here, so segment `s` ends at waypoint `s + 1`.

use std::ops::Range;

use crate::path::Path;

/// Maps waypoints and segments onto the flat sample arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    intervals_per_segment: Vec<usize>,
    waypoint_samples: Vec<usize>,
}

impl SampleGrid {
    /// Build the grid from per-segment interval counts.
    pub fn new(intervals_per_segment: Vec<usize>) -> Self {
        let mut waypoint_samples = Vec::with_capacity(intervals_per_segment.len() + 1);
        waypoint_samples.push(0);
        let mut sample = 0;
        for &intervals in &intervals_per_segment {
            sample += intervals;
            waypoint_samples.push(sample);
        }
        Self {
            intervals_per_segment,
            waypoint_samples,
        }
    }

    /// Build the grid for a path (one segment per waypoint after the first).
    pub fn from_path(path: &Path) -> Self {
        Self::new(
            path.waypoints
                .iter()
                .skip(1)
                .map(|waypoint| waypoint.control_interval_count)
                .collect(),
        )
    }

    /// Number of waypoints.
    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoint_samples.len()
    }

    /// Number of segments (waypoints minus one).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.intervals_per_segment.len()
    }

    /// Total number of control intervals, K.
    #[inline]
    pub fn interval_count(&self) -> usize {
        self.waypoint_samples[self.waypoint_samples.len() - 1]
    }

    /// Total number of samples, S = K + 1.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.interval_count() + 1
    }

    /// Sample index owned by a waypoint.
    #[inline]
    pub fn waypoint_sample(&self, waypoint: usize) -> usize {
        self.waypoint_samples[waypoint]
    }

    /// Control intervals in a segment.
    #[inline]
    pub fn segment_intervals(&self, segment: usize) -> usize {
        self.intervals_per_segment[segment]
    }

    /// Samples owned by a segment: every sample after the previous waypoint
    /// up to and including the segment's own waypoint.
    pub fn segment_samples(&self, segment: usize) -> Range<usize> {
        (self.waypoint_samples[segment] + 1)..(self.waypoint_samples[segment + 1] + 1)
    }

    /// Samples viewed per waypoint: the first waypoint owns just sample 0,
    /// every later waypoint owns the samples of the segment ending at it.
    pub fn owned_samples(&self, waypoint: usize) -> Range<usize> {
        if waypoint == 0 {
            0..1
        } else {
            self.segment_samples(waypoint - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let grid = SampleGrid::new(vec![4, 3]);
        assert_eq!(grid.waypoint_count(), 3);
        assert_eq!(grid.segment_count(), 2);
        assert_eq!(grid.interval_count(), 7);
        assert_eq!(grid.sample_count(), 8);
    }

    #[test]
    fn test_waypoint_samples() {
        let grid = SampleGrid::new(vec![4, 3]);
        assert_eq!(grid.waypoint_sample(0), 0);
        assert_eq!(grid.waypoint_sample(1), 4);
        assert_eq!(grid.waypoint_sample(2), 7);
    }

    #[test]
    fn test_segment_samples_include_waypoint() {
        let grid = SampleGrid::new(vec![4, 3]);
        assert_eq!(grid.segment_samples(0), 1..5);
        assert_eq!(grid.segment_samples(1), 5..8);
        assert_eq!(grid.segment_samples(0).len(), grid.segment_intervals(0));
    }

    #[test]
    fn test_owned_samples() {
        let grid = SampleGrid::new(vec![4, 3]);
        assert_eq!(grid.owned_samples(0), 0..1);
        assert_eq!(grid.owned_samples(1), 1..5);
        assert_eq!(grid.owned_samples(2), 5..8);
    }

    #[test]
    fn test_single_segment() {
        let grid = SampleGrid::new(vec![4]);
        assert_eq!(grid.sample_count(), 5);
        assert_eq!(grid.waypoint_sample(1), 4);
        assert_eq!(grid.segment_samples(0), 1..5);
    }
}
