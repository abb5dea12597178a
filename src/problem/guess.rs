//! Piecewise-linear initial guess over the sample grid.
//!
//! Walks the path's guess skeleton and produces one pose value per sample.
//! Each segment's samples are split across its guess points: ⌊Nᵢ/Gᵢ⌋ samples
//! per sub-segment, with the final sub-segment absorbing the remainder so
//! the counts always add up to Nᵢ.

use crate::path::{InitialGuessPoint, Path};

/// Initial pose values, one entry per sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitialGuess {
    /// X value per sample.
    pub x: Vec<f64>,
    /// Y value per sample.
    pub y: Vec<f64>,
    /// Heading value per sample.
    pub theta: Vec<f64>,
}

impl InitialGuess {
    /// Number of samples covered.
    pub fn sample_count(&self) -> usize {
        self.x.len()
    }
}

/// Append `count` linearly spaced values from `from` to `to`.
///
/// The start value is not re-appended (the previous sub-segment ended with
/// it); the end value is the last appended sample. Appends nothing when
/// `count` is zero.
fn append_linspace(values: &mut Vec<f64>, from: f64, to: f64, count: usize) {
    for k in 1..=count {
        values.push(from + k as f64 * (to - from) / count as f64);
    }
}

/// Append interpolated samples for one sub-segment across all components.
fn append_span(
    guess: &mut InitialGuess,
    from: &InitialGuessPoint,
    to: &InitialGuessPoint,
    count: usize,
) {
    append_linspace(&mut guess.x, from.x, to.x, count);
    append_linspace(&mut guess.y, from.y, to.y, count);
    append_linspace(&mut guess.theta, from.heading, to.heading, count);
}

/// Interpolate the path's guess skeleton onto the sample grid.
///
/// The result has exactly `1 + Σ control_interval_count` entries per
/// component. Every waypoint must carry at least one guess point; the
/// builder validates this before calling.
pub fn linear_initial_guess(path: &Path) -> InitialGuess {
    let mut guess = InitialGuess::default();

    let first = &path.waypoints[0].initial_guess_points[0];
    guess.x.push(first.x);
    guess.y.push(first.y);
    guess.theta.push(first.heading);

    for window in path.waypoints.windows(2) {
        let previous = &window[0].initial_guess_points;
        let waypoint = &window[1];
        let points = &waypoint.initial_guess_points;
        let intervals = waypoint.control_interval_count;
        let per_sub = intervals / points.len();

        // Into the segment: previous waypoint's last guess point to this
        // segment's first.
        append_span(&mut guess, &previous[previous.len() - 1], &points[0], per_sub);

        // Between interior guess points.
        for j in 1..points.len().saturating_sub(1) {
            append_span(&mut guess, &points[j - 1], &points[j], per_sub);
        }

        // Tail absorbs the rounding remainder and lands on the waypoint.
        if points.len() >= 2 {
            let consumed = (points.len() - 1) * per_sub;
            append_span(
                &mut guess,
                &points[points.len() - 2],
                &points[points.len() - 1],
                intervals - consumed,
            );
        }
    }

    guess
}
