//! Shared evaluation contract for closed-form motions
//!
//! A validated motion implements [`Trajectory::sample_at`]; sequential and parallel
//! evaluation over a [`TimeGrid`] come for free. Samples are independent, so the parallel
//! path returns exactly the same sequence as the sequential one.

use rayon::prelude::*;
use tracing::debug;

use super::grid::TimeGrid;

/// Trait for motions that can be evaluated at any instant
pub trait Trajectory {
    type Sample: Send;

    /// Position at time `t`
    fn sample_at(&self, t: f64) -> Self::Sample;

    /// Evaluate every instant of `grid`, in increasing time order
    fn compute(&self, grid: &TimeGrid) -> Vec<Self::Sample> {
        let samples: Vec<Self::Sample> = grid.times().map(|t| self.sample_at(t)).collect();
        debug!(samples = samples.len(), "computed trajectory");
        samples
    }

    /// Same as [`Trajectory::compute`], spread over the rayon pool
    fn compute_par(&self, grid: &TimeGrid) -> Vec<Self::Sample>
    where
        Self: Sync,
    {
        let samples: Vec<Self::Sample> = (0..grid.len())
            .into_par_iter()
            .map(|i| self.sample_at(grid.time_at(i)))
            .collect();
        debug!(samples = samples.len(), "computed trajectory in parallel");
        samples
    }
}
