//! Evenly spaced sample instants
//!
//! `TimeGrid { start, stop, step }` yields `start, start + step, start + 2 step, ...` strictly
//! below `stop`. Each instant is computed from its index, so no error accumulates along the grid.
//! A malformed grid (non-positive step, `stop <= start`, negative start, non-finite fields)
//! is simply empty.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub start: f64, // first sample time
    pub stop: f64, // exclusive upper bound
    pub step: f64, // spacing between samples
}

impl TimeGrid {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Grid starting at 0, like `arange(0, stop, step)`
    pub fn from_zero(stop: f64, step: f64) -> Self {
        Self::new(0.0, stop, step)
    }

    fn is_well_formed(&self) -> bool {
        self.start.is_finite()
            && self.stop.is_finite()
            && self.step.is_finite()
            && self.start >= 0.0
            && self.step > 0.0
            && self.stop > self.start
    }

    /// Number of samples in the grid
    pub fn len(&self) -> usize {
        if !self.is_well_formed() {
            return 0;
        }

        let mut n = ((self.stop - self.start) / self.step).ceil() as usize;

        // ceil can overshoot by one when the division rounds up past an integer
        while n > 0 && self.time_at(n - 1) >= self.stop {
            n -= 1;
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time of sample `i`, no bounds check against `stop`
    #[inline]
    pub fn time_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// All sample times in increasing order
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.time_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grids_have_arange_lengths() {
        assert_eq!(TimeGrid::from_zero(5.0, 0.05).len(), 100);
        assert_eq!(TimeGrid::from_zero(20.0, 0.05).len(), 400);
        assert_eq!(TimeGrid::new(0.0, 1.0, 0.3).len(), 4);
    }

    #[test]
    fn times_are_strictly_below_stop() {
        for &(stop, step) in &[(0.3, 0.1), (0.7, 0.1), (1.0, 0.1), (5.0, 0.05), (2.0, 0.25)] {
            let grid = TimeGrid::from_zero(stop, step);
            let last = grid.times().last().unwrap();
            assert!(last < stop, "last sample {last} not below stop {stop}");
            assert!(last + step >= stop - 1e-9, "grid stopped early at {last}");
        }
    }

    #[test]
    fn times_are_indexed_not_accumulated() {
        let grid = TimeGrid::from_zero(5.0, 0.05);
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times[0], 0.0);
        assert_eq!(times[20], 20.0 * 0.05);
        assert_eq!(times[99], 99.0 * 0.05);
    }

    #[test]
    fn malformed_grids_are_empty() {
        assert!(TimeGrid::new(0.0, 0.0, 0.1).is_empty());
        assert!(TimeGrid::new(2.0, 1.0, 0.1).is_empty());
        assert!(TimeGrid::new(0.0, 1.0, 0.0).is_empty());
        assert!(TimeGrid::new(0.0, 1.0, -0.1).is_empty());
        assert!(TimeGrid::new(-1.0, 1.0, 0.1).is_empty());
        assert!(TimeGrid::new(0.0, f64::INFINITY, 0.1).is_empty());
        assert!(TimeGrid::new(0.0, 1.0, f64::NAN).is_empty());
        assert_eq!(TimeGrid::new(0.0, 1.0, -0.1).times().count(), 0);
    }

    #[test]
    fn offset_start() {
        let grid = TimeGrid::new(1.0, 2.0, 0.5);
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times, vec![1.0, 1.5]);
    }
}
