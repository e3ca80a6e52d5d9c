//! Frame-by-frame playback over a precomputed trajectory
//!
//! The renderer owns a `Playback`, advances it with the elapsed wall time and asks for the
//! current sample each frame. One sample is shown per `interval`; playback holds the last
//! sample once it gets there (no repeat).

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Playback<S> {
    frames: Vec<S>,
    index: usize, // sample currently on screen
    interval: Duration, // time each sample stays on screen
    elapsed: Duration, // time accumulated since the last frame change
}

impl<S> Playback<S> {
    pub fn new(frames: Vec<S>, interval: Duration) -> Self {
        Self {
            frames,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// One frame per grid step, `step` in seconds
    /// A step that is not a valid duration advances one frame per tick
    pub fn from_step(frames: Vec<S>, step: f64) -> Self {
        let interval = Duration::try_from_secs_f64(step).unwrap_or(Duration::ZERO);
        Self::new(frames, interval)
    }

    pub fn frames(&self) -> &[S] {
        &self.frames
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current(&self) -> Option<&S> {
        self.frames.get(self.index)
    }

    /// Samples already shown, current one included
    pub fn shown(&self) -> &[S] {
        let end = (self.index + 1).min(self.frames.len());
        &self.frames[..end]
    }

    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.frames.len()
    }

    /// Move forward by `delta` of wall time, returns true if the current sample changed
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.is_finished() {
            return false;
        }

        if self.interval.is_zero() {
            self.index += 1;
            return true;
        }

        self.elapsed += delta;
        let mut moved = false;
        while self.elapsed >= self.interval && !self.is_finished() {
            self.elapsed -= self.interval;
            self.index += 1;
            moved = true;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn advances_one_frame_per_interval() {
        let mut p = Playback::new(vec![0, 1, 2, 3], ms(50));
        assert_eq!(p.current(), Some(&0));

        assert!(!p.advance(ms(30)));
        assert_eq!(p.index(), 0);

        assert!(p.advance(ms(30)));
        assert_eq!(p.current(), Some(&1));

        // a long frame skips ahead instead of drifting behind
        assert!(p.advance(ms(100)));
        assert_eq!(p.current(), Some(&3));
    }

    #[test]
    fn holds_last_frame() {
        let mut p = Playback::new(vec!['a', 'b'], ms(10));
        p.advance(ms(1000));
        assert_eq!(p.current(), Some(&'b'));
        assert!(p.is_finished());
        assert!(!p.advance(ms(1000)));
        assert_eq!(p.shown(), &['a', 'b']);
    }

    #[test]
    fn empty_playback_has_nothing_to_show() {
        let mut p: Playback<f64> = Playback::from_step(Vec::new(), -1.0);
        assert!(p.current().is_none());
        assert!(p.is_finished());
        assert!(!p.advance(ms(10)));
        assert!(p.shown().is_empty());
    }

    #[test]
    fn interval_follows_grid_step() {
        let p = Playback::from_step(vec![1, 2], 0.05);
        assert_eq!(p.interval(), ms(50));
    }
}
