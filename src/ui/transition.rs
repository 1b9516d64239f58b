// SPDX-License-Identifier: MPL-2.0
//! Time-based enter transitions (fade and slide).
//!
//! Transitions are purely cosmetic. They are restarted by the update loop
//! when a section or the mobile menu mounts, and read by the view to fade
//! and offset content. Nothing in here feeds back into navigation state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    /// A transition that has not started yet and renders as finished.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            started_at: None,
            duration,
        }
    }

    /// Restarts the transition from `now`.
    pub fn start(&mut self, now: Instant) {
        if self.duration.is_zero() {
            self.started_at = None;
        } else {
            self.started_at = Some(now);
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn linear(&self, now: Instant) -> f32 {
        match self.started_at {
            None => 1.0,
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Eased progress in `[0, 1]` (cubic ease-out).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let t = self.linear(now);
        1.0 - (1.0 - t).powi(3)
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.linear(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_transition_is_finished() {
        let transition = Transition::new(Duration::from_millis(600));
        let now = Instant::now();
        assert_eq!(transition.progress(now), 1.0);
        assert!(!transition.is_running(now));
    }

    #[test]
    fn progress_advances_and_saturates() {
        let mut transition = Transition::new(Duration::from_millis(600));
        let start = Instant::now();
        transition.start(start);

        assert_eq!(transition.progress(start), 0.0);
        assert!(transition.is_running(start));

        let halfway = transition.progress(start + Duration::from_millis(300));
        assert!(halfway > 0.5, "ease-out runs ahead of linear, got {halfway}");
        assert!(halfway < 1.0);

        let done = start + Duration::from_secs(5);
        assert_eq!(transition.progress(done), 1.0);
        assert!(!transition.is_running(done));
    }

    #[test]
    fn zero_duration_never_runs() {
        let mut transition = Transition::new(Duration::ZERO);
        let now = Instant::now();
        transition.start(now);
        assert!(!transition.is_running(now));
        assert_eq!(transition.progress(now), 1.0);
    }
}
