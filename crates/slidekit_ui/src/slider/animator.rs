//! Time-based tween for smooth programmatic scrolling.
//!
//! Ports without native smooth scrolling (the toolkit viewport) drive their
//! scroll offset from this animator once per frame. Retargeting mid-flight
//! restarts the tween from the current offset.

use std::time::Duration;

use web_time::Instant;

use crate::constants::SMOOTH_SCROLL_MS;

/// Easing curve of the tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    active: bool,
    start: f32,
    target: f32,
    /// Set on the first frame after (re)targeting
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(Duration::from_millis(SMOOTH_SCROLL_MS), Easing::default())
    }
}

impl SmoothScroll {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Animate from `current` to `target`, replacing any running tween.
    /// The clock starts at the next [`SmoothScroll::sample`].
    pub fn retarget(&mut self, current: f32, target: f32) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = None;
    }

    /// Offset at `now`, or `None` when idle. The final sample lands exactly
    /// on the target and deactivates the tween.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let next = self.start + (self.target - self.start) * self.easing.apply(t);
        log::trace!("smooth scroll t={:.2} offset={:.1}", t, next);
        Some(next)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_animator_yields_nothing() {
        let mut anim = SmoothScroll::default();
        assert!(!anim.is_active());
        assert_eq!(anim.sample(Instant::now()), None);
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut anim = SmoothScroll::new(Duration::from_millis(100), Easing::Linear);
        let t0 = Instant::now();
        anim.retarget(0.0, 900.0);

        assert_eq!(anim.sample(t0), Some(0.0));
        let mid = anim.sample(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid - 450.0).abs() < 1.0);
        assert_eq!(anim.sample(t0 + Duration::from_millis(100)), Some(900.0));
        assert!(!anim.is_active());
        assert_eq!(anim.sample(t0 + Duration::from_millis(200)), None);
    }

    #[test]
    fn ease_out_moves_fast_first() {
        let mut anim = SmoothScroll::new(Duration::from_millis(100), Easing::EaseOut);
        let t0 = Instant::now();
        anim.retarget(0.0, 100.0);
        anim.sample(t0);
        let quarter = anim.sample(t0 + Duration::from_millis(25)).unwrap();
        assert!(quarter > 25.0);
    }

    #[test]
    fn retarget_restarts_from_current() {
        let mut anim = SmoothScroll::new(Duration::from_millis(100), Easing::Linear);
        let t0 = Instant::now();
        anim.retarget(0.0, 300.0);
        anim.sample(t0);
        let current = anim.sample(t0 + Duration::from_millis(50)).unwrap();

        anim.retarget(current, 0.0);
        assert_eq!(anim.target(), Some(0.0));
        let t1 = t0 + Duration::from_millis(60);
        assert_eq!(anim.sample(t1), Some(current));
        assert_eq!(anim.sample(t1 + Duration::from_millis(100)), Some(0.0));
    }
}
