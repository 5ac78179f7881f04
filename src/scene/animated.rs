use crate::render::transition::{Easing, Transition};

/// A scalar scene attribute that animates towards its latest target.
///
/// Retargeting mid-flight starts the new animation from the value currently
/// on screen, so overlapping transitions never jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    from: f64,
    to: f64,
    start: f64,
    duration: f64,
    easing: Easing,
}

impl Animated {
    /// A value at rest.
    pub fn new(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Final value of the current animation.
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value_at(&self, now: f64) -> f64 {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = self.easing.apply((now - self.start) / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }

    /// Animate from the currently displayed value to `to`, starting at `now`.
    pub fn retarget(&mut self, to: f64, now: f64, transition: Transition) {
        if transition.is_immediate() {
            *self = Self::new(to);
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = transition.duration.as_secs_f64();
        self.easing = transition.easing;
    }
}
