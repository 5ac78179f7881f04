//! Fire-and-forget transition descriptions.
//!
//! The core never waits for an animation to finish. It hands each layer a
//! [`Transition`] alongside the target values; the layer (the scene graph in
//! this crate) schedules and samples the animation on its own clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing curve applied to the normalized progress `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// How a batch of attribute changes animates. Every layer touched by one
/// selection change receives the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    /// Reference duration for an axis switch.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);

    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Apply the target values at once.
    pub fn immediate() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, Easing::CubicInOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for e in [Easing::Linear, Easing::CubicInOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(-3.0), 0.0);
            assert_eq!(e.apply(7.0), 1.0);
        }
        assert_eq!(Easing::CubicInOut.apply(0.5), 0.5);
    }
}
