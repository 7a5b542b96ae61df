// SPDX-License-Identifier: MPL-2.0
//! Time-driven visual effects.
//!
//! An [`Animation`] only records which [`Effect`] runs and when it started.
//! Views sample it with the current instant and get back plain numbers
//! (opacity, scale, horizontal offset) to apply to widgets. Redraws are driven
//! by the tick subscription while any animation is unfinished.
//!
//! Keyframes follow the classic animate.css definitions.

use std::time::{Duration, Instant};

/// A named entrance/exit/attention effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Opacity 0 to 1.
    FadeIn,
    /// Grows from 30% while fading in.
    ZoomIn,
    /// Elastic scale-up used when a dialog appears.
    BounceIn,
    /// Elastic scale-down used when a dialog goes away.
    BounceOut,
    /// Horizontal shake signalling rejected input.
    ShakeX,
}

/// Horizontal amplitude of [`Effect::ShakeX`] in logical pixels.
pub const SHAKE_AMPLITUDE: f32 = 10.0;

impl Effect {
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Effect::FadeIn | Effect::ZoomIn | Effect::ShakeX => Duration::from_millis(1000),
            Effect::BounceIn | Effect::BounceOut => Duration::from_millis(750),
        }
    }
}

/// A running instance of an [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    effect: Effect,
    started_at: Instant,
}

impl Animation {
    /// Starts `effect` now.
    #[must_use]
    pub fn start(effect: Effect) -> Self {
        Self::starting_at(effect, Instant::now())
    }

    #[must_use]
    pub fn starting_at(effect: Effect, started_at: Instant) -> Self {
        Self { effect, started_at }
    }

    #[must_use]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let total = self.effect.duration();
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.effect.duration()
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let p = self.progress(now);
        let opacity = match self.effect {
            Effect::FadeIn => p,
            Effect::ZoomIn => (p * 2.0).min(1.0),
            Effect::BounceIn => interpolate(&[(0.0, 0.0), (0.6, 1.0), (1.0, 1.0)], p),
            Effect::BounceOut => interpolate(&[(0.0, 1.0), (0.55, 1.0), (1.0, 0.0)], p),
            Effect::ShakeX => 1.0,
        };
        opacity.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn scale(&self, now: Instant) -> f32 {
        let p = self.progress(now);
        match self.effect {
            Effect::FadeIn | Effect::ShakeX => 1.0,
            Effect::ZoomIn => interpolate(&[(0.0, 0.3), (0.5, 1.0), (1.0, 1.0)], p),
            Effect::BounceIn => interpolate(
                &[
                    (0.0, 0.3),
                    (0.2, 1.1),
                    (0.4, 0.9),
                    (0.6, 1.03),
                    (0.8, 0.97),
                    (1.0, 1.0),
                ],
                p,
            ),
            Effect::BounceOut => interpolate(
                &[(0.0, 1.0), (0.2, 0.9), (0.5, 1.1), (0.55, 1.1), (1.0, 0.3)],
                p,
            ),
        }
    }

    /// Horizontal displacement in logical pixels.
    #[must_use]
    pub fn offset_x(&self, now: Instant) -> f32 {
        match self.effect {
            Effect::ShakeX => {
                let a = SHAKE_AMPLITUDE;
                interpolate(
                    &[
                        (0.0, 0.0),
                        (0.1, -a),
                        (0.2, a),
                        (0.3, -a),
                        (0.4, a),
                        (0.5, -a),
                        (0.6, a),
                        (0.7, -a),
                        (0.8, a),
                        (0.9, -a),
                        (1.0, 0.0),
                    ],
                    self.progress(now),
                )
            }
            _ => 0.0,
        }
    }
}

/// Piecewise-linear interpolation over `(position, value)` keyframes sorted
/// by position.
fn interpolate(frames: &[(f32, f32)], p: f32) -> f32 {
    let Some(&(first_pos, first_val)) = frames.first() else {
        return 0.0;
    };
    if p <= first_pos {
        return first_val;
    }
    for window in frames.windows(2) {
        let (p0, v0) = window[0];
        let (p1, v1) = window[1];
        if p <= p1 {
            if p1 <= p0 {
                return v1;
            }
            let t = ((p - p0) / (p1 - p0)).clamp(0.0, 1.0);
            return v0 + (v1 - v0) * t;
        }
    }
    frames.last().map_or(first_val, |&(_, v)| v)
}
