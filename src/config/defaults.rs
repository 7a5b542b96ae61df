// SPDX-License-Identifier: MPL-2.0
//! Fixed behavioral constants.
//!
//! Validation rules and timings are authored here and are intentionally not
//! exposed through `settings.toml`.
//!
//! # Categories
//!
//! - **Submission**: Simulated round trip and failure feedback timing
//! - **Animation**: Redraw cadence while effects are running
//! - **Notifications**: Toast polling cadence

use std::time::Duration;

// ==========================================================================
// Submission
// ==========================================================================

/// Delay standing in for the network round trip of a real submission.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// How long the form keeps shaking after a rejected submit.
pub const SHAKE_DURATION: Duration = Duration::from_millis(1000);

/// Number of digits a phone number must have.
pub const PHONE_NUMBER_DIGITS: usize = 10;

// ==========================================================================
// Animation
// ==========================================================================

/// Tick interval while an animation is running (~60 fps).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Spinner angular speed in radians per second.
pub const SPINNER_RADIANS_PER_SEC: f32 = 2.0 * std::f32::consts::PI;

// ==========================================================================
// Notifications
// ==========================================================================

/// Tick interval used to expire toasts when nothing else is animating.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake_is_shorter_than_submission() {
        assert!(SHAKE_DURATION < SIMULATED_SUBMIT_DELAY);
    }

    #[test]
    fn animation_tick_is_faster_than_notification_tick() {
        assert!(ANIMATION_TICK < NOTIFICATION_TICK);
    }
}
