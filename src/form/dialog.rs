// SPDX-License-Identifier: MPL-2.0
//! Success dialog shown after a simulated submission completes.

use crate::ui::animation::{Animation, Effect};
use std::time::Instant;

pub const TITLE_KEY: &str = "dialog-success-title";
pub const BODY_KEY: &str = "dialog-success-body";
pub const CONFIRM_KEY: &str = "dialog-success-confirm";

/// Visibility phase of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appearing or fully shown, waiting for acknowledgment.
    Showing(Animation),
    /// Acknowledged and playing its exit effect.
    Hiding(Animation),
}

/// Modal acknowledgment dialog. Only the confirm button dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessDialog {
    phase: Phase,
}

impl SuccessDialog {
    #[must_use]
    pub fn show() -> Self {
        Self {
            phase: Phase::Showing(Animation::start(Effect::BounceIn)),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        match self.phase {
            Phase::Showing(animation) | Phase::Hiding(animation) => animation,
        }
    }

    /// Starts the exit effect. Repeated acknowledgments do not restart it.
    pub fn acknowledge(&mut self) {
        if let Phase::Showing(_) = self.phase {
            self.phase = Phase::Hiding(Animation::start(Effect::BounceOut));
        }
    }

    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        matches!(self.phase, Phase::Hiding(_))
    }

    /// Whether the exit effect has completed and the dialog can be dropped.
    #[must_use]
    pub fn is_gone(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Showing(_) => false,
            Phase::Hiding(animation) => animation.is_finished(now),
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.animation().is_finished(now)
    }
}
