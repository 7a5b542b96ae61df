// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget timers backing the submit flow.
//!
//! Both are plain futures; the application wraps them in tasks and nothing
//! ever cancels them.

use crate::config::{SHAKE_DURATION, SIMULATED_SUBMIT_DELAY};

/// Stand-in for the network round trip of a real submission.
pub async fn simulated_submission() {
    tokio::time::sleep(SIMULATED_SUBMIT_DELAY).await;
}

/// Resolves when the shake effect of a rejected submit should be removed.
pub async fn shake_timeout() {
    tokio::time::sleep(SHAKE_DURATION).await;
}
