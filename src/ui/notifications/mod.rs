// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for feedback that must not block the form.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - rendering
//!
//! Info toasts last 3s, warnings 5s, errors stay until dismissed. At most
//! three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
