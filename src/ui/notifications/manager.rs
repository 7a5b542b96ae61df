// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` queues notifications, limits how many are visible, and
//! drops expired ones on tick.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Key prefix shared by every preview failure message.
const PREVIEW_ERROR_PREFIX: &str = "notification-preview-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when the visible stack is full.
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
            Severity::Error => tracing::error!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
            Severity::Info => tracing::info!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops visible notifications that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.visible_count() > 0 || self.queued_count() > 0
    }

    /// Removes preview failure messages once a preview decodes fine, so
    /// stale errors do not linger next to a working preview.
    pub fn clear_preview_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible
            .retain(|n| !n.message_key().starts_with(PREVIEW_ERROR_PREFIX));
        self.queue
            .retain(|n| !n.message_key().starts_with(PREVIEW_ERROR_PREFIX));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("test-{i}")));
        }
        manager.push(Notification::info("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::error(format!("visible-{i}")));
        }
        manager.push(Notification::error("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::info("temp").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn tick_drops_expired_but_keeps_errors() {
        let mut manager = Manager::new();
        let info = Notification::info("notification-config-save-error");
        let later = info.created_at() + Duration::from_secs(10);
        manager.push(info);
        manager.push(Notification::error("notification-preview-corrupted"));

        manager.tick(later);

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("notification-preview-corrupted")
        );
    }

    #[test]
    fn clear_preview_errors_keeps_other_messages() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-preview-unreadable"));
        manager.push(Notification::error("notification-preview-corrupted"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-preview-unsupported"));

        manager.clear_preview_errors();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
        for notification in manager.visible() {
            assert!(!notification.message_key().starts_with(PREVIEW_ERROR_PREFIX));
        }
    }
}
