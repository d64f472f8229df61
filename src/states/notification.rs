//! Notifications
//!
//! Toast queue shared by all pages. The queue itself is plain data with an
//! explicit clock so it can be tested; [`NotificationState`] wraps it in an
//! entity and drives expiry with a timer while anything can expire.

use crate::constants::{NOTIFICATION_CAPACITY, NOTIFICATION_TICK_MS, NOTIFICATION_TTL_MS};
use crate::helpers::BoundedDeque;
use crate::states::AdminGlobalStore;
use gpui::{App, Context, SharedString};
use std::time::{Duration, Instant};

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational message (auto-dismiss)
    Info,
    /// Success message (auto-dismiss)
    Success,
    /// Warning message (persist until dismissed)
    Warning,
    /// Error message (persist until dismissed)
    Error,
}

impl NotificationLevel {
    pub fn auto_expires(self) -> bool {
        matches!(self, NotificationLevel::Info | NotificationLevel::Success)
    }
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: SharedString,
    created_at: Instant,
}

/// Bounded toast queue; the oldest toast is evicted when full
#[derive(Debug)]
pub struct NotificationQueue {
    items: BoundedDeque<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAPACITY, Duration::from_millis(NOTIFICATION_TTL_MS))
    }
}

impl NotificationQueue {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            items: BoundedDeque::new(capacity),
            next_id: 1,
            ttl,
        }
    }

    /// Queue a toast and return its id
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<SharedString>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let evicted = self.items.push(Notification {
            id,
            level,
            message: message.into(),
            created_at: now,
        });
        if let Some(old) = evicted {
            tracing::debug!(id = old.id, "Notification evicted");
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        self.items.retain(|n| n.id != id) > 0
    }

    /// Drop auto-expiring toasts older than the TTL; returns how many went
    pub fn expire(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        self.items.retain(|n| {
            !(n.level.auto_expires() && now.saturating_duration_since(n.created_at) >= ttl)
        })
    }

    /// Whether a timer is still needed
    pub fn has_expiring(&self) -> bool {
        self.items.iter().any(|n| n.level.auto_expires())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ==================== Entity ====================

/// Notification entity rendered by the toast overlay
#[derive(Default)]
pub struct NotificationState {
    queue: NotificationQueue,
    ticking: bool,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn push(
        &mut self,
        level: NotificationLevel,
        message: impl Into<SharedString>,
        cx: &mut Context<Self>,
    ) -> u64 {
        let id = self.queue.push(level, message, Instant::now());
        if level.auto_expires() {
            self.ensure_ticking(cx);
        }
        cx.notify();
        id
    }

    pub fn dismiss(&mut self, id: u64, cx: &mut Context<Self>) {
        if self.queue.dismiss(id) {
            cx.notify();
        }
    }

    fn ensure_ticking(&mut self, cx: &mut Context<Self>) {
        if self.ticking {
            return;
        }
        self.ticking = true;

        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(NOTIFICATION_TICK_MS))
                    .await;

                let keep_going = this.update(cx, |state, cx| {
                    if state.queue.expire(Instant::now()) > 0 {
                        cx.notify();
                    }
                    state.ticking = state.queue.has_expiring();
                    state.ticking
                });

                if !matches!(keep_going, Ok(true)) {
                    break;
                }
            }
        })
        .detach();
    }
}

/// Push a toast onto the global notification queue
pub fn notify(cx: &mut App, level: NotificationLevel, message: impl Into<SharedString>) {
    let message = message.into();
    match level {
        NotificationLevel::Error => tracing::error!(message = %message, "Notification"),
        NotificationLevel::Warning => tracing::warn!(message = %message, "Notification"),
        _ => tracing::info!(message = %message, "Notification"),
    }
    let notifications = cx.global::<AdminGlobalStore>().notifications();
    notifications.update(cx, |state, cx| {
        state.push(level, message, cx);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(capacity: usize) -> NotificationQueue {
        NotificationQueue::new(capacity, Duration::from_secs(4))
    }

    #[test]
    fn test_full_queue_evicts_oldest() {
        let now = Instant::now();
        let mut q = queue(2);
        let first = q.push(NotificationLevel::Error, "a", now);
        q.push(NotificationLevel::Error, "b", now);
        q.push(NotificationLevel::Error, "c", now);
        let ids: Vec<u64> = q.iter().map(|n| n.id).collect();
        assert!(!ids.contains(&first));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_info_expires_after_ttl() {
        let now = Instant::now();
        let mut q = queue(5);
        q.push(NotificationLevel::Info, "saved", now);
        q.push(NotificationLevel::Success, "created", now);
        assert_eq!(q.expire(now + Duration::from_secs(3)), 0);
        assert_eq!(q.expire(now + Duration::from_secs(4)), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn test_errors_persist_until_dismissed() {
        let now = Instant::now();
        let mut q = queue(5);
        let id = q.push(NotificationLevel::Error, "delete failed", now);
        q.push(NotificationLevel::Warning, "slow", now);
        assert_eq!(q.expire(now + Duration::from_secs(60)), 0);
        assert!(!q.has_expiring());
        assert!(q.dismiss(id));
        assert!(!q.dismiss(id));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Instant::now();
        let mut q = queue(5);
        let a = q.push(NotificationLevel::Info, "a", now);
        let b = q.push(NotificationLevel::Info, "b", now);
        assert_ne!(a, b);
    }
}
