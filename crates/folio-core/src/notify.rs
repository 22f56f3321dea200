//! Toast notification queue.
//!
//! The queue only tracks which notifications are active. Whoever owns the
//! queue schedules one expiry callback per notification and calls
//! [`NotificationQueue::expire`] when it fires; the user may call
//! [`NotificationQueue::dismiss`] first. Removal is idempotent either way.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier handed out by [`NotificationQueue::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// An active notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

/// Anything that can accept a notification.
///
/// Implementations return immediately; expiry is their own business.
pub trait Notify {
    fn notify(&self, message: String, severity: Severity, duration: Option<Duration>);

    fn success(&self, message: impl Into<String>) {
        self.notify(message.into(), Severity::Success, None);
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(message.into(), Severity::Error, None);
    }

    fn warning(&self, message: impl Into<String>) {
        self.notify(message.into(), Severity::Warning, None);
    }

    fn info(&self, message: impl Into<String>) {
        self.notify(message.into(), Severity::Info, None);
    }
}

/// Active notifications, oldest first.
///
/// At most `max_visible` entries are kept; pushing past the cap evicts the
/// oldest.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    next_id: u64,
    active: Vec<Notification>,
    default_duration: Duration,
    max_visible: usize,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000), 5)
    }
}

impl NotificationQueue {
    pub fn new(default_duration: Duration, max_visible: usize) -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
            default_duration,
            max_visible: max_visible.max(1),
        }
    }

    /// Enqueue a notification and return its id.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        if self.active.len() >= self.max_visible {
            let evicted = self.active.remove(0);
            tracing::debug!(id = %evicted.id, "notification evicted by cap");
        }

        self.active.push(Notification {
            id,
            message: message.into(),
            severity,
            duration: duration.unwrap_or(self.default_duration),
        });
        id
    }

    /// Remove a notification the user closed. Returns whether it was active.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    /// Remove a notification whose time is up. Returns whether it was active.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        match self.active.iter().position(|n| n.id == id) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
}

impl Notify for std::cell::RefCell<NotificationQueue> {
    fn notify(&self, message: String, severity: Severity, duration: Option<Duration>) {
        self.borrow_mut().push(message, severity, duration);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_push_uses_default_duration() {
        let mut queue = NotificationQueue::new(Duration::from_millis(4000), 5);
        let id = queue.push("Saved", Severity::Success, None);
        let n = queue.get(id).expect("active");
        assert_eq!(n.duration, Duration::from_millis(4000));
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn test_push_custom_duration() {
        let mut queue = NotificationQueue::default();
        let id = queue.push("Hold on", Severity::Info, Some(Duration::from_secs(10)));
        assert_eq!(queue.get(id).map(|n| n.duration), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_entries_are_independent() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("a", Severity::Info, None);
        let b = queue.push("b", Severity::Warning, None);
        let c = queue.push("c", Severity::Error, None);

        assert!(queue.expire(b));
        let ids: Vec<_> = queue.active().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_dismiss_after_expire_is_noop() {
        let mut queue = NotificationQueue::default();
        let keep = queue.push("keep", Severity::Info, None);
        let id = queue.push("gone", Severity::Info, None);

        assert!(queue.expire(id));
        assert!(!queue.dismiss(id));
        assert!(!queue.expire(id));
        assert_eq!(queue.len(), 1);
        assert!(queue.get(keep).is_some());
    }

    #[test]
    fn test_double_dismiss_is_noop() {
        let mut queue = NotificationQueue::default();
        let id = queue.push("x", Severity::Success, None);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut queue = NotificationQueue::new(Duration::from_secs(1), 2);
        let first = queue.push("1", Severity::Info, None);
        let second = queue.push("2", Severity::Info, None);
        let third = queue.push("3", Severity::Info, None);

        assert_eq!(queue.len(), 2);
        assert!(queue.get(first).is_none());
        assert!(queue.get(second).is_some());
        assert!(queue.get(third).is_some());
        // The evicted entry's timer firing later must not disturb the rest.
        assert!(!queue.expire(first));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = NotificationQueue::new(Duration::from_secs(1), 1);
        let a = queue.push("a", Severity::Info, None);
        queue.dismiss(a);
        let b = queue.push("b", Severity::Info, None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_notify_helpers_on_refcell() {
        let queue = RefCell::new(NotificationQueue::default());
        queue.success("ok");
        queue.error("bad");
        let severities: Vec<_> = queue.borrow().active().iter().map(|n| n.severity).collect();
        assert_eq!(severities, vec![Severity::Success, Severity::Error]);
    }
}
