//! Notification queue owned by the app, with one expiry timer per toast.

use std::time::Duration;

use folio_core::{
    Notification, NotificationId, NotificationQueue, Notify, Severity,
    config::NotificationConfig,
};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    /// Create the queue and provide the handle as context.
    pub fn install(config: &NotificationConfig) -> Self {
        let queue = NotificationQueue::new(config.default_duration(), config.max_visible);
        let notifier = Self {
            queue: RwSignal::new(queue),
        };
        provide_context(notifier);
        notifier
    }

    pub fn active(&self) -> Signal<Vec<Notification>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.active().to_vec()))
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

impl Notify for Notifier {
    fn notify(&self, message: String, severity: Severity, duration: Option<Duration>) {
        let pushed = self.queue.try_update(|q| {
            let ttl = duration.unwrap_or(q.default_duration());
            (q.push(message, severity, duration), ttl)
        });
        let Some((id, ttl)) = pushed else {
            return;
        };

        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.expire(id));
            },
            ttl,
        );
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
