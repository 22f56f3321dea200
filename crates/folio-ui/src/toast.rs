//! Toast notifications.
//!
//! The stack only renders what it is given; the owner of the queue schedules
//! expiry and handles dismissal.

use std::time::Duration;

use folio_core::notify::{Notification, NotificationId, Severity};
use leptos::prelude::*;

pub fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "✕",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    }
}

/// Errors interrupt screen readers; everything else waits its turn.
pub fn aria_role(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "alert",
        _ => "status",
    }
}

/// The progress bar drains over the notification's lifetime.
pub fn progress_style(duration: Duration) -> String {
    format!("animation-duration: {}ms;", duration.as_millis())
}

/// Fixed-position stack of active notifications, oldest on top.
#[component]
pub fn ToastStack(
    /// Active notifications.
    notifications: Signal<Vec<Notification>>,
    /// Called with the id of a toast the user closed.
    on_dismiss: Callback<NotificationId>,
) -> impl IntoView {
    view! {
      <div class="folio-toasts" aria-live="polite" aria-label="Notifications">
        <For
          each=move || notifications.get()
          key=|notification| notification.id
          children=move |notification| {
            view! { <Toast notification=notification on_dismiss=on_dismiss /> }
          }
        />
      </div>
    }
}

#[component]
fn Toast(notification: Notification, on_dismiss: Callback<NotificationId>) -> impl IntoView {
    let Notification {
        id,
        message,
        severity,
        duration,
    } = notification;
    let class = format!("folio-toast folio-toast-{severity}");
    let progress = progress_style(duration);

    view! {
      <div id=id.to_string() class=class role=aria_role(severity)>
        <span class="folio-toast-icon" aria-hidden="true">
          {icon(severity)}
        </span>
        <p class="folio-toast-message">{message}</p>
        <button
          type="button"
          class="folio-toast-close"
          aria-label="Dismiss notification"
          on:click=move |_| on_dismiss.run(id)
        >
          "×"
        </button>
        <div class="folio-toast-progress" style=progress></div>
      </div>
    }
}
