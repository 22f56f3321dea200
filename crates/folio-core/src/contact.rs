//! Contact form state machine and submission flow.
//!
//! ```text
//! Editing --submit--> (validate) --invalid--> Editing
//!                         |
//!                         +--valid--> Submitting --2xx--> Succeeded --window--> Editing
//!                                         |
//!                                         +--other--> Failed --edit/submit--> Editing
//! ```
//!
//! [`ContactForm`] holds the draft and the phase. [`submit_contact`] drives
//! one attempt through injected handles: the form state, a notification
//! sink, and a [`FormRelay`] that performs the POST.

use std::{cell::RefCell, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::Notify;

/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str =
    "🎉 Message sent successfully! I'll get back to you within 24 hours.";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The in-progress form values. Serializes to the relay's JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check every field; an empty result means the draft can be sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(message) = validate_field(field, self.get(field)) {
                errors.insert(field, message);
            }
        }
        errors
    }

    /// JSON body for the relay.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    let length = value.chars().count();

    match field {
        Field::Name if value.is_empty() => Some("Name is required"),
        Field::Name if length < 2 => Some("Name must be at least 2 characters"),
        Field::Email if value.is_empty() => Some("Email is required"),
        Field::Email if !EMAIL.is_match(value) => Some("Invalid email address"),
        Field::Subject if value.is_empty() => Some("Subject is required"),
        Field::Subject if length < 5 => Some("Subject must be at least 5 characters"),
        Field::Message if value.is_empty() => Some("Message is required"),
        Field::Message if length < 10 => Some("Message must be at least 10 characters"),
        _ => None,
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    fn insert(&mut self, field: Field, message: &'static str) {
        self.entries.retain(|(f, _)| *f != field);
        self.entries.push((field, message));
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),

    #[error("a submission is already in flight")]
    InFlight,
}

/// A validated draft on its way to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub draft: ContactDraft,
}

/// Failure reported by a [`FormRelay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay responded with HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Transport(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

impl RelayError {
    /// Text for the error notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(status) => {
                format!("❌ Failed to send message (HTTP {status}). Please try again.")
            }
            other => format!("❌ Error: {other}"),
        }
    }
}

/// How a relay response was applied to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed(RelayError),
    /// The response belongs to an attempt the form no longer waits for.
    Stale,
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    phase: Phase,
    attempt: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Inputs are disabled while a request is in flight.
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Edit a field. Ignored while submitting.
    ///
    /// Once errors are on screen they are recomputed on every edit so they
    /// clear as the user fixes them.
    pub fn update(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        self.draft.set(field, value);
        if self.phase == Phase::Failed {
            self.phase = Phase::Editing;
        }
        if !self.errors.is_empty() {
            self.errors = self.draft.validate();
        }
        true
    }

    /// Validate and, if valid, move to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.is_locked() {
            return Err(SubmitBlocked::InFlight);
        }

        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            self.phase = Phase::Editing;
            return Err(SubmitBlocked::Invalid(self.errors.len()));
        }

        self.attempt += 1;
        self.phase = Phase::Submitting;
        tracing::debug!(attempt = self.attempt, "contact submission started");
        Ok(Submission {
            attempt: self.attempt,
            draft: self.draft.clone(),
        })
    }

    /// Apply the relay's answer for `attempt`.
    pub fn finish(&mut self, attempt: u64, result: Result<(), RelayError>) -> Resolution {
        if self.phase != Phase::Submitting || attempt != self.attempt {
            return Resolution::Stale;
        }

        match result {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.errors = FieldErrors::default();
                self.phase = Phase::Succeeded;
                Resolution::Succeeded
            }
            Err(err) => {
                tracing::warn!(%err, attempt, "contact submission failed");
                self.phase = Phase::Failed;
                Resolution::Failed(err)
            }
        }
    }

    /// Number of the most recent submit attempt.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Close the success banner opened by `attempt`. A timer left over from
    /// an earlier send does nothing.
    pub fn end_success_window(&mut self, attempt: u64) -> bool {
        if self.phase != Phase::Succeeded || self.attempt != attempt {
            return false;
        }
        self.phase = Phase::Editing;
        true
    }
}

/// Performs the outbound POST of a draft.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn send(&self, draft: &ContactDraft) -> Result<(), RelayError>;
}

/// Mutable state reached through a handle that may have been disposed.
pub trait SharedState<T> {
    /// Run `f` on the state, or return `None` if it no longer exists.
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> SharedState<T> for RefCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Result of [`submit_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Sent,
    Failed(RelayError),
    /// The form went away (or moved on) before the relay answered.
    Abandoned,
}

/// Run one submit attempt: validate, POST, apply the result, notify.
pub async fn submit_contact<S, N, R>(form: &S, notices: &N, relay: &R) -> SubmitOutcome
where
    S: SharedState<ContactForm>,
    N: Notify,
    R: FormRelay,
{
    let submission = match form.with_mut(ContactForm::begin_submit) {
        Some(Ok(submission)) => submission,
        Some(Err(blocked)) => return SubmitOutcome::Blocked(blocked),
        None => return SubmitOutcome::Abandoned,
    };

    let result = relay.send(&submission.draft).await;

    match form.with_mut(|f| f.finish(submission.attempt, result)) {
        Some(Resolution::Succeeded) => {
            notices.success(SUCCESS_MESSAGE);
            SubmitOutcome::Sent
        }
        Some(Resolution::Failed(err)) => {
            notices.error(err.user_message());
            SubmitOutcome::Failed(err)
        }
        Some(Resolution::Stale) | None => {
            tracing::debug!(
                attempt = submission.attempt,
                "dropping relay result for inactive form"
            );
            SubmitOutcome::Abandoned
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::notify::{NotificationQueue, Severity};

    struct MockRelay {
        status: u16,
        calls: Cell<usize>,
        last: RefCell<Option<ContactDraft>>,
    }

    impl MockRelay {
        fn returning(status: u16) -> Self {
            Self {
                status,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl FormRelay for MockRelay {
        async fn send(&self, draft: &ContactDraft) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(draft.clone());
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(RelayError::Status(self.status))
            }
        }
    }

    struct DownRelay;

    impl FormRelay for DownRelay {
        async fn send(&self, _draft: &ContactDraft) -> Result<(), RelayError> {
            Err(RelayError::Transport("TypeError: Failed to fetch".to_string()))
        }
    }

    /// A form handle whose view has been torn down.
    struct Disposed;

    impl SharedState<ContactForm> for Disposed {
        fn with_mut<R>(&self, _f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            None
        }
    }

    /// Alive for `begin_submit`, gone by the time the relay answers.
    struct DisposedMidFlight {
        form: RefCell<Option<ContactForm>>,
    }

    impl SharedState<ContactForm> for DisposedMidFlight {
        fn with_mut<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            self.form.borrow_mut().take().map(|mut form| f(&mut form))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Jo");
        form.update(Field::Email, "a@b.com");
        form.update(Field::Subject, "Hello there");
        form.update(Field::Message, "This is a message.");
        form
    }

    #[test]
    fn test_validation_messages() {
        let errors = ContactDraft::default().validate();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Subject), Some("Subject is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));

        let draft = ContactDraft {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hey".to_string(),
            message: "Short".to_string(),
        };
        let errors = draft.validate();
        assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
        assert_eq!(
            errors.get(Field::Subject),
            Some("Subject must be at least 5 characters")
        );
        assert_eq!(
            errors.get(Field::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.com", "first.last+tag@mail.example.org", "x@localhost"] {
            assert!(EMAIL.is_match(ok), "{ok} should be accepted");
        }
        for bad in ["a@", "@b.com", "a b@c.com", "a@-b.com", "a@@b.com"] {
            assert!(!EMAIL.is_match(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_length_counts_characters() {
        let mut draft = ContactDraft::default();
        draft.set(Field::Name, "李明");
        assert_eq!(validate_field(Field::Name, draft.get(Field::Name)), None);
        assert_eq!(
            validate_field(Field::Name, "  J  "),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_draft_json_shape() {
        let json = filled().draft().to_json().expect("encode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("decode");
        assert_eq!(value["name"], "Jo");
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["subject"], "Hello there");
        assert_eq!(value["message"], "This is a message.");
        assert_eq!(value.as_object().map(|o| o.len()), Some(4));
    }

    #[tokio::test]
    async fn test_empty_name_blocks_without_request() {
        let mut form = filled();
        form.update(Field::Name, "");
        let form = RefCell::new(form);
        let notices = RefCell::new(NotificationQueue::default());
        let relay = MockRelay::returning(200);

        let outcome = submit_contact(&form, &notices, &relay).await;

        assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::Invalid(1)));
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(form.borrow().errors().get(Field::Name), Some("Name is required"));
        assert_eq!(form.borrow().phase(), Phase::Editing);
        assert!(notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_success_clears_draft_and_notifies_once() {
        let form = RefCell::new(filled());
        let notices = RefCell::new(NotificationQueue::default());
        let relay = MockRelay::returning(200);

        let outcome = submit_contact(&form, &notices, &relay).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(
            relay.last.borrow().as_ref().map(|d| d.subject.as_str()),
            Some("Hello there")
        );
        assert_eq!(form.borrow().phase(), Phase::Succeeded);
        assert!(form.borrow().draft().is_empty());

        let notices = notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.active()[0].severity, Severity::Success);
        assert_eq!(notices.active()[0].message, SUCCESS_MESSAGE);

        let attempt = form.borrow().attempt();
        assert!(form.borrow_mut().end_success_window(attempt));
        assert_eq!(form.borrow().phase(), Phase::Editing);
    }

    #[tokio::test]
    async fn test_old_success_timer_keeps_newer_banner() {
        let form = RefCell::new(filled());
        let notices = RefCell::new(NotificationQueue::default());
        let relay = MockRelay::returning(200);

        assert_eq!(submit_contact(&form, &notices, &relay).await, SubmitOutcome::Sent);
        let first = form.borrow().attempt();

        for (field, value) in [
            (Field::Name, "Jo"),
            (Field::Email, "a@b.com"),
            (Field::Subject, "Second note"),
            (Field::Message, "Another message here."),
        ] {
            form.borrow_mut().update(field, value);
        }
        assert_eq!(submit_contact(&form, &notices, &relay).await, SubmitOutcome::Sent);
        let second = form.borrow().attempt();
        assert_ne!(first, second);

        assert!(!form.borrow_mut().end_success_window(first));
        assert_eq!(form.borrow().phase(), Phase::Succeeded);
        assert!(form.borrow_mut().end_success_window(second));
        assert_eq!(form.borrow().phase(), Phase::Editing);
    }

    #[tokio::test]
    async fn test_server_error_keeps_draft() {
        let form = RefCell::new(filled());
        let before = form.borrow().draft().clone();
        let notices = RefCell::new(NotificationQueue::default());
        let relay = MockRelay::returning(500);

        let outcome = submit_contact(&form, &notices, &relay).await;

        assert_eq!(outcome, SubmitOutcome::Failed(RelayError::Status(500)));
        assert_eq!(form.borrow().phase(), Phase::Failed);
        assert_eq!(form.borrow().draft(), &before);

        let notices = notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.active()[0].severity, Severity::Error);
        assert!(notices.active()[0].message.contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_reason() {
        let form = RefCell::new(filled());
        let notices = RefCell::new(NotificationQueue::default());

        let outcome = submit_contact(&form, &notices, &DownRelay).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(RelayError::Transport(_))));
        assert!(notices.borrow().active()[0].message.contains("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let form = RefCell::new(filled());
        let notices = RefCell::new(NotificationQueue::default());

        submit_contact(&form, &notices, &MockRelay::returning(503)).await;
        let outcome = submit_contact(&form, &notices, &MockRelay::returning(201)).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(notices.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_disposed_form_is_abandoned() {
        let notices = RefCell::new(NotificationQueue::default());
        let relay = MockRelay::returning(200);

        let outcome = submit_contact(&Disposed, &notices, &relay).await;

        assert_eq!(outcome, SubmitOutcome::Abandoned);
        assert_eq!(relay.calls.get(), 0);
        assert!(notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_form_disposed_while_submitting_drops_response() {
        let form = DisposedMidFlight {
            form: RefCell::new(Some(filled())),
        };
        let notices = RefCell::new(NotificationQueue::default());
        let relay = MockRelay::returning(200);

        let outcome = submit_contact(&form, &notices, &relay).await;

        assert_eq!(outcome, SubmitOutcome::Abandoned);
        assert_eq!(relay.calls.get(), 1);
        assert!(notices.borrow().is_empty());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        let first = form.begin_submit().expect("valid");
        assert!(form.is_locked());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(!form.update(Field::Name, "Someone else"));
        assert_eq!(form.finish(first.attempt, Ok(())), Resolution::Succeeded);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit().expect("valid");
        form.finish(first.attempt, Err(RelayError::Status(502)));

        let second = form.begin_submit().expect("valid");
        assert_eq!(form.finish(first.attempt, Ok(())), Resolution::Stale);
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(form.finish(second.attempt, Ok(())), Resolution::Succeeded);
    }

    #[test]
    fn test_errors_clear_as_fields_are_fixed() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        assert_eq!(form.errors().len(), 4);

        form.update(Field::Name, "Jo");
        assert_eq!(form.errors().get(Field::Name), None);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_edit_after_failure_returns_to_editing() {
        let mut form = filled();
        let s = form.begin_submit().expect("valid");
        form.finish(s.attempt, Err(RelayError::Status(500)));
        assert_eq!(form.phase(), Phase::Failed);

        form.update(Field::Message, "This is a longer message.");
        assert_eq!(form.phase(), Phase::Editing);
    }
}
