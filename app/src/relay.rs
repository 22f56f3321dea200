//! Browser side of the contact form: the HTTP relay and the signal-backed
//! form handle.

use folio_core::{ContactDraft, ContactForm, FormRelay, RelayError, SharedState};
use gloo_net::http::Request;
use leptos::prelude::*;

/// POSTs drafts as JSON to the configured form relay.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl FormRelay for HttpRelay {
    async fn send(&self, draft: &ContactDraft) -> Result<(), RelayError> {
        let body = draft
            .to_json()
            .map_err(|e| RelayError::Encode(e.to_string()))?;

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| RelayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(RelayError::Status(response.status()))
        }
    }
}

/// The contact view's form signal. Once the view is gone the signal is
/// disposed and updates report `None`.
#[derive(Debug, Clone, Copy)]
pub struct FormCell(pub RwSignal<ContactForm>);

impl SharedState<ContactForm> for FormCell {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
