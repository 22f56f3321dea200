//! Folio Core Library
//!
//! Content model, routing, filtering and the small state machines (theme,
//! notifications, contact form) behind the Folio portfolio site. Nothing in
//! here depends on a UI framework.

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod markdown;
pub mod notify;
pub mod reveal;
pub mod route;
pub mod store;
pub mod theme;

pub use config::Config;
pub use contact::{
    ContactDraft, ContactForm, Field, FormRelay, Phase, RelayError, SharedState, SubmitOutcome,
    submit_contact,
};
pub use content::{BlogPost, Profile, Project, Skill, SkillCategory};
pub use error::{CoreError, Result};
pub use filter::Selection;
pub use notify::{Notification, NotificationId, NotificationQueue, Notify, Severity};
pub use reveal::{RevealEffect, RevealPolicy, RevealTrigger};
pub use route::Route;
pub use store::ContentStore;
pub use theme::{PreferenceStore, Theme, ThemeState};
