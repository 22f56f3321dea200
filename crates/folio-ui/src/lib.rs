//! Folio UI Components
//!
//! Leptos components shared by the Folio pages.
//!
//! # Components
//!
//! ## Navigation
//! - [`Navigation`] - Site header with active-route highlighting
//! - [`TableOfContents`] - Article table of contents
//! - [`Breadcrumbs`] - Breadcrumb navigation
//!
//! ## Article
//! - [`Article`] - Renders a post's HTML body
//! - [`ArticleMeta`] - Date, read time and tags
//! - [`Prose`] - Styled prose wrapper
//!
//! ## Feedback and motion
//! - [`ToastStack`] - Active notifications
//! - [`Reveal`] - Entrance animation wrapper
//! - [`FilterBar`] / [`EmptyState`] - Facet pills and the no-match state
//! - [`SkillBar`] - Skill proficiency bar
//!
//! # Example
//!
//! ```ignore
//! use folio_core::{Selection, reveal::RevealPolicy};
//! use folio_ui::{FilterBar, Reveal};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Tags() -> impl IntoView {
//!     let selected = RwSignal::new(Selection::All);
//!     let options = vec!["All".to_string(), "React".to_string()];
//!
//!     view! {
//!         <Reveal policy=RevealPolicy::fade_up()>
//!             <FilterBar options=options selected=selected label="Tags" />
//!         </Reveal>
//!     }
//! }
//! ```

pub mod article;
pub mod filter;
pub mod navigation;
pub mod reveal;
pub mod skill;
pub mod toast;

pub use article::{Article, ArticleMeta, Prose, Tags};
pub use filter::{EmptyState, FilterBar};
pub use navigation::{Breadcrumbs, Navigation, TableOfContents};
pub use reveal::Reveal;
pub use skill::SkillBar;
pub use toast::ToastStack;
