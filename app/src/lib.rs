//! The Folio application: router, page views and browser adapters.

mod cards;
mod notifier;
mod pages;
mod relay;
mod theme;

use std::sync::Arc;

use folio_core::{Config, ContentStore, Route};
use folio_ui::{Navigation, ToastStack};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route as Page, Router, Routes},
    hooks::use_location,
};

pub use notifier::{Notifier, use_notifier};
pub use relay::{FormCell, HttpRelay};
pub use theme::{BrowserStorage, ThemeHandle};

const CONTENT: &str = include_str!("../../content/portfolio.toml");
const CONFIG: &str = include_str!("../../folio.toml");

/// Configuration and content, loaded once and shared through context.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: Arc<Config>,
    pub content: Arc<ContentStore>,
}

impl Site {
    /// Parse and validate the embedded config and content documents.
    pub fn load() -> folio_core::Result<Self> {
        let config = Config::from_toml_str(CONFIG)?;
        let content = ContentStore::from_toml_str(CONTENT)?;
        Ok(Self {
            config: Arc::new(config),
            content: Arc::new(content),
        })
    }
}

pub fn use_site() -> Site {
    expect_context::<Site>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    match Site::load() {
        Ok(site) => view! { <Shell site=site /> }.into_any(),
        Err(err) => {
            log::error!("failed to load site: {err}");
            view! { <LoadError message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
fn Shell(site: Site) -> impl IntoView {
    let theme = ThemeHandle::install(&site.config.theme);
    let notices = Notifier::install(&site.config.notifications);
    let brand = site.content.profile().name.clone();
    let site_title = site.config.site.title.clone();
    provide_context(site);

    view! {
      <Title formatter=move |page: String| format!("{page} | {site_title}") />
      <Router>
        <Frame brand=brand theme=theme notices=notices />
      </Router>
    }
}

#[component]
fn Frame(brand: String, theme: ThemeHandle, notices: Notifier) -> impl IntoView {
    let location = use_location();
    let current = Signal::derive(move || Route::resolve(&location.pathname.get()));

    // New page, new scroll position.
    Effect::new(move |_| {
        location.pathname.track();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
      <Navigation brand=brand current=current>
        <theme::ThemeToggle theme=theme />
      </Navigation>

      <main class="folio-main">
        <Routes fallback=|| view! { <pages::NotFound /> }>
          <Page path=StaticSegment("") view=pages::Home />
          <Page path=StaticSegment("about") view=pages::About />
          <Page path=StaticSegment("projects") view=pages::Projects />
          <Page path=StaticSegment("blogs") view=pages::Blogs />
          <Page path=(StaticSegment("blogs"), ParamSegment("id")) view=pages::BlogDetail />
          <Page path=StaticSegment("contact") view=pages::Contact />
        </Routes>
      </main>

      <Footer />
      <ToastStack
        notifications=notices.active()
        on_dismiss=Callback::new(move |id| notices.dismiss(id))
      />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let site = use_site();
    let profile = site.content.profile();
    let name = profile.name.clone();
    let links = cards::social_links(site.content.social());

    view! {
      <footer class="folio-footer">
        <p class="folio-footer-name">{name}</p>
        {links}
      </footer>
    }
}

#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
      <Title text="Error" />
      <main class="folio-main folio-load-error" role="alert">
        <h1>"Something went wrong"</h1>
        <p>"The site content could not be loaded."</p>
        <pre>{message}</pre>
      </main>
    }
}
