//! Site header, post table of contents and breadcrumbs.

use folio_core::{
    markdown::TocEntry,
    route::{NavEntry, Route},
};
use leptos::prelude::*;

/// Whether `entry` should be highlighted while `current` is shown.
pub fn is_active(entry: &NavEntry, current: Route) -> bool {
    current.section() == Some(entry.route)
}

/// Main site navigation with a collapsible mobile menu.
///
/// Links are plain anchors; the router intercepts them for client-side
/// navigation.
#[component]
pub fn Navigation(
    /// Brand text linking home.
    #[prop(into)]
    brand: String,
    /// Route currently displayed, for active highlighting.
    current: Signal<Route>,
    /// Trailing controls such as the theme toggle.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = Callback::new(move |()| menu_open.set(false));

    view! {
      <header class="folio-header">
        <nav class="folio-nav" aria-label="Main navigation">
          <a href="/" class="folio-brand" on:click=move |_| close_menu.run(())>
            {brand}
          </a>

          <ul class="folio-nav-list" class:open=move || menu_open.get()>
            {Route::nav_entries()
              .iter()
              .map(|entry| view! { <NavLink entry=*entry current=current on_navigate=close_menu /> })
              .collect_view()}
          </ul>

          <div class="folio-nav-controls">
            {children.map(|children| children())}
            <button
              type="button"
              class="folio-menu-toggle"
              aria-label="Toggle menu"
              aria-expanded=move || menu_open.get().to_string()
              on:click=move |_| menu_open.update(|open| *open = !*open)
            >
              {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
          </div>
        </nav>
      </header>
    }
}

#[component]
fn NavLink(entry: NavEntry, current: Signal<Route>, on_navigate: Callback<()>) -> impl IntoView {
    let active = Memo::new(move |_| is_active(&entry, current.get()));

    view! {
      <li class="folio-nav-item" class:active=active>
        <a
          href=entry.path
          class="folio-nav-link"
          aria-current=move || active.get().then_some("page")
          on:click=move |_| on_navigate.run(())
        >
          {entry.label}
        </a>
      </li>
    }
}

/// Nesting depth of each entry, relative to the shallowest heading present.
///
/// Posts that start at `##` still get a flush-left first level.
pub fn toc_depths(entries: &[TocEntry]) -> Vec<u8> {
    let base = entries.iter().map(|e| e.level).min().unwrap_or(1);
    entries.iter().map(|e| e.level - base).collect()
}

/// "On this page" list for a post. The last clicked entry stays highlighted.
#[component]
pub fn TableOfContents(entries: Vec<TocEntry>) -> impl IntoView {
    let current = RwSignal::new(None::<String>);
    let depths = toc_depths(&entries);

    view! {
      <nav class="folio-toc" aria-label="Table of contents">
        <h2 class="folio-toc-title">"On this page"</h2>
        <ul class="folio-toc-list">
          {entries
            .into_iter()
            .zip(depths)
            .map(|(TocEntry { text, id, .. }, depth)| {
              let depth_class = format!("folio-toc-depth-{depth}");
              let href = format!("#{id}");
              let selected = id.clone();
              let is_current = move || current.with(|c| c.as_deref() == Some(id.as_str()));
              view! {
                <li class=depth_class class:active=is_current>
                  <a
                    href=href
                    class="folio-toc-link"
                    on:click=move |_| current.set(Some(selected.clone()))
                  >
                    {text}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </nav>
    }
}

/// Breadcrumb trail; the last item is the current page and is not a link.
#[component]
pub fn Breadcrumbs(
    /// Breadcrumb items (label, url).
    items: Vec<(String, String)>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);

    view! {
      <nav class="folio-breadcrumbs" aria-label="Breadcrumb">
        <ol class="folio-breadcrumb-list">
          {items
            .into_iter()
            .enumerate()
            .map(|(i, (label, url))| {
              if i == last {
                view! {
                  <li class="folio-breadcrumb-item">
                    <span class="folio-breadcrumb-current" aria-current="page">
                      {label}
                    </span>
                  </li>
                }
                  .into_any()
              } else {
                view! {
                  <li class="folio-breadcrumb-item">
                    <a href=url class="folio-breadcrumb-link">
                      {label}
                    </a>
                    <span class="folio-breadcrumb-separator" aria-hidden="true">
                      "/"
                    </span>
                  </li>
                }
                  .into_any()
              }
            })
            .collect_view()}
        </ol>
      </nav>
    }
}
