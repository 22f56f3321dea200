//! Article components for rendering blog posts.

use leptos::prelude::*;

/// Renders a post's pre-rendered HTML body under its title.
///
/// The HTML comes from the bundled content document, rendered at load.
#[component]
pub fn Article(
    /// Article title.
    #[prop(into)]
    title: String,
    /// Rendered body HTML.
    #[prop(into)]
    html: String,
    /// Shown between the title and the body, usually [`ArticleMeta`].
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
      <article class="folio-article">
        <header class="folio-article-header">
          <h1 class="folio-article-title">{title}</h1>
          {children.map(|children| children())}
        </header>

        <Prose>
          <div class="folio-article-content" inner_html=html></div>
        </Prose>
      </article>
    }
}

/// Article metadata component.
#[component]
pub fn ArticleMeta(
    /// Publication date, already formatted.
    #[prop(optional, into)]
    date: Option<String>,
    /// Free-text read time such as "8 min read".
    #[prop(optional, into)]
    read_time: Option<String>,
    /// Tags.
    #[prop(default = vec![])]
    tags: Vec<String>,
) -> impl IntoView {
    view! {
      <div class="folio-article-meta">
        {date.map(|date| view! { <time class="folio-article-date">{date}</time> })}
        {read_time
          .map(|read_time| view! { <span class="folio-article-read-time">{read_time}</span> })}
        <Tags tags=tags />
      </div>
    }
}

/// A row of tag chips. Renders nothing for an empty list.
#[component]
pub fn Tags(tags: Vec<String>) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
          <div class="folio-tags">
            {tags
              .into_iter()
              .map(|tag| view! { <span class="folio-tag">{tag}</span> })
              .collect_view()}
          </div>
        }
    })
}

/// Prose wrapper for styled article content.
#[component]
pub fn Prose(
    /// Children content.
    children: Children,
) -> impl IntoView {
    view! { <div class="folio-prose">{children()}</div> }
}
