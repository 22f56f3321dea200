//! Filter pills and the empty state shown when nothing matches.

use folio_core::filter::Selection;
use leptos::prelude::*;

/// One pill per facet label; clicking a pill selects it.
#[component]
pub fn FilterBar(
    /// Facet labels, `"All"` first.
    options: Vec<String>,
    /// The current selection.
    selected: RwSignal<Selection>,
    /// Accessible name of the group.
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
      <div class="folio-filter" role="group" aria-label=label>
        {options
          .into_iter()
          .map(|option| {
            let value = option.clone();
            let active = Memo::new(move |_| selected.with(|s| s.label() == value));
            let pick = option.clone();

            view! {
              <button
                type="button"
                class="folio-filter-pill"
                class:active=active
                aria-pressed=move || active.get().to_string()
                on:click=move |_| selected.set(Selection::from_label(pick.clone()))
              >
                {option}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}

/// Placeholder for a filter that matched nothing.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
      <div class="folio-empty" role="status">
        <p class="folio-empty-message">{message}</p>
        {hint.map(|hint| view! { <p class="folio-empty-hint">{hint}</p> })}
      </div>
    }
}
