use folio_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Title text=Route::NotFound.title() />
      <section class="folio-section folio-not-found">
        <h1>"404"</h1>
        <p>"This page doesn't exist."</p>
        <a href=Route::Home.path() class="folio-button">
          "Back Home"
        </a>
      </section>
    }
}
