use folio_core::{Project, Route, Selection};
use folio_ui::{EmptyState, FilterBar, Reveal};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::{cards::ProjectCard, use_site};

#[component]
pub fn Projects() -> impl IntoView {
    let content = use_site().content;
    let categories = content.project_categories();
    let summary = format!(
        "{} projects, {} featured",
        content.projects().len(),
        content.featured_projects().count()
    );
    let selected = RwSignal::new(Selection::All);

    let grid = move || {
        let projects: Vec<Project> =
            selected.with(|s| content.projects_in(s).into_iter().cloned().collect());

        if projects.is_empty() {
            return view! {
              <EmptyState message="No projects found" hint="Try a different category." />
            }
            .into_any();
        }

        view! {
          <div class="folio-grid">
            {projects
              .into_iter()
              .enumerate()
              .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
              .collect_view()}
          </div>
        }
        .into_any()
    };

    view! {
      <Title text=Route::Projects.title() />
      <section class="folio-section">
        <Reveal>
          <h1 class="folio-section-title">"My Projects"</h1>
          <p class="folio-section-lead">
            "A collection of work I've built, from full-stack apps to interface experiments."
          </p>
          <p class="folio-section-meta">{summary}</p>
        </Reveal>

        <FilterBar options=categories selected=selected label="Project categories" />
        {grid}
      </section>
    }
}
