use folio_core::{Route, SkillCategory, reveal::RevealPolicy};
use folio_ui::{Reveal, SkillBar};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    cards::{STAGGER, TimelineEntry},
    use_site,
};

#[component]
pub fn About() -> impl IntoView {
    let content = use_site().content;
    let profile = content.profile().clone();
    let experience = content.experience().to_vec();

    view! {
      <Title text=Route::About.title() />
      <section class="folio-section folio-about">
        <Reveal policy=RevealPolicy::slide_in(-50) class="folio-about-portrait">
          <img src=profile.image alt=profile.name.clone() />
        </Reveal>
        <Reveal policy=RevealPolicy::slide_in(50) class="folio-about-text">
          <h1 class="folio-section-title">"About Me"</h1>
          <p class="folio-about-role">{profile.title} " · " {profile.location}</p>
          <p>{profile.bio}</p>
          {profile
            .resume_url
            .map(|url| {
              view! {
                <a href=url class="folio-button" target="_blank" rel="noopener noreferrer">
                  "Download Resume"
                </a>
              }
            })}
        </Reveal>
      </section>

      <section class="folio-section">
        <Reveal>
          <h2 class="folio-section-title">"Experience"</h2>
        </Reveal>
        <div class="folio-timeline">
          {experience
            .into_iter()
            .enumerate()
            .map(|(index, entry)| view! { <TimelineEntry entry=entry index=index /> })
            .collect_view()}
        </div>
      </section>

      <SkillTabs />
      <Background />
    }
}

#[component]
fn SkillTabs() -> impl IntoView {
    let content = use_site().content;
    let categories = content.skill_categories();
    let first = categories.first().copied().unwrap_or(SkillCategory::Frontend);
    let active = RwSignal::new(first);

    let tabs = categories
        .into_iter()
        .map(|category| {
            view! {
              <button
                type="button"
                role="tab"
                class="folio-tab"
                class:active=move || active.get() == category
                aria-selected=move || (active.get() == category).to_string()
                on:click=move |_| active.set(category)
              >
                {category.label()}
              </button>
            }
        })
        .collect_view();

    let panel = move || {
        let category = active.get();
        content
            .skills(category)
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, skill)| {
                view! {
                  <Reveal policy=RevealPolicy::fade_up().staggered(index, STAGGER / 2)>
                    <SkillBar skill=skill />
                  </Reveal>
                }
            })
            .collect_view()
    };

    view! {
      <section class="folio-section">
        <Reveal>
          <h2 class="folio-section-title">"Skills & Technologies"</h2>
        </Reveal>
        <div class="folio-tabs" role="tablist">
          {tabs}
        </div>
        <div class="folio-skill-grid" role="tabpanel">
          {panel}
        </div>
      </section>
    }
}

/// Education and training, when the content document has them.
#[component]
fn Background() -> impl IntoView {
    let content = use_site().content;
    let education = content.education().cloned();
    let training = content.training().cloned();

    if education.is_none() && training.is_none() {
        return ().into_any();
    }

    view! {
      <section class="folio-section folio-columns">
        {education
          .map(|edu| {
            view! {
              <Reveal class="folio-card">
                <h2>"Education"</h2>
                <h3>{edu.degree} " in " {edu.field}</h3>
                <p class="folio-card-kicker">{edu.institution} " · " {edu.period}</p>
                {edu.grade.map(|grade| view! { <span class="folio-badge">{grade}</span> })}
                <p>{edu.description}</p>
              </Reveal>
            }
          })}
        {training
          .map(|t| {
            view! {
              <Reveal policy=RevealPolicy::fade_up().staggered(1, STAGGER) class="folio-card">
                <h2>"Training"</h2>
                <h3>{t.program}</h3>
                <p class="folio-card-kicker">{t.institution} " · " {t.period}</p>
                <p>{t.description}</p>
              </Reveal>
            }
          })}
      </section>
    }
    .into_any()
}
