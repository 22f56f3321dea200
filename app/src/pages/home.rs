use std::time::Duration;

use folio_core::{
    Notify, Route, Severity, Skill, SkillCategory,
    reveal::{RevealEffect, RevealPolicy},
};
use folio_ui::{Reveal, Tags};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    cards::{PostCard, ProjectCard, STAGGER, social_links},
    use_notifier, use_site,
};

/// Number of projects and posts previewed on the home page.
const PREVIEW: usize = 3;

fn announce_cv_download(notices: &impl Notify) {
    notices.notify(
        "CV download will start shortly!".to_string(),
        Severity::Success,
        Some(Duration::from_millis(3000)),
    );
}

fn announce_contact(notices: &impl Notify) {
    notices.notify(
        "Heading to the contact section...".to_string(),
        Severity::Info,
        Some(Duration::from_millis(2000)),
    );
}

#[component]
pub fn Home() -> impl IntoView {
    let content = use_site().content;
    let projects = content.recent_projects(PREVIEW).to_vec();
    let posts = content.recent_posts(PREVIEW).to_vec();

    view! {
      <Title text=Route::Home.title() />
      <Hero />
      <SkillsOverview />

      <section class="folio-section">
        <Reveal>
          <h2 class="folio-section-title">"Featured Projects"</h2>
          <p class="folio-section-lead">"Some of my recent work"</p>
        </Reveal>
        <div class="folio-grid">
          {projects
            .into_iter()
            .enumerate()
            .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
            .collect_view()}
        </div>
        <a href=Route::Projects.path() class="folio-link">
          "View all projects →"
        </a>
      </section>

      <section class="folio-section">
        <Reveal>
          <h2 class="folio-section-title">"Latest Articles"</h2>
          <p class="folio-section-lead">"Thoughts and insights on development"</p>
        </Reveal>
        <div class="folio-grid">
          {posts
            .into_iter()
            .enumerate()
            .map(|(index, post)| view! { <PostCard post=post index=index max_tags=2 /> })
            .collect_view()}
        </div>
      </section>

      <CallToAction />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let site = use_site();
    let notifier = use_notifier();
    let profile = site.content.profile().clone();
    let first_name = profile.name.split_whitespace().next().unwrap_or_default().to_string();
    let links = social_links(site.content.social());
    let hero = RevealPolicy::hero();
    let portrait = RevealPolicy {
        effect: RevealEffect::Scale(80),
        ..hero
    }
    .staggered(1, STAGGER);

    view! {
      <section class="folio-hero">
        <Reveal policy=hero class="folio-hero-text">
          <p class="folio-hero-greeting">"Hi, I'm"</p>
          <h1 class="folio-hero-name">{first_name}</h1>
          <p class="folio-hero-title">{profile.title}</p>
          <p class="folio-hero-subtitle">{profile.subtitle}</p>
          <div class="folio-hero-actions">
            {profile
              .resume_url
              .map(|url| {
                view! {
                  <a
                    href=url
                    class="folio-button"
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |_| announce_cv_download(&notifier)
                  >
                    "Download CV"
                  </a>
                }
              })}
            <a
              href=Route::Contact.path()
              class="folio-button folio-button-ghost"
              on:click=move |_| announce_contact(&notifier)
            >
              "Get In Touch"
            </a>
          </div>
          {links}
        </Reveal>

        <Reveal policy=portrait class="folio-hero-portrait">
          <img src=profile.image alt=profile.name />
        </Reveal>
      </section>
    }
}

/// Skills of the first three categories, then the headline stats.
#[component]
fn SkillsOverview() -> impl IntoView {
    let content = use_site().content;
    let columns: Vec<(SkillCategory, Vec<Skill>)> = content
        .skill_categories()
        .into_iter()
        .take(3)
        .map(|category| (category, content.skills(category).to_vec()))
        .collect();
    let stats: Vec<(String, &'static str)> = content
        .stats()
        .entries()
        .into_iter()
        .map(|(value, label)| (value.to_string(), label))
        .collect();

    view! {
      <section class="folio-section folio-skills-overview">
        <div class="folio-columns">
          {columns
            .into_iter()
            .enumerate()
            .map(|(index, (category, skills))| {
              let names: Vec<String> = skills.into_iter().map(|s| s.name).collect();
              view! {
                <Reveal policy=RevealPolicy::fade_up().staggered(index, STAGGER) class="folio-card">
                  <h3>{category.label()}</h3>
                  <Tags tags=names />
                </Reveal>
              }
            })
            .collect_view()}
        </div>

        <dl class="folio-stats">
          {stats
            .into_iter()
            .map(|(value, label)| {
              view! {
                <div class="folio-stat">
                  <dt>{label}</dt>
                  <dd>{value}</dd>
                </div>
              }
            })
            .collect_view()}
        </dl>
      </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    let profile = use_site().content.profile().clone();
    let mailto = profile.mailto();
    let tel = profile.tel();
    let policy = RevealPolicy {
        effect: RevealEffect::Scale(90),
        ..RevealPolicy::fade_up()
    };

    view! {
      <Reveal policy=policy>
        <section class="folio-section folio-cta">
          <h2>"Let's Work Together"</h2>
          <p>{profile.short_bio}</p>
          <div class="folio-hero-actions">
            <a href=mailto class="folio-button">
              "Send Email"
            </a>
            {tel
              .map(|tel| {
                view! {
                  <a href=tel class="folio-button folio-button-ghost">
                    "Call Now"
                  </a>
                }
              })}
          </div>
        </section>
      </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio_core::NotificationQueue;

    use super::*;

    #[test]
    fn test_hero_actions_use_short_lived_toasts() {
        let notices = RefCell::new(NotificationQueue::default());

        announce_cv_download(&notices);
        announce_contact(&notices);

        let queue = notices.borrow();
        let active = queue.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].severity, Severity::Success);
        assert_eq!(active[0].duration, Duration::from_millis(3000));
        assert_eq!(active[1].severity, Severity::Info);
        assert_eq!(active[1].duration, Duration::from_millis(2000));
    }
}
