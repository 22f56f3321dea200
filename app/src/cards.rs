//! Cards and small blocks shared between pages.

use std::time::Duration;

use folio_core::{
    BlogPost, Project, Route,
    content::{ExperienceEntry, SocialLinks},
    reveal::RevealPolicy,
};
use folio_ui::{Reveal, Tags};
use leptos::prelude::*;

/// Delay between consecutive cards in a grid.
pub const STAGGER: Duration = Duration::from_millis(100);

pub fn social_links(social: &SocialLinks) -> impl IntoView + use<> {
    let links: Vec<(&'static str, String)> = social
        .links()
        .into_iter()
        .map(|(label, url)| (label, url.to_string()))
        .collect();

    view! {
      <ul class="folio-social">
        {links
          .into_iter()
          .map(|(label, url)| {
            view! {
              <li>
                <a href=url target="_blank" rel="noopener noreferrer" aria-label=label>
                  {label}
                </a>
              </li>
            }
          })
          .collect_view()}
      </ul>
    }
}

#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        technologies,
        live_url,
        source_url,
        featured,
        category,
        ..
    } = project;
    let alt = title.clone();

    view! {
      <Reveal policy=RevealPolicy::fade_up().staggered(index, STAGGER) class="folio-card-slot">
        <article class="folio-card folio-project">
          <div class="folio-card-media">
            <img src=image alt=alt loading="lazy" />
            {featured.then(|| view! { <span class="folio-badge">"Featured"</span> })}
          </div>
          <div class="folio-card-body">
            <span class="folio-card-kicker">{category}</span>
            <h3 class="folio-card-title">{title}</h3>
            <p class="folio-card-text">{description}</p>
            <Tags tags=technologies />
            <div class="folio-card-actions">
              <a href=live_url class="folio-button" target="_blank" rel="noopener noreferrer">
                "View Live"
              </a>
              {source_url
                .map(|url| {
                  view! {
                    <a
                      href=url
                      class="folio-button folio-button-ghost"
                      target="_blank"
                      rel="noopener noreferrer"
                    >
                      "Source Code"
                    </a>
                  }
                })}
            </div>
          </div>
        </article>
      </Reveal>
    }
}

/// Summary card linking to a post. Shows at most `max_tags` tags.
#[component]
pub fn PostCard(
    post: BlogPost,
    index: usize,
    #[prop(default = 3)] max_tags: usize,
) -> impl IntoView {
    let href = Route::BlogDetail(Some(post.id)).path();
    let date = post.formatted_date();
    let BlogPost {
        title,
        excerpt,
        image,
        read_time,
        tags,
        ..
    } = post;
    let tags: Vec<String> = tags.into_iter().take(max_tags).collect();
    let alt = title.clone();

    view! {
      <Reveal policy=RevealPolicy::fade_up().staggered(index, STAGGER) class="folio-card-slot">
        <article class="folio-card folio-post">
          <a href=href.clone() class="folio-card-media">
            <img src=image alt=alt loading="lazy" />
          </a>
          <div class="folio-card-body">
            <div class="folio-card-meta">
              <time>{date}</time>
              <span>{read_time}</span>
            </div>
            <h3 class="folio-card-title">
              <a href=href.clone()>{title}</a>
            </h3>
            <p class="folio-card-text">{excerpt}</p>
            <Tags tags=tags />
            <a href=href class="folio-link">
              "Read More →"
            </a>
          </div>
        </article>
      </Reveal>
    }
}

/// One row of the experience timeline.
#[component]
pub fn TimelineEntry(entry: ExperienceEntry, index: usize) -> impl IntoView {
    let ExperienceEntry {
        title,
        organization,
        period,
        location,
        kind,
        description,
        technologies,
    } = entry;
    let side = if index % 2 == 0 { -50 } else { 50 };
    let policy = RevealPolicy::slide_in(side).staggered(index, STAGGER);

    view! {
      <Reveal policy=policy class="folio-timeline-item">
        <div class="folio-timeline-header">
          <h3>{title}</h3>
          <span class="folio-badge">{kind}</span>
        </div>
        <p class="folio-timeline-org">{organization} " · " {location}</p>
        <p class="folio-timeline-period">{period}</p>
        <ul class="folio-timeline-points">
          {description.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
        </ul>
        <Tags tags=technologies />
      </Reveal>
    }
}
