use folio_core::{BlogPost, Route, Selection};
use folio_ui::{EmptyState, FilterBar, Reveal, Tags};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::{cards::PostCard, use_site};

#[component]
pub fn Blogs() -> impl IntoView {
    let content = use_site().content;
    let tags = content.blog_tags();
    let featured = content.featured_post().cloned();
    let selected = RwSignal::new(Selection::All);

    let grid = move || {
        let posts: Vec<BlogPost> =
            selected.with(|s| content.grid_posts(s).into_iter().cloned().collect());

        if posts.is_empty() {
            return view! {
              <EmptyState message="No articles found" hint="Try another tag." />
            }
            .into_any();
        }

        view! {
          <div class="folio-grid">
            {posts
              .into_iter()
              .enumerate()
              .map(|(index, post)| view! { <PostCard post=post index=index /> })
              .collect_view()}
          </div>
        }
        .into_any()
    };

    view! {
      <Title text=Route::Blogs.title() />
      <section class="folio-section">
        <Reveal>
          <h1 class="folio-section-title">"Blog"</h1>
          <p class="folio-section-lead">"Thoughts and insights on development."</p>
        </Reveal>

        {featured.map(|post| view! { <FeaturedPost post=post /> })}

        <FilterBar options=tags selected=selected label="Blog tags" />
        {grid}
      </section>
    }
}

#[component]
fn FeaturedPost(post: BlogPost) -> impl IntoView {
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
    let alt = title.clone();

    view! {
      <Reveal class="folio-featured">
        <article class="folio-card folio-card-featured">
          <a href=href.clone() class="folio-card-media">
            <img src=image alt=alt />
          </a>
          <div class="folio-card-body">
            <span class="folio-badge">"Featured"</span>
            <h2 class="folio-card-title">{title}</h2>
            <p class="folio-card-text">{excerpt}</p>
            <div class="folio-card-meta">
              <time>{date}</time>
              <span>{read_time}</span>
            </div>
            <Tags tags=tags />
            <a href=href class="folio-button">
              "Read Article"
            </a>
          </div>
        </article>
      </Reveal>
    }
}
