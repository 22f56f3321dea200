use folio_core::{BlogPost, Route, route::parse_blog_id};
use folio_ui::{Article, ArticleMeta, Breadcrumbs, TableOfContents};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::use_site;

#[component]
pub fn BlogDetail() -> impl IntoView {
    let content = use_site().content;
    let params = use_params_map();

    move || {
        let id = params.with(|p| p.get("id").as_deref().and_then(parse_blog_id));
        match id.and_then(|id| content.post(id)).cloned() {
            Some(post) => view! { <PostView post=post /> }.into_any(),
            None => view! { <PostNotFound /> }.into_any(),
        }
    }
}

#[component]
fn PostView(post: BlogPost) -> impl IntoView {
    let crumbs = vec![
        ("Home".to_string(), Route::Home.path()),
        ("Blogs".to_string(), Route::Blogs.path()),
        (post.title.clone(), Route::BlogDetail(Some(post.id)).path()),
    ];
    let date = post.formatted_date();
    let BlogPost {
        title,
        image,
        read_time,
        tags,
        body_html,
        toc,
        ..
    } = post;
    let has_toc = toc.len() > 1;
    let page_title = title.clone();
    let alt = title.clone();

    view! {
      <Title text=page_title />
      <section class="folio-section folio-post-detail">
        <a href=Route::Blogs.path() class="folio-link folio-back">
          "← Back to Blogs"
        </a>
        <Breadcrumbs items=crumbs />
        <img class="folio-post-hero" src=image alt=alt />

        <div class="folio-post-layout">
          <Article title=title html=body_html>
            <ArticleMeta date=date read_time=read_time tags=tags />
          </Article>
          {has_toc.then(|| view! { <TableOfContents entries=toc /> })}
        </div>
      </section>
    }
}

#[component]
fn PostNotFound() -> impl IntoView {
    view! {
      <Title text="Blog Not Found" />
      <section class="folio-section folio-not-found">
        <h1>"Blog Not Found"</h1>
        <p>"The article you're looking for doesn't exist or has been moved."</p>
        <a href=Route::Blogs.path() class="folio-button">
          "Back to Blogs"
        </a>
      </section>
    }
}
