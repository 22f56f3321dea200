//! Checks against the content and config shipped with the site.
//!
//! The app embeds both files, so anything that fails here would surface as
//! the error page in the browser.

use std::path::Path;

use folio_core::{Config, ContentStore, Route, Selection, content::SkillCategory};

const CONTENT: &str = include_str!("../../../content/portfolio.toml");
const CONFIG: &str = include_str!("../../../folio.toml");

fn store() -> ContentStore {
    ContentStore::from_toml_str(CONTENT).expect("bundled content should load")
}

#[test]
fn test_bundled_config_loads() {
    let config = Config::from_toml_str(CONFIG).expect("bundled config should load");
    assert!(config.contact.endpoint.starts_with("https://"));
    assert_eq!(config.notifications.max_visible, 5);
    assert_eq!(config.theme.storage_key, "theme");
}

#[test]
fn test_bundled_config_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../folio.toml");
    assert!(path.exists(), "missing {}", path.display());

    let config = Config::load(&path).expect("config should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.root, "target/site");
    assert_eq!(
        config.site.title,
        Config::from_toml_str(CONFIG).expect("embedded config").site.title
    );
}

#[test]
fn test_bundled_content_shape() {
    let store = store();
    assert_eq!(store.profile().initials(), "AB");
    assert_eq!(store.skill_categories(), SkillCategory::ALL.to_vec());
    assert!(store.education().is_some());
    assert!(store.training().is_some());
    assert_eq!(store.social().links().len(), 4);
}

#[test]
fn test_full_stack_covers_every_project() {
    let store = store();
    let full_stack = store.projects_in(&Selection::from_label("Full Stack"));
    assert_eq!(full_stack.len(), store.projects().len());
    assert_eq!(store.project_categories(), vec!["All", "Full Stack"]);
    assert_eq!(store.featured_projects().count(), 2);
}

#[test]
fn test_featured_post_is_excluded_from_grid() {
    let store = store();
    let featured = store.featured_post().expect("a featured post");
    assert_eq!(featured.id, 1);

    let grid = store.grid_posts(&Selection::All);
    assert_eq!(grid.len(), store.posts().len() - 1);
    assert!(grid.iter().all(|post| post.id != featured.id));
}

#[test]
fn test_react_tag_filter() {
    let store = store();
    let ids: Vec<_> = store
        .posts_tagged(&Selection::from_label("React"))
        .iter()
        .map(|post| post.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(store.blog_tags().first().map(String::as_str), Some("All"));
}

#[test]
fn test_unknown_post_and_route() {
    let store = store();
    assert!(store.post(999).is_none());

    let Route::BlogDetail(Some(id)) = Route::resolve("/blogs/999") else {
        panic!("expected a blog detail route");
    };
    assert!(store.post(id).is_none());
}

#[test]
fn test_every_post_has_toc_and_code() {
    for post in store().posts() {
        assert!(!post.toc.is_empty(), "post {} has no headings", post.id);
        assert_eq!(post.toc[0].id, "introduction");
        assert!(post.body_html.contains("<pre><code class=\"language-"));
    }
}
