//! Markdown rendering for blog post bodies using pulldown-cmark.

use std::collections::HashSet;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use serde::{Deserialize, Serialize};

/// Table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Anchor ID.
    pub id: String,
}

impl TocEntry {
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
        }
    }
}

/// Rendered markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// Render markdown to HTML, giving every heading a unique anchor.
///
/// Headings with an explicit `{#id}` keep it; the rest get a slug of their
/// text. Repeated anchors are suffixed `-1`, `-2`, ...
pub fn render(source: &str) -> Rendered {
    let mut events: Vec<Event<'_>> = Parser::new_ext(source, options()).collect();
    let mut toc = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for index in 0..events.len() {
        let Event::Start(Tag::Heading { level, id, .. }) = &events[index] else {
            continue;
        };
        let level = *level as u8;
        let explicit = id.as_ref().map(|id| id.to_string());
        let text = heading_text(&events[index + 1..]);
        let anchor = unique_anchor(explicit.unwrap_or_else(|| slugify(&text)), &mut seen);

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[index] {
            *id = Some(CowStr::from(anchor.clone()));
        }
        toc.push(TocEntry::new(level, text, anchor));
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    Rendered { html: out, toc }
}

fn heading_text(events: &[Event<'_>]) -> String {
    events
        .iter()
        .take_while(|event| !matches!(event, Event::End(TagEnd::Heading(_))))
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(text.as_ref()),
            _ => None,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn unique_anchor(base: String, seen: &mut HashSet<String>) -> String {
    let mut anchor = base.clone();
    let mut n = 1;
    while seen.contains(&anchor) {
        anchor = format!("{base}-{n}");
        n += 1;
    }
    seen.insert(anchor.clone());
    anchor
}

/// Convert heading text into a URL fragment.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}
