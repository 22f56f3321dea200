//! Route table: URL paths to page views.

use std::fmt;

/// A resolved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Blogs,
    /// `/blogs/{id}`. `None` when the segment is not an integer; the detail
    /// view renders that the same way as an unknown id.
    BlogDetail(Option<u32>),
    Contact,
    NotFound,
}

/// A navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub route: Route,
    pub label: &'static str,
    pub path: &'static str,
}

const NAV: [NavEntry; 5] = [
    NavEntry {
        route: Route::Home,
        label: "Home",
        path: "/",
    },
    NavEntry {
        route: Route::About,
        label: "About",
        path: "/about",
    },
    NavEntry {
        route: Route::Projects,
        label: "Projects",
        path: "/projects",
    },
    NavEntry {
        route: Route::Blogs,
        label: "Blogs",
        path: "/blogs",
    },
    NavEntry {
        route: Route::Contact,
        label: "Contact",
        path: "/contact",
    },
];

impl Route {
    /// Resolve a path. Never fails: unknown paths are [`Route::NotFound`].
    ///
    /// Query strings and fragments are ignored, as is one trailing slash.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        let mut segments = path.trim_start_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Self::Home,
            (Some("about"), None, None) => Self::About,
            (Some("projects"), None, None) => Self::Projects,
            (Some("blogs"), None, None) => Self::Blogs,
            (Some("blogs"), Some(id), None) if !id.is_empty() => Self::BlogDetail(parse_blog_id(id)),
            (Some("contact"), None, None) => Self::Contact,
            _ => Self::NotFound,
        }
    }

    /// Canonical path for this route.
    ///
    /// A detail route without an id, and `NotFound`, map to their list or
    /// home page.
    pub fn path(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Projects => "/projects".to_string(),
            Self::Blogs | Self::BlogDetail(None) => "/blogs".to_string(),
            Self::BlogDetail(Some(id)) => format!("/blogs/{id}"),
            Self::Contact => "/contact".to_string(),
        }
    }

    /// The navigation section this route belongs to.
    pub fn section(&self) -> Option<Route> {
        match self {
            Self::BlogDetail(_) => Some(Self::Blogs),
            Self::NotFound => None,
            other => Some(*other),
        }
    }

    /// Document title fragment for this route.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Blogs => "Blog",
            Self::BlogDetail(_) => "Article",
            Self::Contact => "Contact",
            Self::NotFound => "Not Found",
        }
    }

    /// Whether the route maps to a page (as opposed to the fallback).
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Entries for the navigation bar, in display order.
    pub fn nav_entries() -> &'static [NavEntry] {
        &NAV
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Parse the `{id}` segment of a blog detail path.
pub fn parse_blog_id(raw: &str) -> Option<u32> {
    raw.parse().ok()
}
