//! Content document types.
//!
//! The whole site is driven by one [`Document`], authored as TOML and loaded
//! once at startup. Nothing here is mutated after load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::markdown::TocEntry;

/// Root of the content document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub profile: Profile,

    #[serde(default)]
    pub social: SocialLinks,

    #[serde(default)]
    pub education: Option<Education>,

    #[serde(default)]
    pub training: Option<Training>,

    #[serde(default)]
    pub stats: Stats,

    #[serde(default)]
    pub skills: Skills,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub blogs: Vec<BlogPost>,
}

/// Personal information shown across the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: String,
    pub bio: String,
    #[serde(default)]
    pub short_bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Profile {
    /// First letter of each part of the name, e.g. "AB" for "Akshay Babre".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> Option<String> {
        self.phone
            .as_deref()
            .map(|phone| format!("tel:{}", phone.replace(' ', "")))
    }
}

/// Social profile links; any of them may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

impl SocialLinks {
    /// `(label, url)` pairs for the links that are present, in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Twitter", self.twitter.as_deref()),
            ("Instagram", self.instagram.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub field: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Training {
    pub program: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

/// Headline numbers; free-text labels such as "20+".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub success_rate: String,
}

impl Stats {
    /// `(value, label)` pairs for the non-empty stats.
    pub fn entries(&self) -> Vec<(&str, &'static str)> {
        [
            (self.experience.as_str(), "Years Experience"),
            (self.projects.as_str(), "Projects Completed"),
            (self.technologies.as_str(), "Technologies"),
            (self.success_rate.as_str(), "Success Rate"),
        ]
        .into_iter()
        .filter(|(value, _)| !value.is_empty())
        .collect()
    }
}

/// Skill grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Libraries,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        Self::Frontend,
        Self::Backend,
        Self::Tools,
        Self::Libraries,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Libraries => "libraries",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools & DevOps",
            Self::Libraries => "Libraries",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0 to 100.
    pub level: u8,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// Skills grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub frontend: Vec<Skill>,
    #[serde(default)]
    pub backend: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Skill>,
    #[serde(default)]
    pub libraries: Vec<Skill>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Libraries => &self.libraries,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &Skill)> {
        SkillCategory::ALL
            .into_iter()
            .flat_map(move |category| self.get(category).iter().map(move |s| (category, s)))
    }
}

/// One position or program, newest first by authoring order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub image: String,
    pub published_at: NaiveDate,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// Markdown source of the article.
    pub body: String,

    /// Rendered article HTML, filled in when the store is built.
    #[serde(skip)]
    pub body_html: String,

    /// Headings of the rendered article.
    #[serde(skip)]
    pub toc: Vec<TocEntry>,
}

impl BlogPost {
    /// Publish date as "October 15, 2024".
    pub fn formatted_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}
