//! Read-only accessors over the content document.

use std::collections::HashSet;

use crate::{
    content::{
        BlogPost, Document, Education, ExperienceEntry, Profile, Project, Skill, SkillCategory,
        SocialLinks, Stats, Training,
    },
    error::{CoreError, Result},
    filter::{self, Selection},
    markdown,
};

/// The loaded, validated content document.
///
/// Built once at startup; every page view reads from it and nothing writes
/// to it afterwards.
#[derive(Debug, Clone)]
pub struct ContentStore {
    doc: Document,
}

impl ContentStore {
    /// Parse and validate a TOML content document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let doc: Document = toml::from_str(source)
            .map_err(|e| CoreError::content(format!("malformed content document: {e}")))?;
        Self::from_document(doc)
    }

    /// Validate a document and render its blog bodies.
    pub fn from_document(mut doc: Document) -> Result<Self> {
        validate(&doc)?;

        for post in &mut doc.blogs {
            let rendered = markdown::render(&post.body);
            post.body_html = rendered.html;
            post.toc = rendered.toc;
        }

        tracing::debug!(
            projects = doc.projects.len(),
            posts = doc.blogs.len(),
            "content store loaded"
        );
        Ok(Self { doc })
    }

    pub fn profile(&self) -> &Profile {
        &self.doc.profile
    }

    pub fn social(&self) -> &SocialLinks {
        &self.doc.social
    }

    pub fn education(&self) -> Option<&Education> {
        self.doc.education.as_ref()
    }

    pub fn training(&self) -> Option<&Training> {
        self.doc.training.as_ref()
    }

    pub fn stats(&self) -> &Stats {
        &self.doc.stats
    }

    pub fn skills(&self, category: SkillCategory) -> &[Skill] {
        self.doc.skills.get(category)
    }

    /// Categories that have at least one skill, in display order.
    pub fn skill_categories(&self) -> Vec<SkillCategory> {
        SkillCategory::ALL
            .into_iter()
            .filter(|category| !self.skills(*category).is_empty())
            .collect()
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.doc.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.doc.projects
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.doc.projects.iter().find(|p| p.id == id)
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.doc.projects.iter().filter(|p| p.featured)
    }

    /// The first `n` projects in authoring order.
    pub fn recent_projects(&self, n: usize) -> &[Project] {
        &self.doc.projects[..n.min(self.doc.projects.len())]
    }

    /// `"All"` followed by each project category.
    pub fn project_categories(&self) -> Vec<String> {
        filter::facets(&self.doc.projects, |p| std::iter::once(p.category.as_str()))
    }

    pub fn projects_in(&self, selection: &Selection) -> Vec<&Project> {
        filter::filter(&self.doc.projects, selection, |p| {
            std::iter::once(p.category.as_str())
        })
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.doc.blogs
    }

    pub fn post(&self, id: u32) -> Option<&BlogPost> {
        self.doc.blogs.iter().find(|b| b.id == id)
    }

    /// The featured post. When several are flagged the first one wins.
    pub fn featured_post(&self) -> Option<&BlogPost> {
        self.doc.blogs.iter().find(|b| b.featured)
    }

    /// The first `n` posts in authoring order.
    pub fn recent_posts(&self, n: usize) -> &[BlogPost] {
        &self.doc.blogs[..n.min(self.doc.blogs.len())]
    }

    /// `"All"` followed by each tag used by any post.
    pub fn blog_tags(&self) -> Vec<String> {
        filter::facets(&self.doc.blogs, |b| b.tags.iter().map(String::as_str))
    }

    pub fn posts_tagged(&self, selection: &Selection) -> Vec<&BlogPost> {
        filter::filter(&self.doc.blogs, selection, |b| {
            b.tags.iter().map(String::as_str)
        })
    }

    /// Posts for the list grid: the tag filter applied, minus the featured
    /// post, which the list view shows on its own.
    pub fn grid_posts(&self, selection: &Selection) -> Vec<&BlogPost> {
        let featured = self.featured_post().map(|b| b.id);
        self.posts_tagged(selection)
            .into_iter()
            .filter(|b| Some(b.id) != featured)
            .collect()
    }
}

fn validate(doc: &Document) -> Result<()> {
    for (category, skill) in doc.skills.iter() {
        if skill.level > 100 {
            return Err(CoreError::content(format!(
                "skill {:?} in {} has level {} (expected 0-100)",
                skill.name,
                category.key(),
                skill.level
            )));
        }
    }

    let mut ids = HashSet::new();
    for project in &doc.projects {
        if !ids.insert(project.id) {
            return Err(CoreError::content(format!(
                "duplicate project id {}",
                project.id
            )));
        }
    }

    let mut ids = HashSet::new();
    for post in &doc.blogs {
        if !ids.insert(post.id) {
            return Err(CoreError::content(format!("duplicate blog id {}", post.id)));
        }
    }

    let featured = doc.blogs.iter().filter(|b| b.featured).count();
    if featured > 1 {
        tracing::warn!(featured, "more than one featured blog post; the first one is shown");
    }

    Ok(())
}
