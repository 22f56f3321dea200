//! Category and tag filtering over content collections.
//!
//! Filters are pure projections: they borrow from the collection and never
//! change it. An empty result is a normal outcome.

use std::fmt;

use indexmap::IndexSet;

/// Label of the identity filter.
pub const ALL: &str = "All";

/// Currently selected filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Build a selection from a facet label; `"All"` is the identity filter.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL {
            Self::All
        } else {
            Self::Only(label)
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(label) => label,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether an item carrying `labels` passes this selection.
    pub fn matches<'a>(&self, mut labels: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => labels.any(|label| label == wanted),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Facet labels for a collection: `"All"` first, then each distinct label in
/// order of first occurrence.
pub fn facets<'a, T, F, I>(items: &'a [T], labels: F) -> Vec<String>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: IndexSet<&str> = IndexSet::new();
    seen.insert(ALL);
    for item in items {
        seen.extend(labels(item));
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Items whose labels match `selection`, in collection order.
pub fn filter<'a, T, F, I>(items: &'a [T], selection: &Selection, labels: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    items
        .iter()
        .filter(|item| selection.matches(labels(*item).into_iter()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        tags: Vec<String>,
    }

    fn item(name: &'static str, tags: &[&str]) -> Item {
        Item {
            name,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn items() -> Vec<Item> {
        vec![
            item("a", &["React", "Frontend"]),
            item("b", &["JavaScript", "Frontend"]),
            item("c", &["React", "Redux"]),
        ]
    }

    fn tags(item: &Item) -> impl Iterator<Item = &str> {
        item.tags.iter().map(String::as_str)
    }

    #[test]
    fn test_facets_dedup_in_first_occurrence_order() {
        let items = items();
        assert_eq!(
            facets(&items, tags),
            vec!["All", "React", "Frontend", "JavaScript", "Redux"]
        );
    }

    #[test]
    fn test_facets_of_empty_collection() {
        let items: Vec<Item> = Vec::new();
        assert_eq!(facets(&items, tags), vec!["All"]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = items();
        let all = filter(&items, &Selection::All, tags);
        assert_eq!(all.len(), items.len());
        assert!(all.iter().zip(&items).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_filter_is_subset_with_membership() {
        let items = items();
        for label in facets(&items, tags) {
            let selection = Selection::from_label(label.clone());
            let subset = filter(&items, &selection, tags);
            assert!(subset.len() <= items.len());
            if !selection.is_all() {
                assert!(subset.iter().all(|item| item.tags.contains(&label)));
            }
        }
    }

    #[test]
    fn test_filter_keeps_order() {
        let items = items();
        let names: Vec<_> = filter(&items, &Selection::from_label("React"), tags)
            .iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let items = items();
        assert!(filter(&items, &Selection::from_label("Rust"), tags).is_empty());
    }

    #[test]
    fn test_selection_labels() {
        assert_eq!(Selection::from_label("All"), Selection::All);
        assert_eq!(Selection::from_label("React").label(), "React");
        assert_eq!(Selection::default().to_string(), "All");
    }
}
