//! Pure filter/sort engine: collection in, ordered view out.
//!
//! Nothing here touches storage or UI state. Name and category
//! comparisons are case- and accent-insensitive (the stand-in for the
//! original locale-aware comparison): NFD-decompose, drop combining
//! marks, lowercase.

use crate::model::Recipe;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How the rendered list is ordered. `None` keeps filtered insertion
/// order; `Category` is only offered while no category filter is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    NameAsc,
    NameDesc,
    Category,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::Category => "type",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::None),
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "type" => Ok(SortKey::Category),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Case- and accent-insensitive collation key.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Build the ordered view for rendering. Operates on a copy; the input
/// collection is never reordered.
pub fn view(recipes: &[Recipe], category_filter: &str, sort: SortKey) -> Vec<Recipe> {
    let mut filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|r| category_filter.is_empty() || r.category == category_filter)
        .cloned()
        .collect();

    match sort {
        SortKey::None => {}
        SortKey::NameAsc => filtered.sort_by(|a, b| collate(&a.name, &b.name)),
        SortKey::NameDesc => filtered.sort_by(|a, b| collate(&b.name, &a.name)),
        SortKey::Category => filtered.sort_by(|a, b| collate(&a.category, &b.category)),
    }

    filtered
}

/// UI-state hook for the filter/sort mutual exclusion: sorting by
/// category is meaningless while a category filter is active, so a
/// selected `type` sort resets to no sort when a filter comes on.
pub fn retained_sort(category_filter: &str, sort: SortKey) -> SortKey {
    if !category_filter.is_empty() && sort == SortKey::Category {
        SortKey::None
    } else {
        sort
    }
}

/// Whether the `type` sort option should be offered at all.
pub fn category_sort_available(category_filter: &str) -> bool {
    category_filter.is_empty()
}

/// Unique category names for the filter choices, collated ascending.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
    let mut names: Vec<String> = recipes.iter().map(|r| r.category.clone()).collect();
    names.sort_by(|a, b| collate(a, b));
    names.dedup();
    names
}
