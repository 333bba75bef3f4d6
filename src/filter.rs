//! Gallery filtering: free-text search plus category and technology facets.
//!
//! The engine is a pure function of the catalog and a [`FilterState`]; it
//! never mutates anything and always preserves catalog order, so calling it
//! repeatedly with the same inputs yields identical results. The three
//! predicates are conjunctive: an item is visible only when it matches the
//! query, the category facet, and the technology facet.

use crate::catalog::{CatalogItem, Category};

/// Category facet value. The sentinel is an explicit variant rather than a
/// magic string so it can never collide with a real label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction.
    All,
    /// Only items of this category.
    Only(Category),
}

impl CategoryFilter {
    /// Chip label for the UI.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

/// Technology facet value. Unlike the free-text query, the `Only` label is
/// matched against an item's tech set exactly and case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TechFilter {
    /// No technology restriction.
    All,
    /// Only items whose tech set contains this label.
    Only(String),
}

impl TechFilter {
    /// Chip label for the UI.
    pub fn label(&self) -> &str {
        match self {
            TechFilter::All => "All",
            TechFilter::Only(t) => t.as_str(),
        }
    }
}

/// Transient filter inputs owned by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query; whitespace-only is equivalent to empty.
    pub query: String,
    /// Active category facet.
    pub active_category: CategoryFilter,
    /// Active technology facet.
    pub active_tech: TechFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_category: CategoryFilter::All,
            active_tech: TechFilter::All,
        }
    }
}

impl FilterState {
    /// Whether any dimension restricts the view.
    pub fn is_restrictive(&self) -> bool {
        !self.query.trim().is_empty()
            || self.active_category != CategoryFilter::All
            || self.active_tech != TechFilter::All
    }

    /// Reset all dimensions to their defaults.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}

/// Case-insensitive query match across the union of an item's searchable
/// fields: name, tag, space-joined tech labels, and space-joined bullets.
fn matches_query(item: &CatalogItem, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(query_lower)
        || item.tag.to_lowercase().contains(query_lower)
        || item.tech.join(" ").to_lowercase().contains(query_lower)
        || item.bullets.join(" ").to_lowercase().contains(query_lower)
}

fn matches_category(item: &CatalogItem, cat: CategoryFilter) -> bool {
    match cat {
        CategoryFilter::All => true,
        CategoryFilter::Only(c) => item.category == c,
    }
}

/// Exact, case-sensitive membership. Facet values are tokens taken from the
/// catalog itself, not free text, so no folding is applied here.
fn matches_tech(item: &CatalogItem, tech: &TechFilter) -> bool {
    match tech {
        TechFilter::All => true,
        TechFilter::Only(t) => item.tech.iter().any(|x| x == t),
    }
}

/// Indices of the catalog items visible under `state`, in catalog order.
///
/// The indices form is what the interface keeps around: it renders from the
/// catalog and remembers positions across re-filters.
pub fn filter_indices(catalog: &[CatalogItem], state: &FilterState) -> Vec<usize> {
    let q = state.query.trim().to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            matches_query(item, &q)
                && matches_category(item, state.active_category)
                && matches_tech(item, &state.active_tech)
        })
        .map(|(i, _)| i)
        .collect()
}

/// The visible subset of the catalog under `state`, in catalog order.
pub fn filter<'a>(catalog: &'a [CatalogItem], state: &FilterState) -> Vec<&'a CatalogItem> {
    filter_indices(catalog, state)
        .into_iter()
        .map(|i| &catalog[i])
        .collect()
}
