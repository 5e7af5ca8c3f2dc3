//! # Catalog Search
//!
//! Free-text filtering over the grouped catalog. Recomputed on every
//! keystroke, so it stays a pure function of its inputs.

use super::{Catalog, CategoryGroup};

/// Filter the catalog by a search term.
///
/// Matches case-insensitively against each point's name or description.
/// Categories left with no points are omitted. A blank term returns every
/// category in catalog order.
pub fn filter(search_term: &str, catalog: &Catalog) -> Vec<CategoryGroup> {
    let groups = catalog.categories();
    let term = search_term.trim();
    if term.is_empty() {
        return groups;
    }

    let needle = term.to_lowercase();
    groups
        .into_iter()
        .filter_map(|group| {
            let points: Vec<_> = group
                .points
                .into_iter()
                .filter(|p| p.matches(&needle))
                .collect();
            (!points.is_empty()).then(|| CategoryGroup {
                category: group.category,
                points,
            })
        })
        .collect()
}
