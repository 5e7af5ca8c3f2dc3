//! # Pain Point Catalog
//!
//! The static, compiled-in list of pain points and the category grouping
//! derived from it.
//!
//! - `data` - the curated records
//! - `search` - free-text filtering over the grouped catalog

mod data;
pub mod search;

pub use search::filter;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A named, categorized frustration the user can select
///
/// Identity is the `name`; two points with the same name are the same point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PainPoint {
    pub name: String,
    pub description: String,
    pub category: String,
    pub emoji: String,
}

impl PainPoint {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            emoji: emoji.into(),
        }
    }

    /// Case-insensitive match against name or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl PartialEq for PainPoint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PainPoint {}

/// One category and its points, in catalog order
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub points: Vec<PainPoint>,
}

/// Immutable pain point catalog with a name index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    points: Vec<PainPoint>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records. Later duplicates of a name are dropped.
    pub fn from_points(points: impl IntoIterator<Item = PainPoint>) -> Self {
        let mut catalog = Self::default();
        for point in points {
            if catalog.by_name.contains_key(&point.name) {
                tracing::warn!(name = %point.name, "Duplicate pain point in catalog, skipping");
                continue;
            }
            catalog
                .by_name
                .insert(point.name.clone(), catalog.points.len());
            catalog.points.push(point);
        }
        catalog
    }

    /// The compiled-in catalog, built once per process
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::from_points(
                data::PAIN_POINTS
                    .iter()
                    .map(|(name, description, category, emoji)| {
                        PainPoint::new(*name, *description, *category, *emoji)
                    }),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Find a point by exact name
    pub fn find(&self, name: &str) -> Option<&PainPoint> {
        self.by_name.get(name).map(|&i| &self.points[i])
    }

    /// Group points by category, categories ordered by first appearance
    pub fn categories(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for point in &self.points {
            match index.get(point.category.as_str()) {
                Some(&i) => groups[i].points.push(point.clone()),
                None => {
                    index.insert(point.category.as_str(), groups.len());
                    groups.push(CategoryGroup {
                        category: point.category.clone(),
                        points: vec![point.clone()],
                    });
                }
            }
        }

        groups
    }
}
