//! Core module - The heart of Silograph
//!
//! Contains the record model, catalog loading, and the gallery engine.

mod catalog;
mod engine;
mod record;

pub use catalog::{Catalog, CatalogError, CatalogStats};
pub use engine::GalleryEngine;
pub use record::Record;

use serde::{Deserialize, Serialize};

/// Exclusive gender-like category assigned to a record once at load.
///
/// A record either carries exactly one of these for its lifetime or none at
/// all; the assignment is never recomputed after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Children,
    Women,
    Men,
}

impl Category {
    /// All categories in classification priority order.
    ///
    /// Children first: child-related terms ("girl", "boy") co-occur with
    /// adult-category words in the same caption and must not be absorbed
    /// into the adult buckets.
    pub fn all() -> &'static [Category] {
        &[Category::Children, Category::Women, Category::Men]
    }

    /// Lowercase label matching the dataset's vocabulary
    pub fn label(&self) -> &'static str {
        match self {
            Category::Children => "children",
            Category::Women => "women",
            Category::Men => "men",
        }
    }

    /// Parse a category label ("all" and anything unrecognized map to None)
    pub fn parse(raw: &str) -> Option<Category> {
        match raw.trim().to_lowercase().as_str() {
            "children" => Some(Category::Children),
            "women" => Some(Category::Women),
            "men" => Some(Category::Men),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
