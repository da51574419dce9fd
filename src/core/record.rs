//! Record - a single catalog entry
//!
//! Passive data shape deserialized straight from the dataset JSON. Every
//! text field defaults to an empty string so that absent fields never fail
//! a predicate.

use serde::{Deserialize, Serialize};

use super::Category;

/// One catalog entry with free-text and reference fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub title: String,
    pub topic: String,
    pub name: String,
    pub indexed_topics: String,
    pub indexed_names: String,
    pub indexed_object_types: String,
    pub indexed_dates: String,
    pub indexed_places: String,
    #[serde(rename = "physicalDescription")]
    pub physical_description: String,
    #[serde(rename = "objectType")]
    pub object_type: String,
    /// Stable identifier used for selection and export
    pub filename: String,
    /// Thumbnail image reference
    pub thumbnail: String,
    pub date: String,
    pub places: String,
    /// Exclusive category, assigned once at load and never recomputed
    #[serde(skip)]
    pub category: Option<Category>,
}

impl Record {
    /// Full-text blob for keyword checks (lowercased).
    ///
    /// Combines the descriptive fields in dataset order; the reference
    /// fields (filename, thumbnail, dates, places) are deliberately left
    /// out so paths and dates never trip a keyword rule.
    pub fn haystack(&self) -> String {
        [
            self.title.as_str(),
            self.topic.as_str(),
            self.indexed_topics.as_str(),
            self.indexed_names.as_str(),
            self.indexed_object_types.as_str(),
            self.physical_description.as_str(),
            self.object_type.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// Does any free-text field mention "silhouette"? (substring, not
    /// word-boundary — "silhouettes" and "silhouetted" count)
    pub fn is_silhouette(&self) -> bool {
        self.haystack().contains("silhouette")
    }

    /// Display text for thumbnails and slides: title, else name, else a
    /// generic fallback
    pub fn alt_text(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "silhouette"
        }
    }
}
