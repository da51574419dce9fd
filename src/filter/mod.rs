//! Filter Engine - compound category + bucket predicates over the catalog
//!
//! Evaluates `category AND bucket` per record, producing the visible subset.
//! Filtering is pure, stable, and order-preserving.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::core::{Category, Record};

/// Keyword list for the politics bucket ("first lady" is whitespace-flexible)
pub const POLITICS_WORDS: &[&str] = &[
    "president",
    "presidents",
    "politics",
    "political",
    "congressman",
    "governor",
    r"first\s+lady",
    "government",
    "legislator",
];

/// Keyword list for the military bucket
pub const MILITARY_WORDS: &[&str] = &[
    "military",
    "soldier",
    "army",
    "officer",
    "general",
    "captain",
    "colonel",
    "lieutenant",
];

/// Phrase alternation for the first-ladies bucket
pub const FIRSTLADIES_WORDS: &[&str] = &["first lady", "first ladies", "presidents' spouses"];

/// The mutually exclusive secondary filter dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    #[default]
    All,
    Unidentified,
    Named,
    Politics,
    Military,
    FirstLadies,
}

impl Bucket {
    /// Normalize a raw control-surface value at the boundary.
    ///
    /// "identified" is a synonym for "named"; anything unrecognized falls
    /// back to "all" rather than being rejected.
    pub fn normalize(raw: &str) -> Bucket {
        match raw.trim().to_lowercase().as_str() {
            "unidentified" => Bucket::Unidentified,
            "named" | "identified" => Bucket::Named,
            "politics" => Bucket::Politics,
            "military" => Bucket::Military,
            "firstladies" => Bucket::FirstLadies,
            _ => Bucket::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::All => "all",
            Bucket::Unidentified => "unidentified",
            Bucket::Named => "named",
            Bucket::Politics => "politics",
            Bucket::Military => "military",
            Bucket::FirstLadies => "firstladies",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Combined filter state: exclusive category toggle + bucket selector.
/// Both dimensions are independently togglable and combine with logical AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Active category; None means no category filter
    pub category: Option<Category>,
    /// Active bucket
    pub bucket: Bucket,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legend-button behavior: activating the active category clears it
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }
}

/// Compiled bucket predicates plus the classifier used as a fallback for
/// records that were never tagged at load.
pub struct FilterEngine {
    classifier: Classifier,
    politics: Regex,
    military: Regex,
    firstladies: Regex,
}

fn bucket_regex(words: &[&str]) -> Regex {
    let pattern = format!(r"(?i)\b({})\b", words.join("|"));
    // Bucket word lists are compile-time constants
    Regex::new(&pattern).expect("bucket pattern is valid")
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            politics: bucket_regex(POLITICS_WORDS),
            military: bucket_regex(MILITARY_WORDS),
            firstladies: bucket_regex(FIRSTLADIES_WORDS),
        }
    }

    /// Apply the compound predicate over a record slice.
    ///
    /// Stable filter: the output preserves the input order, and applying
    /// the same state twice yields identical output.
    pub fn apply<'a>(&self, records: &'a [Record], state: &FilterState) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r, state)).collect()
    }

    /// Compound predicate for a single record
    pub fn matches(&self, record: &Record, state: &FilterState) -> bool {
        self.matches_category(record, state.category) && self.matches_bucket(record, state.bucket)
    }

    /// Category predicate. Compares against the category cached at load;
    /// falls back to a live classification with the same rule set when the
    /// cache is absent.
    pub fn matches_category(&self, record: &Record, active: Option<Category>) -> bool {
        let Some(active) = active else {
            return true;
        };

        match record.category {
            Some(cached) => cached == active,
            None => self.classifier.classify(record) == Some(active),
        }
    }

    /// Bucket predicate, dispatched on the already-normalized bucket value
    pub fn matches_bucket(&self, record: &Record, bucket: Bucket) -> bool {
        match bucket {
            Bucket::All => true,
            Bucket::Unidentified => is_unidentified(record),
            Bucket::Named => !is_unidentified(record),
            Bucket::Politics => {
                // Name deliberately excluded: a sitter named e.g. "President"
                // should not land in politics
                let text = [
                    record.title.as_str(),
                    record.topic.as_str(),
                    record.indexed_topics.as_str(),
                ]
                .join(" ");
                self.politics.is_match(&text)
            }
            Bucket::Military => {
                let text = military_text(record);
                self.military.is_match(&text)
            }
            Bucket::FirstLadies => {
                let text = military_text(record).trim().to_lowercase();
                self.firstladies.is_match(&text)
            }
        }
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// title + name + topic + indexed_topics (military and first-ladies scope)
fn military_text(record: &Record) -> String {
    [
        record.title.as_str(),
        record.name.as_str(),
        record.topic.as_str(),
        record.indexed_topics.as_str(),
    ]
    .join(" ")
}

/// Does the title start with the literal prefix "unidentified"?
fn is_unidentified(record: &Record) -> bool {
    record
        .title
        .trim()
        .to_lowercase()
        .starts_with("unidentified")
}
