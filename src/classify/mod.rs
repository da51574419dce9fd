//! Classifier - ordered keyword rules assigning one exclusive category
//!
//! Each record gets at most one gender-like category, decided by
//! word-boundary regex rules evaluated in a fixed priority order. The rule
//! order is the tie-break: children-terms win over adult-terms when both
//! appear in the same caption.

use regex::Regex;

use crate::core::{Category, Record};

/// Word list for the children rule (checked first)
pub const CHILDREN_WORDS: &[&str] = &["child", "children", "boy", "girl", "youth"];

/// Word list for the women rule
pub const WOMEN_WORDS: &[&str] = &["women", "woman", "female", "lady", "ladies"];

/// Word list for the men rule (checked last)
pub const MEN_WORDS: &[&str] = &["men", "man", "male", "gentleman", "gentlemen"];

/// Compile a word list into a case-insensitive word-boundary alternation
fn word_list_regex(words: &[&str]) -> Regex {
    let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
    // Word lists are compile-time constants; the pattern always compiles
    Regex::new(&pattern).expect("word-list pattern is valid")
}

/// Ordered (rule, category) classifier.
///
/// `classify` is pure and deterministic: the same haystack always yields the
/// same category, so re-running it is idempotent. It is intended to run
/// exactly once per record at load time, with the result cached on the
/// record.
pub struct Classifier {
    rules: Vec<(Regex, Category)>,
}

impl Classifier {
    /// Build the classifier with rules in priority order:
    /// children, then women, then men.
    pub fn new() -> Self {
        Self {
            rules: vec![
                (word_list_regex(CHILDREN_WORDS), Category::Children),
                (word_list_regex(WOMEN_WORDS), Category::Women),
                (word_list_regex(MEN_WORDS), Category::Men),
            ],
        }
    }

    /// Classify a record from its combined free-text fields
    pub fn classify(&self, record: &Record) -> Option<Category> {
        self.classify_text(&record.haystack())
    }

    /// Classify an already-built haystack; first matching rule wins
    pub fn classify_text(&self, haystack: &str) -> Option<Category> {
        self.rules
            .iter()
            .find(|(rx, _)| rx.is_match(haystack))
            .map(|(_, category)| *category)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
