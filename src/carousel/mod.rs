//! Carousel Windower - 3-up paged window over the selected slides
//!
//! Pure index arithmetic: the window start is clamped so the view never
//! underflows, never runs past the last valid window, and always shows
//! every slide when there are fewer than a full page.

use std::path::{Path, PathBuf};

use crate::core::Record;

/// Fixed page size of the lightbox carousel
pub const PAGE_SIZE: usize = 3;

/// Optional metadata caption, displayed in fixed order:
/// title-or-name, then date, then place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    pub heading: String,
    pub date: String,
    pub place: String,
}

impl Caption {
    /// Build a caption from a record, each line falling back to the
    /// indexed variant and then to an empty string
    pub fn from_record(record: &Record) -> Self {
        let heading = if !record.title.is_empty() {
            record.title.clone()
        } else {
            record.name.clone()
        };
        let date = if !record.date.is_empty() {
            record.date.clone()
        } else {
            record.indexed_dates.clone()
        };
        let place = if !record.places.is_empty() {
            record.places.clone()
        } else {
            record.indexed_places.clone()
        };

        Self {
            heading,
            date,
            place,
        }
    }
}

/// One carousel-displayable unit built from a selected record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Image source (the record's thumbnail reference)
    pub src: String,
    /// Alt text: title, else name, else a generic fallback
    pub alt: String,
    /// Optional silhouette outline overlay, derived from the filename
    pub overlay: Option<PathBuf>,
    /// Optional metadata caption (absent when the record was not found)
    pub caption: Option<Caption>,
}

impl Slide {
    /// Build a slide from a resolved record.
    /// The overlay path is `<outlines_dir>/<filename>.<ext>` when the
    /// record has a filename.
    pub fn from_record(record: &Record, outlines_dir: &Path, outline_ext: &str) -> Self {
        let overlay = if record.filename.is_empty() {
            None
        } else {
            Some(outlines_dir.join(format!("{}.{}", record.filename, outline_ext)))
        };

        Self {
            src: record.thumbnail.clone(),
            alt: record.alt_text().to_string(),
            overlay,
            caption: Some(Caption::from_record(record)),
        }
    }

    /// Slide for a selected filename with no matching catalog record:
    /// image only, no overlay, no caption
    pub fn bare(src: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: String::new(),
            overlay: None,
            caption: None,
        }
    }
}

/// Paged carousel state over an ordered slide sequence.
///
/// Invariant: `0 <= index <= max(0, len - PAGE_SIZE)`.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, index: 0 }
    }

    /// The visible window: up to PAGE_SIZE slides starting at the clamped
    /// index. With 1 or 2 slides total, all of them are shown.
    pub fn window(&self) -> &[Slide] {
        let visible = PAGE_SIZE.min(self.slides.len());
        let start = self.index.min(self.slides.len().saturating_sub(visible));
        &self.slides[start..start + visible]
    }

    /// Advance one page, clamped to the last valid window start
    pub fn next(&mut self) {
        self.index = (self.index + PAGE_SIZE).min(self.max_index());
    }

    /// Go back one page, clamped at zero
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(PAGE_SIZE);
    }

    /// Last valid window start
    fn max_index(&self) -> usize {
        self.slides.len().saturating_sub(PAGE_SIZE)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.max_index()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
