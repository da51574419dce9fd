//! GalleryEngine - single controller owning catalog, filters, and selection
//!
//! All UI surfaces (CLI, TUI) translate their events into calls on this
//! engine; the engine itself has zero dependency on a rendering surface.

use std::path::Path;

use anyhow::{anyhow, Result};

use super::{Catalog, Category, Record};
use crate::bridge::{ExportHandshake, SketchBridge};
use crate::carousel::{Carousel, Slide};
use crate::filter::{Bucket, FilterEngine, FilterState};
use crate::selection::SelectionSet;

/// Application state for one gallery session
pub struct GalleryEngine {
    catalog: Catalog,
    filter_engine: FilterEngine,
    state: FilterState,
    selection: SelectionSet,
    /// Indices into the catalog's record list, recomputed on every filter
    /// change; always a subsequence of the silhouette subset
    visible: Vec<usize>,
}

impl GalleryEngine {
    /// Build an engine over a loaded catalog; everything visible initially
    pub fn new(catalog: Catalog) -> Self {
        let mut engine = Self {
            catalog,
            filter_engine: FilterEngine::new(),
            state: FilterState::new(),
            selection: SelectionSet::new(),
            visible: Vec::new(),
        };
        engine.refresh();
        engine
    }

    /// Load the dataset and build an engine.
    /// A load failure is terminal: no engine, no controls.
    pub async fn load(path: &Path) -> Result<Self> {
        let catalog = Catalog::load(path).await?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Recompute the visible set from the silhouette subset and the current
    /// filter state, then drop selected ids that fell out of view.
    fn refresh(&mut self) {
        let records = self.catalog.records();
        self.visible = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_silhouette() && self.filter_engine.matches(r, &self.state))
            .map(|(i, _)| i)
            .collect();

        let visible = &self.visible;
        self.selection
            .retain(|id| visible.iter().any(|&i| records[i].filename == id));
    }

    /// Legend-button toggle: activating the active category clears it.
    /// The mirrored mobile selector resolves to `set_category`, so both
    /// controls share this one state field and can never drift apart.
    pub fn toggle_category(&mut self, category: Category) {
        self.state.toggle_category(category);
        self.refresh();
    }

    /// Mobile-selector behavior: set the category outright (None == "all")
    pub fn set_category(&mut self, category: Option<Category>) {
        self.state.category = category;
        self.refresh();
    }

    /// Set an already-normalized bucket
    pub fn set_bucket(&mut self, bucket: Bucket) {
        self.state.bucket = bucket;
        self.refresh();
    }

    /// Set a bucket from a raw control-surface value, normalizing at this
    /// boundary ("identified" -> named, unrecognized -> all)
    pub fn set_bucket_raw(&mut self, raw: &str) {
        self.set_bucket(Bucket::normalize(raw));
    }

    /// The current visible set, in catalog order
    pub fn visible(&self) -> Vec<&Record> {
        self.visible
            .iter()
            .map(|&i| &self.catalog.records()[i])
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// "N of M silhouettes" counter line (zero results included)
    pub fn count_line(&self) -> String {
        format!(
            "{} of {} silhouettes",
            self.visible.len(),
            self.catalog.silhouette_count()
        )
    }

    /// Toggle selection of a visible record by filename.
    /// Selecting something outside the current visible set is rejected.
    pub fn toggle_selection(&mut self, filename: &str) -> Result<bool> {
        let records = self.catalog.records();
        if !self
            .visible
            .iter()
            .any(|&i| records[i].filename == filename)
        {
            return Err(anyhow!("Not in the visible set: {}", filename));
        }
        Ok(self.selection.toggle(filename))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Dependent actions (view collection, export) are enabled iff the
    /// selection is non-empty
    pub fn can_act(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Build carousel slides from the selection, in selection order.
    /// Records are resolved against the full catalog; a filename with no
    /// matching record still yields a bare slide.
    pub fn build_slides(&self, outlines_dir: &Path, outline_ext: &str) -> Vec<Slide> {
        self.selection
            .ids()
            .iter()
            .map(|id| match self.catalog.get_by_filename(id) {
                Some(record) => Slide::from_record(record, outlines_dir, outline_ext),
                None => Slide::bare(id),
            })
            .collect()
    }

    /// Open a carousel over the current selection
    pub fn open_carousel(&self, outlines_dir: &Path, outline_ext: &str) -> Carousel {
        Carousel::new(self.build_slides(outlines_dir, outline_ext))
    }

    /// Export the selection through the sketch bridge: persist the ordered
    /// filename list, then return the ready-gated handshake
    pub fn export_selection(&self, bridge: &SketchBridge) -> Result<ExportHandshake> {
        if self.selection.is_empty() {
            return Err(anyhow!("Nothing selected"));
        }
        bridge.export(self.selection.ids())
    }
}
