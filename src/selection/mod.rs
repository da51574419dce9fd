//! Selection Set - insertion-ordered set of selected record filenames
//!
//! Toggling is the only mutation. Order matters: exports must hand the
//! filenames over in the order the user picked them.

/// User selection, keyed by record filename
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an id in or out of the selection.
    /// Returns true if the id is selected after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Dependent actions (view collection, export) are enabled iff non-empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Drop every id the predicate rejects, preserving selection order.
    /// Used when the visible set changes underneath the selection.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: Fn(&str) -> bool,
    {
        self.ids.retain(|id| keep(id));
    }
}
