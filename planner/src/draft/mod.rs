//! DraftStore - pending/saved editing model for the website builder
//!
//! Holds two independent copies of the website labels and sections:
//! `saved` (last state the server confirmed) and `pending` (the working copy).
//!
//! ```text
//! Clean ──update_*──▶ Dirty ──save ok / commit──▶ Clean
//!                       │
//!                       ├──discard_changes──▶ Clean
//!                       └──save failed──▶ Dirty (edits kept)
//! ```
//!
//! `saved` only moves on a server-confirmed result, either through
//! [`DraftStore::commit`] or [`DraftStore::save`].

mod error;
mod save;

pub use error::*;
pub use save::{SaveOutcome, WebsiteSaver};

use shared::models::{LabelMap, SectionConfig, WebsiteContent, WebsitePatch};
use std::collections::BTreeMap;

type SectionSet = BTreeMap<String, SectionConfig>;

/// Whether pending differs from saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Clean,
    Dirty,
}

#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    saved_labels: LabelMap,
    pending_labels: LabelMap,
    saved_sections: SectionSet,
    pending_sections: SectionSet,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store initialized from fetched website data
    pub fn from_content(content: WebsiteContent) -> Self {
        let mut store = Self::new();
        store.initialize_labels(content.website_labels);
        store.initialize_sections(content.website_sections);
        store
    }

    // ========== Initialization ==========

    /// Set both saved and pending labels; overwrites pending edits
    pub fn initialize_labels(&mut self, labels: LabelMap) {
        if self.labels_dirty() {
            tracing::debug!("Pending label edits overwritten by initialization");
        }
        self.pending_labels = labels.clone();
        self.saved_labels = labels;
    }

    /// Set both saved and pending sections; overwrites pending edits
    ///
    /// Duplicate ids keep the last entry.
    pub fn initialize_sections(&mut self, sections: impl IntoIterator<Item = SectionConfig>) {
        if self.sections_dirty() {
            tracing::debug!("Pending section edits overwritten by initialization");
        }
        let sections = to_section_set(sections);
        self.pending_sections = sections.clone();
        self.saved_sections = sections;
    }

    /// Refetch labels without losing edits
    ///
    /// Fails with [`DraftError::UnsavedChanges`] while the labels are dirty.
    pub fn resync_labels(&mut self, labels: LabelMap) -> DraftResult<()> {
        if self.labels_dirty() {
            tracing::warn!("Label resync rejected: unsaved edits");
            return Err(DraftError::UnsavedChanges(DraftHalf::Labels));
        }
        self.initialize_labels(labels);
        Ok(())
    }

    /// Refetch sections without losing edits
    ///
    /// Fails with [`DraftError::UnsavedChanges`] while the sections are dirty.
    pub fn resync_sections(
        &mut self,
        sections: impl IntoIterator<Item = SectionConfig>,
    ) -> DraftResult<()> {
        if self.sections_dirty() {
            tracing::warn!("Section resync rejected: unsaved edits");
            return Err(DraftError::UnsavedChanges(DraftHalf::Sections));
        }
        self.initialize_sections(sections);
        Ok(())
    }

    // ========== Edits ==========

    pub fn update_label(&mut self, section_id: &str, key: &str, value: impl Into<String>) {
        self.pending_labels
            .entry(section_id.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Toggle a pending section; `false` when the id is unknown
    pub fn update_section(&mut self, section_id: &str, enabled: bool) -> bool {
        match self.pending_sections.get_mut(section_id) {
            Some(section) => {
                section.enabled = enabled;
                true
            }
            None => {
                tracing::debug!(section_id, "Toggle ignored: unknown section");
                false
            }
        }
    }

    /// Reorder a pending section; `false` when the id is unknown
    pub fn set_section_order(&mut self, section_id: &str, order: i32) -> bool {
        match self.pending_sections.get_mut(section_id) {
            Some(section) => {
                section.order = order;
                true
            }
            None => {
                tracing::debug!(section_id, "Reorder ignored: unknown section");
                false
            }
        }
    }

    /// Reset pending to saved
    pub fn discard_changes(&mut self) {
        if self.has_unsaved_changes() {
            tracing::info!(
                labels = self.labels_dirty(),
                sections = self.sections_dirty(),
                "Draft changes discarded"
            );
        }
        self.pending_labels = self.saved_labels.clone();
        self.pending_sections = self.saved_sections.clone();
    }

    // ========== Commit ==========

    /// Adopt server-confirmed values as the new saved and pending state
    ///
    /// A `None` half is left untouched. The values are taken as authoritative.
    pub fn commit(&mut self, labels: Option<LabelMap>, sections: Option<Vec<SectionConfig>>) {
        let commit_labels = labels.is_some();
        let commit_sections = sections.is_some();

        if let Some(labels) = labels {
            self.pending_labels = labels.clone();
            self.saved_labels = labels;
        }
        if let Some(sections) = sections {
            let sections = to_section_set(sections);
            self.pending_sections = sections.clone();
            self.saved_sections = sections;
        }

        tracing::info!(
            labels = commit_labels,
            sections = commit_sections,
            "Draft committed"
        );
    }

    // ========== Queries ==========

    pub fn labels_dirty(&self) -> bool {
        self.saved_labels != self.pending_labels
    }

    pub fn sections_dirty(&self) -> bool {
        self.saved_sections != self.pending_sections
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.labels_dirty() || self.sections_dirty()
    }

    pub fn state(&self) -> DraftState {
        if self.has_unsaved_changes() {
            DraftState::Dirty
        } else {
            DraftState::Clean
        }
    }

    /// Pending label value
    pub fn label(&self, section_id: &str, key: &str) -> Option<&str> {
        self.pending_labels
            .get(section_id)
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }

    pub fn saved_labels(&self) -> &LabelMap {
        &self.saved_labels
    }

    pub fn pending_labels(&self) -> &LabelMap {
        &self.pending_labels
    }

    /// Saved sections, sorted by order then id
    pub fn saved_sections(&self) -> Vec<SectionConfig> {
        sorted_sections(&self.saved_sections)
    }

    /// Pending sections, sorted by order then id
    pub fn pending_sections(&self) -> Vec<SectionConfig> {
        sorted_sections(&self.pending_sections)
    }

    pub fn pending_section(&self, section_id: &str) -> Option<&SectionConfig> {
        self.pending_sections.get(section_id)
    }

    /// Patch carrying only the dirty halves, `None` when clean
    pub fn pending_patch(&self) -> Option<WebsitePatch> {
        let patch = WebsitePatch {
            website_labels: self.labels_dirty().then(|| self.pending_labels.clone()),
            website_sections: self.sections_dirty().then(|| self.pending_sections()),
        };
        (!patch.is_empty()).then_some(patch)
    }
}

fn to_section_set(sections: impl IntoIterator<Item = SectionConfig>) -> SectionSet {
    sections
        .into_iter()
        .map(|section| (section.id.clone(), section))
        .collect()
}

fn sorted_sections(sections: &SectionSet) -> Vec<SectionConfig> {
    // BTreeMap iteration is already by id, so a stable sort on order is enough
    let mut list: Vec<SectionConfig> = sections.values().cloned().collect();
    list.sort_by_key(|section| section.order);
    list
}

#[cfg(test)]
mod tests;
