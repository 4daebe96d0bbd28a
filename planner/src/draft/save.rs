//! Save-then-commit workflow

use super::{DraftError, DraftResult, DraftStore};
use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{WebsiteContent, WebsitePatch};

/// Persists a website patch and returns the server's authoritative content
#[async_trait]
pub trait WebsiteSaver: Send + Sync {
    async fn save_website(&self, patch: &WebsitePatch) -> AppResult<WebsiteContent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft was clean, nothing was sent
    NothingToSave,
    Saved,
}

impl DraftStore {
    /// Send the dirty halves through `saver` and commit the server's answer
    ///
    /// Only the halves that were sent are committed. On failure the pending
    /// edits stay in place so the save can be retried.
    pub async fn save<S>(&mut self, saver: &S) -> DraftResult<SaveOutcome>
    where
        S: WebsiteSaver + ?Sized,
    {
        let Some(patch) = self.pending_patch() else {
            tracing::debug!("Save skipped: draft is clean");
            return Ok(SaveOutcome::NothingToSave);
        };

        match saver.save_website(&patch).await {
            Ok(content) => {
                let labels = patch.website_labels.is_some().then_some(content.website_labels);
                let sections = patch
                    .website_sections
                    .is_some()
                    .then_some(content.website_sections);
                self.commit(labels, sections);
                Ok(SaveOutcome::Saved)
            }
            Err(e) => {
                tracing::warn!(code = e.code.code(), error = %e, "Website save failed, edits kept");
                Err(DraftError::SaveFailed(e))
            }
        }
    }
}
