use shared::error::{AppError, ErrorCode};
use std::fmt;
use thiserror::Error;

/// One half of the website draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftHalf {
    Labels,
    Sections,
}

impl DraftHalf {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftHalf::Labels => "labels",
            DraftHalf::Sections => "sections",
        }
    }
}

impl fmt::Display for DraftHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Website draft errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Pending {0} edits would be overwritten; discard them first")]
    UnsavedChanges(DraftHalf),

    #[error("Saving website changes failed: {0}")]
    SaveFailed(AppError),
}

impl From<DraftError> for AppError {
    fn from(err: DraftError) -> Self {
        let message = err.to_string();
        match err {
            DraftError::UnsavedChanges(half) => {
                AppError::with_message(ErrorCode::UnsavedChanges, message)
                    .with_detail("half", half.as_str())
            }
            DraftError::SaveFailed(cause) => AppError::with_message(ErrorCode::SaveFailed, message)
                .with_detail("cause_code", cause.code.code()),
        }
    }
}

pub type DraftResult<T> = Result<T, DraftError>;
