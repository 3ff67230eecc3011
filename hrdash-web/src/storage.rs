//! localStorage persistence for the candidate form draft.

use serde::{Deserialize, Serialize};

const DRAFT_KEY: &str = "hrdash.candidate_draft";

/// Values committed by the candidate form, as stored between visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateDraft {
    pub date_of_birth: Option<String>,
    pub interview: Option<String>,
    pub department: Option<String>,
}

impl CandidateDraft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date_of_birth.is_none() && self.interview.is_none() && self.department.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serialize a draft to the stored JSON form.
///
/// # Errors
/// Returns [`DraftError::Serialization`] if encoding fails.
pub fn encode_draft(draft: &CandidateDraft) -> Result<String, DraftError> {
    Ok(serde_json::to_string(draft)?)
}

/// Parse a stored draft. Unknown fields are ignored and missing ones default.
///
/// # Errors
/// Returns [`DraftError::Serialization`] for text that is not a draft object.
pub fn decode_draft(raw: &str) -> Result<CandidateDraft, DraftError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, DraftError> {
    crate::dom::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .ok_or_else(|| DraftError::Storage("localStorage unavailable".to_string()))
}

/// Read the saved draft, if any.
///
/// # Errors
/// Returns [`DraftError`] when storage is unavailable or the saved text is corrupt.
pub fn load_draft() -> Result<Option<CandidateDraft>, DraftError> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?
            .get_item(DRAFT_KEY)
            .map_err(|err| DraftError::Storage(crate::dom::js_error_message(&err)))?;
        raw.as_deref().map(decode_draft).transpose()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

/// Persist `draft`, removing the entry when it is empty.
///
/// # Errors
/// Returns [`DraftError`] when storage is unavailable or rejects the write.
pub fn save_draft(draft: &CandidateDraft) -> Result<(), DraftError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        let result = if draft.is_empty() {
            storage.remove_item(DRAFT_KEY)
        } else {
            storage.set_item(DRAFT_KEY, &encode_draft(draft)?)
        };
        result.map_err(|err| DraftError::Storage(crate::dom::js_error_message(&err)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("skipping draft save for {DRAFT_KEY} outside the browser");
        encode_draft(draft).map(|_| ())
    }
}
