//! Note model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::{char_preview, format_ordinal_date};

/// Number of content characters shown on a note card
pub const CARD_PREVIEW_CHARS: usize = 60;

/// Server-assigned note identifier (opaque, immutable)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A note as returned by the notes API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Short labels, in the order the author entered them
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    /// Creation timestamp, assigned by the server
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Leading slice of the content shown on a card
    #[must_use]
    pub fn card_preview(&self) -> String {
        char_preview(&self.content, CARD_PREVIEW_CHARS)
    }

    /// Creation date as shown on a card, e.g. `5th Mar 2024`
    #[must_use]
    pub fn display_date(&self) -> String {
        format_ordinal_date(self.created_at)
    }
}

/// Reasons a draft cannot be saved yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter the title")]
    MissingTitle,
    #[error("Please enter the content")]
    MissingContent,
}

/// Editable copy of a note held by the create/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    /// Seed a draft from an existing note for editing
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }

    /// Add a tag from raw input.
    ///
    /// Returns `false` when the input is blank or the tag is already present.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    /// Check that the draft can be sent to the server
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::MissingContent);
        }
        Ok(())
    }
}
