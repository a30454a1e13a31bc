//! Notes API contract: routes, response envelope, and client traits.
//!
//! Every endpoint answers with the same envelope: an optional `success` flag,
//! an optional human-readable `message`, and an endpoint-specific body. A
//! response is a logical failure only when `success` is explicitly `false`.

mod client;

pub use client::ApiClient;

use serde::{Deserialize, Deserializer};

use crate::error::{ApiResult, Failure};
use crate::models::{Note, NoteDraft, NoteId, UserInfo};

/// Message used when the server rejects a request without saying why.
pub const FALLBACK_REJECTION_MESSAGE: &str = "The server could not complete the request";

/// Route paths relative to the API base URL.
pub mod routes {
    use crate::models::NoteId;

    pub const ALL_NOTES: &str = "/api/note/allNotes";
    pub const SEARCH_NOTES: &str = "/api/note/search";
    pub const ADD_NOTE: &str = "/api/note/add";
    pub const SIGN_IN: &str = "/api/auth/signin";
    pub const SIGN_OUT: &str = "/api/auth/signout";

    pub fn delete_note(id: &NoteId) -> String {
        format!("/api/note/delete/{id}")
    }

    pub fn edit_note(id: &NoteId) -> String {
        format!("/api/note/edit/{id}")
    }

    pub fn edit_note_pin(id: &NoteId) -> String {
        format!("/api/note/editNotePin/{id}")
    }
}

/// Uniform response wrapper used by every notes API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

/// Body and message of an envelope the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted<T> {
    pub message: Option<String>,
    pub body: T,
}

impl<T> Envelope<T> {
    /// Whether the server flagged this response as a logical failure
    pub const fn is_rejected(&self) -> bool {
        matches!(self.success, Some(false))
    }

    /// Split the envelope into its accepted body or a [`Failure::Rejected`].
    pub fn into_result(self) -> Result<Accepted<T>, Failure> {
        if self.is_rejected() {
            let message = self
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_REJECTION_MESSAGE.to_string());
            return Err(Failure::Rejected(message));
        }
        Ok(Accepted {
            message: self.message,
            body: self.body,
        })
    }
}

/// Body of the list and search endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: Vec<Note>,
}

/// Reads `"notes": null` as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Note>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Note>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of endpoints that only acknowledge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {}

/// Body of the add and edit endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SavedNote {
    #[serde(default)]
    pub note: Option<Note>,
}

/// Body of the sign-in endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignedIn {
    #[serde(default)]
    pub rest: Option<UserInfo>,
}

/// Note endpoints used by the board.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    async fn list_notes(&self) -> ApiResult<Envelope<NoteList>>;

    async fn search_notes(&self, query: &str) -> ApiResult<Envelope<NoteList>>;

    async fn delete_note(&self, id: &NoteId) -> ApiResult<Envelope<Ack>>;

    /// Store the given pin state for a note
    async fn set_pinned(&self, id: &NoteId, is_pinned: bool) -> ApiResult<Envelope<Ack>>;

    async fn add_note(&self, draft: &NoteDraft) -> ApiResult<Envelope<SavedNote>>;

    async fn edit_note(&self, id: &NoteId, draft: &NoteDraft) -> ApiResult<Envelope<SavedNote>>;
}

/// Session endpoints used by the login view and navbar.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<Envelope<SignedIn>>;

    async fn sign_out(&self) -> ApiResult<Envelope<Ack>>;
}
