//! Data models for notegrid

mod note;
mod user;

pub use note::{DraftError, Note, NoteDraft, NoteId};
pub use user::{Session, UserInfo};
