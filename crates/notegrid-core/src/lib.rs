//! notegrid-core - Core library for notegrid
//!
//! This crate contains the note models, the notes API client, and the board
//! state machine shared by every notegrid front end. It has no UI framework
//! dependency so the whole fetch-render-mutate loop can be exercised natively.

pub mod api;
pub mod auth;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod util;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, AuthApi, Envelope, NotesApi};
pub use board::{Board, BoardStore, DialogMode, DialogState, EmptyArt, EmptyState, GridView};
pub use config::ApiConfig;
pub use controller::{LoginRedirect, MountOutcome, Notice, NoticeKind, Notifier, NotesController};
pub use error::{ApiError, ApiResult, Failure};
pub use models::{Note, NoteDraft, NoteId, Session, UserInfo};
