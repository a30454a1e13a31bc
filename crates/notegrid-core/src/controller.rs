//! Notes board controller.
//!
//! Runs the board's operations against the notes API: it performs the round
//! trip, reports failures through the [`Notifier`], and applies successful
//! results to the [`BoardStore`]. Every mutation is followed by a full reload
//! of the list; results are never patched into the board locally.
//!
//! Operations are not guarded against overlap. When several are in flight,
//! whichever reload resolves last decides the final list.

use crate::api::{Accepted, Envelope, NotesApi};
use crate::board::{Board, BoardStore, DialogMode, DialogState};
use crate::error::{ApiResult, Failure};
use crate::models::{Note, NoteDraft, Session};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for success/error toasts
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Navigation to the login view, used when there is no session
pub trait LoginRedirect {
    fn redirect_to_login(&self);
}

/// Result of [`NotesController::mount`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// No session: navigated to login, nothing loaded
    RedirectedToLogin,
    /// Session accepted and the initial load was issued
    Loaded,
    /// The board was already mounted; nothing happened
    AlreadyMounted,
}

/// Drives the notes board: session guard, list/search/delete/pin, and the
/// create/edit dialog.
#[derive(Debug, Clone)]
pub struct NotesController<A, N, S> {
    api: A,
    notifier: N,
    board: S,
}

impl<A, N, S> NotesController<A, N, S>
where
    A: NotesApi,
    N: Notifier,
    S: BoardStore,
{
    pub const fn new(api: A, notifier: N, board: S) -> Self {
        Self {
            api,
            notifier,
            board,
        }
    }

    pub const fn board(&self) -> &S {
        &self.board
    }

    /// One-shot initialisation for a freshly mounted board.
    ///
    /// Without a session this redirects to login and loads nothing. With one,
    /// it copies the user profile into the board and loads the full list.
    pub async fn mount(&self, session: Option<&Session>, redirect: &impl LoginRedirect) -> MountOutcome {
        let first_mount = self
            .board
            .with_mut(|board| !std::mem::replace(&mut board.mounted, true));
        if !first_mount {
            return MountOutcome::AlreadyMounted;
        }

        let Some(session) = session else {
            tracing::info!("No active session; redirecting to login");
            redirect.redirect_to_login();
            return MountOutcome::RedirectedToLogin;
        };

        let user = session.user.clone();
        self.board.with_mut(|board| board.user = Some(user));
        let _ = self.load_all_notes().await;
        MountOutcome::Loaded
    }

    /// Replace the list with the server's full list. Leaves search mode as is.
    pub async fn load_all_notes(&self) -> Result<(), Failure> {
        let notes = self.settle(self.api.list_notes().await)?.body.notes;
        tracing::info!("Loaded {} notes", notes.len());
        self.board.with_mut(|board| board.notes = notes);
        Ok(())
    }

    /// Replace the list with the server's search results and enter search mode.
    pub async fn search(&self, query: &str) -> Result<(), Failure> {
        let notes = self.settle(self.api.search_notes(query).await)?.body.notes;
        tracing::info!("Search returned {} notes", notes.len());
        self.board.with_mut(|board| {
            board.is_search_active = true;
            board.notes = notes;
        });
        Ok(())
    }

    /// Leave search mode and reload the full list.
    pub async fn clear_search(&self) -> Result<(), Failure> {
        self.board.with_mut(|board| board.is_search_active = false);
        self.load_all_notes().await
    }

    /// Delete a note, then reload the full list.
    ///
    /// The reload ignores search mode, so deleting from search results shows
    /// the full list afterwards.
    pub async fn delete_note(&self, note: &Note) -> Result<(), Failure> {
        let accepted = self.settle(self.api.delete_note(&note.id).await)?;
        tracing::info!("Deleted note {}", note.id);
        self.notify_success(accepted.message, "Note deleted successfully");
        self.load_all_notes().await
    }

    /// Flip a note's pin flag on the server, then reload the full list.
    pub async fn toggle_pin(&self, note: &Note) -> Result<(), Failure> {
        let is_pinned = !note.is_pinned;
        let accepted = self.settle(self.api.set_pinned(&note.id, is_pinned).await)?;
        tracing::info!("Set pin state of note {} to {}", note.id, is_pinned);
        let fallback = if is_pinned {
            "Note pinned"
        } else {
            "Note unpinned"
        };
        self.notify_success(accepted.message, fallback);
        self.load_all_notes().await
    }

    pub fn open_create(&self) -> bool {
        self.board.with_mut(Board::open_create)
    }

    pub fn open_edit(&self, note: Note) -> bool {
        self.board.with_mut(|board| board.open_edit(note))
    }

    pub fn close_dialog(&self) {
        self.board.with_mut(Board::close_dialog);
    }

    /// Save the dialog's draft as a new note or over the note being edited.
    ///
    /// Invalid drafts are refused without a request. On success the dialog
    /// closes and the list reloads; on failure the dialog stays open.
    pub async fn save_dialog(&self, draft: &NoteDraft) -> Result<(), Failure> {
        draft
            .validate()
            .map_err(|error| Failure::Invalid(error.to_string()))?;

        let mode = self.board.with(|board| match &board.dialog {
            DialogState::Open(mode) => Some(mode.clone()),
            DialogState::Closed => None,
        });
        let Some(mode) = mode else {
            return Err(Failure::Invalid("The note editor is not open".to_string()));
        };

        let (response, fallback) = match &mode {
            DialogMode::Create => (self.api.add_note(draft).await, "Note added successfully"),
            DialogMode::Edit(note) => (
                self.api.edit_note(&note.id, draft).await,
                "Note updated successfully",
            ),
        };
        let accepted = self.settle(response)?;
        self.notify_success(accepted.message, fallback);
        self.close_dialog();
        self.load_all_notes().await
    }

    fn settle<T>(&self, response: ApiResult<Envelope<T>>) -> Result<Accepted<T>, Failure> {
        settle(&self.notifier, response)
    }

    fn notify_success(&self, message: Option<String>, fallback: &str) {
        let message = message.unwrap_or_else(|| fallback.to_string());
        self.notifier.notify(Notice::success(message));
    }
}

/// Turn an API response into its accepted body, reporting either failure tier
/// as an error notification.
pub(crate) fn settle<T>(
    notifier: &impl Notifier,
    response: ApiResult<Envelope<T>>,
) -> Result<Accepted<T>, Failure> {
    let outcome = response
        .map_err(Failure::from)
        .and_then(Envelope::into_result);
    if let Err(failure) = &outcome {
        tracing::warn!("Notes API request failed: {}", failure);
        notifier.notify(Notice::error(failure.message()));
    }
    outcome
}
