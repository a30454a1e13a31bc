//! Board view state: the note list, search mode, and the edit dialog.
//!
//! The board only ever holds what the server last returned. Nothing here
//! sorts, filters, or patches notes locally.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Note, NoteDraft, UserInfo};

/// What the create/edit dialog is doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(Note),
}

/// Visibility and payload of the create/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DialogMode),
}

impl DialogState {
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Note being edited; `None` when closed or creating
    pub const fn payload(&self) -> Option<&Note> {
        match self {
            Self::Open(DialogMode::Edit(note)) => Some(note),
            Self::Closed | Self::Open(DialogMode::Create) => None,
        }
    }

    /// Initial form contents for the dialog
    pub fn draft(&self) -> NoteDraft {
        self.payload().map(NoteDraft::from_note).unwrap_or_default()
    }
}

/// Client-owned view state of the notes board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Snapshot of the signed-in user, copied from the session at mount
    pub user: Option<UserInfo>,
    /// Last list returned by the server, in server order
    pub notes: Vec<Note>,
    pub is_search_active: bool,
    pub dialog: DialogState,
    pub(crate) mounted: bool,
}

impl Board {
    /// Open the dialog for a new note. Ignored unless the dialog is closed.
    pub fn open_create(&mut self) -> bool {
        self.open(DialogMode::Create)
    }

    /// Open the dialog on an existing note. Ignored unless the dialog is closed.
    pub fn open_edit(&mut self, note: Note) -> bool {
        self.open(DialogMode::Edit(note))
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    fn open(&mut self, mode: DialogMode) -> bool {
        if self.dialog.is_open() {
            tracing::debug!("Ignoring dialog open request while already open");
            return false;
        }
        self.dialog = DialogState::Open(mode);
        true
    }

    /// What the grid area should show for the current state
    pub fn grid(&self) -> GridView<'_> {
        grid_view(&self.notes, self.is_search_active)
    }
}

/// Illustration shown with an empty grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyArt {
    /// Pinned-note illustration for a board with no notes yet
    Pin,
    /// Not-found illustration for a search with no results
    NoResults,
}

/// Placeholder shown instead of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub art: EmptyArt,
    pub message: &'static str,
}

pub const FRESH_EMPTY_STATE: EmptyState = EmptyState {
    art: EmptyArt::Pin,
    message: "Ready to capture your ideas? Click the 'Add' button to start noting down your thoughts, inspiration and reminders. Let's get started!",
};

pub const SEARCH_EMPTY_STATE: EmptyState = EmptyState {
    art: EmptyArt::NoResults,
    message: "Oops! No Notes found matching your search",
};

/// Grid contents: cards in server order, or one empty-state placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridView<'a> {
    Cards(&'a [Note]),
    Empty(EmptyState),
}

/// Decide what the grid shows. Depends only on whether there are notes and
/// whether search mode is active.
pub const fn grid_view(notes: &[Note], is_search_active: bool) -> GridView<'_> {
    if !notes.is_empty() {
        return GridView::Cards(notes);
    }
    if is_search_active {
        GridView::Empty(SEARCH_EMPTY_STATE)
    } else {
        GridView::Empty(FRESH_EMPTY_STATE)
    }
}

/// Shared handle to a [`Board`].
///
/// Front ends keep the board wherever their reactivity lives (a signal, a
/// cell) and hand the controller a cheap clonable handle to it.
pub trait BoardStore: Clone {
    fn with<R>(&self, f: impl FnOnce(&Board) -> R) -> R;

    fn with_mut<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R;

    fn snapshot(&self) -> Board {
        self.with(Clone::clone)
    }
}

impl BoardStore for Rc<RefCell<Board>> {
    fn with<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::NoteId;

    fn note(id: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: format!("Title {id}"),
            content: format!("Content {id}"),
            tags: vec!["tag".to_string()],
            is_pinned: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_board_shows_fresh_placeholder() {
        let board = Board::default();
        assert_eq!(board.grid(), GridView::Empty(FRESH_EMPTY_STATE));
    }

    #[test]
    fn empty_search_shows_search_placeholder() {
        let board = Board {
            is_search_active: true,
            ..Board::default()
        };
        assert_eq!(board.grid(), GridView::Empty(SEARCH_EMPTY_STATE));
        assert_eq!(SEARCH_EMPTY_STATE.art, EmptyArt::NoResults);
    }

    #[test]
    fn cards_keep_server_order_regardless_of_search_mode() {
        let notes = vec![note("b"), note("a"), note("c")];
        for is_search_active in [false, true] {
            let GridView::Cards(cards) = grid_view(&notes, is_search_active) else {
                panic!("expected cards");
            };
            let ids: Vec<&str> = cards.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids, vec!["b", "a", "c"]);
        }
    }

    #[test]
    fn create_dialog_has_no_payload() {
        let mut board = Board::default();
        assert!(board.open_create());
        assert_eq!(board.dialog, DialogState::Open(DialogMode::Create));
        assert_eq!(board.dialog.payload(), None);
        assert_eq!(board.dialog.draft(), NoteDraft::default());
    }

    #[test]
    fn edit_dialog_carries_the_note() {
        let mut board = Board::default();
        let target = note("n1");
        assert!(board.open_edit(target.clone()));
        assert_eq!(board.dialog.payload(), Some(&target));
        assert_eq!(board.dialog.draft().title, "Title n1");
    }

    #[test]
    fn open_dialog_must_close_before_switching_target() {
        let mut board = Board::default();
        assert!(board.open_create());
        assert!(!board.open_edit(note("n1")));
        assert_eq!(board.dialog, DialogState::Open(DialogMode::Create));

        board.close_dialog();
        assert!(board.open_edit(note("n1")));
        assert!(board.dialog.is_open());
    }

    #[test]
    fn rc_store_shares_updates_between_clones() {
        let store = Rc::new(RefCell::new(Board::default()));
        let other = store.clone();
        other.with_mut(|board| board.is_search_active = true);
        assert!(store.snapshot().is_search_active);
    }
}
