//! UI components

mod add_edit_note;
mod empty_card;
mod modal_overlay;
mod navbar;
mod note_card;
mod profile_info;
mod search_bar;
mod tags_input;
mod ui;

pub use add_edit_note::AddEditNote;
pub use empty_card::EmptyCard;
pub use modal_overlay::ModalOverlay;
pub use navbar::Navbar;
pub use note_card::NoteCard;
pub use ui::{ButtonVariant, UiButton, UiInput, UiTextarea, UI_STYLES};

pub(crate) use profile_info::ProfileInfo;
pub(crate) use search_bar::SearchBar;
pub(crate) use tags_input::TagsInput;
