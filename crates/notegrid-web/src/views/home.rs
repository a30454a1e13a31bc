//! Notes board screen

use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use notegrid_core::{Board, GridView, Note, NoteDraft, NotesController};

use crate::components::{AddEditNote, EmptyCard, ModalOverlay, Navbar, NoteCard};
use crate::services::{BoardController, RouterRedirect, SignalBoard, ToastNotifier};
use crate::state::AppState;
use crate::theme::palette;

/// Board of the signed-in user's notes.
///
/// Mounting without a session sends the user to login. Every mutation goes
/// to the server and the board then shows whatever list the server returns.
#[component]
pub fn Home() -> Element {
    let colors = palette();
    let state = use_context::<AppState>();
    let toasts = use_toast();
    let navigator = use_navigator();
    let board = use_signal(Board::default);
    let mut dialog_error = use_signal(|| None::<String>);

    let controller: BoardController = use_hook(|| {
        NotesController::new(state.api.clone(), ToastNotifier(toasts), SignalBoard(board))
    });

    // Runs once per mount; the controller also refuses a second mount.
    use_hook({
        let controller = controller.clone();
        let session = state.session;
        move || {
            let session = session.peek().clone();
            spawn(async move {
                let outcome = controller
                    .mount(session.as_ref(), &RouterRedirect(navigator))
                    .await;
                tracing::debug!("Notes board mounted: {:?}", outcome);
            });
        }
    });

    let on_search = use_callback({
        let controller = controller.clone();
        move |query: String| {
            let controller = controller.clone();
            spawn(async move {
                let _ = controller.search(&query).await;
            });
        }
    });

    let on_clear_search = use_callback({
        let controller = controller.clone();
        move |()| {
            let controller = controller.clone();
            spawn(async move {
                let _ = controller.clear_search().await;
            });
        }
    });

    let on_delete = use_callback({
        let controller = controller.clone();
        move |note: Note| {
            let controller = controller.clone();
            spawn(async move {
                let _ = controller.delete_note(&note).await;
            });
        }
    });

    let on_pin_note = use_callback({
        let controller = controller.clone();
        move |note: Note| {
            let controller = controller.clone();
            spawn(async move {
                let _ = controller.toggle_pin(&note).await;
            });
        }
    });

    let on_edit = use_callback({
        let controller = controller.clone();
        move |note: Note| {
            if controller.open_edit(note) {
                dialog_error.set(None);
            }
        }
    });

    let on_add = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            if controller.open_create() {
                dialog_error.set(None);
            }
        }
    };

    let on_close = use_callback({
        let controller = controller.clone();
        move |()| controller.close_dialog()
    });

    let on_save = use_callback(move |draft: NoteDraft| {
        let controller = controller.clone();
        spawn(async move {
            match controller.save_dialog(&draft).await {
                Ok(()) => dialog_error.set(None),
                Err(failure) => dialog_error.set(Some(failure.message())),
            }
        });
    });

    let current = board.read().clone();
    let grid = match current.grid() {
        GridView::Cards(notes) => rsx! {
            div {
                class: "note-grid",
                for note in notes.iter().cloned() {
                    NoteCard {
                        key: "{note.id}",
                        note: note.clone(),
                        on_edit,
                        on_delete,
                        on_pin_note,
                    }
                }
            }
        },
        GridView::Empty(empty) => rsx! {
            EmptyCard { state: empty }
        },
    };

    rsx! {
        Navbar {
            user: current.user.clone(),
            on_search,
            on_clear_search,
        }

        main {
            style: "max-width: 1200px; margin: 0 auto; padding: 0 24px 96px;",
            {grid}
        }

        button {
            class: "add-button",
            title: "Add note",
            style: "
                position: fixed;
                right: 40px;
                bottom: 40px;
                width: 64px;
                height: 64px;
                border: none;
                border-radius: 12px;
                font-size: 32px;
                cursor: pointer;
                color: {colors.accent_text};
                background: {colors.accent};
            ",
            onclick: on_add,
            "+"
        }

        if current.dialog.is_open() {
            ModalOverlay {
                AddEditNote {
                    initial: current.dialog.draft(),
                    is_edit: current.dialog.payload().is_some(),
                    error: dialog_error(),
                    on_save,
                    on_close,
                }
            }
        }
    }
}
