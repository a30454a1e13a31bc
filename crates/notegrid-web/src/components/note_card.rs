//! Note card component

use dioxus::prelude::*;

use notegrid_core::Note;

use crate::theme::palette;

/// One note on the board grid.
#[component]
pub fn NoteCard(
    note: Note,
    on_edit: EventHandler<Note>,
    on_delete: EventHandler<Note>,
    on_pin_note: EventHandler<Note>,
) -> Element {
    let colors = palette();
    let pin_color = if note.is_pinned {
        colors.accent
    } else {
        colors.text_muted
    };
    let tags = note
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    let edit_note = note.clone();
    let delete_note = note.clone();
    let pin_note = note.clone();

    rsx! {
        div {
            class: "note-card",
            style: "
                padding: 16px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                background: {colors.bg_card};
            ",

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                div {
                    h6 {
                        style: "margin: 0; font-size: 14px; font-weight: 500; color: {colors.text_primary};",
                        "{note.title}"
                    }
                    span {
                        style: "font-size: 12px; color: {colors.text_muted};",
                        "{note.display_date()}"
                    }
                }
                button {
                    class: "icon-button",
                    title: if note.is_pinned { "Unpin note" } else { "Pin note" },
                    style: "border: none; background: transparent; cursor: pointer; font-size: 16px; color: {pin_color};",
                    onclick: move |_| on_pin_note.call(pin_note.clone()),
                    "📌"
                }
            }

            p {
                style: "margin: 8px 0 0; font-size: 13px; color: {colors.text_secondary};",
                "{note.card_preview()}"
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-top: 8px;",
                div {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "{tags}"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    button {
                        class: "icon-button",
                        title: "Edit note",
                        style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: {colors.text_muted};",
                        onclick: move |_| on_edit.call(edit_note.clone()),
                        "✎"
                    }
                    button {
                        class: "icon-button",
                        title: "Delete note",
                        style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: {colors.text_muted};",
                        onclick: move |_| on_delete.call(delete_note.clone()),
                        "🗑"
                    }
                }
            }
        }
    }
}
