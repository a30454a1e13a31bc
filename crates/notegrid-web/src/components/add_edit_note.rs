//! Create/edit note dialog body

use dioxus::prelude::*;

use notegrid_core::NoteDraft;

use super::{ButtonVariant, TagsInput, UiButton, UiInput, UiTextarea};
use crate::theme::palette;

/// Form for a new note or for the note being edited.
///
/// `initial` seeds the form once per opening. The owner performs the save
/// and reports a failed attempt through `error`; the form stays open then.
#[component]
pub fn AddEditNote(
    initial: NoteDraft,
    is_edit: bool,
    error: Option<String>,
    on_save: EventHandler<NoteDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let colors = palette();
    let mut draft = use_signal(|| initial.clone());

    let title = draft.read().title.clone();
    let content = draft.read().content.clone();
    let tags = draft.read().tags.clone();

    rsx! {
        div {
            style: "position: relative;",

            button {
                class: "icon-button",
                title: "Close",
                style: "
                    position: absolute;
                    top: -8px;
                    right: -8px;
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 50%;
                    background: transparent;
                    font-size: 20px;
                    cursor: pointer;
                    color: {colors.text_muted};
                ",
                onclick: move |_| on_close.call(()),
                "×"
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                label {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Title"
                }
                UiInput {
                    r#type: "text",
                    placeholder: "Go to gym at 5",
                    value: "{title}",
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px; margin-top: 16px;",
                label {
                    style: "font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Content"
                }
                UiTextarea {
                    placeholder: "Content...",
                    rows: "10",
                    value: "{content}",
                    oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                }
            }

            div {
                style: "margin-top: 12px;",
                label {
                    style: "display: block; margin-bottom: 8px; font-size: 12px; color: {colors.text_muted}; text-transform: uppercase;",
                    "Tags"
                }
                TagsInput {
                    tags,
                    on_add: move |raw: String| {
                        draft.write().add_tag(&raw);
                    },
                    on_remove: move |tag: String| draft.write().remove_tag(&tag),
                }
            }

            if let Some(message) = error {
                p {
                    style: "margin: 12px 0 0; font-size: 12px; color: {colors.error};",
                    "{message}"
                }
            }

            div {
                style: "margin-top: 20px;",
                UiButton {
                    variant: ButtonVariant::Primary,
                    block: true,
                    onclick: move |_| on_save.call(draft.read().clone()),
                    if is_edit { "UPDATE" } else { "ADD" }
                }
            }
        }
    }
}
