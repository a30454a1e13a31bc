use dioxus::prelude::*;

use super::{ButtonVariant, UiButton, UiInput};
use crate::theme::palette;

/// Tag chips with an input for adding more.
///
/// `on_add` receives the raw input text; the draft decides whether to keep it.
#[component]
pub fn TagsInput(
    tags: Vec<String>,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let colors = palette();
    let mut input = use_signal(String::new);

    let mut add = move || {
        let value = input.read().clone();
        on_add.call(value);
        input.set(String::new());
    };

    rsx! {
        div {
            if !tags.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 8px;",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 4px;
                                padding: 4px 8px;
                                border-radius: 4px;
                                font-size: 13px;
                                color: {colors.text_primary};
                                background: {colors.bg_muted};
                            ",
                            "#{tag}"
                            button {
                                style: "border: none; background: transparent; cursor: pointer; color: {colors.text_muted};",
                                title: "Remove tag",
                                onclick: {
                                    let tag = tag.clone();
                                    move |_| on_remove.call(tag.clone())
                                },
                                "×"
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                div {
                    style: "flex: 1;",
                    UiInput {
                        r#type: "text",
                        placeholder: "Add tags",
                        value: "{input}",
                        oninput: move |evt: FormEvent| input.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                add();
                            }
                        },
                    }
                }
                UiButton {
                    variant: ButtonVariant::Outline,
                    r#type: "button",
                    onclick: move |_| add(),
                    "+"
                }
            }
        }
    }
}
