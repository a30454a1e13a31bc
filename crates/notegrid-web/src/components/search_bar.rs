//! Search bar component

use dioxus::prelude::*;

use notegrid_core::util::normalize_search_query;

use crate::theme::palette;

/// Query box that submits on Enter or the search button.
///
/// Blank queries are ignored. Clearing empties the box and hands the board
/// back to the full list.
#[component]
pub fn SearchBar(on_search: EventHandler<String>, on_clear: EventHandler<()>) -> Element {
    let colors = palette();
    let mut query = use_signal(String::new);

    let submit = move || {
        let normalized = normalize_search_query(&query.peek());
        if let Some(text) = normalized {
            on_search.call(text);
        }
    };

    rsx! {
        div {
            class: "search-bar",
            style: "
                display: flex;
                align-items: center;
                width: 320px;
                max-width: 100%;
                padding: 0 12px;
                border-radius: 6px;
                background: {colors.bg_muted};
            ",

            input {
                r#type: "text",
                placeholder: "Search Notes",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
                style: "
                    flex: 1;
                    padding: 10px 0;
                    border: none;
                    font-size: 13px;
                    background: transparent;
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            if !query.read().is_empty() {
                button {
                    class: "icon-button",
                    title: "Clear search",
                    style: "border: none; background: transparent; cursor: pointer; font-size: 16px; color: {colors.text_muted};",
                    onclick: move |_| {
                        query.set(String::new());
                        on_clear.call(());
                    },
                    "×"
                }
            }

            button {
                class: "icon-button",
                title: "Search",
                style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: {colors.text_muted};",
                onclick: move |_| submit(),
                "🔍"
            }
        }
    }
}
