use dioxus::prelude::*;

use crate::theme::palette;

/// Full-screen dimmed overlay that centers its children in a card.
///
/// Clicks on the backdrop are swallowed; the dialog closes only through its
/// own close button or a successful save.
#[component]
pub fn ModalOverlay(children: Element) -> Element {
    let colors = palette();

    rsx! {
        div {
            class: "modal-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.2);
                z-index: 2000;
            ",
            div {
                role: "dialog",
                style: "
                    position: relative;
                    width: 40%;
                    min-width: 320px;
                    max-height: 75vh;
                    overflow-y: auto;
                    margin: 0 16px;
                    padding: 20px;
                    border-radius: 8px;
                    background: {colors.bg_card};
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.18);
                ",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
