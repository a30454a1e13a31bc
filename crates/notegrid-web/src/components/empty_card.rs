use dioxus::prelude::*;

use notegrid_core::{EmptyArt, EmptyState};

use crate::theme::palette;

const fn art_glyph(art: EmptyArt) -> &'static str {
    match art {
        EmptyArt::Pin => "📝",
        EmptyArt::NoResults => "🔎",
    }
}

/// Illustration and message shown when the grid has no cards.
#[component]
pub fn EmptyCard(state: EmptyState) -> Element {
    let colors = palette();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                margin-top: 80px;
            ",
            div {
                style: "font-size: 96px; line-height: 1;",
                "{art_glyph(state.art)}"
            }
            p {
                style: "
                    width: 50%;
                    margin-top: 20px;
                    font-size: 14px;
                    font-weight: 500;
                    line-height: 1.75;
                    text-align: center;
                    color: {colors.text_secondary};
                ",
                "{state.message}"
            }
        }
    }
}
