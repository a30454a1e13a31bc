//! Top bar with the app title, search, and the signed-in profile

use dioxus::prelude::*;

use notegrid_core::UserInfo;

use super::{ProfileInfo, SearchBar};
use crate::theme::palette;

#[component]
pub fn Navbar(
    user: Option<UserInfo>,
    on_search: EventHandler<String>,
    on_clear_search: EventHandler<()>,
) -> Element {
    let colors = palette();

    rsx! {
        nav {
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                padding: 8px 24px;
                background: {colors.bg_card};
                box-shadow: 0 1px 2px rgba(15, 23, 42, 0.06);
            ",

            h2 {
                style: "
                    margin: 0;
                    font-size: 20px;
                    font-weight: 500;
                    color: {colors.text_primary};
                ",
                "Notes"
            }

            SearchBar { on_search, on_clear: on_clear_search }

            if let Some(user) = user {
                ProfileInfo { user }
            }
        }
    }
}
