use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use notegrid_core::{auth, UserInfo};

use crate::app::Route;
use crate::services::ToastNotifier;
use crate::state::AppState;
use crate::theme::palette;

/// Avatar initials, username, and the logout action.
#[component]
pub fn ProfileInfo(user: UserInfo) -> Element {
    let colors = palette();
    let state = use_context::<AppState>();
    let toasts = use_toast();
    let navigator = use_navigator();

    let on_logout = move |_| {
        let api = state.api.clone();
        let mut session = state.session;
        spawn(async move {
            if auth::sign_out(&api, &ToastNotifier(toasts)).await.is_ok() {
                session.set(None);
                navigator.replace(Route::Login {});
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px;",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    font-weight: 500;
                    color: {colors.text_primary};
                    background: {colors.bg_muted};
                ",
                "{user.initials()}"
            }

            div {
                p {
                    style: "margin: 0; font-size: 14px; font-weight: 500; color: {colors.text_primary};",
                    "{user.username}"
                }
                button {
                    style: "
                        padding: 0;
                        border: none;
                        background: transparent;
                        font-size: 13px;
                        color: {colors.text_secondary};
                        text-decoration: underline;
                        cursor: pointer;
                    ",
                    onclick: on_logout,
                    "Logout"
                }
            }
        }
    }
}
