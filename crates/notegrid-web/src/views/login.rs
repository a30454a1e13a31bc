//! Sign-in screen

use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use notegrid_core::auth;

use crate::app::Route;
use crate::components::{ButtonVariant, UiButton, UiInput};
use crate::services::ToastNotifier;
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn Login() -> Element {
    let colors = palette();
    let state = use_context::<AppState>();
    let toasts = use_toast();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Signed-in users never see the form.
    let session = state.session;
    use_effect(move || {
        if session.read().is_some() {
            navigator.replace(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = state.api.clone();
        let mut session = state.session;
        let email = email.read().clone();
        let password = password.read().clone();
        spawn(async move {
            match auth::sign_in(&api, &ToastNotifier(toasts), &email, &password).await {
                Ok(signed_in) => {
                    error.set(None);
                    session.set(Some(signed_in));
                }
                Err(failure) => error.set(Some(failure.message())),
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; margin-top: 112px;",

            div {
                style: "
                    width: 384px;
                    max-width: calc(100% - 32px);
                    padding: 28px 28px 40px;
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    background: {colors.bg_card};
                ",

                form {
                    onsubmit: on_submit,
                    style: "display: flex; flex-direction: column; gap: 16px;",

                    h4 {
                        style: "margin: 0 0 12px; font-size: 24px; font-weight: 500; color: {colors.text_primary};",
                        "Login"
                    }

                    UiInput {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    UiInput {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    if let Some(message) = error() {
                        p {
                            style: "margin: 0; font-size: 12px; color: {colors.error};",
                            "{message}"
                        }
                    }

                    UiButton {
                        variant: ButtonVariant::Primary,
                        block: true,
                        r#type: "submit",
                        "Login"
                    }
                }
            }
        }
    }
}
