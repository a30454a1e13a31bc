//! Main application component

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use notegrid_core::{ApiClient, Session};

use crate::bootstrap_config::{build_api_client, load_bootstrap_config};
use crate::components::UI_STYLES;
use crate::state::AppState;
use crate::theme::{palette, APP_STYLES, TOAST_STYLES};
use crate::views::{Home, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

/// Root application component
#[component]
pub fn App() -> Element {
    let client = use_hook(|| {
        build_api_client(&load_bootstrap_config()).map_err(|error| {
            tracing::error!("Failed to create notes API client: {}", error);
            error.to_string()
        })
    });

    rsx! {
        style { "{APP_STYLES}" }
        style { "{UI_STYLES}" }
        style { "{TOAST_STYLES}" }
        ToastProvider {
            {match client {
                Ok(api) => rsx! { AppShell { api } },
                Err(message) => rsx! { StartupError { message } },
            }}
        }
    }
}

#[component]
fn AppShell(api: ApiClient) -> Element {
    let session = use_signal(|| None::<Session>);
    use_context_provider(|| AppState { api, session });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn StartupError(message: String) -> Element {
    let colors = palette();

    rsx! {
        div {
            style: "
                max-width: 480px;
                margin: 96px auto;
                padding: 24px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_card};
            ",
            h2 {
                style: "margin: 0 0 8px; color: {colors.error};",
                "Notegrid could not start"
            }
            p {
                style: "margin: 0; color: {colors.text_secondary};",
                "{message}"
            }
        }
    }
}
