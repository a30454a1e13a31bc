//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use notegrid_core::{ApiClient, Session};

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Shared client for the notes and auth endpoints
    pub api: ApiClient,
    /// Signed-in user, set by the login screen and cleared on logout
    pub session: Signal<Option<Session>>,
}
