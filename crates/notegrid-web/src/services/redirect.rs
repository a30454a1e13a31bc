use dioxus::prelude::*;

use notegrid_core::LoginRedirect;

use crate::app::Route;

/// Sends the user to the login screen, replacing the current history entry.
#[derive(Clone, Copy)]
pub struct RouterRedirect(pub Navigator);

impl LoginRedirect for RouterRedirect {
    fn redirect_to_login(&self) {
        self.0.replace(Route::Login {});
    }
}
