//! Sign-in and sign-out against the notes API.
//!
//! The session itself lives in the front end's shared app state; these helpers
//! only perform the round trips and report failures like the board does.

use crate::api::AuthApi;
use crate::controller::{settle, Notice, Notifier};
use crate::error::Failure;
use crate::models::Session;

/// Check the login form before any request is sent
pub fn validate_credentials(email: &str, password: &str) -> Result<(), Failure> {
    if email.trim().is_empty() {
        return Err(Failure::Invalid("Please enter your email".to_string()));
    }
    if password.is_empty() {
        return Err(Failure::Invalid("Please enter the password".to_string()));
    }
    Ok(())
}

/// Sign in and return the session to store in app state.
pub async fn sign_in(
    api: &impl AuthApi,
    notifier: &impl Notifier,
    email: &str,
    password: &str,
) -> Result<Session, Failure> {
    validate_credentials(email, password)?;

    let accepted = settle(notifier, api.sign_in(email.trim(), password).await)?;
    let Some(user) = accepted.body.rest else {
        let failure = Failure::Rejected("Sign-in response did not include the user".to_string());
        notifier.notify(Notice::error(failure.message()));
        return Err(failure);
    };

    tracing::info!("Signed in as {}", user.username);
    if let Some(message) = accepted.message {
        notifier.notify(Notice::success(message));
    }
    Ok(Session { user })
}

/// End the server session. The caller clears its stored session on success.
pub async fn sign_out(api: &impl AuthApi, notifier: &impl Notifier) -> Result<(), Failure> {
    let accepted = settle(notifier, api.sign_out().await)?;
    tracing::info!("Signed out");
    if let Some(message) = accepted.message {
        notifier.notify(Notice::success(message));
    }
    Ok(())
}
