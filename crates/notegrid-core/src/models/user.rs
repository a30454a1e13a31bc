//! Signed-in user and session models

use serde::{Deserialize, Serialize};

use crate::util::initials;

/// Public profile of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl UserInfo {
    /// Avatar initials derived from the username
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.username)
    }
}

/// Session value owned by the app-wide auth state.
///
/// The server returns the user profile under `rest` on sign-in; the session
/// keeps that shape so it can be stored as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "rest")]
    pub user: UserInfo,
}
