//! HTTP implementation of the notes API.
//!
//! Every request carries the user's credentials: browser builds ask `fetch`
//! to include cookies, native builds keep a cookie store on the client.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{routes, Ack, AuthApi, Envelope, NoteList, NotesApi, SavedNote, SignedIn};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{NoteDraft, NoteId};
use crate::util::compact_text;

/// `reqwest`-backed client for the notes and auth endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        Ok(Self {
            config,
            client: builder.build()?,
        })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Envelope<T>> {
        let request = with_credentials(request.header("Accept", "application/json"));
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: parse_api_error(status, &body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Clients targeting the same API compare equal.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
const fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

impl NotesApi for ApiClient {
    async fn list_notes(&self) -> ApiResult<Envelope<NoteList>> {
        tracing::debug!("GET {}", routes::ALL_NOTES);
        self.send(self.client.get(self.config.endpoint(routes::ALL_NOTES)))
            .await
    }

    async fn search_notes(&self, query: &str) -> ApiResult<Envelope<NoteList>> {
        tracing::debug!("GET {} query={:?}", routes::SEARCH_NOTES, query);
        self.send(
            self.client
                .get(self.config.endpoint(routes::SEARCH_NOTES))
                .query(&[("query", query)]),
        )
        .await
    }

    async fn delete_note(&self, id: &NoteId) -> ApiResult<Envelope<Ack>> {
        let route = routes::delete_note(id);
        tracing::debug!("DELETE {}", route);
        self.send(self.client.delete(self.config.endpoint(&route)))
            .await
    }

    async fn set_pinned(&self, id: &NoteId, is_pinned: bool) -> ApiResult<Envelope<Ack>> {
        let route = routes::edit_note_pin(id);
        tracing::debug!("PUT {} isPinned={}", route, is_pinned);
        self.send(
            self.client
                .put(self.config.endpoint(&route))
                .json(&serde_json::json!({ "isPinned": is_pinned })),
        )
        .await
    }

    async fn add_note(&self, draft: &NoteDraft) -> ApiResult<Envelope<SavedNote>> {
        tracing::debug!("POST {}", routes::ADD_NOTE);
        self.send(
            self.client
                .post(self.config.endpoint(routes::ADD_NOTE))
                .json(draft),
        )
        .await
    }

    async fn edit_note(&self, id: &NoteId, draft: &NoteDraft) -> ApiResult<Envelope<SavedNote>> {
        let route = routes::edit_note(id);
        tracing::debug!("POST {}", route);
        self.send(self.client.post(self.config.endpoint(&route)).json(draft))
            .await
    }
}

impl AuthApi for ApiClient {
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<Envelope<SignedIn>> {
        tracing::debug!("POST {}", routes::SIGN_IN);
        self.send(
            self.client
                .post(self.config.endpoint(routes::SIGN_IN))
                .json(&serde_json::json!({
                    "email": email,
                    "password": password,
                })),
        )
        .await
    }

    async fn sign_out(&self) -> ApiResult<Envelope<Ack>> {
        tracing::debug!("GET {}", routes::SIGN_OUT);
        self.send(self.client.get(self.config.endpoint(routes::SIGN_OUT)))
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            let message = compact_text(&message);
            if !message.is_empty() {
                return message;
            }
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string)
    } else {
        trimmed
    }
}
