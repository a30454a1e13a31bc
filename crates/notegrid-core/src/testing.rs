//! In-memory fakes for controller and auth tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::{Ack, AuthApi, Envelope, NoteList, NotesApi, SavedNote, SignedIn};
use crate::controller::{LoginRedirect, Notice, Notifier};
use crate::error::{ApiError, ApiResult};
use crate::models::{Note, NoteDraft, NoteId};

/// Request observed by [`FakeApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Search(String),
    Delete(NoteId),
    Pin(NoteId, bool),
    Add(NoteDraft),
    Edit(NoteId, NoteDraft),
    SignIn(String),
    SignOut,
}

/// Scripted answer for one request
#[derive(Debug, Clone)]
pub enum Reply {
    Json(serde_json::Value),
    /// The server could not be reached
    Down,
}

/// Notes/auth API answering from per-endpoint reply queues
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    calls: Rc<RefCell<Vec<Call>>>,
    replies: Rc<RefCell<HashMap<&'static str, VecDeque<Reply>>>>,
}

impl FakeApi {
    pub fn script(&self, endpoint: &'static str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer<T: DeserializeOwned>(&self, endpoint: &'static str, call: Call) -> ApiResult<Envelope<T>> {
        self.calls.borrow_mut().push(call);
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no scripted reply for {endpoint}"));
        match reply {
            Reply::Json(value) => Ok(serde_json::from_value(value)?),
            Reply::Down => Err(ApiError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        }
    }
}

impl NotesApi for FakeApi {
    async fn list_notes(&self) -> ApiResult<Envelope<NoteList>> {
        self.answer("list", Call::List)
    }

    async fn search_notes(&self, query: &str) -> ApiResult<Envelope<NoteList>> {
        self.answer("search", Call::Search(query.to_string()))
    }

    async fn delete_note(&self, id: &NoteId) -> ApiResult<Envelope<Ack>> {
        self.answer("delete", Call::Delete(id.clone()))
    }

    async fn set_pinned(&self, id: &NoteId, is_pinned: bool) -> ApiResult<Envelope<Ack>> {
        self.answer("pin", Call::Pin(id.clone(), is_pinned))
    }

    async fn add_note(&self, draft: &NoteDraft) -> ApiResult<Envelope<SavedNote>> {
        self.answer("add", Call::Add(draft.clone()))
    }

    async fn edit_note(&self, id: &NoteId, draft: &NoteDraft) -> ApiResult<Envelope<SavedNote>> {
        self.answer("edit", Call::Edit(id.clone(), draft.clone()))
    }
}

impl AuthApi for FakeApi {
    async fn sign_in(&self, email: &str, _password: &str) -> ApiResult<Envelope<SignedIn>> {
        self.answer("signin", Call::SignIn(email.to_string()))
    }

    async fn sign_out(&self) -> ApiResult<Envelope<Ack>> {
        self.answer("signout", Call::SignOut)
    }
}

/// Notifier that keeps every notice
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier(Rc<RefCell<Vec<Notice>>>);

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.0.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}

/// Login redirect that counts how often it was used
#[derive(Debug, Clone, Default)]
pub struct CountingRedirect(Rc<Cell<u32>>);

impl CountingRedirect {
    pub fn count(&self) -> u32 {
        self.0.get()
    }
}

impl LoginRedirect for CountingRedirect {
    fn redirect_to_login(&self) {
        self.0.set(self.0.get() + 1);
    }
}

pub fn note_json(id: &str, is_pinned: bool) -> serde_json::Value {
    json!({
        "_id": id,
        "title": format!("Title {id}"),
        "content": format!("Content {id}"),
        "tags": ["tag"],
        "isPinned": is_pinned,
        "createdAt": "2024-03-05T10:20:30.000Z",
    })
}

pub fn note(id: &str, is_pinned: bool) -> Note {
    serde_json::from_value(note_json(id, is_pinned)).unwrap()
}
