//! crates/notes_beautifier_core/src/testing.rs
//!
//! In-memory port implementations shared by the unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{AuthGrant, DraftNote, Note, Reply, ReplyFailure, Summary, User};
use crate::ports::{
    AuthService, LoginCredentials, NoteProcessingService, NoteStorageService, PortError,
    PortResult, Registration, TokenStore,
};

/// A canned answer for one endpoint.
#[derive(Clone)]
pub(crate) enum Scripted<T> {
    Answer(Reply<T>),
    Transport,
}

impl<T: Clone> Scripted<T> {
    pub(crate) fn ok(value: T) -> Self {
        Scripted::Answer(Reply::Success(value))
    }

    pub(crate) fn refused(message: Option<&str>, error: Option<&str>) -> Self {
        Scripted::Answer(Reply::Failure(ReplyFailure {
            message: message.map(str::to_string),
            error: error.map(str::to_string),
        }))
    }

    fn produce(&self) -> PortResult<Reply<T>> {
        match self {
            Scripted::Answer(reply) => Ok(reply.clone()),
            Scripted::Transport => Err(PortError::Transport("connection refused".into())),
        }
    }
}

#[derive(Default)]
pub(crate) struct Calls {
    pub me: AtomicUsize,
    pub login: AtomicUsize,
    pub register: AtomicUsize,
    pub beautify: AtomicUsize,
    pub summarize: AtomicUsize,
    pub save: AtomicUsize,
    pub list: AtomicUsize,
}

impl Calls {
    pub(crate) fn total(&self) -> usize {
        [
            &self.me,
            &self.login,
            &self.register,
            &self.beautify,
            &self.summarize,
            &self.save,
            &self.list,
        ]
        .iter()
        .map(|counter| counter.load(Ordering::SeqCst))
        .sum()
    }
}

/// Scripted stand-in for every remote port. Unscripted endpoints fail at the transport level.
pub(crate) struct FakeBackend {
    pub me: Mutex<Scripted<User>>,
    pub login: Mutex<Scripted<AuthGrant>>,
    pub register: Mutex<Scripted<AuthGrant>>,
    pub beautify: Mutex<Scripted<String>>,
    pub summarize: Mutex<Scripted<Summary>>,
    pub save: Mutex<Scripted<()>>,
    pub list: Mutex<Scripted<Vec<Note>>>,
    pub calls: Calls,
    pub tokens_seen: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<DraftNote>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self {
            me: Mutex::new(Scripted::Transport),
            login: Mutex::new(Scripted::Transport),
            register: Mutex::new(Scripted::Transport),
            beautify: Mutex::new(Scripted::Transport),
            summarize: Mutex::new(Scripted::Transport),
            save: Mutex::new(Scripted::Transport),
            list: Mutex::new(Scripted::Transport),
            calls: Calls::default(),
            tokens_seen: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn record(&self, counter: &AtomicUsize, token: Option<&str>) {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = token {
            self.tokens_seen.lock().unwrap().push(token.to_string());
        }
    }
}

#[async_trait]
impl AuthService for FakeBackend {
    async fn current_user(&self, token: &str) -> PortResult<Reply<User>> {
        self.record(&self.calls.me, Some(token));
        self.me.lock().unwrap().produce()
    }

    async fn login(&self, _credentials: &LoginCredentials) -> PortResult<Reply<AuthGrant>> {
        self.record(&self.calls.login, None);
        self.login.lock().unwrap().produce()
    }

    async fn register(&self, _registration: &Registration) -> PortResult<Reply<AuthGrant>> {
        self.record(&self.calls.register, None);
        self.register.lock().unwrap().produce()
    }
}

#[async_trait]
impl NoteProcessingService for FakeBackend {
    async fn beautify(&self, token: &str, _content: &str) -> PortResult<Reply<String>> {
        self.record(&self.calls.beautify, Some(token));
        self.beautify.lock().unwrap().produce()
    }

    async fn summarize(&self, token: &str, _text: &str) -> PortResult<Reply<Summary>> {
        self.record(&self.calls.summarize, Some(token));
        self.summarize.lock().unwrap().produce()
    }
}

#[async_trait]
impl NoteStorageService for FakeBackend {
    async fn save(&self, token: &str, draft: &DraftNote) -> PortResult<Reply<()>> {
        self.record(&self.calls.save, Some(token));
        self.saved.lock().unwrap().push(draft.clone());
        self.save.lock().unwrap().produce()
    }

    async fn list(&self) -> PortResult<Reply<Vec<Note>>> {
        self.record(&self.calls.list, None);
        self.list.lock().unwrap().produce()
    }
}

/// A token slot kept in memory.
#[derive(Default)]
pub(crate) struct MemoryTokenStore {
    pub slot: Mutex<Option<String>>,
    pub fail_reads: bool,
}

impl MemoryTokenStore {
    pub(crate) fn holding(token: &str) -> Self {
        Self {
            slot: Mutex::new(Some(token.to_string())),
            fail_reads: false,
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> PortResult<Option<String>> {
        if self.fail_reads {
            return Err(PortError::Storage("unreadable".into()));
        }
        Ok(self.slot.lock().unwrap().clone())
    }

    fn store(&self, token: &str) -> PortResult<()> {
        *self.slot.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> PortResult<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

pub(crate) fn ada() -> User {
    User {
        id: "64f1c0ffee".into(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
    }
}
