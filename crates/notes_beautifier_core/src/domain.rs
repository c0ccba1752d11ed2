//! crates/notes_beautifier_core/src/domain.rs
//!
//! Defines the pure, core data structures for the client.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Utc};

/// The identity record the backend echoes for an authenticated token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The client's belief about who is signed in.
///
/// A user can only exist alongside the token it was resolved from, so the
/// fields are private and the three constructors are the only way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credentials: Option<(String, User)>,
    loading: bool,
}

impl Session {
    /// The state before the persisted token has been checked.
    pub fn pending() -> Self {
        Self {
            credentials: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            credentials: None,
            loading: false,
        }
    }

    pub fn signed_in(token: String, user: User) -> Self {
        Self {
            credentials: Some((token, user)),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|(_, user)| user)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// A note as persisted by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Server-assigned identifier, when the backend sends one.
    pub id: Option<String>,
    pub raw_text: String,
    pub beautified_text: String,
    pub summary_text: String,
    pub takeaways: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The not-yet-persisted bundle produced by one workflow cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftNote {
    pub raw_text: String,
    pub beautified_text: String,
    pub summary_text: String,
    pub takeaways: Vec<String>,
}

impl DraftNote {
    /// A draft can only be saved once both AI stages produced output.
    pub fn is_saveable(&self) -> bool {
        !self.beautified_text.is_empty() && !self.summary_text.is_empty()
    }
}

/// Output of the summarize stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub summary_text: String,
    pub takeaways: Vec<String>,
}

/// Login/signup result: the issued token and, when sent, the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub token: String,
    pub user: Option<User>,
}

/// Transient state behind the Home view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    pub raw_text: String,
    pub beautified_text: String,
    pub summary: String,
    pub takeaways: Vec<String>,
    pub is_loading: bool,
    pub status_message: String,
}

impl WorkflowState {
    pub fn draft(&self) -> DraftNote {
        DraftNote {
            raw_text: self.raw_text.clone(),
            beautified_text: self.beautified_text.clone(),
            summary_text: self.summary.clone(),
            takeaways: self.takeaways.clone(),
        }
    }
}

//=========================================================================================
// Backend Reply Envelope
//=========================================================================================

/// What the backend said when it answered but refused: its optional
/// `message` and `error` fields, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyFailure {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ReplyFailure {
    /// `message`, then `error`, then the given fallback.
    pub fn reason_or(&self, fallback: &str) -> String {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|reason| !reason.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// `error`, then the given fallback. Auth endpoints only report `error`.
    pub fn error_or(&self, fallback: &str) -> String {
        self.error
            .as_deref()
            .filter(|reason| !reason.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// An application-level answer from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Success(T),
    Failure(ReplyFailure),
}
