//! crates/notes_beautifier_core/src/ports.rs
//!
//! Defines the service contracts (traits) the client core depends on.
//! These traits form the boundary of the hexagonal architecture, keeping the
//! session and workflow logic independent of HTTP and of the storage medium.

use async_trait::async_trait;
use crate::domain::{AuthGrant, DraftNote, Note, Reply, Summary, User};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
///
/// Only transport-class problems end up here; a backend that answers and
/// refuses is reported through [`Reply::Failure`] instead.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Token storage failure: {0}")]
    Storage(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Request Payloads
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolves the identity behind a bearer token (`GET /api/auth/me`).
    async fn current_user(&self, token: &str) -> PortResult<Reply<User>>;

    /// `POST /api/auth/login`. A reply without a token is a failure.
    async fn login(&self, credentials: &LoginCredentials) -> PortResult<Reply<AuthGrant>>;

    /// `POST /api/auth/register`. Same success rule as `login`.
    async fn register(&self, registration: &Registration) -> PortResult<Reply<AuthGrant>>;
}

#[async_trait]
pub trait NoteProcessingService: Send + Sync {
    /// Turns raw notes into formatted text. Success carries the `result` field.
    async fn beautify(&self, token: &str, content: &str) -> PortResult<Reply<String>>;

    /// Derives a summary and takeaways from beautified text.
    async fn summarize(&self, token: &str, text: &str) -> PortResult<Reply<Summary>>;
}

#[async_trait]
pub trait NoteStorageService: Send + Sync {
    /// Persists a complete draft under the caller's token.
    async fn save(&self, token: &str, draft: &DraftNote) -> PortResult<Reply<()>>;

    /// Lists every saved note. Sent without a bearer token.
    async fn list(&self) -> PortResult<Reply<Vec<Note>>>;
}

/// The single durable slot holding the authentication token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> PortResult<Option<String>>;
    fn store(&self, token: &str) -> PortResult<()>;
    /// Removing an already empty slot is not an error.
    fn clear(&self) -> PortResult<()>;
}
