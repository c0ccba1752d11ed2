//! crates/notes_beautifier_core/src/session.rs
//!
//! The session store: sole owner of the authentication token and the user it
//! resolves to. Every change is published on a `watch` channel so that the
//! route guard, the workflow and the forms read one source of truth through a
//! [`SessionHandle`] without being able to mutate it.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::{Reply, Session, User};
use crate::ports::{AuthService, TokenStore};

//=========================================================================================
// SessionStore (Single Writer)
//=========================================================================================

pub struct SessionStore {
    auth: Arc<dyn AuthService>,
    tokens: Arc<dyn TokenStore>,
    state: watch::Sender<Session>,
}

impl SessionStore {
    /// Creates a store in the pending state. Call [`SessionStore::initialize`]
    /// before letting any protected view render.
    pub fn new(auth: Arc<dyn AuthService>, tokens: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(Session::pending());
        Self {
            auth,
            tokens,
            state,
        }
    }

    /// A read-only view of the session for consumers.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            rx: self.state.subscribe(),
        }
    }

    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Restores the session from the persisted token.
    ///
    /// Any failure to validate the token demotes to signed out and wipes the
    /// stored value; nothing is reported to the caller.
    pub async fn initialize(&self) {
        let token = match self.tokens.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Could not read the persisted token, starting signed out: {}", e);
                None
            }
        };

        let Some(token) = token else {
            self.state.send_replace(Session::signed_out());
            return;
        };

        match self.auth.current_user(&token).await {
            Ok(Reply::Success(user)) => {
                info!(user_id = %user.id, "Session restored from persisted token.");
                self.state.send_replace(Session::signed_in(token, user));
            }
            Ok(Reply::Failure(failure)) => {
                info!(
                    "Persisted token was rejected ({}), signing out.",
                    failure.reason_or("no user returned")
                );
                self.demote();
            }
            Err(e) => {
                warn!("Identity check failed, signing out: {}", e);
                self.demote();
            }
        }
    }

    /// Records a freshly issued token. The caller has just authenticated, so
    /// the token is not re-validated.
    pub fn login(&self, token: String, user: User) {
        if let Err(e) = self.tokens.store(&token) {
            warn!("Failed to persist the session token: {}", e);
        }
        info!(user_id = %user.id, "Signed in.");
        self.state.send_replace(Session::signed_in(token, user));
    }

    /// Clears the session and the persisted token. Safe to call repeatedly.
    pub fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to remove the persisted token: {}", e);
        }
        let previous = self.state.send_replace(Session::signed_out());
        if previous.user().is_some() {
            info!("Signed out.");
        }
    }

    fn demote(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to remove the rejected token: {}", e);
        }
        self.state.send_replace(Session::signed_out());
    }
}

//=========================================================================================
// SessionHandle (Read-only View)
//=========================================================================================

/// A cloneable, read-only view of the session owned by a [`SessionStore`].
#[derive(Clone)]
pub struct SessionHandle {
    rx: watch::Receiver<Session>,
}

impl SessionHandle {
    pub fn current(&self) -> Session {
        self.rx.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.rx.borrow().token().map(str::to_string)
    }

    pub fn is_signed_in(&self) -> bool {
        self.rx.borrow().user().is_some()
    }

    /// Waits until the store has finished restoring the session.
    pub async fn ready(&self) -> Session {
        let mut rx = self.rx.clone();
        // An error means the store is gone; whatever it last published is final.
        let _ = rx.wait_for(|session| !session.is_loading()).await;
        let settled = rx.borrow().clone();
        settled
    }
}
