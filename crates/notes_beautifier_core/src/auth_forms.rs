//! crates/notes_beautifier_core/src/auth_forms.rs
//!
//! Login and signup submission. Validation is limited to required fields;
//! everything else is the backend's call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{AuthGrant, Reply};
use crate::ports::{AuthService, LoginCredentials, PortResult, Registration};
use crate::routes::Route;
use crate::session::SessionStore;

pub const REQUIRED_MESSAGE: &str = "All fields are required.";
pub const LOGIN_FALLBACK: &str = "Login failed.";
pub const LOGIN_RETRY: &str = "Login failed. Please try again.";
pub const SIGNUP_FALLBACK: &str = "Signup failed.";
pub const SIGNUP_RETRY: &str = "Signup failed. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|field| field.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Signed in; continue to the given view.
    Navigate(Route),
    /// Stay on the form and show this message.
    Message(String),
    /// A submission was already in flight.
    Ignored,
}

/// Which form is submitting, for messages and logs.
#[derive(Clone, Copy)]
struct FormKind {
    name: &'static str,
    fallback: &'static str,
    retry: &'static str,
}

const LOGIN: FormKind = FormKind {
    name: "login",
    fallback: LOGIN_FALLBACK,
    retry: LOGIN_RETRY,
};

const SIGNUP: FormKind = FormKind {
    name: "signup",
    fallback: SIGNUP_FALLBACK,
    retry: SIGNUP_RETRY,
};

pub struct AuthForms {
    auth: Arc<dyn AuthService>,
    submitting: AtomicBool,
}

impl AuthForms {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            submitting: AtomicBool::new(false),
        }
    }

    pub async fn submit_login(&self, session: &SessionStore, form: &LoginForm) -> FormOutcome {
        if any_blank(&[&form.email, &form.password]) {
            return FormOutcome::Message(REQUIRED_MESSAGE.to_string());
        }
        let credentials = LoginCredentials {
            email: form.email.clone(),
            password: form.password.clone(),
        };
        self.submit(session, LOGIN, self.auth.login(&credentials)).await
    }

    pub async fn submit_signup(&self, session: &SessionStore, form: &SignupForm) -> FormOutcome {
        if any_blank(&[&form.name, &form.email, &form.password]) {
            return FormOutcome::Message(REQUIRED_MESSAGE.to_string());
        }
        let registration = Registration {
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        };
        self.submit(session, SIGNUP, self.auth.register(&registration)).await
    }

    async fn submit<F>(&self, session: &SessionStore, kind: FormKind, request: F) -> FormOutcome
    where
        F: std::future::Future<Output = PortResult<Reply<AuthGrant>>>,
    {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return FormOutcome::Ignored;
        }
        let reply = request.await;
        self.submitting.store(false, Ordering::SeqCst);

        match reply {
            Ok(Reply::Success(grant)) if !grant.token.is_empty() => {
                info!(form = kind.name, "Authentication succeeded.");
                session.login(grant.token, grant.user.unwrap_or_default());
                FormOutcome::Navigate(Route::Home)
            }
            Ok(Reply::Success(_)) => FormOutcome::Message(kind.fallback.to_string()),
            Ok(Reply::Failure(failure)) => FormOutcome::Message(failure.error_or(kind.fallback)),
            Err(e) => {
                warn!(form = kind.name, error = %e, "Authentication request failed.");
                FormOutcome::Message(kind.retry.to_string())
            }
        }
    }
}
