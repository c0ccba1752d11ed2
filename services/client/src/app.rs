//! services/client/src/app.rs
//!
//! Wires the core components to concrete adapters and maps each CLI command
//! onto a view.

use notes_beautifier_core::{
    auth_forms::{AuthForms, FormOutcome, LoginForm, SignupForm},
    notes_list::ListFetcher,
    ports::{AuthService, NoteProcessingService, NoteStorageService, TokenStore},
    routes::{guard, nav_links, Route},
    session::SessionStore,
    workflow::{RunOutcome, WorkflowCoordinator},
};
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::cli::Commands;
use crate::error::ClientError;
use crate::views::{render_guard, render_home, render_nav, render_saved};

//=========================================================================================
// App (Shared Across One Invocation)
//=========================================================================================

/// Every component of the client, built once per process.
pub struct App {
    pub session: SessionStore,
    pub workflow: WorkflowCoordinator,
    pub saved: ListFetcher,
    pub forms: AuthForms,
}

impl App {
    /// Builds the components over a backend implementing every remote port.
    pub fn new<B>(backend: Arc<B>, tokens: Arc<dyn TokenStore>) -> Self
    where
        B: AuthService + NoteProcessingService + NoteStorageService + 'static,
    {
        let session = SessionStore::new(backend.clone(), tokens);
        let workflow = WorkflowCoordinator::new(backend.clone(), backend.clone(), session.handle());
        let saved = ListFetcher::new(backend.clone());
        let forms = AuthForms::new(backend);
        Self {
            session,
            workflow,
            saved,
            forms,
        }
    }

    /// Restores the session, runs one command and returns what to print.
    pub async fn run(&self, command: Commands) -> Result<String, ClientError> {
        self.session.initialize().await;
        let session = self.session.handle().ready().await;

        match command {
            Commands::Login { email, password } => {
                let form = LoginForm {
                    email: email.unwrap_or_default(),
                    password: password.unwrap_or_default(),
                };
                let outcome = self.forms.submit_login(&self.session, &form).await;
                Ok(self.describe(outcome))
            }
            Commands::Signup {
                name,
                email,
                password,
            } => {
                let form = SignupForm {
                    name: name.unwrap_or_default(),
                    email: email.unwrap_or_default(),
                    password: password.unwrap_or_default(),
                };
                let outcome = self.forms.submit_signup(&self.session, &form).await;
                Ok(self.describe(outcome))
            }
            Commands::Logout => {
                self.session.logout();
                Ok(format!("Logged out. Redirecting to {}.", Route::Login.path()))
            }
            Commands::Whoami => Ok(match session.user() {
                Some(user) => format!("{} <{}>", user.name, user.email),
                None => "Not logged in.".to_string(),
            }),
            Commands::Nav => Ok(render_nav(&nav_links(&session), &session)),
            Commands::Process { file, save } => {
                if let Some(blocked) = render_guard(guard(Route::Home, &session)) {
                    return Ok(blocked);
                }
                let raw_text = read_notes(file.as_deref()).await?;
                let outcome = self.workflow.run_beautify_and_summarize(&raw_text).await;
                if outcome == RunOutcome::Skipped {
                    return Ok("Nothing to process: the notes are empty.".to_string());
                }
                if save && outcome == RunOutcome::Completed {
                    let saved = self.workflow.save_current().await;
                    info!(?saved, "Save finished.");
                }
                Ok(render_home(&self.workflow.snapshot()))
            }
            Commands::Saved => {
                if let Some(blocked) = render_guard(guard(Route::Saved, &session)) {
                    return Ok(blocked);
                }
                let view = self.saved.activate().await;
                Ok(render_saved(&view))
            }
        }
    }

    fn describe(&self, outcome: FormOutcome) -> String {
        match outcome {
            FormOutcome::Navigate(route) => {
                let session = self.session.current();
                format!(
                    "Welcome! Continuing to {}.\n{}",
                    route.path(),
                    render_nav(&nav_links(&session), &session)
                )
            }
            FormOutcome::Message(message) => message,
            FormOutcome::Ignored => String::new(),
        }
    }
}

/// Reads the raw notes from a file, or from stdin for `-` or no path.
async fn read_notes(file: Option<&Path>) -> Result<String, ClientError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(tokio::fs::read_to_string(path).await?),
        _ => {
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            Ok(raw)
        }
    }
}
