pub mod auth_forms;
pub mod domain;
pub mod notes_list;
pub mod ports;
pub mod routes;
pub mod session;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_forms::{AuthForms, FormOutcome, LoginForm, SignupForm};
pub use domain::{
    AuthGrant, DraftNote, Note, Reply, ReplyFailure, Session, Summary, User, WorkflowState,
};
pub use notes_list::{ListFetcher, NotesView};
pub use ports::{
    AuthService, LoginCredentials, NoteProcessingService, NoteStorageService, PortError,
    PortResult, Registration, TokenStore,
};
pub use routes::{guard, nav_links, GuardDecision, NavLink, Route};
pub use session::{SessionHandle, SessionStore};
pub use workflow::{FailureReason, RunOutcome, SaveOutcome, Stage, StageFailure, WorkflowCoordinator};
