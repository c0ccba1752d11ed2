//! crates/notes_beautifier_core/src/workflow.rs
//!
//! The Home view logic: a short-circuiting pipeline of typed stages
//! (Beautify -> Summarize, then Save on demand) over the processing and storage
//! ports. Each stage yields `Result<T, StageFailure>` and the stages compose
//! with `?`, so the first failing stage ends the cycle and names itself.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

use crate::domain::{DraftNote, Reply, Summary, WorkflowState};
use crate::ports::{NoteProcessingService, NoteStorageService, PortResult};
use crate::session::SessionHandle;

pub const BEAUTIFY_FALLBACK: &str = "Beautification failed.";
pub const SUMMARIZE_FALLBACK: &str = "Summarization failed.";
pub const SAVE_FALLBACK: &str = "Save failed.";
pub const SAVED_MESSAGE: &str = "Notes saved successfully!";
pub const CONNECTION_MESSAGE: &str = "Error connecting to backend.";

//=========================================================================================
// Stage Results
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Beautify,
    Summarize,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The backend answered and refused; carries the user-facing reason.
    Rejected(String),
    /// The request never produced a readable answer.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{stage:?} stage failed: {reason:?}")]
pub struct StageFailure {
    pub stage: Stage,
    pub reason: FailureReason,
}

impl StageFailure {
    /// The text shown in the view's message slot. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match &self.reason {
            FailureReason::Rejected(reason) => reason.clone(),
            FailureReason::Transport => CONNECTION_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Empty input or a request already in flight; nothing was sent.
    Skipped,
    Completed,
    Failed(StageFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Skipped,
    Saved,
    Failed(StageFailure),
}

/// Collapses one port call into a stage result.
fn settle<T>(stage: Stage, fallback: &str, reply: PortResult<Reply<T>>) -> Result<T, StageFailure> {
    match reply {
        Ok(Reply::Success(value)) => Ok(value),
        Ok(Reply::Failure(failure)) => {
            let reason = failure.reason_or(fallback);
            warn!(?stage, %reason, "Backend refused the request.");
            Err(StageFailure {
                stage,
                reason: FailureReason::Rejected(reason),
            })
        }
        Err(e) => {
            error!(?stage, error = %e, "Request to the backend failed.");
            Err(StageFailure {
                stage,
                reason: FailureReason::Transport,
            })
        }
    }
}

//=========================================================================================
// WorkflowCoordinator
//=========================================================================================

pub struct WorkflowCoordinator {
    processing: Arc<dyn NoteProcessingService>,
    storage: Arc<dyn NoteStorageService>,
    session: SessionHandle,
    state: Mutex<WorkflowState>,
}

impl WorkflowCoordinator {
    pub fn new(
        processing: Arc<dyn NoteProcessingService>,
        storage: Arc<dyn NoteStorageService>,
        session: SessionHandle,
    ) -> Self {
        Self {
            processing,
            storage,
            session,
            state: Mutex::new(WorkflowState::default()),
        }
    }

    pub fn snapshot(&self) -> WorkflowState {
        self.state().clone()
    }

    // Never held across an `.await`.
    fn state(&self) -> MutexGuard<'_, WorkflowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bearer(&self) -> String {
        self.session.token().unwrap_or_default()
    }

    /// Beautifies `raw_text`, then summarizes the result.
    ///
    /// Prior results are cleared up front. A refused or failed beautify ends
    /// the cycle before summarize is attempted; a failed summarize keeps the
    /// beautified text on display.
    pub async fn run_beautify_and_summarize(&self, raw_text: &str) -> RunOutcome {
        {
            let mut state = self.state();
            if raw_text.trim().is_empty() || state.is_loading {
                return RunOutcome::Skipped;
            }
            *state = WorkflowState {
                raw_text: raw_text.to_string(),
                is_loading: true,
                ..WorkflowState::default()
            };
        }

        let token = self.bearer();
        let result = self.beautify_then_summarize(&token, raw_text).await;

        let mut state = self.state();
        state.is_loading = false;
        match result {
            Ok(()) => {
                info!(takeaways = state.takeaways.len(), "Notes beautified and summarized.");
                RunOutcome::Completed
            }
            Err(failure) => {
                state.status_message = failure.user_message();
                RunOutcome::Failed(failure)
            }
        }
    }

    async fn beautify_then_summarize(&self, token: &str, raw_text: &str) -> Result<(), StageFailure> {
        let beautified = self.beautify(token, raw_text).await?;
        self.state().beautified_text = beautified.clone();

        let summary = self.summarize(token, &beautified).await?;
        let mut state = self.state();
        state.summary = summary.summary_text;
        state.takeaways = summary.takeaways;
        Ok(())
    }

    async fn beautify(&self, token: &str, content: &str) -> Result<String, StageFailure> {
        let reply = self.processing.beautify(token, content).await;
        let result = settle(Stage::Beautify, BEAUTIFY_FALLBACK, reply)?;
        if result.is_empty() {
            return Err(StageFailure {
                stage: Stage::Beautify,
                reason: FailureReason::Rejected(BEAUTIFY_FALLBACK.to_string()),
            });
        }
        Ok(result)
    }

    async fn summarize(&self, token: &str, text: &str) -> Result<Summary, StageFailure> {
        let reply = self.processing.summarize(token, text).await;
        settle(Stage::Summarize, SUMMARIZE_FALLBACK, reply)
    }

    /// Persists `draft` under the session's token. Displayed results are kept
    /// whatever the outcome; only the message changes.
    pub async fn save(&self, draft: &DraftNote) -> SaveOutcome {
        {
            let mut state = self.state();
            if !draft.is_saveable() || state.is_loading {
                return SaveOutcome::Skipped;
            }
            state.is_loading = true;
            state.status_message.clear();
        }

        let token = self.bearer();
        let reply = self.storage.save(&token, draft).await;
        let result = settle(Stage::Save, SAVE_FALLBACK, reply);

        let mut state = self.state();
        state.is_loading = false;
        match result {
            Ok(()) => {
                info!("Note saved.");
                state.status_message = SAVED_MESSAGE.to_string();
                SaveOutcome::Saved
            }
            Err(failure) => {
                state.status_message = failure.user_message();
                SaveOutcome::Failed(failure)
            }
        }
    }

    /// Saves whatever the last cycle produced.
    pub async fn save_current(&self) -> SaveOutcome {
        let draft = self.snapshot().draft();
        self.save(&draft).await
    }
}
