//! crates/notes_beautifier_core/src/notes_list.rs
//!
//! The Saved Notes view logic: one fetch per activation, rendered as-is.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

use crate::domain::{Note, Reply};
use crate::ports::NoteStorageService;
use crate::workflow::CONNECTION_MESSAGE;

pub const LIST_FALLBACK: &str = "Failed to fetch notes.";
pub const EMPTY_MESSAGE: &str = "No notes saved yet.";

#[derive(Debug, Clone, PartialEq)]
pub enum NotesView {
    Loading,
    Failed(String),
    Empty,
    /// In the order the backend returned them.
    Loaded(Vec<Note>),
}

pub struct ListFetcher {
    storage: Arc<dyn NoteStorageService>,
    view: Mutex<NotesView>,
}

impl ListFetcher {
    pub fn new(storage: Arc<dyn NoteStorageService>) -> Self {
        Self {
            storage,
            view: Mutex::new(NotesView::Loading),
        }
    }

    pub fn view(&self) -> NotesView {
        self.view.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, view: NotesView) {
        *self.view.lock().unwrap_or_else(PoisonError::into_inner) = view;
    }

    /// Fetches every saved note. The listing endpoint takes no bearer token.
    pub async fn activate(&self) -> NotesView {
        self.set(NotesView::Loading);

        let view = match self.storage.list().await {
            Ok(Reply::Success(notes)) if notes.is_empty() => NotesView::Empty,
            Ok(Reply::Success(notes)) => {
                info!(count = notes.len(), "Fetched saved notes.");
                NotesView::Loaded(notes)
            }
            Ok(Reply::Failure(failure)) => {
                let reason = failure.reason_or(LIST_FALLBACK);
                warn!(%reason, "Backend refused to list notes.");
                NotesView::Failed(reason)
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch saved notes.");
                NotesView::Failed(CONNECTION_MESSAGE.to_string())
            }
        };

        self.set(view.clone());
        view
    }
}
