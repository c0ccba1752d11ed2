//! services/client/src/adapters/token_file.rs
//!
//! Implements the `TokenStore` port on top of a small JSON file holding the
//! single `token` slot.

use notes_beautifier_core::ports::{PortError, PortResult, TokenStore};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct TokenSlot {
    token: String,
}

pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for TokenFile {
    fn load(&self) -> PortResult<Option<String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PortError::Storage(e.to_string())),
        };
        let slot: TokenSlot = serde_json::from_str(&contents)
            .map_err(|e| PortError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(slot.token))
    }

    fn store(&self, token: &str) -> PortResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PortError::Storage(e.to_string()))?;
        }
        let contents = serde_json::to_string(&TokenSlot {
            token: token.to_string(),
        })
        .map_err(|e| PortError::Unexpected(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| PortError::Storage(e.to_string()))
    }

    fn clear(&self) -> PortResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortError::Storage(e.to_string())),
        }
    }
}
