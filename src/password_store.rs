//! Lookup of secrets kept in the monitoring host's password store.
//!
//! The store is a plain text file with one `id:secret` entry per line.
//! The agent receives a reference of the form `id:path` on its command line.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AgentError, Result};

/// Split an `id:path` reference and look the id up in the store at `path`.
pub fn resolve_reference(reference: &str) -> Result<String> {
    let (id, path) = reference
        .split_once(':')
        .ok_or_else(|| AgentError::CredentialResolution {
            id: reference.to_string(),
            path: PathBuf::new(),
            reason: "expected a reference of the form 'id:path'".to_string(),
        })?;

    lookup(Path::new(path), id)
}

pub fn lookup(path: &Path, id: &str) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| AgentError::CredentialResolution {
        id: id.to_string(),
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    content
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(entry_id, _)| *entry_id == id)
        .map(|(_, secret)| secret.to_string())
        .ok_or_else(|| AgentError::CredentialResolution {
            id: id.to_string(),
            path: path.to_path_buf(),
            reason: "no such entry".to_string(),
        })
}
