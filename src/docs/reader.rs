//! Doc comment reader
//!
//! This module provides the main `DocCommentReader` that ties the sidecar
//! locator, the documentation store and the identifier codec together:
//! resolve the XML file once at construction, parse it once, then serve
//! point lookups for member descriptors.

use std::path::{Path, PathBuf};

use tokio::fs;

use super::error::DocsResult;
use super::identifier::member_identifier;
use super::locator;
use super::member::MemberDescriptor;
use super::settings::DocsSettings;
use super::store::DocCommentStore;

/// Reads doc comments for reflected members from a compiler-generated XML file
///
/// Construction performs the one-time file resolution and parse; afterwards
/// the reader is immutable and lookups are read-only. A failed construction
/// is terminal: recover by constructing a new reader against a corrected
/// path or settings.
#[derive(Debug)]
pub struct DocCommentReader {
    full_path: PathBuf,
    store: DocCommentStore,
}

impl DocCommentReader {
    /// Create a reader for the named assembly, searching the directories
    /// configured in `settings` in order
    ///
    /// Fails with `SidecarNotFound` when no directory contains
    /// `<assembly_name>.xml`, or with `SchemaValidation` when the resolved
    /// file does not parse.
    pub async fn from_assembly(assembly_name: &str, settings: &DocsSettings) -> DocsResult<Self> {
        let full_path = locator::resolve(assembly_name, &settings.directories).await?;
        Self::from_path(full_path).await
    }

    /// Create a reader directly from a doc comment file path, bypassing the
    /// directory search
    pub async fn from_path(path: impl Into<PathBuf>) -> DocsResult<Self> {
        let full_path = path.into();
        let content = fs::read_to_string(&full_path).await?;
        let store = DocCommentStore::from_str(&content)?;
        log::info!(
            "Loaded {} doc comment entries from {}",
            store.len(),
            full_path.display()
        );
        Ok(Self { full_path, store })
    }

    /// Get the doc comment fragment for a member descriptor
    ///
    /// Returns `Ok(None)` when the member has no authored comment; a
    /// structurally invalid descriptor fails with `InvalidDescriptor`.
    pub fn comments_for(&self, member: &MemberDescriptor) -> DocsResult<Option<&str>> {
        let identifier = member_identifier(member)?;
        Ok(self.comments_for_identifier(&identifier))
    }

    /// Get the doc comment fragment for an already-rendered identifier
    pub fn comments_for_identifier(&self, identifier: &str) -> Option<&str> {
        self.store
            .lookup(identifier)
            .map(|entry| entry.fragment.as_str())
    }

    /// The resolved path of the backing doc comment file
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// The parsed store backing this reader
    pub fn store(&self) -> &DocCommentStore {
        &self.store
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
