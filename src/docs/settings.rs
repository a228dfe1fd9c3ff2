//! Reader settings
//!
//! Holds the ordered list of directories searched for doc comment files.
//! Settings can be built programmatically or loaded from a JSON config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use super::error::{DocsResult, JsonContext};

/// Configuration for locating doc comment files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsSettings {
    /// Directories probed in order for `<assembly>.xml`
    pub directories: Vec<PathBuf>,
}

impl Default for DocsSettings {
    /// Search the current directory only
    fn default() -> Self {
        Self {
            directories: vec![PathBuf::from(".")],
        }
    }
}

impl DocsSettings {
    /// Create settings with an explicit directory search list
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }

    /// Load settings from a JSON config file
    ///
    /// Expected shape: `{ "directories": ["path", ...] }`
    pub async fn from_json_file(path: &Path) -> DocsResult<Self> {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content).with_json_context("Failed to parse settings file")
    }
}
