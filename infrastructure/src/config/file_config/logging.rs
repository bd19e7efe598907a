//! Diagnostic log configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// When `dir` is set, tracing output is additionally written to a daily
/// rotating file in that directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub dir: Option<PathBuf>,
    /// File name prefix for rotated files
    pub file_prefix: Option<String>,
}

impl FileLoggingConfig {
    pub fn file_prefix(&self) -> &str {
        self.file_prefix.as_deref().unwrap_or("finruimte.log")
    }
}
