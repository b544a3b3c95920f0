//! Platform abstraction types
//!
//! Shared types used across platform-specific modules.

/// File manager information returned by detection
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileManagerInfo {
    pub name: String,
    pub command: String,
}

impl FileManagerInfo {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}
