//! Platform detection and platform-specific functionality
//!
//! This module classifies the host operating system and knows which native
//! file manager each platform uses:
//!
//! - **Windows**: Explorer, with `/select,` support for pre-selecting a file
//! - **macOS**: Finder via `open`
//! - **Linux**: whichever desktop file manager is installed (see [`linux`])

pub mod traits;

#[cfg(target_os = "linux")]
pub mod linux;

use serde::{Deserialize, Serialize};
use std::fmt;

use traits::FileManagerInfo;

/// Fallback template when nothing better is known
pub const FALLBACK_COMMAND: &str = "xdg-open";

/// Operating system family, as far as file manager invocation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Windows,
    Linux,
    MacOs,
    Unknown,
}

/// Classify a raw OS name such as `"Windows 10"` or `"Mac OS X"`
///
/// Matching is case-insensitive and checked in a fixed order: `linux`, then
/// `windows`, then `mac` together with `os`.
pub fn classify(os_name_raw: &str) -> PlatformKind {
    let os_name = os_name_raw.to_lowercase();
    if os_name.contains("linux") {
        PlatformKind::Linux
    } else if os_name.contains("windows") {
        PlatformKind::Windows
    } else if os_name.contains("mac") && os_name.contains("os") {
        PlatformKind::MacOs
    } else {
        PlatformKind::Unknown
    }
}

impl PlatformKind {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        classify(std::env::consts::OS)
    }

    /// Command template used when the user has not configured one
    pub fn default_command(self) -> String {
        match self {
            PlatformKind::Windows => "explorer".to_string(),
            PlatformKind::MacOs => "open".to_string(),
            PlatformKind::Linux => preferred_linux_command(),
            PlatformKind::Unknown => FALLBACK_COMMAND.to_string(),
        }
    }
}

#[cfg(target_os = "linux")]
fn preferred_linux_command() -> String {
    linux::file_managers::detect_linux_file_managers()
        .into_iter()
        .next()
        .map(|fm| fm.command)
        .unwrap_or_else(|| FALLBACK_COMMAND.to_string())
}

#[cfg(not(target_os = "linux"))]
fn preferred_linux_command() -> String {
    FALLBACK_COMMAND.to_string()
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformKind::Windows => "Windows",
            PlatformKind::Linux => "Linux",
            PlatformKind::MacOs => "macOS",
            PlatformKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Detect the file managers available on this host, most preferred first
pub fn detect_file_managers() -> Vec<FileManagerInfo> {
    #[cfg(target_os = "linux")]
    {
        linux::file_managers::detect_linux_file_managers()
    }

    #[cfg(target_os = "windows")]
    {
        vec![FileManagerInfo::new("File Explorer", "explorer")]
    }

    #[cfg(target_os = "macos")]
    {
        vec![FileManagerInfo::new("Finder", "open")]
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        which::which(FALLBACK_COMMAND)
            .map(|_| vec![FileManagerInfo::new("Desktop default (xdg-open)", FALLBACK_COMMAND)])
            .unwrap_or_default()
    }
}
