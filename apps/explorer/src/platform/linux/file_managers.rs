//! Linux-specific file manager detection
//!
//! This module handles detection of file managers installed on Linux via PATH.

use crate::platform::traits::FileManagerInfo;
use which::which;

/// Known Linux file managers
/// Format: (command, display_name)
/// Listed in order of preference; `xdg-open` defers to the desktop default.
pub const LINUX_FILE_MANAGERS: &[(&str, &str)] = &[
    // GNOME
    ("nautilus", "Files (Nautilus)"),
    // KDE
    ("dolphin", "Dolphin"),
    // Cinnamon
    ("nemo", "Nemo"),
    // XFCE
    ("thunar", "Thunar"),
    // MATE
    ("caja", "Caja"),
    // LXDE / LXQt
    ("pcmanfm", "PCManFM"),
    ("pcmanfm-qt", "PCManFM-Qt"),
    ("xdg-open", "Desktop default (xdg-open)"),
];

/// Detect file managers available in PATH
pub fn detect_linux_file_managers() -> Vec<FileManagerInfo> {
    LINUX_FILE_MANAGERS
        .iter()
        .filter(|(cmd, _)| which(cmd).is_ok())
        .map(|(cmd, name)| FileManagerInfo::new(*name, *cmd))
        .collect()
}
