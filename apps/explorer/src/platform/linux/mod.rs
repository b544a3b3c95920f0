//! Linux-specific functionality
//!
//! Linux has no single file manager, so this module probes the desktop
//! environments' usual ones.

pub mod file_managers;
