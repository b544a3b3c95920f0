//! Command handlers behind the `explorer` CLI
//!
//! Each handler takes already-parsed arguments and returns a result the
//! binary can print; none of them parse argv or touch stdout themselves.

pub mod file_managers;
pub mod reveal;
pub mod settings;
