//! Explorer - reveal files and folders in the native file manager
//!
//! This is the library entry point used by the `explorer` binary. Hosts that
//! embed it build an [`ExplorerContext`] with their own preference reader,
//! status log and spawner, and call [`ExplorerContext::open`].

pub mod commands;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod preferences;
pub mod target;
pub mod utils;

pub use error::{ExplorerError, Result};
pub use launcher::{build_command, ExplorerContext, LaunchOutcome, ProcessSpawner, SystemSpawner};
pub use platform::{classify, PlatformKind};
pub use preferences::{MemoryPreferences, PreferenceReader, PreferenceStore, EXPLORER_CMD};
pub use target::ExplorableTarget;
