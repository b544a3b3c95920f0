//! File manager launcher
//!
//! [`ExplorerContext`] carries everything a launch needs: where the command
//! template comes from, where status goes, and how processes are started.
//! Each call re-reads the template, formats the command line with
//! [`command::build_command`] and hands it to the spawner without waiting.

pub mod command;
pub mod spawn;

use crate::error::{ExplorerError, Result};
use crate::logging::{StatusLog, TracingLog};
use crate::platform::PlatformKind;
use crate::preferences::{configured_command, PreferenceReader};
use crate::target::ExplorableTarget;

pub use command::build_command;
pub use spawn::{ProcessSpawner, SystemSpawner};

/// What a launch call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// No folder was given, nothing was started
    Skipped,
    /// The file manager was started with this command line
    Launched { command: String },
}

/// Launch context injected into every open call
pub struct ExplorerContext {
    preferences: Box<dyn PreferenceReader>,
    log: Box<dyn StatusLog>,
    spawner: Box<dyn ProcessSpawner>,
}

impl ExplorerContext {
    pub fn new(
        preferences: impl PreferenceReader + 'static,
        log: impl StatusLog + 'static,
        spawner: impl ProcessSpawner + 'static,
    ) -> Self {
        Self {
            preferences: Box::new(preferences),
            log: Box::new(log),
            spawner: Box::new(spawner),
        }
    }

    /// Context that logs through tracing and starts real processes
    pub fn system(preferences: impl PreferenceReader + 'static) -> Self {
        Self::new(preferences, TracingLog, SystemSpawner)
    }

    /// The trimmed command template, or the platform default when unset
    pub fn command_template(&self) -> String {
        configured_command(self.preferences.as_ref())
            .unwrap_or_else(|| PlatformKind::current().default_command())
    }

    /// Open `folder` in the file manager, selecting `file` where supported
    ///
    /// An absent or empty `folder` is a no-op. Launch failures are returned
    /// as [`ExplorerError::Launch`].
    #[tracing::instrument(skip(self))]
    pub fn open(&self, folder: Option<&str>, file: Option<&str>) -> Result<LaunchOutcome> {
        let Some(folder) = folder.filter(|folder| !folder.is_empty()) else {
            tracing::debug!("No folder to open");
            return Ok(LaunchOutcome::Skipped);
        };

        let template = self.command_template();
        let command = build_command(&template, folder, file);

        tracing::debug!(%command, "Spawning file manager");
        self.spawner
            .spawn(&command)
            .map_err(|e| ExplorerError::launch(&command, e))?;

        self.log.v(&format!("Opened file manager: {}", command));
        Ok(LaunchOutcome::Launched { command })
    }

    /// Open a resolved target
    pub fn open_target(&self, target: &ExplorableTarget) -> Result<LaunchOutcome> {
        let (folder, file) = target.slots();
        self.open(folder.as_deref(), file.as_deref())
    }

    /// Like [`open`](Self::open), but failures only reach the status log
    pub fn open_quietly(&self, folder: Option<&str>, file: Option<&str>) {
        if let Err(e) = self.open(folder, file) {
            self.log.e("Failed to open file manager", Some(&e));
        }
    }
}
