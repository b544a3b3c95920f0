//! Reveal a path in the file manager

use crate::error::Result;
use crate::launcher::{ExplorerContext, LaunchOutcome};
use crate::preferences::PreferenceReader;
use crate::target::ExplorableTarget;

/// Resolve `path` and open it with the system spawner
pub fn reveal_path(
    path: &str,
    preferences: impl PreferenceReader + 'static,
) -> Result<LaunchOutcome> {
    reveal_with(&ExplorerContext::system(preferences), path)
}

/// Resolve `path` and open it through an existing context
pub fn reveal_with(ctx: &ExplorerContext, path: &str) -> Result<LaunchOutcome> {
    let target = ExplorableTarget::from_path(path)?;
    tracing::info!(resource = ?target, "Revealing resource");
    ctx.open_target(&target)
}
