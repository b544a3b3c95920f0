//! Command template settings

use serde_json::Value;

use crate::error::Result;
use crate::platform::PlatformKind;
use crate::preferences::{configured_command, PreferenceStore, EXPLORER_CMD};

/// The effective command template and whether it was configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSetting {
    pub template: String,
    pub is_default: bool,
}

/// Get the configured command template, or the platform default
pub fn get_command(store: &PreferenceStore) -> CommandSetting {
    match configured_command(store) {
        Some(template) => CommandSetting {
            template,
            is_default: false,
        },
        None => CommandSetting {
            template: PlatformKind::current().default_command(),
            is_default: true,
        },
    }
}

/// Store a new command template
pub fn set_command(store: &mut PreferenceStore, template: &str) -> Result<()> {
    store.set(EXPLORER_CMD, Value::String(template.trim().to_string()));
    store.save()?;
    tracing::info!(template = template.trim(), "Updated command template");
    Ok(())
}

/// Forget the configured template so the platform default applies again
pub fn reset_command(store: &mut PreferenceStore) -> Result<()> {
    if store.remove(EXPLORER_CMD).is_some() {
        store.save()?;
        tracing::info!("Reset command template");
    }
    Ok(())
}
