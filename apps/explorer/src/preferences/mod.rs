//! Preference storage for Explorer
//!
//! Preferences are a flat JSON object persisted in the user's config
//! directory. The launcher only ever reads them, through [`PreferenceReader`].

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};

/// Key holding the file manager command template
pub const EXPLORER_CMD: &str = "EXPLORER_CMD";

/// File name of the preference file inside the config directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Read-only access to string preferences
pub trait PreferenceReader: Send + Sync {
    /// Get a string preference, or None if unset or not a string
    fn get_string(&self, key: &str) -> Option<String>;
}

/// The configured command template, trimmed, or None when unset or blank
pub fn configured_command(reader: &dyn PreferenceReader) -> Option<String> {
    reader
        .get_string(EXPLORER_CMD)
        .map(|template| template.trim().to_string())
        .filter(|template| !template.is_empty())
}

/// Default location of the preference file
///
/// # Returns
/// `<config dir>/explorer/preferences.json` for the current user
pub fn default_path() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "explorer")
        .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
        .ok_or_else(|| ExplorerError::config("Could not determine a config directory"))
}

/// JSON file backed preference store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl PreferenceStore {
    /// Load preferences from a file
    ///
    /// A missing file yields an empty store; a malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => {
                let map: Map<String, Value> = serde_json::from_str(&contents)?;
                map.into_iter().collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(ExplorerError::Io(e)),
        };

        tracing::debug!(path = %path.display(), count = values.len(), "Loaded preferences");
        Ok(Self { path, values })
    }

    /// Load preferences from [`default_path`]
    pub fn load_default() -> Result<Self> {
        Self::load(default_path()?)
    }

    /// Path this store saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a single preference value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a preference value (in memory until [`save`](Self::save))
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Remove a preference, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// All preferences as a HashMap
    pub fn all(&self) -> HashMap<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Write the store back to its file, creating parent directories
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let contents = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, contents)?;

        tracing::debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }
}

impl PreferenceReader for PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }
}

/// In-memory preferences, for overrides and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Preferences holding just a command template
    pub fn with_command(template: impl Into<String>) -> Self {
        Self::new().with(EXPLORER_CMD, template)
    }
}

impl PreferenceReader for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
