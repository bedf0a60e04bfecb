pub mod obfuscate;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use threadlens_core::{AnalysisConfig, CoreError};
use tracing::debug;

/// Settings keys. The credential is held in its obfuscated at-rest form;
/// everything else is stored as-is.
pub mod keys {
    pub const ENDPOINT_URL: &str = "endpoint_url";
    pub const CREDENTIAL: &str = "credential";
    pub const MODEL_ID: &str = "model_id";
    pub const SYSTEM_PROMPT: &str = "system_prompt";
}

pub const DEFAULT_MODEL_ID: &str = "gpt-3.5-turbo";
pub const DEFAULT_SYSTEM_PROMPT: &str = "Summarize the discussion.";

/// Narrow interface over the persisted key-value settings. Core logic only
/// ever reads through [`load_analysis_config`]; the write path belongs to
/// the configuration surface.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Materialize the analysis configuration from a store: the credential is
/// revealed from its at-rest form, model and prompt fall back to defaults.
/// Read once per run; nothing mutates the store afterwards.
pub fn load_analysis_config(store: &dyn SettingsStore) -> AnalysisConfig {
    AnalysisConfig {
        endpoint_url: store.get(keys::ENDPOINT_URL).unwrap_or_default(),
        credential: store
            .get(keys::CREDENTIAL)
            .map(|v| obfuscate::reveal(&v))
            .unwrap_or_default(),
        model_id: store
            .get(keys::MODEL_ID)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        system_prompt: store
            .get(keys::SYSTEM_PROMPT)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
    }
}

/// Store a plaintext credential in its obfuscated at-rest form.
pub fn store_credential(store: &mut dyn SettingsStore, plaintext: &str) {
    store.set(keys::CREDENTIAL, &obfuscate::obfuscate(plaintext));
}

/// In-memory store, used by tests and as the default empty state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Settings persisted as a flat JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store, not an
    /// error; a present-but-unreadable file is.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Write the current values back to disk.
    pub fn persist(&self) -> Result<(), CoreError> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        debug!("Persisted settings to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
