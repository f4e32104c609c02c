//! Persisted key-value preference state.
//!
//! The plugin remembers a small amount of state between invocations — today
//! just the prepend text the user last entered. Hosts that persist state
//! themselves can back the `StateStore` trait with their own storage; the
//! file-backed implementation here covers hosts that do not, and the
//! in-memory implementation keeps tests fast and deterministic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key under which the user's prepend text is persisted.
pub const PREPEND_TEXT_KEY: &str = "prepend_text";

/// Abstraction over persisted key-value state.
pub trait StateStore {
    /// Look up a stored value. `None` means the key has never been set.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one for the key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::IoError(msg) => write!(f, "IO error: {msg}"),
            StateError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            StateError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
        }
    }
}

impl std::error::Error for StateError {}

/// In-memory implementation for tests and self-persisting hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    values: HashMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed implementation: a single JSON object, written through on
/// every `set` so state survives the host process.
#[derive(Debug)]
pub struct JsonStateStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonStateStore {
    /// Open the store at `path`, loading any existing state. A missing
    /// file is an empty store, not an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StateError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| StateError::IoError(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&contents)
                .map_err(|e| StateError::ParseError(format!("{}: {}", path.display(), e)))?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    fn write_through(&self) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StateError::IoError(format!("{}: {}", parent.display(), e)))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StateError::SerializeError(e.to_string()))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| StateError::IoError(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

impl StateStore for JsonStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value.to_string());
        self.write_through()
    }
}

/// Default location for the state file: `<config dir>/wraiter/state.json`
/// (typically `~/.config/wraiter/state.json`). `None` when no config
/// directory can be determined.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wraiter").join("state.json"))
}
