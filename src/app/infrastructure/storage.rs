use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::app::domain::settings::StyleSettings;
use crate::app::infrastructure::error::Result;

/// Injected load/save pair supplied by the host.
///
/// `load` hands back the raw persisted JSON (or None when nothing was ever
/// saved); the merge over defaults happens in [`load_settings`], not here.
pub trait SettingsStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, settings: &StyleSettings) -> Result<()>;
}

/// Merge persisted data over the defaults, field by field.
///
/// Fields present in the stored JSON win; absent fields keep their defaults
/// (the serde `default` attributes on [`StyleSettings`] are the merge law).
/// Unparseable data falls back to a full default record with a warning, the
/// same recovery the host applies to its own corrupt config files.
pub fn load_settings(store: &dyn SettingsStore) -> Result<StyleSettings> {
    match store.load()? {
        Some(json) => match serde_json::from_str(&json) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                log::warn!("failed to parse persisted settings: {}. Using defaults.", e);
                Ok(StyleSettings::default())
            }
        },
        None => Ok(StyleSettings::default()),
    }
}

/// File-backed store under the platform config directory.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at the default location: `config_dir/stylepad/settings.json`.
    pub fn new() -> Self {
        Self { path: Self::default_path() }
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("stylepad");
        path.push("settings.json");
        path
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, settings: &StyleSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-populated, as if a previous session had saved `json`.
    pub fn with_data(json: &str) -> Self {
        Self {
            data: RefCell::new(Some(json.to_string())),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, settings: &StyleSettings) -> Result<()> {
        *self.data.borrow_mut() = Some(serde_json::to_string(settings)?);
        Ok(())
    }
}
