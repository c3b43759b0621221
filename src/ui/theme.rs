//! Dark/light theme switch persisted to a key-value store.
//!
//! The store stands in for browser local storage: one string value under one
//! key. Store failures never block the toggle itself; they are logged and the
//! in-memory theme still flips.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};

/// The two supported color schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle button: the scheme a click would switch to.
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "sun",
            Self::Light => "moon",
        }
    }

    /// Whether the body carries the dark-theme class.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk.
///
/// The file is read on every `get` and rewritten on every `set`, so separate
/// instances pointing at the same path observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| Error::json(&self.path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&values).map_err(|e| Error::json(&self.path, e))?;
        std::fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }
}

/// The theme toggle, bound to a store.
#[derive(Debug)]
pub struct ThemeSwitch<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeSwitch<S> {
    /// Read the saved preference once.
    ///
    /// A saved `dark` wins; with nothing saved the OS preference decides;
    /// any other saved value means light.
    pub fn load(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let saved = store.get(&key).unwrap_or_else(|e| {
            tracing::warn!("Failed to read theme preference: {}", e);
            None
        });

        let current = match saved.as_deref() {
            Some("dark") => Theme::Dark,
            None if prefers_dark => Theme::Dark,
            None | Some("light") => Theme::Light,
            Some(other) => {
                tracing::warn!("Ignoring unrecognized theme value '{}'", other);
                Theme::Light
            }
        };

        tracing::debug!("Initial theme: {}", current);
        Self {
            store,
            key,
            current,
        }
    }

    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        self.current
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
