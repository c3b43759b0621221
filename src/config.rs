//! Site configuration loaded from TOML.
//!
//! Every field is optional; an empty file yields the same behavior as the
//! shipped site scripts (300 ms debounce, 2-character minimum query, five
//! displayed results, 120-character excerpts).

use crate::error::{Error, Result};
use crate::search::Strategy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub search: SearchConfig,
    pub scroll: ScrollConfig,
    pub theme: ThemeConfig,
}

/// Search pipeline settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Queries shorter than this (after trimming) never trigger a scan.
    pub min_query_len: usize,
    /// Quiet period before a pending scan fires.
    pub debounce_ms: u64,
    /// Maximum number of entries rendered.
    pub display_limit: usize,
    /// Cap applied to the match list before display truncation.
    /// Unset means the strategy's own default.
    pub match_limit: Option<usize>,
    pub excerpt_chars: usize,
    pub title_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            min_query_len: 2,
            debounce_ms: 300,
            display_limit: 5,
            match_limit: None,
            excerpt_chars: 120,
            title_chars: 60,
        }
    }
}

impl SearchConfig {
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Effective match cap: the explicit setting, else the strategy default.
    pub fn effective_match_limit(&self) -> Option<usize> {
        self.match_limit.or_else(|| self.strategy.default_match_limit())
    }
}

/// Scroll observer settings, in CSS pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    pub back_to_top_threshold: f64,
    /// Sections count as active this many pixels before their top edge.
    pub section_offset: f64,
    /// Space left above an anchor target (fixed header height).
    pub anchor_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: 300.0,
            section_offset: 100.0,
            anchor_offset: 80.0,
        }
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// File backing the key-value store. Defaults to the user's data dir.
    pub storage_path: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            storage_path: None,
        }
    }
}

impl ThemeConfig {
    /// Resolve the storage file, falling back to `<data dir>/site-search/storage.json`.
    pub fn resolved_storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("site-search")
                .join("storage.json")
        })
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
