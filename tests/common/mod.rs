//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `docs_page`: a documentation page with both search widgets, flat
//!   searchable elements and three named sections
//! - `flat_search` / `sectioned_search`: `ContentSearch` with default limits
//!
//! [`TempStore`] provides a temporary directory for file-backed stores and
//! config files, cleaned up on drop.

use rstest::fixture;
use site_search::config::SearchConfig;
use site_search::{ContentElement, ContentSearch, Page, Section, Strategy};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A documentation page resembling the real site.
#[fixture]
pub fn docs_page() -> Page {
    Page::with_search()
        .element(
            ContentElement::new("Install the toolkit with the package manager.")
                .with_title("Installation")
                .with_href("/docs/install"),
        )
        .element(ContentElement::new(
            "Configuration lives in a single file next to your project.",
        ))
        .element(
            ContentElement::new("An Example project walks through every feature.")
                .with_href("/docs/example"),
        )
        .section(
            Section::new("intro")
                .with_title("Introduction")
                .heading("Welcome")
                .paragraph("This guide covers installation and configuration.")
                .with_bounds(0.0, 600.0),
        )
        .section(
            Section::new("config")
                .with_title("Configuration")
                .heading("Configuration file")
                .paragraph("The configuration file is TOML.")
                .paragraph("Every configuration key is optional.")
                .list_item("search.strategy")
                .list_item("search.debounce_ms")
                .with_bounds(600.0, 900.0),
        )
        .section(
            Section::new("faq")
                .heading("FAQ")
                .list_item("Why is my configuration ignored?")
                .with_bounds(1500.0, 400.0),
        )
}

#[fixture]
pub fn flat_search() -> ContentSearch {
    search_with(Strategy::Flat)
}

#[fixture]
pub fn sectioned_search() -> ContentSearch {
    search_with(Strategy::Sectioned)
}

pub fn search_with(strategy: Strategy) -> ContentSearch {
    ContentSearch::new(SearchConfig {
        strategy,
        ..SearchConfig::default()
    })
}

/// A page with `count` flat elements that all contain `word`.
#[allow(dead_code)] // Used by a subset of integration test crates
pub fn page_with_matches(count: usize, word: &str) -> Page {
    (0..count).fold(Page::with_search(), |page, i| {
        page.element(
            ContentElement::new(format!("Entry {} mentions {}", i, word))
                .with_href(format!("/entries/{}", i)),
        )
    })
}

/// A temporary directory for store and config files.
#[allow(dead_code)] // Used by a subset of integration test crates
pub struct TempStore {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Used by a subset of integration test crates
impl TempStore {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of a file inside the directory (not created).
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write a file inside the directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", name, e));
        path
    }
}
