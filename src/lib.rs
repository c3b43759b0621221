pub mod cli;
pub mod config;
pub mod content;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod search;
pub mod tracing;
pub mod ui;

pub use config::SiteConfig;
pub use content::{ContentElement, Page, Section};
pub use controller::SearchController;
pub use debounce::{DebounceHandle, Debouncer, schedule};
pub use error::{Error, Result};
pub use search::{ContentSearch, SearchOutcome, SearchResult, SearchableUnit, Strategy};
