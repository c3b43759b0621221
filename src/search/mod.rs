//! Client-side content search.
//!
//! This module scans page content for case-insensitive substring matches,
//! deduplicates and caps the results, and renders them into a results sink.
//! Nothing is indexed ahead of time: units are collected fresh per query.

// Module declarations
pub(crate) mod query;
pub(crate) mod render;
pub(crate) mod strategy;
pub(crate) mod unit;

// Public re-exports (used via lib.rs)
pub use query::{ContentSearch, SearchOutcome, normalize_query};
pub use render::{NO_RESULTS_MESSAGE, ResultsSink, escape_html, render_entry_html, render_results};
pub use strategy::Strategy;
pub use unit::{ELLIPSIS, SearchResult, SearchableUnit, truncate_chars};
