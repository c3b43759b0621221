//! The query pipeline: normalize, scan, deduplicate, cap, render.

use super::render::{ResultsSink, render_results};
use super::strategy::Strategy;
use super::unit::{SearchResult, SearchableUnit};
use crate::config::SearchConfig;
use crate::content::{Page, collapse_whitespace};
use ahash::AHashSet;

/// Normalize a raw query: trim, collapse interior whitespace runs to single
/// spaces (matching how unit text is collapsed) and lowercase.
pub fn normalize_query(raw: &str) -> String {
    collapse_whitespace(raw).to_lowercase()
}

/// What a single search invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The normalized query was shorter than the minimum; no scan ran and
    /// the results surface was hidden.
    TooShort,
    /// The scan ran. Holds the displayed results (possibly empty).
    Displayed(Vec<SearchResult>),
}

impl SearchOutcome {
    /// Displayed results, or an empty slice when no scan ran.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            Self::TooShort => &[],
            Self::Displayed(results) => results,
        }
    }

    pub const fn scanned(&self) -> bool {
        matches!(self, Self::Displayed(_))
    }
}

/// Per-query search over injected content.
///
/// Holds only settings; every call receives the units and the sink, so it
/// can be exercised without a live page.
#[derive(Debug, Clone, Default)]
pub struct ContentSearch {
    config: SearchConfig,
}

impl ContentSearch {
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub const fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Collect the current units from a page snapshot with the configured strategy.
    pub fn units_for(&self, page: &Page) -> Vec<SearchableUnit> {
        self.config
            .strategy
            .collect_units(page, self.config.title_chars)
    }

    /// Find matching results in `units`, deduplicated and capped to the
    /// match limit, but not yet truncated for display.
    ///
    /// Returns `None` when the normalized query is too short to search.
    pub fn find(&self, raw_query: &str, units: &[SearchableUnit]) -> Option<Vec<SearchResult>> {
        let query = normalize_query(raw_query);
        if query.chars().count() < self.config.min_query_len {
            return None;
        }

        let limit = self
            .config
            .effective_match_limit()
            .unwrap_or(usize::MAX);
        let mut seen: AHashSet<(&str, &str)> = AHashSet::new();

        let results: Vec<SearchResult> = units
            .iter()
            .filter(|unit| unit.matches(&query))
            .filter(|unit| seen.insert((unit.target.as_str(), unit.title.as_str())))
            .take(limit)
            .map(|unit| unit.to_result(self.config.excerpt_chars))
            .collect();

        tracing::debug!(
            "Query '{}' matched {} of {} units ({} strategy)",
            query,
            results.len(),
            units.len(),
            self.config.strategy
        );

        Some(results)
    }

    /// Run the full pipeline and render into `sink`.
    ///
    /// Too-short queries hide the sink without creating entries. Otherwise
    /// the sink is repopulated with up to `display_limit` results (or the
    /// no-results placeholder) and shown.
    pub fn run<S: ResultsSink + ?Sized>(
        &self,
        raw_query: &str,
        units: &[SearchableUnit],
        sink: &mut S,
    ) -> SearchOutcome {
        let Some(mut results) = self.find(raw_query, units) else {
            sink.hide();
            return SearchOutcome::TooShort;
        };

        results.truncate(self.config.display_limit);
        render_results(&results, sink);
        SearchOutcome::Displayed(results)
    }

    /// Convenience: collect units from `page` and run.
    pub fn run_on_page<S: ResultsSink + ?Sized>(
        &self,
        raw_query: &str,
        page: &Page,
        sink: &mut S,
    ) -> SearchOutcome {
        let units = self.units_for(page);
        self.run(raw_query, &units, sink)
    }
}
