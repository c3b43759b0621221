//! Search input wiring: keystrokes, debounced scans, dismissal.

use crate::config::SearchConfig;
use crate::content::Page;
use crate::debounce::{DebounceHandle, Debouncer};
use crate::search::{ContentSearch, SearchOutcome};
use crate::ui::{NavigationShell, ResultsSurface, SearchClick, SurfaceEntry, Transition};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct SearchState {
    search: ContentSearch,
    page: Page,
    surface: ResultsSurface,
    /// Current text of the search input.
    query: String,
    scans: usize,
    last_outcome: Option<SearchOutcome>,
}

impl SearchState {
    fn scan(&mut self) {
        let outcome = self
            .search
            .run_on_page(&self.query, &self.page, &mut self.surface);
        if outcome.scanned() {
            self.scans += 1;
        }
        self.last_outcome = Some(outcome);
    }
}

/// Drives the search widgets of one page.
///
/// Input events update the query text immediately and schedule a scan on the
/// trailing edge of the debounce window. Scans run under the state lock, so
/// two scans never overlap.
#[derive(Debug)]
pub struct SearchController {
    state: Arc<Mutex<SearchState>>,
    debouncer: Debouncer,
}

impl SearchController {
    /// Attach to a page. Returns `None` when the page lacks the search input
    /// or the results container; the feature is then simply absent.
    pub fn attach(page: Page, config: SearchConfig) -> Option<Self> {
        if !page.search_input || !page.results_surface {
            tracing::debug!(
                "Search disabled: input present={}, results present={}",
                page.search_input,
                page.results_surface
            );
            return None;
        }

        let debouncer = Debouncer::new(config.debounce());
        Some(Self {
            state: Arc::new(Mutex::new(SearchState {
                search: ContentSearch::new(config),
                page,
                surface: ResultsSurface::new(),
                query: String::new(),
                scans: 0,
                last_outcome: None,
            })),
            debouncer,
        })
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        lock_state(&self.state)
    }

    /// Handle an input event carrying the input's new value.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&mut self, value: &str) -> DebounceHandle {
        value.clone_into(&mut self.lock().query);

        let state = Arc::clone(&self.state);
        self.debouncer.call(move || lock_state(&state).scan())
    }

    /// Handle a click anywhere in the document. Clicks outside the input and
    /// the results container hide the results; the query text is kept.
    pub fn on_document_click(&self, target: SearchClick) -> Transition {
        self.lock().surface.on_document_click(target)
    }

    /// Follow the result at `index`, closing the navigation shell if open.
    /// Returns the result's URL.
    pub fn activate_result(&self, index: usize, nav: &mut NavigationShell) -> Option<String> {
        let state = self.lock();
        let url = state.surface.results().nth(index)?.url.clone();
        nav.close();
        Some(url)
    }

    /// Replace the content snapshot scanned by future queries.
    pub fn set_page(&self, page: Page) {
        self.lock().page = page;
    }

    /// Drop any pending scan without running it.
    pub fn cancel_pending(&mut self) -> bool {
        self.debouncer.cancel()
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn is_results_visible(&self) -> bool {
        self.lock().surface.is_visible()
    }

    pub fn entries(&self) -> Vec<SurfaceEntry> {
        self.lock().surface.entries().to_vec()
    }

    pub fn results_html(&self) -> String {
        self.lock().surface.to_html()
    }

    /// Number of scans that actually ran (too-short queries excluded).
    pub fn scan_count(&self) -> usize {
        self.lock().scans
    }

    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.lock().last_outcome.clone()
    }
}

fn lock_state(state: &Mutex<SearchState>) -> MutexGuard<'_, SearchState> {
    // A panic mid-scan leaves the state consistent enough to keep serving.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
