//! The search results container.

use super::state::{Transition, Visibility};
use crate::search::{ResultsSink, SearchResult, escape_html, render_entry_html};

/// One child of the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEntry {
    Result(SearchResult),
    Placeholder(String),
}

/// Where a document click landed, relative to the search widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchClick {
    Input,
    Results,
    Elsewhere,
}

/// In-memory model of the results container: a visibility flag plus entries.
#[derive(Debug, Clone, Default)]
pub struct ResultsSurface {
    visibility: Visibility,
    entries: Vec<SurfaceEntry>,
}

impl ResultsSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn entries(&self) -> &[SurfaceEntry] {
        &self.entries
    }

    /// Only the clickable result entries.
    pub fn results(&self) -> impl Iterator<Item = &SearchResult> {
        self.entries.iter().filter_map(|entry| match entry {
            SurfaceEntry::Result(result) => Some(result),
            SurfaceEntry::Placeholder(_) => None,
        })
    }

    /// Hide the container when a click lands outside both the input and the
    /// container. Entries are kept so reopening shows the same list.
    pub fn on_document_click(&mut self, target: SearchClick) -> Transition {
        match target {
            SearchClick::Elsewhere => self.visibility.hide(),
            SearchClick::Input | SearchClick::Results => Transition::Unchanged,
        }
    }

    /// Render the container's inner markup.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|entry| match entry {
                SurfaceEntry::Result(result) => render_entry_html(result),
                SurfaceEntry::Placeholder(message) => format!(
                    r#"<div class="search-no-results">{}</div>"#,
                    escape_html(message)
                ),
            })
            .collect()
    }
}

impl ResultsSink for ResultsSurface {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn push_result(&mut self, result: &SearchResult) {
        self.entries.push(SurfaceEntry::Result(result.clone()));
    }

    fn push_placeholder(&mut self, message: &str) {
        self.entries
            .push(SurfaceEntry::Placeholder(message.to_string()));
    }

    fn show(&mut self) {
        self.visibility.show();
    }

    fn hide(&mut self) {
        self.visibility.hide();
    }
}
