//! Page content snapshot.
//!
//! A `Page` is the serializable stand-in for the live document: the elements
//! flagged searchable, the named content sections, and which interactive
//! surfaces exist on the page. Search strategies turn it into
//! [`SearchableUnit`](crate::search::SearchableUnit)s on every query.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse runs of whitespace into single spaces and trim the ends.
///
/// Element text in markup carries indentation and line breaks; this is the
/// text a reader actually sees. Units are matched against this collapsed
/// form rather than the raw markup text, so queries are collapsed the same
/// way (see [`normalize_query`](crate::search::normalize_query)).
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// An element explicitly marked as searchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentElement {
    pub text: String,
    /// Explicit display title (the element's title attribute).
    #[serde(default)]
    pub title: Option<String>,
    /// Link target, when the element is itself a link.
    #[serde(default)]
    pub href: Option<String>,
}

impl ContentElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// A named content section with its scannable children and layout box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub id: String,
    /// Human-readable section name used in result labels.
    pub title: Option<String>,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
    pub list_items: Vec<String>,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.headings.push(text.into());
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn list_item(mut self, text: impl Into<String>) -> Self {
        self.list_items.push(text.into());
        self
    }

    pub const fn with_bounds(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height;
        self
    }

    /// Name shown in "found in section X" labels: the title, else the id.
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// The in-page anchor that navigates to this section.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Snapshot of a page's searchable content and interactive surfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Whether the page has a search input element.
    pub search_input: bool,
    /// Whether the page has a results container element.
    pub results_surface: bool,
    pub searchable: Vec<ContentElement>,
    pub sections: Vec<Section>,
}

impl Page {
    /// A page carrying both search surfaces and no content yet.
    pub fn with_search() -> Self {
        Self {
            search_input: true,
            results_surface: true,
            ..Self::default()
        }
    }

    pub fn element(mut self, element: ContentElement) -> Self {
        self.searchable.push(element);
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Look up a section by id.
    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Load a page snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let page: Self = serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;
        tracing::debug!(
            "Loaded page snapshot from {} ({} searchable elements, {} sections)",
            path.display(),
            page.searchable.len(),
            page.sections.len()
        );
        Ok(page)
    }
}
