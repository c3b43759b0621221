//! Scanning strategies: how page content becomes searchable units.

use super::unit::{ELLIPSIS, SearchableUnit, truncate_chars};
use crate::content::{ContentElement, Page, Section, collapse_whitespace};
use crate::error::Error;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Match cap applied by the sectioned strategy before display truncation.
const SECTIONED_MATCH_LIMIT: usize = 10;

/// Which parts of the page are scanned, and how results are labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every element flagged searchable is one unit.
    #[default]
    Flat,
    /// Headings, paragraphs and list items of each named section are
    /// separate units pointing at the section anchor.
    Sectioned,
}

impl Strategy {
    /// Default cap on the match list, before display truncation.
    pub const fn default_match_limit(self) -> Option<usize> {
        match self {
            Self::Flat => None,
            Self::Sectioned => Some(SECTIONED_MATCH_LIMIT),
        }
    }

    /// Collect the candidate units for one query, in document order.
    pub fn collect_units(self, page: &Page, title_chars: usize) -> Vec<SearchableUnit> {
        match self {
            Self::Flat => page
                .searchable
                .iter()
                .map(|element| flat_unit(element, title_chars))
                .collect(),
            Self::Sectioned => page.sections.iter().flat_map(section_units).collect(),
        }
    }
}

fn flat_unit(element: &ContentElement, title_chars: usize) -> SearchableUnit {
    let text = collapse_whitespace(&element.text);
    let title = match element.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("{}{}", truncate_chars(&text, title_chars), ELLIPSIS),
    };
    let target = element
        .href
        .as_deref()
        .filter(|href| !href.is_empty())
        .unwrap_or("#");
    SearchableUnit::new(text, title, target)
}

fn section_units(section: &Section) -> impl Iterator<Item = SearchableUnit> + '_ {
    let anchor = section.anchor();
    let name = section.display_name();

    let headings = section.headings.iter().map(move |h| {
        let text = collapse_whitespace(h);
        (text.clone(), text)
    });
    let paragraphs = section
        .paragraphs
        .iter()
        .map(move |p| (collapse_whitespace(p), format!("Found in section {}", name)));
    let list_items = section
        .list_items
        .iter()
        .map(move |li| (collapse_whitespace(li), format!("List item in section {}", name)));

    headings
        .chain(paragraphs)
        .chain(list_items)
        .map(move |(text, title)| SearchableUnit::new(text, title, anchor.clone()))
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "sectioned" => Ok(Self::Sectioned),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "flat",
            Self::Sectioned => "sectioned",
        })
    }
}
