//! Searchable units and the results produced from them.

use serde::Serialize;

/// Suffix appended to truncated titles and excerpts.
pub const ELLIPSIS: &str = "...";

/// Take at most `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// A piece of page content eligible to match a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableUnit {
    /// Visible text, whitespace-collapsed.
    pub text: String,
    /// Display label for the result.
    pub title: String,
    /// URL or in-page anchor to navigate to.
    pub target: String,
    /// Lowercased `text`, precomputed for matching.
    lowered: String,
}

impl SearchableUnit {
    pub fn new(text: impl Into<String>, title: impl Into<String>, target: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_lowercase();
        Self {
            text,
            title: title.into(),
            target: target.into(),
            lowered,
        }
    }

    /// True when the lowercased text contains `normalized_query`.
    ///
    /// The query must already be normalized (see [`normalize_query`](super::normalize_query)).
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.lowered.contains(normalized_query)
    }

    /// Convert into a result, truncating the excerpt to `excerpt_chars`.
    /// The excerpt keeps the text's original case; only matching is lowercased.
    pub fn to_result(&self, excerpt_chars: usize) -> SearchResult {
        SearchResult {
            title: self.title.clone(),
            url: self.target.clone(),
            excerpt: format!("{}{}", truncate_chars(&self.text, excerpt_chars), ELLIPSIS),
        }
    }
}

/// A rendered search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub excerpt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("hello world", 5, "hello")]
    #[case("short", 60, "short")]
    #[case("", 3, "")]
    #[case("ñandú über", 4, "ñand")]
    #[case("日本語のテキスト", 3, "日本語")]
    fn test_truncate_chars(#[case] text: &str, #[case] max: usize, #[case] expected: &str) {
        check!(truncate_chars(text, max) == expected);
    }

    #[test]
    fn matching_ignores_case_of_content() {
        let unit = SearchableUnit::new("An Example Page", "t", "#");
        check!(unit.matches("example"));
        check!(unit.matches("an ex"));
        check!(!unit.matches("examples"));
    }

    #[test]
    fn excerpt_keeps_original_case() {
        let unit = SearchableUnit::new("Install The CLI", "t", "#");
        check!(unit.matches("the cli"));
        check!(unit.to_result(120).excerpt == "Install The CLI...");
    }

    #[test]
    fn excerpt_is_truncated_with_ellipsis() {
        let text = "x".repeat(200);
        let result = SearchableUnit::new(text, "Long", "/long").to_result(120);
        check!(result.excerpt.chars().count() == 123);
        check!(result.excerpt.ends_with(ELLIPSIS));
        check!(result.url == "/long");
        check!(result.title == "Long");
    }
}
