mod common;

use assert2::check;
use common::{docs_page, flat_search, page_with_matches, search_with, sectioned_search};
use rstest::rstest;
use site_search::search::NO_RESULTS_MESSAGE;
use site_search::ui::{ResultsSurface, SurfaceEntry};
use site_search::{ContentElement, ContentSearch, Page, SearchOutcome, Strategy};

// --- Query length gate ---

/// Test: Queries shorter than two characters hide the surface and create no entries.
#[rstest]
#[case("")]
#[case("a")]
#[case("   ")]
#[case(" x ")]
fn short_query_hides_without_scanning(
    docs_page: Page,
    flat_search: ContentSearch,
    #[case] query: &str,
) {
    let mut surface = ResultsSurface::new();
    // Start from a visible surface with entries, as after an earlier query.
    flat_search.run_on_page("configuration", &docs_page, &mut surface);
    check!(surface.is_visible());

    let outcome = flat_search.run_on_page(query, &docs_page, &mut surface);
    check!(outcome == SearchOutcome::TooShort);
    check!(!outcome.scanned());
    check!(!surface.is_visible());
}

/// Test: A fresh surface stays empty for a short query.
#[rstest]
fn short_query_creates_no_entries(docs_page: Page, flat_search: ContentSearch) {
    let mut surface = ResultsSurface::new();
    flat_search.run_on_page("a", &docs_page, &mut surface);
    check!(surface.entries().is_empty());
    check!(!surface.is_visible());
}

/// Test: A two-character query against "abc section" matches.
#[test]
fn two_character_query_matches() {
    let page = Page::with_search().element(ContentElement::new("abc section"));
    let search = search_with(Strategy::Flat);
    let mut surface = ResultsSurface::new();

    let outcome = search.run_on_page("ab", &page, &mut surface);
    let results = outcome.results();
    check!(results.len() == 1);
    check!(results[0].title.contains("abc section"));
    check!(results[0].excerpt.contains("abc section"));
    check!(surface.is_visible());
}

// --- Matching ---

/// Test: Matching is case-insensitive in both directions.
#[rstest]
#[case("example")]
#[case("EXAMPLE")]
#[case("  Example  ")]
fn matching_is_case_insensitive(docs_page: Page, flat_search: ContentSearch, #[case] query: &str) {
    let mut surface = ResultsSurface::new();
    let outcome = flat_search.run_on_page(query, &docs_page, &mut surface);
    check!(outcome.results().len() == 1);
    check!(outcome.results()[0].url == "/docs/example");
}

/// Test: No match renders exactly one placeholder entry and shows the surface.
#[rstest]
fn no_match_shows_placeholder(docs_page: Page, flat_search: ContentSearch) {
    let mut surface = ResultsSurface::new();
    let outcome = flat_search.run_on_page("kubernetes", &docs_page, &mut surface);

    check!(outcome == SearchOutcome::Displayed(vec![]));
    check!(surface.is_visible());
    check!(surface.entries() == [SurfaceEntry::Placeholder(NO_RESULTS_MESSAGE.to_string())]);
}

/// Test: Flat results use the title attribute, the text prefix, or the link.
#[rstest]
fn flat_results_carry_titles_and_targets(docs_page: Page, flat_search: ContentSearch) {
    let mut surface = ResultsSurface::new();
    let outcome = flat_search.run_on_page("install", &docs_page, &mut surface);

    let results = outcome.results();
    check!(results.len() == 1);
    check!(results[0].title == "Installation");
    check!(results[0].url == "/docs/install");

    let outcome = flat_search.run_on_page("single file", &docs_page, &mut surface);
    let results = outcome.results();
    check!(results[0].url == "#");
    check!(results[0].title.starts_with("Configuration lives"));
    check!(results[0].title.ends_with("..."));
}

/// Test: Sectioned results are labelled by role and point at the section.
#[rstest]
fn sectioned_results_are_labelled_by_role(docs_page: Page, sectioned_search: ContentSearch) {
    let mut surface = ResultsSurface::new();
    let outcome = sectioned_search.run_on_page("configuration", &docs_page, &mut surface);

    let labels: Vec<_> = outcome
        .results()
        .iter()
        .map(|r| (r.title.as_str(), r.url.as_str()))
        .collect();

    check!(
        labels
            == [
                ("Found in section Introduction", "#intro"),
                ("Configuration file", "#config"),
                ("Found in section Configuration", "#config"),
                ("List item in section faq", "#faq"),
            ]
    );
}

// --- Deduplication and caps ---

/// Test: Two paragraphs in one section share (target, title) and collapse to one.
#[rstest]
fn duplicate_target_and_title_collapse(docs_page: Page, sectioned_search: ContentSearch) {
    let mut surface = ResultsSurface::new();
    let outcome = sectioned_search.run_on_page("configuration", &docs_page, &mut surface);

    let config_paragraphs = outcome
        .results()
        .iter()
        .filter(|r| r.title == "Found in section Configuration")
        .count();
    check!(config_paragraphs == 1);

    // First occurrence wins.
    let kept = outcome
        .results()
        .iter()
        .find(|r| r.title == "Found in section Configuration")
        .unwrap();
    check!(kept.excerpt.starts_with("The configuration file is TOML."));
}

/// Test: Twelve matching units render exactly five entries.
#[rstest]
fn display_cap_is_five(flat_search: ContentSearch) {
    let page = page_with_matches(12, "widget");
    let mut surface = ResultsSurface::new();

    let outcome = flat_search.run_on_page("widget", &page, &mut surface);
    check!(outcome.results().len() == 5);
    check!(surface.results().count() == 5);
    check!(surface.results().next().map(|r| r.url.as_str()) == Some("/entries/0"));
}

/// Test: The sectioned strategy caps the match list at ten before display.
#[rstest]
fn sectioned_match_cap(sectioned_search: ContentSearch) {
    let section = (0..15).fold(site_search::Section::new("big"), |s, i| {
        s.heading(format!("Widget heading {}", i))
    });
    let page = Page::with_search().section(section);

    let units = sectioned_search.units_for(&page);
    let found = sectioned_search.find("widget", &units).unwrap();
    check!(found.len() == 10);

    let flat = search_with(Strategy::Flat);
    let found = flat.find("widget", &flat.units_for(&page_with_matches(15, "widget")));
    check!(found.map(|r| r.len()) == Some(15));
}

/// Test: Excerpts stay within the 120-character budget plus ellipsis.
#[rstest]
fn excerpts_are_truncated(flat_search: ContentSearch) {
    let long = format!("needle {}", "lorem ipsum ".repeat(40));
    let page = Page::with_search().element(ContentElement::new(long));
    let mut surface = ResultsSurface::new();

    let outcome = flat_search.run_on_page("needle", &page, &mut surface);
    let excerpt = &outcome.results()[0].excerpt;
    check!(excerpt.chars().count() == 123);
    check!(excerpt.ends_with("..."));
}

/// Test: Rendered markup escapes page text.
#[test]
fn rendered_html_is_escaped() {
    let page = Page::with_search()
        .element(ContentElement::new("Use <b>bold</b> & more").with_title("Tags & markup"));
    let search = search_with(Strategy::Flat);
    let mut surface = ResultsSurface::new();

    search.run_on_page("bold", &page, &mut surface);
    let html = surface.to_html();
    check!(html.contains("<h4>Tags &amp; markup</h4>"));
    check!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    check!(html.starts_with(r##"<a href="#" class="search-result-item">"##));
}
