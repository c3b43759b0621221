//! Rendering results into a results sink.

use super::unit::SearchResult;

/// Placeholder shown when a scan finds nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Destination for rendered search results (the results container).
///
/// Implementations own their visibility flag and entry list; the pipeline
/// only drives them through these operations.
pub trait ResultsSink {
    /// Remove every entry.
    fn clear(&mut self);

    /// Append one clickable result entry.
    fn push_result(&mut self, result: &SearchResult);

    /// Append a non-clickable placeholder message.
    fn push_placeholder(&mut self, message: &str);

    /// Mark the container visible.
    fn show(&mut self);

    /// Mark the container hidden. Entries are left untouched.
    fn hide(&mut self);
}

/// Repopulate `sink` with `results` and show it.
///
/// An empty slice renders exactly one [`NO_RESULTS_MESSAGE`] placeholder.
pub fn render_results<S: ResultsSink + ?Sized>(results: &[SearchResult], sink: &mut S) {
    sink.clear();
    if results.is_empty() {
        sink.push_placeholder(NO_RESULTS_MESSAGE);
    } else {
        for result in results {
            sink.push_result(result);
        }
    }
    sink.show();
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for one result entry: an anchor wrapping a heading and excerpt.
pub fn render_entry_html(result: &SearchResult) -> String {
    format!(
        r#"<a href="{}" class="search-result-item"><h4>{}</h4><p>{}</p></a>"#,
        escape_html(&result.url),
        escape_html(&result.title),
        escape_html(&result.excerpt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ResultsSink for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn push_result(&mut self, result: &SearchResult) {
            self.calls.push(format!("result:{}", result.title));
        }
        fn push_placeholder(&mut self, message: &str) {
            self.calls.push(format!("placeholder:{}", message));
        }
        fn show(&mut self) {
            self.calls.push("show".into());
        }
        fn hide(&mut self) {
            self.calls.push("hide".into());
        }
    }

    fn result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: "#".to_string(),
            excerpt: "...".to_string(),
        }
    }

    #[test]
    fn empty_results_render_single_placeholder() {
        let mut sink = Recorder::default();
        render_results(&[], &mut sink);
        check!(sink.calls == ["clear", "placeholder:No results found", "show"]);
    }

    #[test]
    fn results_render_in_order_then_show() {
        let mut sink = Recorder::default();
        render_results(&[result("One"), result("Two")], &mut sink);
        check!(sink.calls == ["clear", "result:One", "result:Two", "show"]);
    }

    #[test]
    fn entry_html_escapes_content() {
        let html = render_entry_html(&SearchResult {
            title: "<script>".to_string(),
            url: "/a?b=1&c=\"2\"".to_string(),
            excerpt: "Tom & Jerry's".to_string(),
        });
        check!(html.contains("<h4>&lt;script&gt;</h4>"));
        check!(html.contains(r#"href="/a?b=1&amp;c=&quot;2&quot;""#));
        check!(html.contains("<p>Tom &amp; Jerry&#39;s</p>"));
    }
}
