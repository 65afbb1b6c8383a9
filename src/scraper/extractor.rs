use serde_json::Value;

use crate::scraper::PageSummary;

/// Builds the in-page script that pulls the summary fields out of the
/// rendered document, and converts the raw result back into a
/// [`PageSummary`].
pub struct SummaryExtractor;

impl SummaryExtractor {
    /// JavaScript evaluated against the loaded document.
    ///
    /// This runs in the browser context and reads `document.title`, the
    /// `content` attribute of `<meta name="description">` and the text of
    /// the first `<h1>`. Absent elements and attributes yield empty
    /// strings rather than errors.
    pub fn extraction_script() -> &'static str {
        r#"
        (() => {
            const title = document.title;
            const meta = document.querySelector('meta[name="description"]');
            const metaDescription = meta ? (meta.getAttribute('content') ?? '') : '';
            const heading = document.querySelector('h1');
            const h1 = heading ? (heading.textContent ?? '') : '';
            return { title, metaDescription, h1 };
        })()
        "#
    }

    /// Convert the value returned by the extraction script into a summary.
    ///
    /// Missing, null or non-string fields default to empty strings.
    pub fn summary_from_value(value: &Value) -> PageSummary {
        PageSummary {
            title: value["title"].as_str().unwrap_or("").to_string(),
            meta_description: value["metaDescription"].as_str().unwrap_or("").to_string(),
            h1: value["h1"].as_str().unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extraction_script_reads_summary_fields() {
        let script = SummaryExtractor::extraction_script();

        assert!(script.contains("document.title"));
        assert!(script.contains(r#"meta[name="description"]"#));
        assert!(script.contains("querySelector('h1')"));
    }

    #[test]
    fn test_summary_from_complete_value() {
        let value = json!({
            "title": "Example Domain",
            "metaDescription": "An example page",
            "h1": "Example",
        });

        let summary = SummaryExtractor::summary_from_value(&value);
        assert_eq!(summary.title, "Example Domain");
        assert_eq!(summary.meta_description, "An example page");
        assert_eq!(summary.h1, "Example");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let value = json!({ "title": "Only a title" });

        let summary = SummaryExtractor::summary_from_value(&value);
        assert_eq!(summary.title, "Only a title");
        assert_eq!(summary.meta_description, "");
        assert_eq!(summary.h1, "");
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let value = json!({
            "title": null,
            "metaDescription": null,
            "h1": null,
        });

        let summary = SummaryExtractor::summary_from_value(&value);
        assert_eq!(summary.title, "");
        assert_eq!(summary.meta_description, "");
        assert_eq!(summary.h1, "");
    }

    #[test]
    fn test_non_object_value_defaults_to_empty() {
        let summary = SummaryExtractor::summary_from_value(&json!("unexpected"));
        assert_eq!(summary.title, "");
        assert_eq!(summary.meta_description, "");
        assert_eq!(summary.h1, "");
    }
}
