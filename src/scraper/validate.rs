use url::Url;

/// Returns `true` when `input` parses as an absolute URL.
///
/// Uses the WHATWG URL grammar rather than a regex heuristic. The parser
/// itself strips leading and trailing whitespace, so padded input is
/// accepted. Never panics; any parse failure collapses to `false`.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
