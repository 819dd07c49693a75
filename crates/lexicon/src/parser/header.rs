//! Catalog header (`msgid ""`) metadata.

/// Split a header `msgstr` into `(key, value)` fields, in order.
///
/// Lines without a colon are ignored; keys and values are trimmed.
pub fn parse_header(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
