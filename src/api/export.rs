//! CSV rendering for suggestion downloads.

use crate::suggest::Suggestion;

/// Header row of every export.
pub const CSV_HEADER: &str = "Keyword,Volume";

/// Renders suggestions as CSV with CRLF line endings.
///
/// Keywords are always quoted, with embedded quotes doubled.
pub fn render_csv(suggestions: &[Suggestion]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 2 + suggestions.len() * 32);
    out.push_str(CSV_HEADER);
    out.push_str("\r\n");

    for suggestion in suggestions {
        out.push('"');
        out.push_str(&suggestion.keyword.replace('"', "\"\""));
        out.push_str("\",");
        out.push_str(&suggestion.volume.to_string());
        out.push_str("\r\n");
    }
    out
}

/// Download filename for a keyword, restricted to header-safe characters.
pub fn csv_filename(keyword: &str) -> String {
    let stem: String = keyword
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("suggestions_{}.csv", stem)
}
