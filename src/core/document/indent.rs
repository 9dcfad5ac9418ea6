//! Indentation style detection.

/// Indent width used when a document has no indented lines.
pub const DEFAULT_INDENT: usize = 2;

/// Detect the indentation width of raw YAML text.
///
/// The first line with leading whitespace followed by content decides the
/// width. Tabs are counted like spaces, one character each.
pub fn detect_indent(text: &str) -> usize {
    text.lines()
        .find_map(|line| {
            let trimmed = line.trim_start_matches([' ', '\t']);
            let width = line.len() - trimmed.len();
            (width > 0 && !trimmed.trim().is_empty()).then_some(width)
        })
        .unwrap_or(DEFAULT_INDENT)
}
