//! Terminal display width helpers.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Width of the widest line.
pub fn max_line_width(text: &str) -> usize {
    text.lines().map(display_width).max().unwrap_or(0)
}

/// Removes the common indentation of embedded node text, then trims it.
pub fn normalize(text: &str) -> String {
    textwrap::dedent(text).trim().to_string()
}

pub fn rule(width: usize) -> String {
    "_".repeat(width)
}
