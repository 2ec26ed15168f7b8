//! Bullet splitting: turns a free-text description into discrete resume bullet items.

use std::sync::LazyLock;

use regex::Regex;

/// Line prefixes that open a new bullet: a glyph (`•`, `-`, `*`), a numeric marker (`1.`)
/// or a lettered marker (`a)`), each followed by whitespace.
static MARKER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^[•\-*]\s+").unwrap(),
        Regex::new(r"^\d+\.\s+").unwrap(),
        Regex::new(r"^[a-zA-Z]\)\s+").unwrap(),
    ]
});

/// Splits `text` into bullets.
///
/// Marker lines start a new bullet with the marker removed. Unmarked lines are continuations
/// and are joined onto the current bullet with a single space; text with no markers at all
/// becomes one bullet. Blank lines are ignored and empty input yields no bullets.
pub fn split_bullets(text: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match strip_marker(line) {
            Some(rest) => {
                if let Some(done) = current.take() {
                    bullets.push(done);
                }
                current = Some(rest.to_string());
            }
            None => match current.as_mut() {
                Some(item) => {
                    item.push(' ');
                    item.push_str(line);
                }
                None => current = Some(line.to_string()),
            },
        }
    }

    if let Some(done) = current {
        bullets.push(done);
    }

    bullets
}

/// Returns the remainder of `line` after its bullet marker, or `None` if it has no marker.
fn strip_marker(line: &str) -> Option<&str> {
    MARKER_PATTERNS
        .iter()
        .find_map(|re| re.find(line))
        .map(|m| line[m.end()..].trim_start())
}
