//! Wiki-link extraction from note text
//!
//! Notes reference each other with `[[target]]` syntax, optionally
//! carrying a display alias: `[[target|shown text]]`. This module pulls
//! the ordered sequence of targets out of raw note text; the alias part
//! is matched and discarded.

use regex::Regex;
use std::sync::LazyLock;

/// `[[target]]` or `[[target|alias]]`. The target may not contain
/// brackets or the pipe, so an aliased link captures only the target.
/// Unterminated or empty bracket runs simply fail to match.
static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]|]+)(?:\|[^\[\]|]*)?\]\]").expect("wiki-link pattern is valid")
});

/// Extract all wiki-link targets from `text`, in order of appearance.
///
/// Targets are returned exactly as written — no trimming, no case
/// normalization — and duplicates are preserved. Text with no links
/// yields an empty vector; there is no error case.
///
/// # Example
/// ```
/// use vaultgraph_core::links;
///
/// let targets = links::extract_links("See [[Rust]] and [[Rust|the book]].");
/// assert_eq!(targets, vec!["Rust", "Rust"]);
/// ```
pub fn extract_links(text: &str) -> Vec<String> {
    WIKI_LINK
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}
