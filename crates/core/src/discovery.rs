//! Note discovery: enumerating the markdown files of a vault
//!
//! A vault is a plain directory tree; every file ending in `.md`,
//! however deeply nested, is a note. There is no ignore-file handling
//! here — vault contents are trusted local input, not a source tree.

use anyhow::Context;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File suffix that marks a note.
pub const NOTE_SUFFIX: &str = ".md";

/// Discover every note file under `root`, recursively.
///
/// The returned paths are sorted. The underlying filesystem walk order
/// is platform-dependent, and the graph builder's synthetic-node
/// tie-break depends on note order, so sorting here keeps builds
/// reproducible across platforms.
///
/// # Errors
/// Fails if `root` does not exist or a directory cannot be read. A
/// failed walk aborts the whole discovery; no partial listing is
/// returned.
pub fn discover_notes(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut notes = Vec::new();

    // Plain recursive walk: no gitignore handling, no hidden filtering
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    for result in walker {
        let entry = result.with_context(|| format!("failed to walk vault {}", root.display()))?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) && is_note(entry.path()) {
            notes.push(entry.into_path());
        }
    }

    notes.sort();

    tracing::debug!(vault = %root.display(), count = notes.len(), "discovered notes");
    Ok(notes)
}

/// Check whether a path names a note file.
fn is_note(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(NOTE_SUFFIX))
}

/// Derive a note's identifier from its path: the file name with the
/// note suffix stripped.
pub fn note_id(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(NOTE_SUFFIX))
        .map(|n| n.to_string())
}
