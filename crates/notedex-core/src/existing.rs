//! Reading back the previously rendered index and deciding what is new.
//!
//! The rendered document is the tool's only persisted state: the entries it
//! already lists are recovered from its tables, and a note is "new" when its
//! (id, title) pair is not among them.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::notes::{CategoryMap, NoteRecord};

/// (id, title) pairs recovered from the existing index document.
pub type ExistingEntries = HashSet<(u64, String)>;

// A note row is `| <id> | <title> | [<path>](<path>) |`. Anchoring on the
// `[` that opens the link column keeps overview and statistics rows (whose
// numeric cells are not followed by a link) out of the set.
static INDEX_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*([0-9]+)\s*\|\s*([^|]+)\s*\|\s*\[").unwrap());

/// Collects every note-row (id, title) pair from rendered index text.
/// Malformed rows are skipped; duplicates collapse. Titles are trimmed.
pub fn parse_existing_index(content: &str) -> ExistingEntries {
    let mut entries = ExistingEntries::new();
    for caps in INDEX_ROW_RE.captures_iter(content) {
        let Ok(id) = caps[1].parse::<u64>() else {
            continue;
        };
        entries.insert((id, caps[2].trim().to_string()));
    }
    entries
}

/// Reads the index file and parses its entries. An absent file is simply an
/// empty set; an unreadable one degrades to the empty set with a warning, so
/// every scanned note is treated as new. Never aborts the run.
pub fn read_existing_index(path: &Path) -> ExistingEntries {
    if !path.exists() {
        return ExistingEntries::new();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => parse_existing_index(&content),
        Err(e) => {
            eprintln!(
                "Warning: could not read {}: {}; treating every note as new",
                path.display(),
                e
            );
            ExistingEntries::new()
        }
    }
}

/// Notes whose (id, title) pair is absent from `existing`, in category map
/// order and per-category id order.
pub fn find_new_notes(categories: &CategoryMap, existing: &ExistingEntries) -> Vec<NoteRecord> {
    let mut new_notes = Vec::new();
    for notes in categories.values() {
        for note in notes {
            if !existing.contains(&(note.id, note.title.clone())) {
                new_notes.push(note.clone());
            }
        }
    }
    new_notes
}
