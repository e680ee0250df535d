//! Discovering solution notes under the repository's notes directory.
//!
//! Notes are grouped one level deep: the notes directory holds one folder
//! per topic, and each folder holds files named `<id>.<title>.md`. Only the
//! filename is read; note contents never matter to the index.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

static NOTE_FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.(.+)\.md$").unwrap());

/// One note found during a scan: numeric id, title, and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRecord {
    pub id: u64,
    pub title: String,
    pub filename: String,
    /// Path relative to the repository root, forward slashes. Used verbatim
    /// as the link target in the rendered index.
    pub rel_path: String,
}

/// Scan result: category name to its notes, sorted ascending by id.
/// BTreeMap keys give the canonical category order (lexicographic) used by
/// both the renderer and the novelty diff.
pub type CategoryMap = BTreeMap<String, Vec<NoteRecord>>;

/// Parses `<id>.<title>.md` out of a filename. The title may contain
/// further dots; only the leading id and the trailing `.md` are structural.
/// Returns `None` for anything else, including ids too large for `u64`.
pub fn parse_note_filename(name: &str) -> Option<(u64, &str)> {
    let caps = NOTE_FILENAME_RE.captures(name)?;
    let id = caps.get(1)?.as_str().parse().ok()?;
    Some((id, caps.get(2)?.as_str()))
}

/// Scans `repo/notes_dir` for notes, one category folder per subdirectory.
/// Hidden entries are skipped. Files that do not parse are skipped silently.
/// Empty categories are still recorded; the renderer decides what to show.
/// With `exclude_zero`, id 0 files (category summaries) are left out.
pub fn scan_notes(
    repo: &Path,
    notes_dir: &str,
    exclude_zero: bool,
) -> Result<CategoryMap, ScanError> {
    let root = repo.join(notes_dir);
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root));
    }
    let mut categories = CategoryMap::new();
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| ScanError::Walk(e.to_string()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let category = entry.file_name().to_string_lossy().into_owned();
        let notes = scan_category(entry.path(), notes_dir, &category, exclude_zero)?;
        categories.insert(category, notes);
    }
    Ok(categories)
}

fn scan_category(
    dir: &Path,
    notes_dir: &str,
    category: &str,
    exclude_zero: bool,
) -> Result<Vec<NoteRecord>, ScanError> {
    let mut notes = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| ScanError::Walk(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some((id, title)) = parse_note_filename(&filename) else {
            continue;
        };
        if exclude_zero && id == 0 {
            continue;
        }
        notes.push(NoteRecord {
            id,
            title: title.to_string(),
            rel_path: format!("{}/{}/{}", notes_dir, category, filename),
            filename,
        });
    }
    // Stable sort: ids tie-break on the file-name order the walk produced.
    notes.sort_by_key(|n| n.id);
    Ok(notes)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}


#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("walk error: {0}")]
    Walk(String),
}
