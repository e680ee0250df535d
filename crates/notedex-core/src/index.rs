//! Update pipeline: read back the existing index → scan → diff → render →
//! overwrite the index file. Publishing is the caller's decision.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::existing::{find_new_notes, read_existing_index};
use crate::notes::{scan_notes, CategoryMap, NoteRecord, ScanError};
use crate::render::render_index;

/// What one run found and produced.
#[derive(Debug)]
pub struct UpdateReport {
    pub categories: CategoryMap,
    /// Notes not listed in the previous index, in scan order.
    pub new_notes: Vec<NoteRecord>,
    pub index_path: PathBuf,
}

impl UpdateReport {
    pub fn total_notes(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

fn build_report(repo: &Path, cfg: &Config) -> Result<UpdateReport, ScanError> {
    let index_path = repo.join(&cfg.index_file);
    let existing = read_existing_index(&index_path);
    let categories = scan_notes(repo, &cfg.notes_dir, cfg.exclude_zero_identifier)?;
    let new_notes = find_new_notes(&categories, &existing);
    Ok(UpdateReport { categories, new_notes, index_path })
}

/// Dry run: scan and diff against the existing index, writing nothing.
pub fn check_index(repo: &Path, cfg: &Config) -> Result<UpdateReport, UpdateError> {
    Ok(build_report(repo, cfg)?)
}

/// Full run: scan, diff, render, and overwrite the index file.
pub fn update_index(repo: &Path, cfg: &Config) -> Result<UpdateReport, UpdateError> {
    let report = build_report(repo, cfg)?;
    let content = render_index(&report.categories, cfg);
    std::fs::write(&report.index_path, content)
        .map_err(|e| UpdateError::WriteIndex(report.index_path.clone(), e))?;
    Ok(report)
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("failed to write {0}: {1}")]
    WriteIndex(PathBuf, std::io::Error),
}
