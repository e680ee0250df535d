//! File watcher for the notes directory. Re-renders the index when notes
//! change. Watch mode never touches git; `notedex update` does that.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify_debouncer_mini::notify;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};

use crate::config::Config;
use crate::index::{update_index, UpdateError, UpdateReport};

/// Watches the notes directory and re-runs the update pipeline on every
/// debounced change, passing each result to `on_update`. Blocks until the
/// process is stopped (e.g. Ctrl+C). Returns Err only on setup failure.
pub fn watch_notes(
    repo: &Path,
    cfg: &Config,
    on_update: impl Fn(Result<UpdateReport, UpdateError>) + Send + 'static,
) -> Result<(), WatchError> {
    let notes_root = repo.join(&cfg.notes_dir);
    if !notes_root.is_dir() {
        return Err(WatchError::NotADirectory(notes_root));
    }
    let repo = repo.canonicalize().map_err(WatchError::Canonicalize)?;
    let watch_path = repo.join(&cfg.notes_dir);
    let cfg = cfg.clone();

    let debounce = Duration::from_millis(400);
    let mut debouncer = new_debouncer(debounce, move |res: DebounceEventResult| match res {
        Ok(_) => on_update(update_index(&repo, &cfg)),
        Err(e) => eprintln!("Warning: watcher error: {}", e),
    })
    .map_err(|e| WatchError::Notify(e.to_string()))?;

    debouncer
        .watcher()
        .watch(&watch_path, notify::RecursiveMode::Recursive)
        .map_err(|e| WatchError::Watch(e.to_string()))?;

    let (_tx, rx) = mpsc::channel::<()>();
    rx.recv().ok();
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("not a directory: {0}")]
    NotADirectory(std::path::PathBuf),
    #[error("failed to resolve path: {0}")]
    Canonicalize(std::io::Error),
    #[error("watcher init: {0}")]
    Notify(String),
    #[error("watch failed: {0}")]
    Watch(String),
}
