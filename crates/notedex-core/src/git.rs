//! Publishing the regenerated index through the `git` command-line client.
//!
//! The publisher only ever needs four operations, so they live behind a
//! small trait and the real client just shells out. Nothing here inspects
//! git output beyond success/failure and the pending-changes query.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::notes::NoteRecord;

/// The version-control operations the publisher needs.
pub trait VcsClient {
    fn has_pending_changes(&self) -> Result<bool, VcsError>;
    fn stage_all(&self) -> Result<(), VcsError>;
    fn commit(&self, message: &str) -> Result<(), VcsError>;
    fn push(&self) -> Result<(), VcsError>;
}

/// Real client: `git -C <repo> <subcommand>`.
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: &Path) -> Self {
        Self { repo: repo.to_path_buf() }
    }

    fn run(&self, args: &[&str]) -> Result<std::process::Output, VcsError> {
        Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    VcsError::NotFound
                } else {
                    VcsError::Spawn(e)
                }
            })
    }

    fn run_checked(&self, args: &[&str]) -> Result<(), VcsError> {
        let output = self.run(args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(command_failed(args, &output.stderr))
        }
    }
}

fn command_failed(args: &[&str], stderr: &[u8]) -> VcsError {
    VcsError::CommandFailed {
        op: args.first().copied().unwrap_or("git").to_string(),
        stderr: String::from_utf8_lossy(stderr).trim().to_string(),
    }
}

impl VcsClient for GitCli {
    fn has_pending_changes(&self) -> Result<bool, VcsError> {
        let args = ["status", "--porcelain"];
        let output = self.run(&args)?;
        if !output.status.success() {
            return Err(command_failed(&args, &output.stderr));
        }
        Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
    }

    fn stage_all(&self) -> Result<(), VcsError> {
        self.run_checked(&["add", "."])
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.run_checked(&["commit", "-m", message])
    }

    fn push(&self) -> Result<(), VcsError> {
        self.run_checked(&["push"])
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The working tree was already clean; nothing was committed.
    NothingToCommit,
    /// Changes were staged, committed, and pushed.
    Pushed,
}

/// Commit message listing the new notes, or a generic line when changes
/// exist without any detected new note.
pub fn commit_message(new_notes: &[NoteRecord]) -> String {
    if new_notes.is_empty() {
        return "update index: sync note listing".to_string();
    }
    let names: Vec<String> = new_notes
        .iter()
        .map(|n| format!("{}.{}", n.id, n.title))
        .collect();
    format!("add {}", names.join(", "))
}

/// Stage, commit, and push the repository. Short-circuits successfully when
/// git reports a clean tree (the rendered output can match what is already
/// committed even when new notes were detected). The index file has been
/// written before this runs, so a failure here leaves it in place.
pub fn publish(vcs: &dyn VcsClient, new_notes: &[NoteRecord]) -> Result<PublishOutcome, VcsError> {
    if !vcs.has_pending_changes()? {
        return Ok(PublishOutcome::NothingToCommit);
    }
    vcs.stage_all()?;
    vcs.commit(&commit_message(new_notes))?;
    vcs.push()?;
    Ok(PublishOutcome::Pushed)
}


#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("git executable not found on PATH")]
    NotFound,
    #[error("failed to run git: {0}")]
    Spawn(std::io::Error),
    #[error("git {op} failed: {stderr}")]
    CommandFailed { op: String, stderr: String },
}
