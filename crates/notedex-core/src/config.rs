//! Per-repository config (`notedex.toml` at the repo root).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "notedex.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory under the repo root holding the category folders.
    pub notes_dir: String,
    /// The rendered index document, relative to the repo root.
    pub index_file: String,
    /// Skip id-0 files (category summaries) when scanning.
    pub exclude_zero_identifier: bool,
    /// Include the statistics block in the rendered index.
    pub include_stats: bool,
    /// Commit and push after an update that found new notes.
    pub publish: bool,
    /// Glyph overrides by category name, on top of the built-in table.
    pub glyphs: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: "src".to_string(),
            index_file: "README.md".to_string(),
            exclude_zero_identifier: true,
            include_stats: true,
            publish: true,
            glyphs: BTreeMap::new(),
        }
    }
}

/// Load config from the repo root. Returns defaults when the file is
/// missing; warns and returns defaults when it is invalid.
pub fn load_config(repo: &Path) -> Config {
    let path = repo.join(CONFIG_FILENAME);
    let Ok(s) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&s) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Warning: ignoring invalid {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Write a default config file into the repo. Refuses to overwrite one that
/// already exists.
pub fn init_config(repo: &Path) -> Result<PathBuf, ConfigError> {
    let path = repo.join(CONFIG_FILENAME);
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path));
    }
    let s = toml::to_string_pretty(&Config::default()).map_err(ConfigError::Serialize)?;
    std::fs::write(&path, s).map_err(ConfigError::Write)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        let cfg = load_config(tmp.path());
        assert_eq!(cfg.notes_dir, "src");
        assert_eq!(cfg.index_file, "README.md");
        assert!(cfg.exclude_zero_identifier);
        assert!(cfg.publish);
    }

    #[test]
    fn partial_file_fills_the_rest_from_defaults() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "notes_dir = \"notes\"\nexclude_zero_identifier = false\n",
        )
        .unwrap();
        let cfg = load_config(tmp.path());
        assert_eq!(cfg.notes_dir, "notes");
        assert!(!cfg.exclude_zero_identifier);
        assert_eq!(cfg.index_file, "README.md");
    }

    #[test]
    fn invalid_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "notes_dir = [broken").unwrap();
        let cfg = load_config(tmp.path());
        assert_eq!(cfg.notes_dir, "src");
    }

    #[test]
    fn init_writes_once_and_round_trips() {
        let tmp = tempdir().unwrap();
        let path = init_config(tmp.path()).unwrap();
        assert!(path.exists());
        assert!(matches!(
            init_config(tmp.path()),
            Err(ConfigError::AlreadyExists(_))
        ));
        let cfg = load_config(tmp.path());
        assert_eq!(cfg.notes_dir, Config::default().notes_dir);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
    #[error("failed to write config: {0}")]
    Write(std::io::Error),
}
