//! Core logic for notedex, independent of how the tool is run.
//!
//! Solution notes live in topic folders under the repository's notes
//! directory; the rendered index document is the only state this crate
//! persists, and it is read back on the next run to decide which notes are
//! new.

pub mod category;
pub mod config;
pub mod existing;
pub mod git;
pub mod index;
pub mod notes;
pub mod render;
pub mod watcher;

pub use category::{builtin_glyph, category_glyph, FALLBACK_GLYPH};
pub use config::{init_config, load_config, Config, ConfigError, CONFIG_FILENAME};
pub use existing::{find_new_notes, parse_existing_index, read_existing_index, ExistingEntries};
pub use git::{commit_message, publish, GitCli, PublishOutcome, VcsClient, VcsError};
pub use index::{check_index, update_index, UpdateError, UpdateReport};
pub use notes::{parse_note_filename, scan_notes, CategoryMap, NoteRecord, ScanError};
pub use render::render_index;
pub use watcher::{watch_notes, WatchError};
