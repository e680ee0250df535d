//! End-to-end checks for the update pipeline against a real directory tree.

use std::fs;
use std::path::Path;

use notedex_core::{check_index, update_index, Config, UpdateError};
use tempfile::tempdir;

fn write_note(root: &Path, category: &str, name: &str) {
    let dir = root.join("src").join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), "# note\n").unwrap();
}

#[test]
fn first_run_reports_every_note_new() {
    let tmp = tempdir().unwrap();
    write_note(tmp.path(), "array", "1.two-sum.md");
    write_note(tmp.path(), "array", "27.remove-element.md");
    write_note(tmp.path(), "stack", "20.valid-parentheses.md");

    let report = update_index(tmp.path(), &Config::default()).unwrap();

    assert_eq!(report.total_notes(), 3);
    assert_eq!(report.category_count(), 2);
    assert_eq!(report.new_notes.len(), 3);

    let index = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    let array_section = index.find("### 🔢 array").unwrap();
    let stack_section = index.find("### 📚 stack").unwrap();
    assert!(array_section < stack_section);
    let first = index.find("| 1 | two-sum |").unwrap();
    let second = index.find("| 27 | remove-element |").unwrap();
    assert!(first < second);
    assert!(index
        .contains("[src/stack/20.valid-parentheses.md](src/stack/20.valid-parentheses.md)"));
}

#[test]
fn rerun_without_changes_finds_nothing_new() {
    let tmp = tempdir().unwrap();
    write_note(tmp.path(), "array", "1.two-sum.md");

    let cfg = Config::default();
    update_index(tmp.path(), &cfg).unwrap();
    let before = fs::read_to_string(tmp.path().join("README.md")).unwrap();

    let second = update_index(tmp.path(), &cfg).unwrap();
    assert!(second.new_notes.is_empty());
    let after = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn added_note_is_the_only_new_one_on_the_next_run() {
    let tmp = tempdir().unwrap();
    write_note(tmp.path(), "array", "1.two-sum.md");

    let cfg = Config::default();
    update_index(tmp.path(), &cfg).unwrap();

    write_note(tmp.path(), "stack", "20.valid-parentheses.md");
    let report = update_index(tmp.path(), &cfg).unwrap();
    assert_eq!(report.new_notes.len(), 1);
    assert_eq!(report.new_notes[0].id, 20);
    assert_eq!(report.new_notes[0].title, "valid-parentheses");
}

#[test]
fn zero_identifier_policy_is_applied_consistently() {
    let tmp = tempdir().unwrap();
    write_note(tmp.path(), "array", "0.summary.md");
    write_note(tmp.path(), "array", "1.two-sum.md");

    let filtering = Config::default();
    let report = update_index(tmp.path(), &filtering).unwrap();
    assert_eq!(report.total_notes(), 1);
    let index = fs::read_to_string(&report.index_path).unwrap();
    assert!(!index.contains("0.summary.md"));

    let keeping = Config { exclude_zero_identifier: false, ..Config::default() };
    let report = update_index(tmp.path(), &keeping).unwrap();
    assert_eq!(report.total_notes(), 2);
    // The summary file itself is the one new entry relative to the
    // previously rendered, filtered index.
    assert_eq!(report.new_notes.len(), 1);
    assert_eq!(report.new_notes[0].id, 0);
}

#[test]
fn missing_notes_root_is_fatal_and_writes_nothing() {
    let tmp = tempdir().unwrap();
    let err = update_index(tmp.path(), &Config::default()).unwrap_err();
    assert!(matches!(err, UpdateError::Scan(_)));
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn check_writes_nothing() {
    let tmp = tempdir().unwrap();
    write_note(tmp.path(), "array", "1.two-sum.md");

    let report = check_index(tmp.path(), &Config::default()).unwrap();
    assert_eq!(report.new_notes.len(), 1);
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn config_names_are_honored() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("notes/array");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("1.two-sum.md"), "# note\n").unwrap();

    let cfg = Config {
        notes_dir: "notes".to_string(),
        index_file: "INDEX.md".to_string(),
        ..Config::default()
    };
    let report = update_index(tmp.path(), &cfg).unwrap();
    assert_eq!(report.total_notes(), 1);
    let index = fs::read_to_string(tmp.path().join("INDEX.md")).unwrap();
    assert!(index.contains("[notes/array/1.two-sum.md](notes/array/1.two-sum.md)"));
}
