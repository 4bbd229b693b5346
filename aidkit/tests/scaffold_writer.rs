//! Integration tests for the front-end scaffold

use aidkit::scaffold::{ScaffoldWriter, DIRECTORIES};
use aidkit::writer::{FileStatus, WriteMode};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    ScaffoldWriter::files()
        .into_iter()
        .map(|file| {
            let bytes = fs::read(root.join(&file.path)).unwrap();
            (file.path, bytes)
        })
        .collect()
}

/// Running the scaffold twice yields byte-identical files
#[test]
fn test_scaffold_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let writer = ScaffoldWriter::new(temp.path());

    let first = writer.write(WriteMode::Write).unwrap();
    assert!(first.files.iter().all(|f| f.status == FileStatus::Created));
    let before = snapshot(temp.path());

    let second = writer.write(WriteMode::Write).unwrap();
    assert!(second.directories.iter().all(|d| !d.created));
    assert!(second.files.iter().all(|f| f.status == FileStatus::Unchanged));
    assert_eq!(before, snapshot(temp.path()));
}

/// Files the scaffold does not own survive a run
#[test]
fn test_unrelated_files_untouched() {
    let temp = TempDir::new().unwrap();
    let components = temp.path().join("src/app/components");
    fs::create_dir_all(&components).unwrap();
    fs::write(components.join("Custom.jsx"), "export default Custom;\n").unwrap();
    fs::write(temp.path().join("package.json"), "{}\n").unwrap();

    ScaffoldWriter::new(temp.path()).write(WriteMode::Write).unwrap();

    assert_eq!(
        fs::read_to_string(components.join("Custom.jsx")).unwrap(),
        "export default Custom;\n"
    );
    assert_eq!(fs::read_to_string(temp.path().join("package.json")).unwrap(), "{}\n");
}

/// Modified scaffold files are restored
#[test]
fn test_scaffold_overwrites_edits() {
    let temp = TempDir::new().unwrap();
    let writer = ScaffoldWriter::new(temp.path());
    writer.write(WriteMode::Write).unwrap();

    let css = temp.path().join("src/styles/globals.css");
    fs::write(&css, "body { color: red; }\n").unwrap();

    let report = writer.write(WriteMode::Write).unwrap();
    let outcome = report.files.iter().find(|f| f.path == css).unwrap();
    assert_eq!(outcome.status, FileStatus::Overwritten);
    assert!(outcome.diff.as_deref().unwrap().contains("-body { color: red; }"));
    assert!(fs::read_to_string(&css).unwrap().starts_with("@tailwind base;"));
}

/// Pre-existing directories are not an error
#[test]
fn test_existing_directories_are_fine() {
    let temp = TempDir::new().unwrap();
    for dir in DIRECTORIES {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
    }

    let report = ScaffoldWriter::new(temp.path()).write(WriteMode::Write).unwrap();
    assert!(report.directories.iter().all(|d| !d.created));
    assert!(temp.path().join("tailwind.config.js").is_file());
    assert!(temp.path().join("src/app/pages/portal.jsx").is_file());
}
