//! Isolated test environment with temp source and target trees.

#![allow(dead_code)]

use super::{BurrowCommand, TestNote};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with notes, attachments, and bundles trees.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    attachments_dir: PathBuf,
    bundles_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let attachments_dir = temp_dir.path().join("attachments");
        let bundles_dir = temp_dir.path().join("bundles");
        fs::create_dir(&notes_dir).expect("Failed to create notes dir");
        fs::create_dir(&attachments_dir).expect("Failed to create attachments dir");
        fs::create_dir(&bundles_dir).expect("Failed to create bundles dir");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            attachments_dir,
            bundles_dir,
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn attachments_dir(&self) -> &Path {
        &self.attachments_dir
    }

    pub fn bundles_dir(&self) -> &Path {
        &self.bundles_dir
    }

    /// Writes a built note into the notes tree and returns its path.
    pub fn add_note(&self, note: &TestNote) -> PathBuf {
        self.add_raw_note(note.filename(), &note.to_content())
    }

    /// Writes raw note content at a path relative to the notes tree,
    /// creating intermediate directories.
    pub fn add_raw_note(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create note parent dir");
        }
        fs::write(&path, content).expect("Failed to write test note");
        path
    }

    /// Writes an attachment into the attachments tree.
    pub fn add_attachment(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.attachments_dir.join(name);
        fs::write(&path, bytes).expect("Failed to write test attachment");
        path
    }

    /// The bundle directory a note with this stem would produce.
    pub fn bundle_dir(&self, stem: &str) -> PathBuf {
        self.bundles_dir.join(stem)
    }

    /// Reads the rewritten note of a bundle.
    pub fn read_index(&self, stem: &str) -> String {
        fs::read_to_string(self.bundle_dir(stem).join("index.md"))
            .expect("Failed to read bundle index")
    }

    /// Lists the file names inside a bundle, sorted.
    pub fn bundle_files(&self, stem: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.bundle_dir(stem))
            .expect("Failed to read bundle dir")
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Creates a BurrowCommand configured for this test environment.
    pub fn cmd(&self) -> BurrowCommand {
        BurrowCommand::new()
            .notes_dir(&self.notes_dir)
            .attachments_dir(&self.attachments_dir)
            .bundles_dir(&self.bundles_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
