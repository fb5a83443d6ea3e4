//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `burrow` binary.
pub struct BurrowCommand {
    args: Vec<String>,
}

impl BurrowCommand {
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    pub fn notes_dir(self, path: &Path) -> Self {
        self.flag("--notes-dir", &path.to_string_lossy())
    }

    pub fn attachments_dir(self, path: &Path) -> Self {
        self.flag("--attachments-dir", &path.to_string_lossy())
    }

    pub fn bundles_dir(self, path: &Path) -> Self {
        self.flag("--bundles-dir", &path.to_string_lossy())
    }

    pub fn filter_tag(self, tag: &str) -> Self {
        self.flag("--filter-tag", tag)
    }

    pub fn remove_filter_tag(mut self) -> Self {
        self.args.push("--remove-filter-tag".to_string());
        self
    }

    pub fn exclude_dir(self, name: &str) -> Self {
        self.flag("--exclude-dir", name)
    }

    pub fn log_level(self, level: &str) -> Self {
        self.flag("--log-level", level)
    }

    fn flag(mut self, flag: &str, value: &str) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("burrow").expect("Failed to find burrow binary");
        cmd.args(&self.args);
        cmd.assert()
    }
}

impl Default for BurrowCommand {
    fn default() -> Self {
        Self::new()
    }
}
