//! Isolated vault environment with a temp directory.

use super::AlmanacCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test vault backed by a temporary directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for laying out notes and templates.
pub struct TestVault {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the vault root
    vault_dir: PathBuf,
}

impl TestVault {
    /// Creates a new empty vault.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let vault_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            vault_dir,
        }
    }

    /// Returns the vault root path.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Writes a note at a vault-relative path, creating parent folders.
    pub fn write_note(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.vault_dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create note folders");
        }
        std::fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Installs a template for a note kind (`date`, `week`, ..., `unique`).
    pub fn add_template(&self, kind: &str, content: &str) -> PathBuf {
        self.write_note(&format!("_templates/{kind}.md"), content)
    }

    /// Reads a vault-relative file to a string.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.vault_dir.join(rel)).expect("Failed to read file")
    }

    /// Returns whether a vault-relative path exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.vault_dir.join(rel).exists()
    }

    /// Creates an AlmanacCommand configured for this vault.
    pub fn cmd(&self) -> AlmanacCommand {
        AlmanacCommand::new().dir(&self.vault_dir)
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}
