//! File writer for generated components.
//!
//! This module handles writing generated files to disk,
//! with support for dry-run mode.

use crate::error::{CliResult, WriteError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    /// Whether to run in dry-run mode.
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file.
    ///
    /// In dry-run mode, returns the content without writing.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Remove files in `dir` with extension `extension` whose name is not in
    /// `keep`.
    ///
    /// Only files containing `marker` are candidates, so hand-written files
    /// sharing the extension survive. Returns the stale paths; in dry-run
    /// mode nothing is removed.
    pub fn remove_stale(
        &self,
        dir: &Path,
        extension: &str,
        marker: &str,
        keep: &HashSet<String>,
    ) -> CliResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| WriteError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut stale = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| WriteError::ReadDir {
                    path: dir.to_path_buf(),
                    source: e,
                })?
                .path();

            if !path.is_file() || path.extension().is_none_or(|ext| ext != extension) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if keep.contains(name) {
                continue;
            }
            // Unreadable or non-UTF-8 files are not ours.
            if std::fs::read_to_string(&path).is_ok_and(|content| content.contains(marker)) {
                stale.push(path);
            }
        }
        stale.sort();

        if !self.dry_run {
            for path in &stale {
                std::fs::remove_file(path).map_err(|e| WriteError::RemoveFile {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(stale)
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Check if the write was successful (not dry-run).
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }

    /// Get the number of bytes written (0 for dry-run).
    pub fn bytes(&self) -> usize {
        match self {
            WriteResult::Written { bytes, .. } => *bytes,
            WriteResult::DryRun { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const COMPONENT: &str = "export const Home = createIcon('Home', iconNode)";
    const MARKER: &str = "createIcon(";

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Home.tsx");

        let writer = FileWriter::new(false);
        let result = writer.write(&path, COMPONENT).unwrap();

        assert!(result.was_written());
        assert_eq!(result.bytes(), COMPONENT.len());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), COMPONENT);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src/icons/Home.tsx");

        FileWriter::new(false).write(&path, COMPONENT).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Home.tsx");

        let writer = FileWriter::new(true);
        let result = writer.write(&path, COMPONENT).unwrap();

        assert!(!path.exists());
        assert_eq!(result.path(), path);
        assert_eq!(result.bytes(), 0);

        let WriteResult::DryRun { content, .. } = result else {
            panic!("expected dry run");
        };
        assert_eq!(content, COMPONENT);
    }

    #[test]
    fn test_remove_stale() {
        let dir = TempDir::new().unwrap();
        for name in ["Home.tsx", "Old.tsx", "Older.tsx", "notes.md"] {
            std::fs::write(dir.path().join(name), COMPONENT).unwrap();
        }
        let keep: HashSet<String> = ["Home.tsx".to_string()].into();

        let stale = FileWriter::new(false)
            .remove_stale(dir.path(), "tsx", MARKER, &keep)
            .unwrap();

        assert_eq!(
            stale,
            vec![dir.path().join("Old.tsx"), dir.path().join("Older.tsx")]
        );
        assert!(dir.path().join("Home.tsx").exists());
        assert!(dir.path().join("notes.md").exists());
        assert!(!dir.path().join("Old.tsx").exists());
    }

    #[test]
    fn test_remove_stale_dry_run_keeps_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Old.vue"), COMPONENT).unwrap();

        let stale = FileWriter::new(true)
            .remove_stale(dir.path(), "vue", MARKER, &HashSet::new())
            .unwrap();

        assert_eq!(stale.len(), 1);
        assert!(dir.path().join("Old.vue").exists());
    }

    #[test]
    fn test_remove_stale_missing_dir() {
        let stale = FileWriter::new(false)
            .remove_stale(Path::new("/nonexistent/out"), "tsx", MARKER, &HashSet::new())
            .unwrap();
        assert!(stale.is_empty());
    }

    #[test]
    fn test_remove_stale_skips_unmarked_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Old.ts"), COMPONENT).unwrap();
        std::fs::write(dir.path().join("utils.ts"), "export const add = (a, b) => a + b").unwrap();

        let stale = FileWriter::new(false)
            .remove_stale(dir.path(), "ts", MARKER, &HashSet::new())
            .unwrap();

        assert_eq!(stale, vec![dir.path().join("Old.ts")]);
        assert!(dir.path().join("utils.ts").exists());
    }
}
