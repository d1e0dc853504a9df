//! SVG file discovery.
//!
//! Only the top level of the input directory is scanned. Files are returned
//! sorted by file name so a run is deterministic across platforms.

use crate::error::{CliError, CliResult, ScanError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A discovered SVG file with its content.
#[derive(Debug, Clone)]
pub struct SvgFile {
    /// Path to the file.
    pub path: PathBuf,

    /// File name including the `.svg` extension.
    pub file_name: String,

    /// File content.
    pub content: String,
}

/// Scanner for discovering SVG files.
#[derive(Debug)]
pub struct SvgScanner {
    /// Directory to scan.
    root: PathBuf,

    /// Whether to respect .gitignore files.
    respect_gitignore: bool,
}

impl SvgScanner {
    /// Create a new scanner for the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: false,
        }
    }

    /// Set whether to respect .gitignore files.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Scan the directory and return all SVG files.
    pub fn scan(&self) -> CliResult<Vec<SvgFile>> {
        if !self.root.is_dir() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(1))
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .hidden(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() || !is_svg(path) {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!(path = %path.display(), "Skipping file with non UTF-8 name");
                continue;
            };

            let content = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

            files.push(SvgFile {
                path: path.to_path_buf(),
                file_name: file_name.to_string(),
                content,
            });
        }

        if files.is_empty() {
            return Err(ScanError::no_svg_files(self.root.clone()).into());
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        tracing::debug!(root = %self.root.display(), count = files.len(), "Scanned SVG files");

        Ok(files)
    }

    /// Scan without failing on empty results.
    ///
    /// Returns an empty vector if no files are found.
    pub fn scan_allow_empty(&self) -> CliResult<Vec<SvgFile>> {
        match self.scan() {
            Ok(files) => Ok(files),
            Err(CliError::Scan(ScanError::NoSvgFiles { .. })) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "svg")
}
