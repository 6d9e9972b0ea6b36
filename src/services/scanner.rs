// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Notebook tree traversal.
//!
//! Recursive walk from the root in sorted order, skipping hidden path
//! components (which also excludes `.ipynb_checkpoints` and `.git`).
//! Sanitized copies are told apart from originals purely by filename prefix.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

pub struct NotebookScanner {
    root: PathBuf,
    prefix: String,
    matcher: GlobMatcher,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

impl NotebookScanner {
    pub fn new(root: &Path, prefix: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        let matcher = Glob::new("*.ipynb")?.compile_matcher();
        Ok(Self {
            root: root.to_path_buf(),
            prefix: prefix.to_string(),
            matcher,
        })
    }

    /// Sanitized copies left behind by prior runs
    pub fn stale_copies(&self) -> Result<Vec<PathBuf>> {
        self.collect(true)
    }

    /// Current notebooks (sanitized copies excluded)
    pub fn notebooks(&self) -> Result<Vec<PathBuf>> {
        self.collect(false)
    }

    /// Path of the sanitized copy derived from `notebook`: same directory,
    /// filename prefixed
    pub fn sanitized_copy_path(&self, notebook: &Path) -> PathBuf {
        let name = notebook
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        notebook.with_file_name(format!("{}{}", self.prefix, name))
    }

    fn collect(&self, prefixed: bool) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            // depth 0 is the root itself, which may legitimately be "."
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !self.matcher.is_match(name) {
                continue;
            }
            if name.starts_with(&self.prefix) == prefixed {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }
}
