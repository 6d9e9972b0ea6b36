// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Notebook file read/write.
//!
//! Serialization is deterministic (sorted object keys, pretty-printed,
//! trailing newline), so re-running over an unchanged tree produces
//! byte-identical sanitized copies.

use std::fs;
use std::path::Path;

use crate::domain::Notebook;
use crate::error::{Error, Result};

pub fn read_nb(path: &Path) -> Result<Notebook> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::MalformedNotebook {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_nb(nb: &Notebook, path: &Path) -> Result<()> {
    let mut raw = serde_json::to_string_pretty(nb).map_err(|source| Error::SerializeNotebook {
        path: path.to_path_buf(),
        source,
    })?;
    raw.push('\n');
    fs::write(path, raw).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
