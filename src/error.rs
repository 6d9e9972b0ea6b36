// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Not a directory: {}", path.display())]
    #[diagnostic(
        code(nbscrub::scan::not_a_dir),
        help("Pass an existing directory with --root")
    )]
    NotADirectory { path: PathBuf },

    #[error("Malformed notebook: {}", path.display())]
    #[diagnostic(
        code(nbscrub::notebook::malformed),
        help("The file matched *.ipynb but is not valid notebook JSON")
    )]
    MalformedNotebook {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(nbscrub::io::read))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize notebook for {}", path.display())]
    #[diagnostic(code(nbscrub::notebook::serialize))]
    SerializeNotebook {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}", path.display())]
    #[diagnostic(code(nbscrub::io::write))]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}", path.display())]
    #[diagnostic(code(nbscrub::io::remove))]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(nbscrub::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Glob(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
