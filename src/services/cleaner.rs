// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! The clean transformation: strips execution bookkeeping from a notebook.
//!
//! `clear_all = false` keeps output content but drops per-output metadata and
//! execution counts; `clear_all = true` empties the outputs entirely. In both
//! modes, notebook- and cell-level metadata is reduced to an allowlist.

use crate::config::CleanRules;
use crate::domain::{Notebook, Output};

/// Pluggable sanitization policy, mockable in tests.
pub trait NotebookCleaner {
    fn clean(&self, nb: &mut Notebook, clear_all: bool);
}

pub struct MetadataCleaner {
    keep_notebook: Vec<String>,
    keep_cell: Vec<String>,
}

impl MetadataCleaner {
    pub fn new(rules: &CleanRules) -> Self {
        Self {
            keep_notebook: rules.keep_notebook_metadata.clone(),
            keep_cell: rules.keep_cell_metadata.clone(),
        }
    }
}

impl NotebookCleaner for MetadataCleaner {
    fn clean(&self, nb: &mut Notebook, clear_all: bool) {
        nb.metadata
            .retain(|key, _| self.keep_notebook.iter().any(|keep| keep == key));

        for cell in &mut nb.cells {
            cell.metadata
                .retain(|key, _| self.keep_cell.iter().any(|keep| keep == key));

            // Null the count where the key exists; markdown/raw cells have no
            // execution_count key and must not gain one.
            if cell.execution_count.is_some() {
                cell.execution_count = Some(None);
            }

            let Some(outputs) = &mut cell.outputs else {
                continue;
            };

            if clear_all {
                outputs.clear();
                continue;
            }

            for output in outputs.iter_mut() {
                match output {
                    Output::ExecuteResult {
                        metadata,
                        execution_count,
                        ..
                    } => {
                        metadata.clear();
                        *execution_count = None;
                    }
                    Output::DisplayData { metadata, .. } => {
                        metadata.clear();
                    }
                    Output::Stream { .. } | Output::Error { .. } => {}
                }
            }
        }
    }
}
