// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Typed view of the nbformat JSON document.
//!
//! Only the fields the clean transformation touches are modeled; everything
//! else rides along in flattened `extra` maps so a read-modify-write cycle
//! never drops structure this tool does not know about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notebook {
    pub cells: Vec<Cell>,

    #[serde(default)]
    pub metadata: Map<String, Value>,

    pub nbformat: u32,
    pub nbformat_minor: u32,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

/// Cell source as stored in nbformat: either a single string or a list of
/// line strings. Preserved as-is so sanitized copies keep the original shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Source::Lines(Vec::new())
    }
}

impl Source {
    /// Joined source text, regardless of stored shape
    pub fn as_text(&self) -> String {
        match self {
            Source::Text(s) => s.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    pub cell_type: CellType,

    #[serde(default)]
    pub source: Source,

    #[serde(default)]
    pub metadata: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // Option<Option<_>> distinguishes an absent key (markdown/raw cells)
    // from a present-but-null one (unexecuted code cells).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<Option<u64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }

    /// True if the cell carries no execution output at all
    pub fn has_no_outputs(&self) -> bool {
        match &self.outputs {
            None => true,
            Some(outputs) => outputs.is_empty(),
        }
    }
}

/// One execution output, tagged by nbformat's `output_type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    Stream {
        name: String,
        text: Source,
    },
    DisplayData {
        #[serde(default)]
        data: Map<String, Value>,
        #[serde(default)]
        metadata: Map<String, Value>,
    },
    ExecuteResult {
        #[serde(default)]
        data: Map<String, Value>,
        #[serde(default)]
        metadata: Map<String, Value>,
        #[serde(default)]
        execution_count: Option<u64>,
    },
    Error {
        ename: String,
        evalue: String,
        traceback: Vec<String>,
    },
}
