// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Build a code cell with an optional stream output and execution count
#[allow(dead_code)]
pub fn code_cell(source: &str, output_text: Option<&str>, count: Option<u64>) -> Value {
    let outputs: Vec<Value> = match output_text {
        Some(text) => vec![json!({
            "output_type": "stream",
            "name": "stdout",
            "text": [text],
        })],
        None => Vec::new(),
    };
    json!({
        "cell_type": "code",
        "source": [source],
        "metadata": {},
        "execution_count": count,
        "outputs": outputs,
    })
}

#[allow(dead_code)]
pub fn markdown_cell(source: &str) -> Value {
    json!({
        "cell_type": "markdown",
        "source": [source],
        "metadata": {},
    })
}

/// Minimal valid notebook document wrapping the given cells
#[allow(dead_code)]
pub fn notebook_json(cells: Vec<Value>) -> String {
    let nb = json!({
        "cells": cells,
        "metadata": {
            "kernelspec": {"name": "python3", "display_name": "Python 3"},
            "language_info": {"name": "python", "version": "3.12.0"},
        },
        "nbformat": 4,
        "nbformat_minor": 5,
    });
    serde_json::to_string_pretty(&nb).unwrap()
}

/// Write `content` at `rel` under `dir`, creating parent directories
#[allow(dead_code)]
pub fn write_file(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
