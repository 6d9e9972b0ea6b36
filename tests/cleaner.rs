// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

mod helpers;

use proptest::prelude::*;
use serde_json::json;

use nbscrub::config::CleanRules;
use nbscrub::domain::{Notebook, Output};
use nbscrub::services::cleaner::{MetadataCleaner, NotebookCleaner};

fn default_cleaner() -> MetadataCleaner {
    MetadataCleaner::new(&CleanRules::default())
}

fn parse(raw: &str) -> Notebook {
    serde_json::from_str(raw).unwrap()
}

// ─── Keep-outputs mode ────────────────────────────────────────────────────────

#[test]
fn keep_outputs_nulls_execution_counts() {
    let raw = helpers::notebook_json(vec![helpers::code_cell("1 + 1", Some("2\n"), Some(3))]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, false);

    assert_eq!(nb.cells[0].execution_count, Some(None));
    // Output content survives
    let outputs = nb.cells[0].outputs.as_ref().unwrap();
    assert_eq!(outputs.len(), 1);
    assert!(matches!(outputs[0], Output::Stream { .. }));
}

#[test]
fn keep_outputs_strips_output_bookkeeping() {
    let cell = json!({
        "cell_type": "code",
        "source": ["2 + 2"],
        "metadata": {},
        "execution_count": 7,
        "outputs": [{
            "output_type": "execute_result",
            "data": {"text/plain": ["4"]},
            "metadata": {"scrolled": true},
            "execution_count": 7,
        }],
    });
    let raw = helpers::notebook_json(vec![cell]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, false);

    let outputs = nb.cells[0].outputs.as_ref().unwrap();
    let Output::ExecuteResult {
        data,
        metadata,
        execution_count,
    } = &outputs[0]
    else {
        panic!("expected execute_result, got {:?}", outputs[0]);
    };
    assert!(data.contains_key("text/plain"), "result data must survive");
    assert!(metadata.is_empty());
    assert!(execution_count.is_none());
}

#[test]
fn keep_outputs_cleaned_cell_snapshot() {
    let cell = json!({
        "cell_type": "code",
        "source": ["2 + 2"],
        "metadata": {},
        "execution_count": 7,
        "outputs": [{
            "output_type": "execute_result",
            "data": {"text/plain": ["4"]},
            "metadata": {"scrolled": true},
            "execution_count": 7,
        }],
    });
    let raw = helpers::notebook_json(vec![cell]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, false);

    insta::assert_snapshot!(
        serde_json::to_string_pretty(&nb.cells[0]).unwrap(),
        @r#"
    {
      "cell_type": "code",
      "source": [
        "2 + 2"
      ],
      "metadata": {},
      "execution_count": null,
      "outputs": [
        {
          "output_type": "execute_result",
          "data": {
            "text/plain": [
              "4"
            ]
          },
          "metadata": {},
          "execution_count": null
        }
      ]
    }
    "#
    );
}

// ─── Strip-all mode ───────────────────────────────────────────────────────────

#[test]
fn clear_all_empties_outputs_keeps_source() {
    let raw = helpers::notebook_json(vec![helpers::code_cell("print(42)", Some("42\n"), Some(1))]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, true);

    assert_eq!(nb.cells[0].source.as_text(), "print(42)");
    assert_eq!(nb.cells[0].outputs.as_deref(), Some(&[][..]));
    assert_eq!(nb.cells[0].execution_count, Some(None));
}

#[test]
fn clear_all_cleaned_cell_snapshot() {
    let raw = helpers::notebook_json(vec![helpers::code_cell("1 + 1", Some("2\n"), Some(3))]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, true);

    insta::assert_snapshot!(
        serde_json::to_string_pretty(&nb.cells[0]).unwrap(),
        @r#"
    {
      "cell_type": "code",
      "source": [
        "1 + 1"
      ],
      "metadata": {},
      "execution_count": null,
      "outputs": []
    }
    "#
    );
}

// ─── Metadata allowlists ──────────────────────────────────────────────────────

#[test]
fn notebook_metadata_reduced_to_allowlist() {
    let raw = helpers::notebook_json(vec![helpers::code_cell("pass", None, None)]);
    let mut nb = parse(&raw);
    assert!(nb.metadata.contains_key("language_info"));

    default_cleaner().clean(&mut nb, true);

    assert!(nb.metadata.contains_key("kernelspec"));
    assert!(!nb.metadata.contains_key("language_info"));
}

#[test]
fn cell_metadata_reduced_to_allowlist() {
    let cell = json!({
        "cell_type": "code",
        "source": ["pass"],
        "metadata": {"tags": ["keep-me"], "scrolled": true, "ExecuteTime": {}},
        "execution_count": null,
        "outputs": [],
    });
    let raw = helpers::notebook_json(vec![cell]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, true);

    let metadata = &nb.cells[0].metadata;
    assert!(metadata.contains_key("tags"));
    assert!(!metadata.contains_key("scrolled"));
    assert!(!metadata.contains_key("ExecuteTime"));
}

#[test]
fn custom_allowlist_is_honored() {
    let rules = CleanRules {
        keep_notebook_metadata: vec!["language_info".into()],
        keep_cell_metadata: vec![],
    };
    let raw = helpers::notebook_json(vec![helpers::code_cell("pass", None, None)]);
    let mut nb = parse(&raw);

    MetadataCleaner::new(&rules).clean(&mut nb, true);

    assert!(nb.metadata.contains_key("language_info"));
    assert!(!nb.metadata.contains_key("kernelspec"));
}

// ─── Markdown cells ───────────────────────────────────────────────────────────

#[test]
fn markdown_cell_gains_no_execution_fields() {
    let raw = helpers::notebook_json(vec![helpers::markdown_cell("# Title")]);
    let mut nb = parse(&raw);

    default_cleaner().clean(&mut nb, true);

    assert_eq!(nb.cells[0].execution_count, None);
    assert!(nb.cells[0].outputs.is_none());
}

// ─── Idempotence ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clean_is_idempotent(
        source in "[a-z0-9 ()+*=]{0,40}",
        count in proptest::option::of(0u64..100),
        text in proptest::option::of("[a-z0-9]{0,20}"),
        clear_all in any::<bool>(),
    ) {
        let raw = helpers::notebook_json(vec![helpers::code_cell(
            &source,
            text.as_deref(),
            count,
        )]);
        let mut once: Notebook = serde_json::from_str(&raw).unwrap();
        let cleaner = default_cleaner();

        cleaner.clean(&mut once, clear_all);
        let mut twice = once.clone();
        cleaner.clean(&mut twice, clear_all);

        prop_assert_eq!(once, twice);
    }
}
