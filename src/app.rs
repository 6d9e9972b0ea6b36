// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs;
use std::path::Path;

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::{
    cleaner::{MetadataCleaner, NotebookCleaner},
    nbio,
    scanner::NotebookScanner,
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            prefix = %config.prefix,
            scrub_in_place = config.scrub_in_place,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.sanitize()
    }

    /// Two phases, in strict sequence: purge stale sanitized copies, then
    /// regenerate one copy per current notebook. Any failure aborts the run;
    /// a partially processed tree is left as is.
    fn sanitize(&self) -> Result<()> {
        let root = match &self.cli.root {
            Some(r) => r.clone(),
            None => std::env::current_dir()?,
        };

        let scanner = NotebookScanner::new(&root, &self.config.prefix)?;
        let cleaner = MetadataCleaner::new(&self.config.clean);

        let stale = scanner.stale_copies()?;
        for path in &stale {
            self.print_status(&format!("Removing {}", path.display()));
            if self.cli.dry_run {
                continue;
            }
            fs::remove_file(path).map_err(|source| Error::RemoveFile {
                path: path.clone(),
                source,
            })?;
        }

        // Re-enumerate after the purge so only surviving originals are seen
        let notebooks = scanner.notebooks()?;
        for path in &notebooks {
            self.print_status(&format!("Processing {}", path.display()));
            if self.cli.dry_run {
                continue;
            }
            self.process_notebook(&scanner, &cleaner, path)?;
        }

        if self.cli.dry_run {
            self.print_info(&format!(
                "dry run: would remove {} stale {}, sanitize {} {}",
                stale.len(),
                plural(stale.len(), "copy", "copies"),
                notebooks.len(),
                plural(notebooks.len(), "notebook", "notebooks"),
            ));
        } else {
            self.print_info(&format!(
                "{} stale {} removed, {} {} sanitized",
                stale.len(),
                plural(stale.len(), "copy", "copies"),
                notebooks.len(),
                plural(notebooks.len(), "notebook", "notebooks"),
            ));
        }

        Ok(())
    }

    fn process_notebook(
        &self,
        scanner: &NotebookScanner,
        cleaner: &MetadataCleaner,
        path: &Path,
    ) -> Result<()> {
        let mut nb = nbio::read_nb(path)?;

        if self.config.scrub_in_place {
            // Variant behavior: strip bookkeeping but keep outputs, then
            // overwrite the original
            cleaner.clean(&mut nb, false);
            nbio::write_nb(&nb, path)?;
            debug!(path = %path.display(), "original rewritten in place");
        }

        cleaner.clean(&mut nb, true);
        let copy = scanner.sanitized_copy_path(path);
        nbio::write_nb(&nb, &copy)?;
        debug!(copy = %copy.display(), "sanitized copy written");

        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Prefix: {}", self.config.prefix);
                println!("Scrub in place: {}", self.config.scrub_in_place);
                println!();
                println!("[clean]");
                println!(
                    "  keep_notebook_metadata: {:?}",
                    self.config.clean.keep_notebook_metadata
                );
                println!(
                    "  keep_cell_metadata: {:?}",
                    self.config.clean.keep_cell_metadata
                );
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "nbscrub", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
