// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nbscrub")]
#[command(version)]
#[command(about = "Generate output-stripped copies of Jupyter notebooks", long_about = None)]
pub struct Cli {
    /// Root of the notebook tree (defaults to the current directory)
    #[arg(short, long, env = "NBSCRUB_ROOT")]
    pub root: Option<PathBuf>,

    /// Filename prefix for sanitized copies
    #[arg(short, long, env = "NBSCRUB_PREFIX")]
    pub prefix: Option<String>,

    /// Also rewrite originals in place with execution metadata stripped
    /// (outputs kept)
    #[arg(long)]
    pub scrub_in_place: bool,

    /// Report what would be removed and written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
