//! Command-line interface for keysift
//!
//! A single flat command: point the tool at a directory, pick a
//! compression backend, get a per-file report and a summary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

pub mod commands;
mod output;

pub use output::Output;

use crate::analyzer::DEFAULT_THRESHOLD;
use crate::codec::Codec;

/// Keysift - compression-signature triage for candidate key files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing key files to analyze
    #[arg(long, value_name = "PATH")]
    pub target: PathBuf,

    /// Compression backend used as the entropy probe
    #[arg(long, value_enum, default_value = "zlib")]
    pub algo: Codec,

    /// Classification boundary: ratios below this are flagged as honeypots
    #[arg(long, value_name = "RATIO", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        commands::scan::execute(&self, &output)
    }
}
