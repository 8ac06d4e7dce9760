//! Command-line arguments for the `rs_cigar` binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::Level;

use crate::{
    batch::{read_records, AlignmentRecord},
    config::ReconstructConfig,
    mode::ReconstructMode,
};

/// `rs_cigar` arguments.
#[allow(missing_docs)]
#[derive(Debug, Parser)]
#[command(version, about = "Reconstruct per-base alignments from CIGAR strings")]
pub struct Args {
    #[arg(
        short = 'c',
        long = "cigar",
        required = false,
        value_name = "CIGAR",
        conflicts_with("input"),
        help = "Single CIGAR string to reconstruct"
    )]
    pub cigar: Option<String>,

    #[arg(
        short = 'i',
        long = "input",
        required = false,
        value_name = "PATH",
        conflicts_with("cigar"),
        help = "Tab-separated records: cigar, reference, query, reference start"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "reference",
        value_name = "SEQ",
        requires("cigar"),
        help = "Reference sequence for --cigar"
    )]
    pub reference: Option<String>,

    #[arg(
        short = 'q',
        long = "query",
        value_name = "SEQ",
        requires("cigar"),
        help = "Query sequence for --cigar"
    )]
    pub query: Option<String>,

    #[arg(
        short = 's',
        long = "start",
        value_name = "POS",
        default_value_t = 1,
        help = "1-based reference start position for --cigar"
    )]
    pub start: usize,

    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        default_value_t = ReconstructMode::Pseudo,
        help = "Reconstruction mode [pseudo, literal]"
    )]
    pub mode: ReconstructMode,

    #[arg(
        short = 'u',
        long = "untruncated",
        help = "Keep the reference flanks outside the aligned region (literal mode)"
    )]
    pub untruncated: bool,

    #[arg(
        short = 't',
        long = "threads",
        value_name = "THREADS",
        help = "Number of threads"
    )]
    pub threads: Option<usize>,

    #[arg(short = 'v', long = "verbose", conflicts_with("quiet"), help = "Debug logging")]
    pub verbose: bool,

    #[arg(long = "quiet", conflicts_with("verbose"), help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl Args {
    /// Parse from arguments without the program name.
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    /// [`ReconstructConfig`] from the mode flags.
    pub fn config(&self) -> ReconstructConfig {
        ReconstructConfig {
            mode: self.mode,
            truncate_reference: !self.untruncated,
        }
    }

    /// Log level from `--verbose`/`--quiet`.
    pub fn log_level(&self) -> Level {
        match (self.verbose, self.quiet) {
            (true, _) => Level::Debug,
            (_, true) => Level::Warn,
            _ => Level::Info,
        }
    }

    /// Records from `--input`, or a single record built from `--cigar`.
    pub fn records(&self) -> anyhow::Result<Vec<AlignmentRecord>> {
        match (&self.cigar, &self.input) {
            (Some(cigar), None) => Ok(vec![AlignmentRecord {
                cigar: cigar.clone(),
                reference: self.reference.clone().unwrap_or_default(),
                query: self.query.clone().unwrap_or_default(),
                reference_start: self.start,
            }]),
            (None, Some(path)) => read_records(path)
                .with_context(|| format!("Failed to read records from {}", path.display())),
            _ => Err(anyhow::anyhow!("You must provide either --cigar or --input")),
        }
    }
}
