//! Parallel reconstruction of many CIGAR records.
//!
//! Records are read from a tab-separated file, one per line:
//!
//! ```text
//! cigar<TAB>reference<TAB>query<TAB>reference_start
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A line holding only the
//! CIGAR string is accepted and only makes sense in pseudo mode.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use rayon::prelude::*;

use crate::{
    align::Alignment,
    config::ReconstructConfig,
    error::{CigarError, Result},
};

/// One CIGAR string and the sequences it refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentRecord {
    /// CIGAR string.
    pub cigar: String,
    /// Reference sequence.
    pub reference: String,
    /// Query sequence.
    pub query: String,
    /// 1-based start of the alignment on `reference`.
    pub reference_start: usize,
}

impl AlignmentRecord {
    /// Record with only a CIGAR string, for pseudo reconstruction.
    pub fn pseudo(cigar: impl Into<String>) -> Self {
        AlignmentRecord {
            cigar: cigar.into(),
            ..Default::default()
        }
    }

    /// Reconstruct this record with `config`.
    pub fn reconstruct(&self, config: &ReconstructConfig) -> Result<Alignment> {
        Alignment::run(
            config,
            &self.cigar,
            &self.reference,
            &self.query,
            self.reference_start,
        )
    }
}

/// Reconstruct every record on the rayon pool.
///
/// Results are returned in input order. Each record fails or succeeds on its own.
///
/// ### Example
/// ```
/// use rs_cigar::{batch::{reconstruct_batch, AlignmentRecord}, config::ReconstructConfig};
///
/// let records = [AlignmentRecord::pseudo("3M"), AlignmentRecord::pseudo("3Q")];
/// let results = reconstruct_batch(&records, &ReconstructConfig::default());
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn reconstruct_batch(
    records: &[AlignmentRecord],
    config: &ReconstructConfig,
) -> Vec<Result<Alignment>> {
    log::debug!(
        "Reconstructing {} records in {} mode",
        records.len(),
        config.mode
    );

    records
        .par_iter()
        .map(|record| {
            record.reconstruct(config).map_err(|err| {
                log::warn!("Skipping {}: {err}", record.cigar);
                err
            })
        })
        .collect()
}

/// Read [`AlignmentRecord`]s from a tab-separated file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<AlignmentRecord>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    parse_records(reader)
}

/// Parse [`AlignmentRecord`]s from any buffered reader.
pub fn parse_records(reader: impl BufRead) -> Result<Vec<AlignmentRecord>> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let record = match fields.as_slice() {
            [cigar] => AlignmentRecord::pseudo(*cigar),
            [cigar, reference, query, start] => {
                let reference_start =
                    start
                        .trim()
                        .parse()
                        .map_err(|_| CigarError::MalformedRecord {
                            line: line_no,
                            msg: format!("Invalid reference start '{start}'"),
                        })?;
                AlignmentRecord {
                    cigar: cigar.to_string(),
                    reference: reference.to_string(),
                    query: query.to_string(),
                    reference_start,
                }
            }
            _ => {
                return Err(CigarError::MalformedRecord {
                    line: line_no,
                    msg: format!("Expected 1 or 4 tab-separated fields, got {}", fields.len()),
                })
            }
        };
        records.push(record);
    }

    Ok(records)
}
