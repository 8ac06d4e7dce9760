//! Error types for CIGAR reconstruction.

use thiserror::Error;

use crate::cigar::CigarOperation;

/// Result type alias for rs_cigar operations.
pub type Result<T> = std::result::Result<T, CigarError>;

/// Which input sequence a unit failed to slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Reference sequence.
    Reference,
    /// Query (read) sequence.
    Query,
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceKind::Reference => write!(f, "reference"),
            SequenceKind::Query => write!(f, "query"),
        }
    }
}

/// Errors that can occur while validating, tokenizing or reconstructing a CIGAR string.
#[derive(Debug, Error)]
pub enum CigarError {
    /// String does not conform to the CIGAR grammar.
    #[error("Invalid CIGAR format: '{cigar}'")]
    InvalidFormat {
        /// Offending input.
        cigar: String,
    },

    /// Tokenization produced no units.
    #[error("CIGAR string contains no operations")]
    EmptyCigar,

    /// A unit has length zero.
    #[error("CIGAR unit {index} ({operation}) has length 0")]
    ZeroLengthUnit {
        /// Zero-based unit index.
        index: usize,
        /// Operation of the unit.
        operation: CigarOperation,
    },

    /// A unit is longer than a BAM record can encode.
    #[error("CIGAR unit {index} ({operation}) has length {length}, above the maximum of {max}", max = crate::cigar::MAX_UNIT_LENGTH)]
    UnitTooLong {
        /// Zero-based unit index.
        index: usize,
        /// Operation of the unit.
        operation: CigarOperation,
        /// Requested run length.
        length: usize,
    },

    /// Reference start position outside `[1, len(reference)]`.
    #[error("Reference start position {start} outside [1, {reference_length}]")]
    OutOfRangeStart {
        /// Requested 1-based start.
        start: usize,
        /// Length of the supplied reference.
        reference_length: usize,
    },

    /// A unit needs more bases than the sequence has left.
    #[error(
        "CIGAR unit {index} ({operation}) needs {sequence} positions up to {required}, but only {available} available"
    )]
    SequenceTooShort {
        /// Zero-based unit index.
        index: usize,
        /// Operation of the unit.
        operation: CigarOperation,
        /// Sequence that was too short.
        sequence: SequenceKind,
        /// Last 1-based position the unit needs.
        required: usize,
        /// Length of the sequence.
        available: usize,
    },

    /// Reference cursor ended past `len(reference) + 1`.
    #[error("Reference cursor {position} ended past reference of length {reference_length}")]
    ReferenceOverrun {
        /// Final 1-based cursor.
        position: usize,
        /// Length of the supplied reference.
        reference_length: usize,
    },

    /// Reference and query tracks differ in length. Always a defect.
    #[error("Internal error: reference track length {reference_length} != query track length {query_length}")]
    AlignmentLengthMismatch {
        /// Reference track length.
        reference_length: usize,
        /// Query track length.
        query_length: usize,
    },

    /// Malformed line in a record file.
    #[error("Malformed record at line {line}: {msg}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// Error message.
        msg: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages_name_unit() {
        let err = CigarError::SequenceTooShort {
            index: 2,
            operation: CigarOperation::Deletion,
            sequence: SequenceKind::Reference,
            required: 9,
            available: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("unit 2"));
        assert!(msg.contains("(D)"));
        assert!(msg.contains("reference"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CigarError = io.into();
        assert!(matches!(err, CigarError::Io(_)));
    }
}
