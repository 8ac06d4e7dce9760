use std::str::FromStr;

use crate::{
    error::{CigarError, Result},
    grammar,
};

/// Largest run length a BAM record can encode (28 bits).
pub const MAX_UNIT_LENGTH: usize = (1 << 28) - 1;

/// CIGAR operation.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
///
/// Each operation has a fixed consumption profile of (consumes reference, consumes query).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CigarOperation {
    /// Alignment match, can be a sequence match or mismatch. `M`
    AlignmentMatch,
    /// Sequence match. `=`
    SequenceMatch,
    /// Sequence mismatch. `X`
    SequenceMismatch,
    /// Insertion to the reference. `I`
    ///
    /// ### Example:
    /// * Reference: `AC-GT`
    /// * Query:     `ACXGT`
    Insertion,
    /// Deletion from the reference. `D`
    ///
    /// ### Example:
    /// * Reference: `ACXGT`
    /// * Query:     `AC-GT`
    Deletion,
    /// Skipped region from the reference, ex. an intron. `N`
    SkippedRegion,
    /// Soft clip. Clipped bases are still present in the query. `S`
    SoftClip,
    /// Hard clip. Clipped bases are absent from the query. `H`
    HardClip,
    /// Silent deletion from padded reference. `P`
    Padding,
}

impl CigarOperation {
    /// All operations, in SAM op-code order.
    pub const ALL: [CigarOperation; 9] = [
        CigarOperation::AlignmentMatch,
        CigarOperation::Insertion,
        CigarOperation::Deletion,
        CigarOperation::SkippedRegion,
        CigarOperation::SoftClip,
        CigarOperation::HardClip,
        CigarOperation::Padding,
        CigarOperation::SequenceMatch,
        CigarOperation::SequenceMismatch,
    ];

    /// Operation for a SAM operation letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(CigarOperation::AlignmentMatch),
            'I' => Some(CigarOperation::Insertion),
            'D' => Some(CigarOperation::Deletion),
            'N' => Some(CigarOperation::SkippedRegion),
            'S' => Some(CigarOperation::SoftClip),
            'H' => Some(CigarOperation::HardClip),
            'P' => Some(CigarOperation::Padding),
            '=' => Some(CigarOperation::SequenceMatch),
            'X' => Some(CigarOperation::SequenceMismatch),
            _ => None,
        }
    }

    /// SAM operation letter.
    pub fn as_char(&self) -> char {
        match self {
            CigarOperation::AlignmentMatch => 'M',
            CigarOperation::Insertion => 'I',
            CigarOperation::Deletion => 'D',
            CigarOperation::SkippedRegion => 'N',
            CigarOperation::SoftClip => 'S',
            CigarOperation::HardClip => 'H',
            CigarOperation::Padding => 'P',
            CigarOperation::SequenceMatch => '=',
            CigarOperation::SequenceMismatch => 'X',
        }
    }

    /// Does the operation advance the reference cursor?
    pub fn consumes_reference(&self) -> bool {
        matches!(
            self,
            CigarOperation::AlignmentMatch
                | CigarOperation::SequenceMatch
                | CigarOperation::SequenceMismatch
                | CigarOperation::Deletion
                | CigarOperation::SkippedRegion
        )
    }

    /// Does the operation advance the query cursor?
    pub fn consumes_query(&self) -> bool {
        matches!(
            self,
            CigarOperation::AlignmentMatch
                | CigarOperation::SequenceMatch
                | CigarOperation::SequenceMismatch
                | CigarOperation::Insertion
                | CigarOperation::SoftClip
        )
    }

    /// Symbols written to the (reference, query) tracks for each position in pseudo mode.
    pub fn pseudo_symbols(&self) -> (char, char) {
        match self {
            CigarOperation::AlignmentMatch => ('M', 'M'),
            CigarOperation::SequenceMatch => ('=', '='),
            CigarOperation::SequenceMismatch => ('X', 'X'),
            CigarOperation::Insertion => ('-', 'I'),
            CigarOperation::Deletion => ('D', '-'),
            CigarOperation::SkippedRegion => ('N', '-'),
            CigarOperation::SoftClip => ('.', 'S'),
            CigarOperation::HardClip => ('.', '.'),
            CigarOperation::Padding => ('-', '-'),
        }
    }
}

impl std::fmt::Display for CigarOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Single run-length encoded CIGAR unit, ex. `10M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarUnit {
    /// Number of positions. Always `>= 1`.
    pub length: usize,
    /// Operation.
    pub operation: CigarOperation,
}

impl CigarUnit {
    /// Create a new unit.
    ///
    /// # Arguments
    /// * `length`: Run length. Must be non-zero.
    /// * `operation`: [`CigarOperation`].
    pub fn new(length: usize, operation: CigarOperation) -> Self {
        CigarUnit { length, operation }
    }
}

impl std::fmt::Display for CigarUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.operation)
    }
}

/// Parsed CIGAR string.
/// * Units are kept in alignment order (5' to 3' along the reference).
/// * Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cigar {
    units: Vec<CigarUnit>,
}

impl Cigar {
    /// Build from already tokenized units.
    ///
    /// # Errors
    /// * [`CigarError::EmptyCigar`] if `units` is empty.
    /// * [`CigarError::ZeroLengthUnit`] if any unit has length 0.
    /// * [`CigarError::UnitTooLong`] if any unit is longer than [`MAX_UNIT_LENGTH`].
    pub fn from_units(units: Vec<CigarUnit>) -> Result<Self> {
        if units.is_empty() {
            return Err(CigarError::EmptyCigar);
        }
        for (index, unit) in units.iter().enumerate() {
            if unit.length == 0 {
                return Err(CigarError::ZeroLengthUnit {
                    index,
                    operation: unit.operation,
                });
            }
            if unit.length > MAX_UNIT_LENGTH {
                return Err(CigarError::UnitTooLong {
                    index,
                    operation: unit.operation,
                    length: unit.length,
                });
            }
        }
        Ok(Cigar { units })
    }

    /// Units in alignment order.
    pub fn units(&self) -> &[CigarUnit] {
        &self.units
    }

    /// Iterate over units.
    pub fn iter(&self) -> std::slice::Iter<'_, CigarUnit> {
        self.units.iter()
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false` for a constructed [`Cigar`].
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of reference positions the alignment spans.
    pub fn reference_length(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.operation.consumes_reference())
            .map(|u| u.length)
            .sum()
    }

    /// Number of query positions the alignment spans, soft clips included.
    pub fn query_length(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.operation.consumes_query())
            .map(|u| u.length)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = &'a CigarUnit;
    type IntoIter = std::slice::Iter<'a, CigarUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl std::fmt::Display for Cigar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for unit in self.units.iter() {
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

/// Validate then tokenize.
///
/// ```
/// use rs_cigar::cigar::Cigar;
///
/// let cigar: Cigar = "2S5M1I3M".parse().unwrap();
/// assert_eq!(cigar.len(), 4);
/// assert_eq!(cigar.reference_length(), 8);
/// assert_eq!(cigar.query_length(), 11);
/// ```
impl FromStr for Cigar {
    type Err = CigarError;

    fn from_str(s: &str) -> Result<Self> {
        grammar::validate_cigar(s)?;
        grammar::tokenize(s)
    }
}
