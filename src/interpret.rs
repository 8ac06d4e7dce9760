use crate::{
    cigar::{CigarOperation, CigarUnit},
    error::{CigarError, Result, SequenceKind},
};

/// Gap symbol.
pub const GAP: char = '-';
/// Clip placeholder symbol.
pub const CLIP: char = '.';
/// Untranslated flank placeholder symbol.
pub const FLANK: char = ' ';

/// Output of one unit on both tracks. Both sides always have the unit's length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Reference track piece.
    pub reference: String,
    /// Query track piece.
    pub query: String,
}

impl Fragment {
    fn repeated(reference: char, query: char, n: usize) -> Self {
        Fragment {
            reference: std::iter::repeat(reference).take(n).collect(),
            query: std::iter::repeat(query).take(n).collect(),
        }
    }
}

/// 1-based positions of the next unconsumed reference and query bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Next reference position.
    pub reference: usize,
    /// Next query position.
    pub query: usize,
}

impl Cursor {
    /// Cursor at `reference_start` on the reference and the first query base.
    pub fn new(reference_start: usize) -> Self {
        Cursor {
            reference: reference_start,
            query: 1,
        }
    }

    /// Move past `unit` according to its consumption profile.
    pub fn advance(self, unit: &CigarUnit) -> Self {
        let op = unit.operation;
        Cursor {
            reference: self.reference + if op.consumes_reference() { unit.length } else { 0 },
            query: self.query + if op.consumes_query() { unit.length } else { 0 },
        }
    }
}

/// Symbolic output of `unit`: operation letters, gaps and clip placeholders.
///
/// ### Example
/// ```
/// use rs_cigar::{cigar::{CigarOperation, CigarUnit}, interpret::interpret_pseudo};
///
/// let frag = interpret_pseudo(&CigarUnit::new(2, CigarOperation::Insertion));
/// assert_eq!(frag.reference, "--");
/// assert_eq!(frag.query, "II");
/// ```
pub fn interpret_pseudo(unit: &CigarUnit) -> Fragment {
    let (reference, query) = unit.operation.pseudo_symbols();
    Fragment::repeated(reference, query, unit.length)
}

/// Literal output of `unit` sliced from `reference` and `query` at `cursor`.
///
/// # Arguments
/// * `index`: Zero-based index of `unit` in its CIGAR string. Only used for errors.
/// * `unit`: Unit to interpret.
/// * `cursor`: Current 1-based positions.
/// * `reference`: Reference sequence.
/// * `query`: Query sequence.
///
/// # Returns
/// * Fragment and the advanced cursor.
///
/// # Errors
/// * [`CigarError::SequenceTooShort`] if the unit reaches past the end of either sequence.
pub fn interpret_literal(
    index: usize,
    unit: &CigarUnit,
    cursor: Cursor,
    reference: &[char],
    query: &[char],
) -> Result<(Fragment, Cursor)> {
    let n = unit.length;
    let op = unit.operation;

    let reference_slice =
        || slice(reference, cursor.reference, n, SequenceKind::Reference, index, op);
    let query_slice = || slice(query, cursor.query, n, SequenceKind::Query, index, op);
    let fill = |c: char| -> String { std::iter::repeat(c).take(n).collect() };

    let fragment = match op {
        CigarOperation::AlignmentMatch
        | CigarOperation::SequenceMatch
        | CigarOperation::SequenceMismatch => Fragment {
            reference: reference_slice()?,
            query: query_slice()?,
        },
        CigarOperation::Insertion => Fragment {
            reference: fill(GAP),
            query: query_slice()?,
        },
        CigarOperation::Deletion | CigarOperation::SkippedRegion => Fragment {
            reference: reference_slice()?,
            query: fill(GAP),
        },
        CigarOperation::SoftClip => Fragment {
            reference: fill(CLIP),
            query: query_slice()?,
        },
        CigarOperation::HardClip | CigarOperation::Padding => Fragment::repeated(CLIP, CLIP, n),
    };

    Ok((fragment, cursor.advance(unit)))
}

/// Check that `unit` fits in sequences of the given lengths at `cursor`, without building its fragment.
///
/// # Returns
/// * The advanced cursor.
///
/// # Errors
/// * [`CigarError::SequenceTooShort`] under the same conditions as [`interpret_literal`].
pub fn check_literal(
    index: usize,
    unit: &CigarUnit,
    cursor: Cursor,
    reference_length: usize,
    query_length: usize,
) -> Result<Cursor> {
    let op = unit.operation;
    if op.consumes_reference() {
        check_span(
            cursor.reference,
            unit.length,
            reference_length,
            SequenceKind::Reference,
            index,
            op,
        )?;
    }
    if op.consumes_query() {
        check_span(
            cursor.query,
            unit.length,
            query_length,
            SequenceKind::Query,
            index,
            op,
        )?;
    }
    Ok(cursor.advance(unit))
}

fn check_span(
    pos: usize,
    n: usize,
    available: usize,
    sequence: SequenceKind,
    index: usize,
    operation: CigarOperation,
) -> Result<()> {
    let required = pos.saturating_add(n).saturating_sub(1);
    if pos < 1 || required > available {
        return Err(CigarError::SequenceTooShort {
            index,
            operation,
            sequence,
            required,
            available,
        });
    }
    Ok(())
}

/// `seq[pos..pos+n)` with 1-based `pos`.
fn slice(
    seq: &[char],
    pos: usize,
    n: usize,
    sequence: SequenceKind,
    index: usize,
    operation: CigarOperation,
) -> Result<String> {
    check_span(pos, n, seq.len(), sequence, index, operation)?;
    Ok(seq[pos - 1..pos - 1 + n].iter().collect())
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_pseudo_table() {
        use CigarOperation::*;

        let exp = [
            (AlignmentMatch, "MMM", "MMM"),
            (SequenceMatch, "===", "==="),
            (SequenceMismatch, "XXX", "XXX"),
            (Insertion, "---", "III"),
            (Deletion, "DDD", "---"),
            (SkippedRegion, "NNN", "---"),
            (SoftClip, "...", "SSS"),
            (HardClip, "...", "..."),
            (Padding, "---", "---"),
        ];
        for (op, reference, query) in exp {
            let frag = interpret_pseudo(&CigarUnit::new(3, op));
            assert_eq!(frag.reference, reference, "{op}");
            assert_eq!(frag.query, query, "{op}");
        }
    }

    #[test]
    fn test_literal_table() {
        use CigarOperation::*;

        const REFERENCE: &str = "ACGTACGT";
        const QUERY: &str = "TTGCAA";
        let (reference, query) = (chars(REFERENCE), chars(QUERY));
        // Reference cursor at 3 (G), query cursor at 2 (T).
        let cursor = Cursor {
            reference: 3,
            query: 2,
        };

        let exp = [
            (AlignmentMatch, "GT", "TG", (5, 4)),
            (SequenceMatch, "GT", "TG", (5, 4)),
            (SequenceMismatch, "GT", "TG", (5, 4)),
            (Insertion, "--", "TG", (3, 4)),
            (Deletion, "GT", "--", (5, 2)),
            (SkippedRegion, "GT", "--", (5, 2)),
            (SoftClip, "..", "TG", (3, 4)),
            (HardClip, "..", "..", (3, 2)),
            (Padding, "..", "..", (3, 2)),
        ];
        for (op, exp_reference, exp_query, (exp_ref_pos, exp_query_pos)) in exp {
            let (frag, next) =
                interpret_literal(0, &CigarUnit::new(2, op), cursor, &reference, &query).unwrap();
            assert_eq!(frag.reference, exp_reference, "{op}");
            assert_eq!(frag.query, exp_query, "{op}");
            assert_eq!(next.reference, exp_ref_pos, "{op}");
            assert_eq!(next.query, exp_query_pos, "{op}");
        }
    }

    #[test]
    fn test_literal_exact_end() {
        let (reference, query) = (chars("ACG"), chars("ACG"));
        let (frag, next) = interpret_literal(
            0,
            &CigarUnit::new(3, CigarOperation::AlignmentMatch),
            Cursor::new(1),
            &reference,
            &query,
        )
        .unwrap();
        assert_eq!(frag.reference, "ACG");
        assert_eq!(next, Cursor { reference: 4, query: 4 });
    }

    #[test]
    fn test_literal_reference_too_short() {
        let (reference, query) = (chars("ACG"), chars("ACGTT"));
        let err = interpret_literal(
            4,
            &CigarUnit::new(3, CigarOperation::Deletion),
            Cursor::new(2),
            &reference,
            &query,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CigarError::SequenceTooShort {
                index: 4,
                operation: CigarOperation::Deletion,
                sequence: SequenceKind::Reference,
                required: 4,
                available: 3,
            }
        ));
    }

    #[test]
    fn test_literal_query_too_short() {
        let (reference, query) = (chars("ACGT"), chars("A"));
        let err = interpret_literal(
            1,
            &CigarUnit::new(2, CigarOperation::SoftClip),
            Cursor::new(1),
            &reference,
            &query,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CigarError::SequenceTooShort {
                sequence: SequenceKind::Query,
                required: 2,
                available: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_check_literal_matches_interpret() {
        let (reference, query) = (chars("ACGT"), chars("ACG"));
        let cursor = Cursor { reference: 3, query: 2 };

        for op in CigarOperation::ALL {
            for n in 1..=4 {
                let unit = CigarUnit::new(n, op);
                let checked = check_literal(7, &unit, cursor, reference.len(), query.len());
                let interpreted = interpret_literal(7, &unit, cursor, &reference, &query);
                match (checked, interpreted) {
                    (Ok(next), Ok((_, exp))) => assert_eq!(next, exp, "{unit}"),
                    (
                        Err(CigarError::SequenceTooShort { sequence: a, required: x, .. }),
                        Err(CigarError::SequenceTooShort { sequence: b, required: y, .. }),
                    ) => {
                        assert_eq!(a, b, "{unit}");
                        assert_eq!(x, y, "{unit}");
                    }
                    (checked, interpreted) => {
                        panic!("{unit}: check {checked:?} vs interpret {interpreted:?}")
                    }
                }
            }
        }
    }

    #[test]
    fn test_literal_hard_clip_needs_no_sequence() {
        let (frag, next) = interpret_literal(
            0,
            &CigarUnit::new(4, CigarOperation::HardClip),
            Cursor::new(1),
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(frag.reference, "....");
        assert_eq!(frag.query, "....");
        assert_eq!(next, Cursor::new(1));
    }
}
