//! CIGAR grammar validation and tokenization.
//!
//! A valid CIGAR string is, anchored over the whole input:
//!
//! ```text
//! (<n>H)? (<n>S)? (<n>[MIDNP=X])* (<n>S)? (<n>H)?
//! ```
//!
//! Clips may only appear at the ends, hard clips outermost, at most one of each per end.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    cigar::{Cigar, CigarOperation, CigarUnit},
    error::{CigarError, Result},
};

lazy_static! {
    static ref CIGAR_GRAMMAR: Regex =
        Regex::new(r"^([0-9]+H)?([0-9]+S)?([0-9]+[MIDNP=X])*([0-9]+S)?([0-9]+H)?$").unwrap();
    static ref CIGAR_UNIT: Regex = Regex::new(r"([0-9]+)([MIDNSHP=X])").unwrap();
}

/// Check that `cigar` conforms to the CIGAR grammar.
///
/// # Errors
/// * [`CigarError::InvalidFormat`] on an empty string, a character outside `[0-9MIDNSHP=X]`,
///   an operation without a length, or a clip in a non-terminal position.
///
/// ### Example
/// ```
/// use rs_cigar::grammar::validate_cigar;
///
/// assert!(validate_cigar("2H3S10M1I4M3S").is_ok());
/// assert!(validate_cigar("5M3Z").is_err());
/// ```
pub fn validate_cigar(cigar: &str) -> Result<()> {
    if cigar.is_empty() || !CIGAR_GRAMMAR.is_match(cigar) {
        return Err(CigarError::InvalidFormat {
            cigar: cigar.to_owned(),
        });
    }
    Ok(())
}

/// Split a validated CIGAR string into units, left to right.
///
/// # Errors
/// * [`CigarError::EmptyCigar`] if no unit is found.
/// * [`CigarError::ZeroLengthUnit`] for a unit like `0M`.
/// * [`CigarError::UnitTooLong`] for a run length above [`MAX_UNIT_LENGTH`](crate::cigar::MAX_UNIT_LENGTH).
/// * [`CigarError::InvalidFormat`] if a run length does not fit in `usize`.
pub fn tokenize(cigar: &str) -> Result<Cigar> {
    let mut units = Vec::new();

    for caps in CIGAR_UNIT.captures_iter(cigar) {
        let length: usize = caps[1].parse().map_err(|_| CigarError::InvalidFormat {
            cigar: cigar.to_owned(),
        })?;
        // Letter class of CIGAR_UNIT only admits known operations.
        let operation = caps[2]
            .chars()
            .next()
            .and_then(CigarOperation::from_char)
            .ok_or_else(|| CigarError::InvalidFormat {
                cigar: cigar.to_owned(),
            })?;
        units.push(CigarUnit::new(length, operation));
    }
    log::trace!("Tokenized {cigar} into {} units", units.len());

    Cigar::from_units(units)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cigar::MAX_UNIT_LENGTH;

    #[test]
    fn test_validate_accepts() {
        for cigar in [
            "6M",
            "3S5M2S",
            "2H3S5M2S4H",
            "1H10M",
            "10M1H",
            "4S",
            "3H",
            "5=1X4=",
            "2M1I2M3D1N4M2P1M",
            "100M5000N100M",
        ] {
            assert!(validate_cigar(cigar).is_ok(), "{cigar}");
        }
    }

    #[test]
    fn test_validate_rejects_bad_character() {
        assert!(matches!(
            validate_cigar("5M3Z"),
            Err(CigarError::InvalidFormat { .. })
        ));
        assert!(validate_cigar("5m").is_err());
        assert!(validate_cigar(" 5M").is_err());
    }

    #[test]
    fn test_validate_rejects_missing_length() {
        assert!(validate_cigar("M").is_err());
        assert!(validate_cigar("5MI").is_err());
        assert!(validate_cigar("12").is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            validate_cigar(""),
            Err(CigarError::InvalidFormat { .. })
        ));
    }

    // Boundary: a second trailing soft clip.
    #[test]
    fn test_validate_rejects_repeated_trailing_soft_clip() {
        assert!(matches!(
            validate_cigar("3S5M2S3S"),
            Err(CigarError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_misplaced_clips() {
        // Soft clip outside hard clip.
        assert!(validate_cigar("3S2H5M").is_err());
        assert!(validate_cigar("5M2H3S").is_err());
        // Clips inside the core.
        assert!(validate_cigar("5M2S5M").is_err());
        assert!(validate_cigar("5M2H5M").is_err());
        assert!(validate_cigar("2H2H5M").is_err());
    }

    #[test]
    fn test_validate_rejects_non_ascii_digits() {
        // Arabic-Indic three.
        assert!(matches!(
            validate_cigar("\u{0663}M"),
            Err(CigarError::InvalidFormat { .. })
        ));
        assert!(validate_cigar("3M\u{0663}D").is_err());
        assert!(matches!(
            tokenize("\u{0663}M"),
            Err(CigarError::EmptyCigar)
        ));
    }

    #[test]
    fn test_tokenize() {
        let cigar = tokenize("2H3S10M1I4=1X3D").unwrap();
        let exp = [
            CigarUnit::new(2, CigarOperation::HardClip),
            CigarUnit::new(3, CigarOperation::SoftClip),
            CigarUnit::new(10, CigarOperation::AlignmentMatch),
            CigarUnit::new(1, CigarOperation::Insertion),
            CigarUnit::new(4, CigarOperation::SequenceMatch),
            CigarUnit::new(1, CigarOperation::SequenceMismatch),
            CigarUnit::new(3, CigarOperation::Deletion),
        ];
        assert_eq!(cigar.units(), exp);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(matches!(tokenize(""), Err(CigarError::EmptyCigar)));
    }

    #[test]
    fn test_tokenize_zero_length() {
        assert!(validate_cigar("0M").is_ok());
        assert!(matches!(
            tokenize("3M0I"),
            Err(CigarError::ZeroLengthUnit { index: 1, operation: CigarOperation::Insertion })
        ));
    }

    #[test]
    fn test_tokenize_length_overflow() {
        let cigar = format!("{}M", "9".repeat(40));
        assert!(validate_cigar(&cigar).is_ok());
        assert!(matches!(
            tokenize(&cigar),
            Err(CigarError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_tokenize_unit_too_long() {
        assert!(matches!(
            tokenize("18446744073709551615M"),
            Err(CigarError::UnitTooLong { index: 0, .. })
        ));
        assert!(matches!(
            tokenize(&format!("4M{}H", MAX_UNIT_LENGTH + 1)),
            Err(CigarError::UnitTooLong { index: 1, operation: CigarOperation::HardClip, .. })
        ));
        assert!(tokenize(&format!("{MAX_UNIT_LENGTH}N")).is_ok());
    }
}
