use crate::{
    cigar::Cigar,
    config::ReconstructConfig,
    error::{CigarError, Result},
    interpret::{check_literal, interpret_literal, interpret_pseudo, Cursor, FLANK},
    mode::ReconstructMode,
};

/// Reconstructed alignment.
///
/// Both tracks always have the same number of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    reference_track: String,
    query_track: String,
}

impl Alignment {
    /// Wrap two finished tracks, checking they line up.
    ///
    /// # Errors
    /// * [`CigarError::AlignmentLengthMismatch`] if the tracks differ in length.
    fn new(reference_track: String, query_track: String) -> Result<Self> {
        let (reference_length, query_length) =
            (reference_track.chars().count(), query_track.chars().count());
        if reference_length != query_length {
            return Err(CigarError::AlignmentLengthMismatch {
                reference_length,
                query_length,
            });
        }
        Ok(Alignment {
            reference_track,
            query_track,
        })
    }

    /// Reference track.
    pub fn reference_track(&self) -> &str {
        &self.reference_track
    }

    /// Query track.
    pub fn query_track(&self) -> &str {
        &self.query_track
    }

    /// Number of aligned columns.
    pub fn len(&self) -> usize {
        self.reference_track.chars().count()
    }

    /// No columns?
    pub fn is_empty(&self) -> bool {
        self.reference_track.is_empty()
    }

    /// `(reference_track, query_track)`
    pub fn into_tuple(self) -> (String, String) {
        (self.reference_track, self.query_track)
    }

    /// Reconstructs an alignment from a CIGAR string returning an [`Alignment`].
    ///
    /// * @param `config`: [`ReconstructConfig`] configuration.
    /// * @param `cigar`: CIGAR string.
    /// * @param `reference`: Reference sequence. Ignored in [`ReconstructMode::Pseudo`].
    /// * @param `query`: Query sequence. Ignored in [`ReconstructMode::Pseudo`].
    /// * @param `reference_start`: 1-based start of the alignment on `reference`. Ignored in [`ReconstructMode::Pseudo`].
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{align::Alignment, config::ReconstructConfig, mode::ReconstructMode};
    ///
    /// let config = ReconstructConfig {
    ///     mode: ReconstructMode::Literal,
    ///     ..Default::default()
    /// };
    /// let alignment = Alignment::run(&config, "2M1I2M", "ACGT", "ACXGT", 1).unwrap();
    /// assert_eq!(alignment.reference_track(), "AC-GT");
    /// assert_eq!(alignment.query_track(), "ACXGT");
    /// ```
    pub fn run(
        config: &ReconstructConfig,
        cigar: impl AsRef<str>,
        reference: impl AsRef<str>,
        query: impl AsRef<str>,
        reference_start: usize,
    ) -> Result<Self> {
        match config.mode {
            ReconstructMode::Pseudo => reconstruct_pseudo(cigar),
            ReconstructMode::Literal => reconstruct_literal(
                cigar,
                reference,
                query,
                reference_start,
                config.truncate_reference,
            ),
        }
    }

    /// Symbolic reconstruction of an already parsed [`Cigar`].
    pub fn from_cigar_pseudo(cigar: &Cigar) -> Result<Self> {
        log::debug!("Pseudo reconstruction of {cigar} ({} units)", cigar.len());

        let mut reference_track = String::new();
        let mut query_track = String::new();
        for unit in cigar {
            let fragment = interpret_pseudo(unit);
            reference_track.push_str(&fragment.reference);
            query_track.push_str(&fragment.query);
        }

        Alignment::new(reference_track, query_track)
    }

    /// Literal reconstruction of an already parsed [`Cigar`].
    ///
    /// # Errors
    /// * [`CigarError::OutOfRangeStart`] if `reference_start` is outside `[1, len(reference)]`.
    /// * [`CigarError::SequenceTooShort`] if a unit runs past the end of either sequence.
    pub fn from_cigar_literal(
        cigar: &Cigar,
        reference: &str,
        query: &str,
        reference_start: usize,
        truncate_reference: bool,
    ) -> Result<Self> {
        let reference: Vec<char> = reference.chars().collect();
        let query: Vec<char> = query.chars().collect();

        if reference_start < 1 || reference_start > reference.len() {
            return Err(CigarError::OutOfRangeStart {
                start: reference_start,
                reference_length: reference.len(),
            });
        }
        log::debug!(
            "Literal reconstruction of {cigar} ({} units) from reference position {reference_start}",
            cigar.len()
        );

        // Bounds are checked for every unit before any track is built.
        let mut end = Cursor::new(reference_start);
        for (index, unit) in cigar.iter().enumerate() {
            end = check_literal(index, unit, end, reference.len(), query.len())?;
        }
        if end.reference > reference.len() + 1 {
            return Err(CigarError::ReferenceOverrun {
                position: end.reference,
                reference_length: reference.len(),
            });
        }

        let mut reference_track = String::new();
        let mut query_track = String::new();

        if !truncate_reference {
            push_flank(
                &reference[..reference_start - 1],
                &mut reference_track,
                &mut query_track,
            );
        }

        let mut cursor = Cursor::new(reference_start);
        for (index, unit) in cigar.iter().enumerate() {
            let (fragment, next) = interpret_literal(index, unit, cursor, &reference, &query)?;
            log::trace!("{unit}: {cursor:?} -> {next:?}");
            reference_track.push_str(&fragment.reference);
            query_track.push_str(&fragment.query);
            cursor = next;
        }

        if !truncate_reference {
            push_flank(
                &reference[cursor.reference - 1..],
                &mut reference_track,
                &mut query_track,
            );
        }

        Alignment::new(reference_track, query_track)
    }
}

/// Reference flank on the reference track, blanks on the query track.
fn push_flank(flank: &[char], reference_track: &mut String, query_track: &mut String) {
    reference_track.extend(flank.iter());
    query_track.extend(std::iter::repeat(FLANK).take(flank.len()));
}

/// Validate, tokenize and reconstruct `cigar` symbolically.
///
/// ### Example
/// ```
/// use rs_cigar::align::reconstruct_pseudo;
///
/// let alignment = reconstruct_pseudo("2S3M1D").unwrap();
/// assert_eq!(alignment.reference_track(), "..MMMD");
/// assert_eq!(alignment.query_track(), "SSMMM-");
/// ```
pub fn reconstruct_pseudo(cigar: impl AsRef<str>) -> Result<Alignment> {
    let cigar: Cigar = cigar.as_ref().parse()?;
    Alignment::from_cigar_pseudo(&cigar)
}

/// Validate, tokenize and reconstruct `cigar` from the bases of `reference` and `query`.
///
/// # Arguments
/// * `cigar`: CIGAR string.
/// * `reference`: Reference sequence.
/// * `query`: Query sequence, soft-clipped bases included.
/// * `reference_start`: 1-based position on `reference` where the alignment starts.
/// * `truncate_reference`: If `false`, the unaligned reference flanks are kept, see [`ReconstructConfig::truncate_reference`].
///
/// ### Example
/// ```
/// use rs_cigar::align::reconstruct_literal;
///
/// let alignment = reconstruct_literal("3M", "ACGTTT", "ACG", 1, true).unwrap();
/// assert_eq!(alignment.into_tuple(), ("ACG".to_owned(), "ACG".to_owned()));
/// ```
pub fn reconstruct_literal(
    cigar: impl AsRef<str>,
    reference: impl AsRef<str>,
    query: impl AsRef<str>,
    reference_start: usize,
    truncate_reference: bool,
) -> Result<Alignment> {
    let cigar: Cigar = cigar.as_ref().parse()?;
    Alignment::from_cigar_literal(
        &cigar,
        reference.as_ref(),
        query.as_ref(),
        reference_start,
        truncate_reference,
    )
}

/// [`reconstruct_pseudo`] as a `(reference_track, query_track)` pair.
pub fn parse_cigar_pseudo(cigar: impl AsRef<str>) -> Result<(String, String)> {
    reconstruct_pseudo(cigar).map(Alignment::into_tuple)
}

/// [`reconstruct_literal`] as a `(reference_track, query_track)` pair.
pub fn parse_cigar_literal(
    cigar: impl AsRef<str>,
    reference: impl AsRef<str>,
    query: impl AsRef<str>,
    reference_start: usize,
    truncate_reference: bool,
) -> Result<(String, String)> {
    reconstruct_literal(cigar, reference, query, reference_start, truncate_reference)
        .map(Alignment::into_tuple)
}
