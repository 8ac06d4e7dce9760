use crate::mode::ReconstructMode;

#[derive(Debug, Clone)]
/// Reconstruction configuration.
/// * Per-record inputs (reference, query, start position) are passed alongside, not stored here.
pub struct ReconstructConfig {
    /// Reconstruction method, [`ReconstructMode`].
    pub mode: ReconstructMode,
    /// Only used in [`ReconstructMode::Literal`].
    ///
    /// **If**:
    /// * `true`:
    ///     * Tracks cover only the region the CIGAR string describes.
    /// * `false`:
    ///     * The reference before the start position and after the last consumed base is added to the
    ///       reference track, padded with blanks on the query track.
    pub truncate_reference: bool,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        ReconstructConfig {
            mode: ReconstructMode::default(),
            truncate_reference: true,
        }
    }
}
