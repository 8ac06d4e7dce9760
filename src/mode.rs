use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What goes on the reconstructed tracks?
pub enum ReconstructMode {
    #[default]
    /// Symbolic reconstruction.
    /// * Operation letters, gaps and clip placeholders stand in for bases.
    /// * Needs no sequence data.
    ///
    /// ### Example
    /// `2S3M1D`
    /// * Reference: `..MMMD`
    /// * Query:     `SSMMM-`
    Pseudo,
    /// Reconstruction from the actual reference and query bases.
    /// * Bases are sliced from both sequences by two 1-based cursors.
    /// * The reference cursor starts at a caller supplied position.
    ///
    /// ### Example
    /// `2M1I2M` with reference `ACGT` and query `ACXGT`
    /// * Reference: `AC-GT`
    /// * Query:     `ACXGT`
    Literal,
}

impl FromStr for ReconstructMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pseudo" => Ok(ReconstructMode::Pseudo),
            "literal" => Ok(ReconstructMode::Literal),
            _ => Err(format!("Unknown mode '{s}'. Expected 'pseudo' or 'literal'.")),
        }
    }
}

impl std::fmt::Display for ReconstructMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconstructMode::Pseudo => write!(f, "pseudo"),
            ReconstructMode::Literal => write!(f, "literal"),
        }
    }
}
