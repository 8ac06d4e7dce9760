#![warn(missing_docs)]

//! Reconstruction of per-base alignments from SAM CIGAR strings.
//!
//! A CIGAR string is validated against the CIGAR grammar, split into
//! run-length encoded units, and each unit is interpreted either symbolically
//! ([`ReconstructMode::Pseudo`]) or by slicing the actual reference and query
//! bases ([`ReconstructMode::Literal`]).
//!
//! ```
//! use rs_cigar::{parse_cigar_literal, parse_cigar_pseudo};
//!
//! assert_eq!(
//!     parse_cigar_pseudo("6M").unwrap(),
//!     ("MMMMMM".to_owned(), "MMMMMM".to_owned())
//! );
//! assert_eq!(
//!     parse_cigar_literal("2M1I2M", "ACGT", "ACXGT", 1, true).unwrap(),
//!     ("AC-GT".to_owned(), "ACXGT".to_owned())
//! );
//! ```

pub mod align;
pub mod batch;
pub mod cigar;
pub mod cli;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpret;
pub mod mode;

pub use align::{
    parse_cigar_literal, parse_cigar_pseudo, reconstruct_literal, reconstruct_pseudo, Alignment,
};
pub use cigar::{Cigar, CigarOperation, CigarUnit};
pub use config::ReconstructConfig;
pub use error::{CigarError, Result};
pub use grammar::validate_cigar;
pub use mode::ReconstructMode;
