//! Core password logic: length validation and generation.

pub mod charset;
mod generate;
mod validate;

pub use generate::{GenerationError, generate};
pub use validate::{MAX_LENGTH, MIN_LENGTH, ValidationError, validate_length};

/// Parameters for one password generation.
///
/// Built fresh per submission from a validated length and the current
/// toggle states, used once, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}
