//! Password generation.

use std::fmt;

use rand::Rng;

use super::{GenerationRequest, charset};

/// Why a generation request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// Every character-class toggle is off, leaving an empty alphabet.
    NoClassSelected,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::NoClassSelected => {
                write!(f, "Please select at least one character type")
            }
        }
    }
}

/// Generate one password: `length` independent uniform draws, with
/// replacement, from the request's alphabet.
///
/// The length is taken as already validated; the only check here is the
/// empty-alphabet guard. `gen_range` resamples internally, so every index
/// is drawn without modulo bias.
pub fn generate(request: &GenerationRequest) -> Result<String, GenerationError> {
    let alphabet = charset::build(request);
    if alphabet.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    // All four classes are ASCII, so byte indexing is safe.
    let chars = alphabet.as_bytes();
    let mut rng = rand::thread_rng();

    let password = (0..request.length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect();

    Ok(password)
}
