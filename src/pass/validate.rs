//! Length field validation.

use std::fmt;
use std::num::IntErrorKind;

/// Smallest accepted password length.
pub const MIN_LENGTH: usize = 6;
/// Largest accepted password length.
pub const MAX_LENGTH: usize = 12;

/// Why a raw length input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty.
    Required,
    /// The field does not hold an integer.
    NotANumber,
    /// Below [`MIN_LENGTH`].
    TooShort,
    /// Above [`MAX_LENGTH`].
    TooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "Password is required"),
            ValidationError::NotANumber => write!(f, "Password length must be a number"),
            ValidationError::TooShort => {
                write!(f, "Password must be at least {MIN_LENGTH} characters")
            }
            ValidationError::TooLong => {
                write!(f, "Password must be less than {MAX_LENGTH} characters")
            }
        }
    }
}

/// Check a raw length input against the accepted range.
///
/// The input is trimmed first; an absent value is passed as `""`. Parsing
/// is signed so that a negative length reports `TooShort` rather than
/// `NotANumber`, and parse overflow maps to the matching range error so a
/// 20-digit length still reads as `TooLong`. Pure, no side effects -
/// callers re-run it on every change to the field and once more on
/// submission.
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }

    let length: i64 = match raw.parse() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::TooLong,
                IntErrorKind::NegOverflow => ValidationError::TooShort,
                _ => ValidationError::NotANumber,
            });
        }
    };

    if length < MIN_LENGTH as i64 {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_LENGTH as i64 {
        return Err(ValidationError::TooLong);
    }

    Ok(length as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_length_in_range() {
        for len in MIN_LENGTH..=MAX_LENGTH {
            assert_eq!(validate_length(&len.to_string()), Ok(len));
        }
    }

    #[test]
    fn rejects_below_min_as_too_short() {
        assert_eq!(validate_length("5"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("0"), Err(ValidationError::TooShort));
        assert_eq!(validate_length("-3"), Err(ValidationError::TooShort));
    }

    #[test]
    fn rejects_above_max_as_too_long() {
        assert_eq!(validate_length("13"), Err(ValidationError::TooLong));
        assert_eq!(validate_length("9999"), Err(ValidationError::TooLong));
    }

    #[test]
    fn overflowing_magnitudes_still_report_the_range() {
        // Wider than i64 on both sides; the bound message still applies.
        assert_eq!(
            validate_length("99999999999999999999"),
            Err(ValidationError::TooLong)
        );
        assert_eq!(
            validate_length("-99999999999999999999"),
            Err(ValidationError::TooShort)
        );
    }

    #[test]
    fn rejects_empty_as_required() {
        assert_eq!(validate_length(""), Err(ValidationError::Required));
        assert_eq!(validate_length("   "), Err(ValidationError::Required));
    }

    #[test]
    fn rejects_non_numeric_as_not_a_number() {
        assert_eq!(validate_length("abc"), Err(ValidationError::NotANumber));
        assert_eq!(validate_length("8x"), Err(ValidationError::NotANumber));
        assert_eq!(validate_length("7.5"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_length(" 8 "), Ok(8));
        assert_eq!(validate_length("\t10\n"), Ok(10));
    }

    #[test]
    fn messages_name_the_bounds() {
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "Password must be less than 12 characters"
        );
    }
}
