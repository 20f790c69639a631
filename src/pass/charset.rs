//! Character classes and alphabet building.

use super::GenerationRequest;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// Build the alphabet for one request.
///
/// Selected classes are concatenated in a fixed order (lower, upper,
/// digits, symbols) so the same toggles always yield the same alphabet.
/// Empty when no class is selected.
pub fn build(request: &GenerationRequest) -> String {
    let mut alphabet = String::new();

    if request.include_lower {
        alphabet.push_str(LOWERCASE);
    }
    if request.include_upper {
        alphabet.push_str(UPPERCASE);
    }
    if request.include_digits {
        alphabet.push_str(DIGITS);
    }
    if request.include_symbols {
        alphabet.push_str(SYMBOLS);
    }

    alphabet
}

/// Alphabet size for the selected classes (for the entropy readout).
pub fn size(request: &GenerationRequest) -> usize {
    let mut size = 0;
    if request.include_lower {
        size += LOWERCASE.len();
    }
    if request.include_upper {
        size += UPPERCASE.len();
    }
    if request.include_digits {
        size += DIGITS.len();
    }
    if request.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lower: bool, upper: bool, digits: bool, symbols: bool) -> GenerationRequest {
        GenerationRequest {
            length: 8,
            include_lower: lower,
            include_upper: upper,
            include_digits: digits,
            include_symbols: symbols,
        }
    }

    #[test]
    fn concatenates_in_fixed_order() {
        let alphabet = build(&request(true, true, true, true));
        let expected = format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SYMBOLS}");
        assert_eq!(alphabet, expected);
    }

    #[test]
    fn order_is_stable_across_partial_selections() {
        assert_eq!(
            build(&request(true, false, true, false)),
            format!("{LOWERCASE}{DIGITS}")
        );
        assert_eq!(
            build(&request(false, true, false, true)),
            format!("{UPPERCASE}{SYMBOLS}")
        );
    }

    #[test]
    fn empty_when_nothing_selected() {
        assert_eq!(build(&request(false, false, false, false)), "");
        assert_eq!(size(&request(false, false, false, false)), 0);
    }

    #[test]
    fn size_matches_built_alphabet() {
        let combos = [
            (true, false, false, false),
            (false, true, true, false),
            (true, true, true, true),
            (false, false, false, true),
        ];
        for (l, u, d, s) in combos {
            let req = request(l, u, d, s);
            assert_eq!(size(&req), build(&req).len());
        }
    }

    #[test]
    fn classes_are_disjoint() {
        let all = format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SYMBOLS}");
        let mut seen = std::collections::HashSet::new();
        for c in all.chars() {
            assert!(seen.insert(c), "character {c:?} appears in two classes");
        }
    }
}
