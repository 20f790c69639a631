//! Form state for the interactive TUI.
//!
//! The TUI owns one [`FormState`] and mutates it only through the
//! transition methods here, so the length field and its validation
//! result can never drift apart.

use zeroize::Zeroize;

use crate::pass::{self, GenerationRequest, ValidationError};

/// Current state of the generator form.
#[derive(Debug)]
pub struct FormState {
    /// Raw text of the length field, kept as typed.
    pub length_input: String,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Validation result for the length field, refreshed on every edit.
    pub length_error: Option<ValidationError>,
    /// The last generated password. `Some` doubles as the "generated"
    /// flag: it gates the password card and the copy action.
    pub password: Option<String>,
    /// Alphabet size the stored password was drawn from. The entropy
    /// card reads this instead of the live toggles, which may have been
    /// flipped since generation.
    pub password_alphabet: usize,
}

impl Default for FormState {
    /// Fresh form: empty length field, lowercase on, everything else off.
    fn default() -> Self {
        Self {
            length_input: String::new(),
            include_lower: true,
            include_upper: false,
            include_digits: false,
            include_symbols: false,
            length_error: None,
            password: None,
            password_alphabet: 0,
        }
    }
}

impl FormState {
    /// Replace the raw length input and re-validate immediately.
    pub fn set_length_input(&mut self, raw: String) {
        self.length_error = pass::validate_length(&raw).err();
        self.length_input = raw;
    }

    /// True while the length field holds a rejected value. Submission is
    /// blocked in this state.
    pub fn blocked(&self) -> bool {
        self.length_error.is_some()
    }

    pub fn toggle_lower(&mut self) {
        self.include_lower = !self.include_lower;
    }

    pub fn toggle_upper(&mut self) {
        self.include_upper = !self.include_upper;
    }

    pub fn toggle_digits(&mut self) {
        self.include_digits = !self.include_digits;
    }

    pub fn toggle_symbols(&mut self) {
        self.include_symbols = !self.include_symbols;
    }

    /// Validate the current input and assemble a request.
    ///
    /// Runs the validator again even if the field was never edited, so
    /// submitting an untouched (empty) form reports `Required` instead of
    /// generating from a stale state.
    pub fn request(&self) -> Result<GenerationRequest, ValidationError> {
        let length = pass::validate_length(&self.length_input)?;
        Ok(GenerationRequest {
            length,
            include_lower: self.include_lower,
            include_upper: self.include_upper,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
        })
    }

    /// Store a freshly generated password, wiping the previous one. The
    /// alphabet size it was drawn from rides along for the entropy card.
    pub fn store_password(&mut self, new: String, alphabet_size: usize) {
        if let Some(mut old) = self.password.take() {
            old.zeroize();
        }
        self.password = Some(new);
        self.password_alphabet = alphabet_size;
    }

    /// Wipe the password and return every field to its initial state.
    pub fn reset(&mut self) {
        if let Some(mut old) = self.password.take() {
            old.zeroize();
        }
        *self = Self::default();
    }
}
