//! CLI context - bundles parsed flags and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::pass::{self, GenerationRequest};
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub clipboard: Option<ClipboardContext>,
}

/// Map flags to a generation request. The length value goes through the
/// same validation the interactive form uses, so both surfaces report
/// identical messages.
fn request_from_flags(flags: &CliFlags) -> Result<GenerationRequest, pass::ValidationError> {
    let raw = flags.length.as_deref().unwrap_or("");
    let length = pass::validate_length(raw)?;

    Ok(GenerationRequest {
        length,
        include_lower: !flags.no_lower,
        include_upper: flags.upper || flags.all,
        include_digits: flags.digits || flags.all,
        include_symbols: flags.symbols || flags.all,
    })
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        Ok(Self {
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        let request = self.build_request();
        self.handle_clipboard();
        self.generate_output(&request);
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn build_request(&self) -> GenerationRequest {
        match request_from_flags(&self.flags) {
            Ok(request) => request,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        }
    }

    fn handle_clipboard(&mut self) {
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                    // Clipboard stays None; output falls back to the terminal.
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self, request: &GenerationRequest) {
        let count = match self.flags.number {
            Some(0) => {
                prompts::warn("--number 0 raised to 1");
                1
            }
            Some(n) => n,
            None => 1,
        };

        let mut buffer = String::new();
        for i in 0..count {
            match pass::generate(request) {
                Ok(mut password) => {
                    if i > 0 {
                        buffer.push('\n');
                    }
                    buffer.push_str(&password);
                    password.zeroize();
                }
                Err(e) => {
                    buffer.zeroize();
                    prompts::error(&e.to_string());
                    std::process::exit(2);
                }
            }
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(buffer.clone()) {
                Ok(_) => {
                    // Reading back forces lazy clipboard backends to commit.
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                }
            }
        } else {
            println!("{}", buffer);
        }
        buffer.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ValidationError;

    #[test]
    fn lowercase_is_the_default_class() {
        let flags = CliFlags {
            length: Some("8".into()),
            ..Default::default()
        };
        let request = request_from_flags(&flags).unwrap();
        assert_eq!(request.length, 8);
        assert!(request.include_lower);
        assert!(!request.include_upper);
        assert!(!request.include_digits);
        assert!(!request.include_symbols);
    }

    #[test]
    fn all_enables_every_class() {
        let flags = CliFlags {
            length: Some("12".into()),
            all: true,
            ..Default::default()
        };
        let request = request_from_flags(&flags).unwrap();
        assert!(request.include_lower);
        assert!(request.include_upper);
        assert!(request.include_digits);
        assert!(request.include_symbols);
    }

    #[test]
    fn no_lower_wins_over_all() {
        let flags = CliFlags {
            length: Some("10".into()),
            all: true,
            no_lower: true,
            ..Default::default()
        };
        let request = request_from_flags(&flags).unwrap();
        assert!(!request.include_lower);
        assert!(request.include_upper);
        assert!(request.include_digits);
        assert!(request.include_symbols);
    }

    #[test]
    fn missing_length_reads_as_required() {
        let flags = CliFlags::default();
        let err = request_from_flags(&flags).unwrap_err();
        assert_eq!(err, ValidationError::Required);
    }

    #[test]
    fn bad_length_uses_form_validation() {
        let flags = CliFlags {
            length: Some("4".into()),
            ..Default::default()
        };
        assert_eq!(
            request_from_flags(&flags).unwrap_err(),
            ValidationError::TooShort
        );

        let flags = CliFlags {
            length: Some("chunky".into()),
            ..Default::default()
        };
        assert_eq!(
            request_from_flags(&flags).unwrap_err(),
            ValidationError::NotANumber
        );
    }
}
