use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-a" | "--all" => flags.all = true,
            "-U" | "--upper" => flags.upper = true,
            "-D" | "--digits" => flags.digits = true,
            "-S" | "--symbols" => flags.symbols = true,
            "--no-lower" => flags.no_lower = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    // Kept raw; the length rules live in pass::validate_length
                    // so the CLI reports the same messages as the form.
                    flags.length = Some(args[i].clone());
                } else {
                    return Err(ParseError::MissingValue("--length"));
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.number = Some(args[i].parse().map_err(|_| {
                        ParseError::InvalidNumber(args[i].clone())
                    })?);
                } else {
                    return Err(ParseError::MissingValue("--number"));
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_args_give_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help);
        assert!(!flags.all);
        assert!(flags.length.is_none());
        assert!(flags.number.is_none());
    }

    #[test]
    fn short_and_long_flags_match() {
        let short = parse(&args(&["-a", "-U", "-q", "-b"])).unwrap();
        let long = parse(&args(&["--all", "--upper", "--quiet", "--board"])).unwrap();
        assert!(short.all && long.all);
        assert!(short.upper && long.upper);
        assert!(short.quiet && long.quiet);
        assert!(short.clipboard && long.clipboard);
    }

    #[test]
    fn class_flags_parse() {
        let flags = parse(&args(&["-U", "-D", "-S", "--no-lower"])).unwrap();
        assert!(flags.upper);
        assert!(flags.digits);
        assert!(flags.symbols);
        assert!(flags.no_lower);
    }

    #[test]
    fn length_value_is_kept_raw() {
        let flags = parse(&args(&["-l", "10"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("10"));

        // Not parsed here; bad input flows to the validator untouched.
        let flags = parse(&args(&["--length", "abc"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("abc"));
    }

    #[test]
    fn number_must_be_numeric() {
        let flags = parse(&args(&["-n", "3"])).unwrap();
        assert_eq!(flags.number, Some(3));

        let err = parse(&args(&["-n", "three"])).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber(ref s) if s == "three"));
    }

    #[test]
    fn value_flags_require_a_value() {
        let err = parse(&args(&["-l"])).unwrap_err();
        assert!(matches!(err, ParseError::MissingValue("--length")));

        let err = parse(&args(&["-n"])).unwrap_err();
        assert!(matches!(err, ParseError::MissingValue("--number")));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        let err = parse(&args(&["--bogus"])).unwrap_err();
        assert!(matches!(err, ParseError::UnknownArg(ref s) if s == "--bogus"));
        assert_eq!(err.to_string(), "Unknown argument: --bogus");
    }
}
