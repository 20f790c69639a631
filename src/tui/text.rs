//! Screen text for the interactive form.

use crate::form::FormState;
use crate::terminal::{
    RED, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, clear, entropy_strength, print_rule,
};

/// Shared prompt label for every menu read.
pub fn enter_prompt() -> &'static str {
    "Enter an option"
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Redraw the whole screen: the form box, an optional notice line, and
/// the password card once something has been generated.
pub fn print_form(state: &FormState, notice: Option<&str>) {
    clear();

    box_top("Password Generator");

    if state.length_input.trim().is_empty() {
        box_line("1) Password length: (not set)");
    } else {
        box_line(&format!("1) Password length: {}", state.length_input));
    }
    if let Some(err) = state.length_error {
        box_line(&format!("   {RED}{err}{RESET}"));
    }
    box_line("");
    box_line(&format!(
        "2) {} Uppercase Letters",
        checkbox(state.include_upper)
    ));
    box_line(&format!(
        "3) {} Lowercase Letters",
        checkbox(state.include_lower)
    ));
    box_line(&format!("4) {} Numbers", checkbox(state.include_digits)));
    box_line(&format!("5) {} Symbols", checkbox(state.include_symbols)));
    print_rule();
    box_line("Enter generate | r reset | c copy | h help | q quit");
    box_bottom();

    if let Some(msg) = notice {
        println!("{msg}");
    }
    println!();

    if let Some(password) = &state.password {
        // Sized by the alphabet recorded at generation time, so flipping
        // a toggle afterwards cannot relabel the shown password.
        let bits = calculate_entropy(password.chars().count(), state.password_alphabet);

        box_top("Password");
        box_line_center(password);
        box_line_center(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
        box_bottom();
        println!();
    }
}

/// Print CLI usage. Shown by `-h` and from the form's help action.
pub fn print_help() {
    box_top("Help");
    box_line("Usage: passform [OPTIONS]");
    box_line("Run with no arguments to open the interactive form.");
    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}"));
    box_opt("-l, --length <N>", "Password length, 6 through 12.");
    box_opt("-U, --upper", "Add uppercase letters.");
    box_opt("-D, --digits", "Add numbers.");
    box_opt("-S, --symbols", "Add symbols (!@#$%^&*()_+).");
    box_opt("-a, --all", "Shorthand for -U -D -S.");
    box_opt("--no-lower", "Drop the default lowercase letters.");
    box_opt("-n, --number <N>", "How many passwords to generate. Default 1.");
    box_opt("-b, --board", "Copy to the clipboard instead of printing.");
    box_opt("-q, --quiet", "Suppress warnings and prompts.");
    box_opt("-v, --version", "Print the version and exit.");
    box_opt("-h, --help", "Print this help and exit.");
    box_line("");
    box_line(&format!("{UNDERLINE}Examples{RESET}"));
    box_line("passform -l 12 -a");
    box_line("passform -l 8 -U -D -b");
    box_bottom();
}
