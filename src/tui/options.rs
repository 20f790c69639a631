use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::form::FormState;
use crate::pass;
use crate::terminal::{RED, RESET, clear, reset_terminal};

use super::{edit_length, enter_prompt, get_editable_input, print_form, print_help};

/// Interactive form loop. Runs until the user quits.
pub fn run_form() {
    reset_terminal();
    clear();

    let mut state = FormState::default();
    let mut notice: Option<String> = None;

    loop {
        print_form(&state, notice.as_deref());
        notice = None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => submit(&mut state, &mut notice),
            "1" => edit_length(&mut state),
            "2" => state.toggle_upper(),
            "3" => state.toggle_lower(),
            "4" => state.toggle_digits(),
            "5" => state.toggle_symbols(),
            "r" => state.reset(),
            "c" => copy_to_clipboard(&state, &mut notice),
            "h" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            "q" | "e" => {
                clear();
                break;
            }
            _ => notice = Some(format!("{RED}Invalid selection{RESET}")),
        }
    }
}

/// Validate, then generate. A length failure lands on the length field;
/// an empty class set raises the alert line instead.
fn submit(state: &mut FormState, notice: &mut Option<String>) {
    // The error is already on screen; submitting does nothing until the
    // field changes.
    if state.blocked() {
        return;
    }

    match state.request() {
        Ok(request) => match pass::generate(&request) {
            Ok(password) => state.store_password(password, pass::charset::size(&request)),
            Err(e) => *notice = Some(format!("{RED}{e}{RESET}")),
        },
        Err(e) => state.length_error = Some(e),
    }
}

fn copy_to_clipboard(state: &FormState, notice: &mut Option<String>) {
    let password = match &state.password {
        Some(p) => p,
        None => {
            *notice = Some("Nothing to copy yet".to_string());
            return;
        }
    };

    let mut ctx = match ClipboardContext::new() {
        Ok(c) => c,
        Err(e) => {
            *notice = Some(format!("{RED}Clipboard error: {e}{RESET}"));
            return;
        }
    };

    match ctx.set_contents(password.clone()) {
        Ok(_) => {
            // Reading back forces lazy clipboard backends to commit.
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            *notice = Some("*** -COPIED TO CLIPBOARD- ***".to_string());
        }
        Err(e) => {
            *notice = Some(format!("{RED}Clipboard error: {e}{RESET}"));
        }
    }
}
