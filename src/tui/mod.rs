//! Interactive form TUI.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() {
    run_form();
}
