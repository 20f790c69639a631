use std::env;

mod cli;
mod exits;
mod form;
mod pass;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
