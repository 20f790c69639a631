mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Entry point for flag-driven mode. Parse failures go to stderr and
/// exit nonzero; early exits (help, version) are not errors.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    };
    let _ = ctx.run();
}
