//! Flag-driven, non-interactive mode.

mod context;
mod flags;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use prompts::Prompts;

/// Parse `args`, run, and exit with the matching status on failure.
pub fn run(args: Vec<String>) {
    let ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => e.exit(),
    };
    if let Err(e) = ctx.run() {
        ctx.prompts.error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
