use std::env;

use genpass::settings::Settings;
use genpass::{cli, exits, terminal, tui};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            if let Err(e) = tui::run(&Settings::default()) {
                terminal::reset_terminal();
                eprintln!("{e}");
                std::process::exit(e.exit_code());
            }
        }
        _ => cli::run(args),
    }
}
