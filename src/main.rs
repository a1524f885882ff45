use std::env;
use std::process::ExitCode;

use clap::Parser;

use vaultpass::{cli, exits, logging};

fn main() -> ExitCode {
    exits::install_handlers();

    let bare = env::args_os().len() == 1;
    let args = cli::Args::parse();
    logging::init(&args.log_level);

    match cli::run(args, bare) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
