use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use log::Level;

use cyber_refactor::{Cli, run};
use workbench::log_init::init_logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        if let Err(err) = init_logger(path, Level::Debug) {
            eprintln!("cyber-refactor: {err}");
        }
    }

    let mut stdout = std::io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    match run(&cli, &mut stdout, color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("cyber-refactor: {err}");
            ExitCode::FAILURE
        }
    }
}
