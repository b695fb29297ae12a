mod app;
mod graph;
mod loader;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = app::Cli::parse();
    match app::run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(app::AppError::Usage) => {
            print!("{}", app::USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("deppath: {}", e);
            ExitCode::FAILURE
        }
    }
}
