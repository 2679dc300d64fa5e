use clap::Parser;
use cli::app::App;
use std::process::ExitCode;

mod cli;
mod logging;
mod ui;

fn main() -> ExitCode {
    let app = App::parse();

    if let Err(e) = logging::init(&app.log_level) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match app.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
