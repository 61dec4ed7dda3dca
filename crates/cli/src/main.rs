use std::process::ExitCode;

use clap::Parser;

use silomap_cli::{Cli, MALFORMED_HINT, malformed_input, read_input, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    silomap_observability::init(&cli.log_config());

    let result = read_input(cli.input_path()).and_then(|input| run(&cli, &input, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match malformed_input(&err) {
            Some(domain) => {
                eprintln!("{MALFORMED_HINT}\n{domain}");
                ExitCode::from(2)
            }
            None => {
                tracing::error!(error = %format!("{err:#}"), "silomap failed");
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}
