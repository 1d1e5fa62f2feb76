use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod calculate_cmd;
mod cli;
mod error;
mod explain_cmd;
mod shared;

use calculate_cmd::run_calculate;
use cli::{Cli, Commands};
use error::{OutputFormat, render_error};
use explain_cmd::run_explain;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Calculate(args) => {
            let fallback = OutputFormat::hint(&args.output_format);
            let output_format = match args.output_format.parse::<OutputFormat>() {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_calculate(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Explain(args) => {
            let fallback = OutputFormat::hint(&args.output_format);
            let output_format = match args.output_format.parse::<OutputFormat>() {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_explain(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
