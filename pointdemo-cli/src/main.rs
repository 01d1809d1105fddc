//! CLI entry point for browsing and sampling the stock point-cloud demos.
//!
//! Builds the stock registry once, parses arguments with clap, runs the
//! requested command and renders its result to stdout. Failures are logged
//! with their stable error codes and mapped to a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use pointdemo_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use pointdemo_core::RegistryError;
use pointdemo_generators::stock_registry;
use tracing::{error, field};

/// Build the registry, execute the command, render the summary, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let registry = stock_registry().context("failed to build demo registry")?;
    let summary = run_cli(cli, &registry).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let registry_error = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Registry(registry) => Some(registry),
                _ => None,
            })
            .or_else(|| err.downcast_ref::<RegistryError>());
        let code = registry_error.map(|registry| field::display(registry.code().as_str()));
        let generator_code = registry_error
            .and_then(|registry| registry.generator_code())
            .map(|code| field::display(code.as_str()));

        error!(
            error = %format_args!("{err:#}"),
            code,
            generator_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
