//! Command-line interface for browsing and sampling the stock demos.
//!
//! `list` and `show` describe the registry; `generate` runs one demo and
//! writes its point cloud as TSV or JSON.

mod commands;

pub use commands::{
    Cli, CliError, Command, DemoSummary, ExecutionSummary, GenerateCommand, GeneratedCloud,
    OutputFormat, ShowCommand, render_summary, run_cli, write_cloud,
};

#[cfg(test)]
mod tests;
