//! Command implementations and argument parsing for the `pointdemo` CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use pointdemo_core::{DemoDescriptor, DemoOption, PointCloud, PointColor, Registry, RegistryError};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "pointdemo", about = "Browse and sample synthetic point-cloud demos.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List every demo in declaration order.
    List,
    /// Describe one demo and its options.
    Show(ShowCommand),
    /// Generate a point cloud for one demo.
    Generate(GenerateCommand),
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Exact, case-sensitive demo name.
    pub name: String,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Exact, case-sensitive demo name.
    pub name: String,

    /// Override an option, e.g. `--set "Dimensions=3"`. May be repeated.
    #[arg(long = "set", value_name = "OPTION=VALUE")]
    pub overrides: Vec<String>,

    /// Seed for the generator's random number generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Write the cloud to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Point cloud encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One point per line: tab-separated coordinates followed by the colour.
    Tsv,
    /// A single JSON document with the demo name, dimensionality and points.
    Json,
}

impl OutputFormat {
    const fn label(self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Registry lookup, option resolution or generation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// A `--set` argument was not of the form `OPTION=VALUE`.
    #[error("malformed override `{raw}`; expected `OPTION=VALUE` with a non-negative integer")]
    MalformedOverride {
        /// Argument exactly as supplied.
        raw: String,
    },
    /// A resolved value lies outside its option's bounds.
    #[error("option `{option}` of demo `{demo}` must be within {min}..={max}, got {value}")]
    OptionOutOfRange {
        /// Demo being generated.
        demo: String,
        /// Offending option.
        option: String,
        /// Supplied value.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },
    /// The output file could not be created, written or flushed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing rendered output failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    /// JSON encoding failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owned description of one registered demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    /// Registry position.
    pub index: usize,
    /// Demo name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Options in declaration order.
    pub options: Vec<DemoOption>,
}

impl From<&DemoDescriptor> for DemoSummary {
    fn from(descriptor: &DemoDescriptor) -> Self {
        Self {
            index: descriptor.index(),
            name: descriptor.name().to_owned(),
            description: descriptor.description().to_owned(),
            options: descriptor.options().to_vec(),
        }
    }
}

/// A generated cloud awaiting rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCloud {
    /// Name of the demo that produced the cloud.
    pub demo: String,
    /// Requested encoding.
    pub format: OutputFormat,
    /// Generated points.
    pub cloud: PointCloud,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionSummary {
    /// Result of `list`.
    Listing(Vec<DemoSummary>),
    /// Result of `show`.
    Details(DemoSummary),
    /// Result of `generate` without `--output`.
    Cloud(GeneratedCloud),
    /// Result of `generate` with `--output`; nothing is rendered to stdout.
    Written {
        /// File the cloud was written to.
        path: PathBuf,
        /// Number of points written.
        points: usize,
    },
}

/// Executes the CLI command represented by `cli` against `registry`.
///
/// # Errors
/// Returns [`CliError`] when a demo or option is unknown, an override is
/// malformed or out of range, generation fails, or the output file cannot be
/// written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use pointdemo_cli::cli::{Cli, Command, ExecutionSummary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let registry = pointdemo_generators::stock_registry()?;
/// let summary = run_cli(Cli { command: Command::List }, &registry)?;
/// let ExecutionSummary::Listing(demos) = summary else {
///     panic!("list must produce a listing");
/// };
/// assert_eq!(demos.len(), 18);
/// assert_eq!(demos[0].name, "Grid");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, registry),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli, registry: &Registry) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::List => {
            span.record("command", field::display("list"));
            Ok(ExecutionSummary::Listing(
                registry.iter().map(DemoSummary::from).collect(),
            ))
        }
        Command::Show(show) => {
            span.record("command", field::display("show"));
            let descriptor = registry.lookup(&show.name)?;
            Ok(ExecutionSummary::Details(DemoSummary::from(descriptor)))
        }
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            run_generate(generate, registry)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command, registry),
    fields(demo = %command.name, seed = command.seed, format = command.format.label()),
)]
pub(super) fn run_generate(
    command: GenerateCommand,
    registry: &Registry,
) -> Result<ExecutionSummary, CliError> {
    let GenerateCommand {
        name,
        overrides,
        seed,
        format,
        output,
    } = command;
    let descriptor = registry.lookup(&name)?;
    let values = resolve_overrides(descriptor, &overrides)?;
    let cloud = registry.generate(descriptor, &values, seed)?;
    info!(
        demo = descriptor.name(),
        points = cloud.len(),
        dimensions = cloud.dimensions(),
        "command completed"
    );

    let generated = GeneratedCloud {
        demo: descriptor.name().to_owned(),
        format,
        cloud,
    };
    match output {
        Some(path) => write_output_file(path, &generated),
        None => Ok(ExecutionSummary::Cloud(generated)),
    }
}

/// Applies `--set` overrides on top of the defaults and checks every value
/// against its option's bounds.
pub(super) fn resolve_overrides(
    descriptor: &DemoDescriptor,
    overrides: &[String],
) -> Result<Vec<u32>, CliError> {
    let parsed = overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let values = descriptor.resolve_values(parsed)?;
    for (option, &value) in descriptor.options().iter().zip(&values) {
        if !option.contains(value) {
            return Err(CliError::OptionOutOfRange {
                demo: descriptor.name().to_owned(),
                option: option.name().to_owned(),
                value,
                min: option.min(),
                max: option.max(),
            });
        }
    }
    Ok(values)
}

/// Splits `OPTION=VALUE`, trimming whitespace around both halves.
pub(super) fn parse_override(raw: &str) -> Result<(&str, u32), CliError> {
    let malformed = || CliError::MalformedOverride {
        raw: raw.to_owned(),
    };
    let (name, value) = raw.split_once('=').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }
    let value = value.trim().parse::<u32>().map_err(|_| malformed())?;
    Ok((name, value))
}

#[instrument(
    name = "cli.write_output",
    err,
    skip(path, generated),
    fields(path = %path.display()),
)]
fn write_output_file(path: PathBuf, generated: &GeneratedCloud) -> Result<ExecutionSummary, CliError> {
    let file = File::create(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    write_to_path(&path, BufWriter::new(file), generated)?;
    Ok(ExecutionSummary::Written {
        points: generated.cloud.len(),
        path,
    })
}

/// Encodes and flushes `generated` into `writer`, attributing any failure to
/// `path`.
pub(super) fn write_to_path(
    path: &Path,
    mut writer: impl Write,
    generated: &GeneratedCloud,
) -> Result<(), CliError> {
    let at_path = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    write_cloud(generated, &mut writer).map_err(|err| match err {
        CliError::Write(source) => at_path(source),
        CliError::Json(source) => at_path(io::Error::from(source)),
        other => other,
    })?;
    writer.flush().map_err(at_path)
}

#[derive(Serialize)]
struct CloudDocument<'a> {
    demo: &'a str,
    dimensions: usize,
    points: Vec<PointDocument<'a>>,
}

#[derive(Serialize)]
struct PointDocument<'a> {
    coords: &'a [f32],
    color: PointColor,
}

/// Encodes `generated` in its requested format.
///
/// # Errors
/// Returns [`CliError::Write`] if the writer fails and [`CliError::Json`] if
/// JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use pointdemo_cli::cli::{GeneratedCloud, OutputFormat, write_cloud};
/// # use pointdemo_core::{PointCloud, PointColor};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cloud = PointCloud::from_parts(2, vec![1.0, 2.5], vec![PointColor::DEFAULT])?;
/// let generated = GeneratedCloud { demo: "Dot".into(), format: OutputFormat::Tsv, cloud };
/// let mut buffer = Vec::new();
/// write_cloud(&generated, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "1\t2.5\t#039\n");
/// # Ok(())
/// # }
/// ```
pub fn write_cloud(generated: &GeneratedCloud, mut writer: impl Write) -> Result<(), CliError> {
    match generated.format {
        OutputFormat::Tsv => {
            for (coords, color) in generated.cloud.iter() {
                for coord in coords {
                    write!(writer, "{coord}\t")?;
                }
                writeln!(writer, "{color}")?;
            }
        }
        OutputFormat::Json => {
            let document = CloudDocument {
                demo: &generated.demo,
                dimensions: generated.cloud.dimensions(),
                points: generated
                    .cloud
                    .iter()
                    .map(|(coords, color)| PointDocument { coords, color })
                    .collect(),
            };
            serde_json::to_writer(&mut writer, &document)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn option_summary(options: &[DemoOption]) -> String {
    if options.is_empty() {
        return "-".to_owned();
    }
    options
        .iter()
        .map(|option| {
            format!(
                "{}={} [{}..{}]",
                option.name(),
                option.start(),
                option.min(),
                option.max()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders `summary` to `writer`.
///
/// Listings print `index<TAB>name<TAB>options`; details print the name, the
/// description and one line per option; clouds are encoded with
/// [`write_cloud`].
///
/// # Errors
/// Returns [`CliError`] if writing or encoding fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> Result<(), CliError> {
    match summary {
        ExecutionSummary::Listing(demos) => {
            for demo in demos {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    demo.index,
                    demo.name,
                    option_summary(&demo.options)
                )?;
            }
        }
        ExecutionSummary::Details(demo) => {
            writeln!(writer, "{}", demo.name)?;
            writeln!(writer, "{}", demo.description)?;
            for option in &demo.options {
                writeln!(
                    writer,
                    "  {}: min {}, max {}, start {}",
                    option.name(),
                    option.min(),
                    option.max(),
                    option.start()
                )?;
            }
        }
        ExecutionSummary::Cloud(generated) => write_cloud(generated, writer)?,
        ExecutionSummary::Written { .. } => {}
    }
    Ok(())
}
