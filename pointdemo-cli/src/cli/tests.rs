//! Unit tests for the CLI commands and output rendering.

use super::commands::{parse_override, resolve_overrides, write_to_path};
use super::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GeneratedCloud, OutputFormat,
    ShowCommand, render_summary, run_cli,
};

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use pointdemo_core::{Generator, Registry, RegistryError};
use pointdemo_generators::{StockGenerator, stock_registry};
use pointdemo_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn registry() -> Registry {
    stock_registry().expect("stock registry must build")
}

fn generate(name: &str, overrides: &[&str], format: OutputFormat) -> Cli {
    Cli {
        command: Command::Generate(GenerateCommand {
            name: name.to_owned(),
            overrides: overrides.iter().map(|raw| (*raw).to_owned()).collect(),
            seed: 7,
            format,
            output: None,
        }),
    }
}

fn render(summary: &ExecutionSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn run_cli_expecting_error(cli: Cli, registry: &Registry, panic_msg: &str) -> CliError {
    match run_cli(cli, registry) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

#[rstest]
fn list_keeps_declaration_order(registry: Registry) -> TestResult {
    let summary = run_cli(Cli { command: Command::List }, &registry)?;
    let rendered = render(&summary)?;
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 18);
    assert_eq!(
        lines.first().copied(),
        Some("0\tGrid\tPoints Per Side=10 [5..20]")
    );
    assert_eq!(
        lines.get(17).copied(),
        Some("17\tUniform Distribution\tNumber Of Points=50 [20..200], Dimensions=3 [1..10]")
    );
    Ok(())
}

#[rstest]
fn show_prints_description_and_bounds(registry: Registry) -> TestResult {
    let cli = Cli {
        command: Command::Show(ShowCommand {
            name: "Random Walk".to_owned(),
        }),
    };
    let rendered = render(&run_cli(cli, &registry)?)?;
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(
        lines,
        [
            "Random Walk",
            "Random (Gaussian) walk. Smoother than you might think.",
            "  Number Of Points: min 20, max 1000, start 100",
            "  Dimension: min 1, max 1000, start 100",
        ]
    );
    Ok(())
}

#[rstest]
fn generate_tsv_emits_one_line_per_point(registry: Registry) -> TestResult {
    let cli = generate("Grid", &["Points Per Side=5"], OutputFormat::Tsv);
    let rendered = render(&run_cli(cli, &registry)?)?;
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines.first().copied(), Some("0\t0\trgb(0,0,160)"));
    Ok(())
}

#[rstest]
fn generate_json_describes_the_cloud(registry: Registry) -> TestResult {
    let cli = generate("Trefoil Knot", &["Number Of Points=20"], OutputFormat::Json);
    let rendered = render(&run_cli(cli, &registry)?)?;
    let document: serde_json::Value = serde_json::from_str(&rendered)?;
    assert_eq!(document["demo"], "Trefoil Knot");
    assert_eq!(document["dimensions"], 3);
    let points = document["points"].as_array().expect("points must be an array");
    assert_eq!(points.len(), 20);
    assert_eq!(points[0]["color"], "hsl(0,50%,50%)");
    assert_eq!(points[0]["coords"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[rstest]
fn generate_is_reproducible_for_a_seed(registry: Registry) -> TestResult {
    let first = run_cli(generate("Gaussian Cloud", &[], OutputFormat::Tsv), &registry)?;
    let second = run_cli(generate("Gaussian Cloud", &[], OutputFormat::Tsv), &registry)?;
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn generate_writes_output_file(registry: Registry) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("cloud.tsv");
    let cli = Cli {
        command: Command::Generate(GenerateCommand {
            name: "Circle (Evenly Spaced)".to_owned(),
            overrides: Vec::new(),
            seed: 0,
            format: OutputFormat::Tsv,
            output: Some(path.clone()),
        }),
    };
    let summary = run_cli(cli, &registry)?;
    assert_eq!(
        summary,
        ExecutionSummary::Written {
            path: path.clone(),
            points: 50
        }
    );
    assert!(render(&summary)?.is_empty());
    assert_eq!(fs::read_to_string(&path)?.lines().count(), 50);
    Ok(())
}

#[rstest]
fn generate_reports_unwritable_output(registry: Registry) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing").join("cloud.tsv");
    let cli = Cli {
        command: Command::Generate(GenerateCommand {
            name: "Grid".to_owned(),
            overrides: Vec::new(),
            seed: 0,
            format: OutputFormat::Tsv,
            output: Some(path.clone()),
        }),
    };
    let err = run_cli_expecting_error(cli, &registry, "missing directory must fail");
    assert!(matches!(err, CliError::Io { path: failed, .. } if failed == path));
    Ok(())
}

/// Accepts `remaining` bytes, then fails every write.
struct FailingWriter {
    remaining: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
        }
        let accepted = buf.len().min(self.remaining);
        self.remaining -= accepted;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[case::tsv(OutputFormat::Tsv)]
#[case::json(OutputFormat::Json)]
fn mid_write_failures_name_the_output_file(#[case] format: OutputFormat) -> TestResult {
    let generated = GeneratedCloud {
        demo: "Grid".to_owned(),
        format,
        cloud: StockGenerator::Grid.generate(&[5], 0)?,
    };
    let path = Path::new("out/cloud.dat");
    let err = write_to_path(path, FailingWriter { remaining: 16 }, &generated)
        .expect_err("short writer must fail");
    assert!(matches!(
        err,
        CliError::Io { path: ref failed, ref source }
            if failed.as_path() == path && source.kind() == io::ErrorKind::StorageFull
    ));
    Ok(())
}

#[rstest]
fn unknown_demo_is_not_found(registry: Registry) {
    let err = run_cli_expecting_error(
        generate("Swiss Roll", &[], OutputFormat::Tsv),
        &registry,
        "unknown demo must fail",
    );
    assert!(matches!(
        err,
        CliError::Registry(RegistryError::NotFound { .. })
    ));
}

#[rstest]
fn unknown_option_is_rejected(registry: Registry) {
    let err = run_cli_expecting_error(
        generate("Grid", &["Colour=3"], OutputFormat::Tsv),
        &registry,
        "unknown option must fail",
    );
    assert!(matches!(
        err,
        CliError::Registry(RegistryError::UnknownOption { .. })
    ));
}

#[rstest]
#[case::too_low("Points Per Side=4", 4)]
#[case::too_high("Points Per Side=21", 21)]
fn out_of_range_values_are_rejected(
    registry: Registry,
    #[case] raw: &str,
    #[case] expected: u32,
) {
    let demo = registry.lookup("Grid").expect("Grid must exist");
    let err = resolve_overrides(demo, &[raw.to_owned()]).expect_err("value must be rejected");
    match err {
        CliError::OptionOutOfRange {
            option,
            value,
            min,
            max,
            ..
        } => {
            assert_eq!(option, "Points Per Side");
            assert_eq!((value, min, max), (expected, 5, 20));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn bounds_are_inclusive(registry: Registry) -> TestResult {
    let demo = registry.lookup("Two Different-Sized Clusters")?;
    let values = resolve_overrides(
        demo,
        &["Scale=1".to_owned(), "Points Per Cluster=100".to_owned()],
    )?;
    assert_eq!(values, [100, 2, 1]);
    Ok(())
}

#[rstest]
#[case::plain("Dimensions=3", "Dimensions", 3)]
#[case::padded(" Number Of Points = 40 ", "Number Of Points", 40)]
fn parse_override_splits_name_and_value(
    #[case] raw: &str,
    #[case] name: &str,
    #[case] value: u32,
) -> TestResult {
    assert_eq!(parse_override(raw)?, (name, value));
    Ok(())
}

#[rstest]
#[case::no_separator("Dimensions")]
#[case::empty_name("=3")]
#[case::negative("Dimensions=-1")]
#[case::not_a_number("Dimensions=many")]
fn parse_override_rejects_malformed_input(#[case] raw: &str) {
    let err = parse_override(raw).expect_err("override must be rejected");
    assert!(matches!(err, CliError::MalformedOverride { raw: ref got } if got == raw));
}

#[rstest]
fn clap_parses_repeated_overrides() -> TestResult {
    let cli = Cli::try_parse_from([
        "pointdemo",
        "generate",
        "Two Clusters",
        "--set",
        "Dimensions=3",
        "--set",
        "Points Per Cluster=12",
        "--seed",
        "9",
        "--format",
        "json",
    ])?;
    let Command::Generate(command) = cli.command else {
        panic!("generate subcommand expected");
    };
    assert_eq!(command.name, "Two Clusters");
    assert_eq!(command.overrides, ["Dimensions=3", "Points Per Cluster=12"]);
    assert_eq!(command.seed, 9);
    assert_eq!(command.format, OutputFormat::Json);
    assert!(command.output.is_none());
    Ok(())
}

#[rstest]
fn generate_records_span_fields(registry: Registry) {
    let (layer, result) = RecordingLayer::capture(|| {
        run_cli(generate("Linked Rings", &[], OutputFormat::Tsv), &registry)
    });
    assert!(result.is_ok());

    let run_span = layer.span_named("cli.run").expect("cli.run span must exist");
    assert_eq!(
        run_span.fields.get("command").map(String::as_str),
        Some("generate")
    );
    let generate_span = layer
        .span_named("cli.generate")
        .expect("cli.generate span must exist");
    assert_eq!(
        generate_span.fields.get("demo").map(String::as_str),
        Some("Linked Rings")
    );
    assert_eq!(
        generate_span.fields.get("format").map(String::as_str),
        Some("tsv")
    );
    assert!(layer.events().iter().any(|event| {
        event.message() == Some("command completed")
            && event.fields.get("points").map(String::as_str) == Some("100")
    }));
}
