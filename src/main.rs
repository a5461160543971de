//! `jsoncompare` command-line tool.
//!
//! Loads an expected ("collection") and an actual ("container") document and
//! reports whether the first is contained in the second.
//!
//! Exit codes:
//! - 0: expected data is present in actual data
//! - 1: at least one mismatch was found
//! - 2: the documents could not be loaded or compared

use clap::{Parser, ValueEnum};
use jsoncompare::parse::load_file;
use jsoncompare::serialize::render_report;
use jsoncompare::{CompareConfig, ReportFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

const EXIT_MATCHED: u8 = 0;
const EXIT_MISMATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Check that all data in one JSON/YAML document is present in another
#[derive(Parser, Debug)]
#[command(name = "jsoncompare", version, about)]
struct Cli {
    /// Collection file: the expected data you are looking for
    #[arg(short = 'c', long, default_value = "collection.json")]
    collection: PathBuf,

    /// Container file: the actual data you are comparing against
    #[arg(short = 'n', long, default_value = "container.json")]
    container: PathBuf,

    /// Enable debug logs of every compared substructure
    #[arg(short, long)]
    debug: bool,

    /// Require list elements to match at identical positions
    #[arg(short = 'k', long, visible_alias = "keeporder")]
    keep_order: bool,

    /// Print each validation error to stdout
    #[arg(short = 'p', long, visible_alias = "printstdout")]
    print_stdout: bool,

    /// YAML or JSON file with comparison settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSONPath selecting the part of the container to compare against
    #[arg(long)]
    actual_root: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Yaml => ReportFormat::Yaml,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(message) => {
            tracing::error!("{}", message);
            eprintln!("error: {}", message);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<u8, String> {
    let config = match &cli.config {
        Some(path) => CompareConfig::from_file(path).map_err(|e| e.to_string())?,
        None => CompareConfig::default(),
    };
    let mut config = config.merge_flags(
        cli.keep_order,
        cli.debug,
        cli.print_stdout,
        cli.actual_root.clone(),
    );
    let format = ReportFormat::from(cli.format);
    // Structured reports own stdout and already list every mismatch
    if config.echo_to_console && format != ReportFormat::Text {
        tracing::warn!(?format, "console echo disabled for structured output");
        config.echo_to_console = false;
    }
    tracing::debug!(
        ?config,
        collection = %cli.collection.display(),
        container = %cli.container.display(),
        "starting comparison"
    );

    let expected = load_file(&cli.collection).map_err(|e| e.to_string())?;
    let actual = load_file(&cli.container).map_err(|e| e.to_string())?;

    let report =
        jsoncompare::compare_values(&expected, &actual, &config).map_err(|e| e.to_string())?;
    let output = render_report(&report, format).map_err(|e| e.to_string())?;
    println!("{}", output.trim_end());

    Ok(if report.matched {
        EXIT_MATCHED
    } else {
        EXIT_MISMATCH
    })
}
