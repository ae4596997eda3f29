use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use ipcalc_cidr::report::Report;
use ipcalc_cidr::Cidr;
use tracing::{debug, error, Level};

const USAGE: &str = "Usage: ipcalc <IP>/<mask>";
const INVALID_CIDR: &str = "Invalid CIDR notation";

/// IPv4 subnet calculator
#[derive(Parser)]
#[command(name = "ipcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// IPv4 address in CIDR notation (e.g., 192.168.1.10/24)
    #[arg(value_name = "IP/MASK")]
    cidr: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON output (pretty-printed)
    Json,
    /// JSON output (compact)
    JsonCompact,
    /// CSV output
    Csv,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            kind => {
                let argc = std::env::args_os().skip(1).count();
                println!("{}", parse_failure_message(kind, argc));
                return ExitCode::FAILURE;
            }
        },
    };

    init_logging(cli.verbose);

    if cli.verbose {
        eprintln!("{} Calculating: {}", "›".blue(), cli.cidr);
    }

    let cidr = match Cidr::parse(&cli.cidr) {
        Ok(cidr) => cidr,
        Err(e) => {
            debug!(input = %cli.cidr, error = %e, "rejected input");
            println!("{}", INVALID_CIDR);
            return ExitCode::FAILURE;
        }
    };

    // Render fully before printing so a failure never leaves half a report
    match render(&cidr.report(), cli.output) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to render report: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// A lone argument clap rejected as an unknown flag (e.g. `-5.0.0.0/8`) is
/// a bad address, not a wrong argument count.
fn parse_failure_message(kind: ErrorKind, argc: usize) -> &'static str {
    if kind == ErrorKind::UnknownArgument && argc == 1 {
        INVALID_CIDR
    } else {
        USAGE
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Human => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::JsonCompact => serde_json::to_string(report)?,
        OutputFormat::Csv => render_csv(report)?,
    };
    Ok(out)
}

fn render_csv(report: &Report) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.serialize(report)?;
    let bytes = wtr.into_inner()?;
    let text = String::from_utf8(bytes)?;
    Ok(text.trim_end().to_string())
}
