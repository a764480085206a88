//! `stylecheck` command line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use stylecheck_core::config::LintConfig;
use stylecheck_core::engine::LintEngine;
use stylecheck_core::report::{Report, Severity};

#[derive(Debug, Parser)]
#[command(name = "stylecheck")]
#[command(version, about = "Check CSS and HTML class naming conventions")]
struct Cli {
    /// Files or directories to check
    #[arg(required_unless_present = "list_rules")]
    paths: Vec<PathBuf>,

    /// Configuration file (default: stylecheck.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Lowest severity to include in the output
    #[arg(long, value_enum, default_value_t = MinSeverity::Info)]
    min_severity: MinSeverity,

    /// List registered rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MinSeverity {
    Info,
    Warning,
    Error,
}

impl From<MinSeverity> for Severity {
    fn from(value: MinSeverity) -> Self {
        match value {
            MinSeverity::Info => Severity::Info,
            MinSeverity::Warning => Severity::Warning,
            MinSeverity::Error => Severity::Error,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(3);
        }
    }
}

fn run(cli: &Cli) -> stylecheck_core::Result<i32> {
    let config = match &cli.config {
        Some(path) => LintConfig::from_file(path)?,
        None => LintConfig::discover(".")?,
    };

    let engine = LintEngine::new(config)?;

    if cli.list_rules {
        for rule in engine.registry().iter() {
            println!("{:<28} {}", rule.id(), rule.description());
        }
        return Ok(0);
    }

    tracing::info!("Checking {} path(s)", cli.paths.len());

    let mut report = Report::new();
    for path in &cli.paths {
        report.merge(engine.lint_path(path)?);
    }

    let min_severity: Severity = cli.min_severity.into();
    match cli.format {
        Format::Human => print!("{}", report.format_human(min_severity)),
        Format::Json => println!("{}", report.format_json(min_severity)),
    }

    Ok(report.exit_code())
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "stylecheck=debug,stylecheck_core=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
