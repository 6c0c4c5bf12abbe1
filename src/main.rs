//! Algoref: programming reference CLI

use algoref::catalog::{self, Section};
use algoref::config::{default_config_json, load_config, Config, CONFIG_FILENAME};
use algoref::reporter::{ConsoleReporter, JsonReporter};
use algoref::{classify_traced, Classification};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Algoref: algorithm and data-structure reference with Big-O quality grading
#[derive(Parser, Debug)]
#[command(name = "algoref")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format as JSON
    #[arg(long, short, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output (descriptions, style classes)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to config file (default: search .algorefrc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify Big-O notations into quality tiers (reads stdin lines when none given)
    Classify {
        /// Notations such as "O(n log n)" or "Θ(1)"
        notations: Vec<String>,
    },

    /// Render catalog sections (default: all, or `sections` from config)
    Show {
        /// Sections to render, e.g. data-structures, sorting-algorithms
        sections: Vec<Section>,
    },

    /// Check how every catalog notation is classified
    Audit {
        /// Exit 1 if any notation falls through to the default tier
        #[arg(long)]
        strict: bool,
    },

    /// Create .algorefrc.json with sensible defaults
    Init {
        /// Write `"strict": true` into the config
        #[arg(long)]
        strict: bool,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    // Config is only needed by commands that render something
    let settings = |strict: bool| -> Result<(Config, Output)> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config = load_config(&cwd, args.config.as_deref())?.merge_with_cli(
            strict,
            args.no_color,
            args.verbose,
        );
        let output = Output {
            json: args.json,
            colors: config.use_colors(),
            verbose: config.is_verbose(),
        };
        Ok((config, output))
    };

    match &args.command {
        Commands::Init { strict, dir } => run_init(*strict, dir.as_deref()),
        Commands::Classify { notations } => {
            let (_, output) = settings(false)?;
            run_classify(&output, notations)
        }
        Commands::Show { sections } => {
            let (config, output) = settings(false)?;
            let sections = if sections.is_empty() {
                config.effective_sections()
            } else {
                sections.clone()
            };
            run_show(&output, &sections)
        }
        Commands::Audit { strict } => {
            let (config, output) = settings(*strict)?;
            run_audit(&output, config.is_strict())
        }
    }
}

/// Output settings resolved from config and flags
struct Output {
    json: bool,
    colors: bool,
    verbose: bool,
}

fn console(output: &Output) -> ConsoleReporter {
    let mut reporter = ConsoleReporter::new();
    if !output.colors {
        reporter = reporter.without_colors();
    }
    if output.verbose {
        reporter = reporter.verbose();
    }
    reporter
}

fn run_classify(output: &Output, notations: &[String]) -> Result<ExitCode> {
    let notations = if notations.is_empty() {
        read_stdin_lines()?
    } else {
        notations.to_vec()
    };

    if notations.is_empty() {
        eprintln!("{}: No notations to classify", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let results: Vec<Classification> = notations.iter().map(|n| classify_traced(n)).collect();
    tracing::debug!(count = results.len(), "classified notations");

    if output.json {
        println!("{}", JsonReporter::new().pretty().report_classifications(&results));
    } else {
        console(output).report_classifications(&results);
    }
    Ok(ExitCode::SUCCESS)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read notations from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn run_show(output: &Output, sections: &[Section]) -> Result<ExitCode> {
    tracing::debug!(?sections, "rendering sections");
    if output.json {
        println!("{}", JsonReporter::new().pretty().report_sections(sections));
    } else {
        console(output).report_sections(sections);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_audit(output: &Output, strict: bool) -> Result<ExitCode> {
    let report = catalog::audit(&catalog::notations());

    if output.json {
        println!("{}", JsonReporter::new().pretty().report_audit(&report));
    } else {
        console(output).report_audit(&report);
    }

    if strict && !report.is_clean() {
        eprintln!(
            "{}: {} notation(s) fell through to the default tier, {} level mismatch(es)",
            "Error".red(),
            report.default,
            report.mismatches.len()
        );
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(strict: bool, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(strict)?;
    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{}: Created {}", "Info".blue(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
