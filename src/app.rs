//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - runs fits and prints reports/plots
//! - generates synthetic data files
//! - hosts the interactive shell

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Command, FitArgs, GenerateArgs, ShellArgs, ShowArgs};
use crate::data::{generate_sample, SampleConfig};
use crate::domain::{ModelSpec, RunConfig};
use crate::error::AppError;
use crate::io::{load_dataset, write_dataset, write_pairs, RegressionLog, DEFAULT_LOG_FILE};
use crate::shell::Shell;

pub mod pipeline;

/// Environment variable naming the default regression log file.
pub const LOG_FILE_ENV: &str = "LSQ_LOG_FILE";

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `lsq` with no subcommand behaves like `lsq shell`.
    let argv = rewrite_args(env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Show(args) => handle_show(args),
        Command::Generate(args) => handle_generate(args),
        Command::Shell(args) => handle_shell(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    for err in &run.ingest.row_errors {
        eprintln!("warning: line {}: {}", err.line, err.message);
    }

    for fit in &run.selection.fits {
        println!("{}", crate::report::format_fit(fit));
    }
    if config.model_spec == ModelSpec::All {
        println!("{}", crate::report::format_comparison(&run.selection));
    }

    if config.plot {
        if let Some(best) = run.selection.best() {
            let plot = crate::plot::render_ascii_plot(
                &run.ingest.dataset,
                best,
                config.plot_width,
                config.plot_height,
            );
            println!("{plot}");
        }
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let ingest = load_dataset(&args.input)?;
    print!("{}", crate::report::format_dataset(&ingest.dataset, args.limit));
    if !ingest.row_errors.is_empty() {
        println!("Skipped {} malformed line(s).", ingest.row_errors.len());
    }
    Ok(())
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let model = match args.model {
        ModelSpec::All => return Err(AppError::new(2, "Choose a single model to generate from.")),
        spec => spec
            .to_kind(args.degree)
            .ok_or_else(|| AppError::new(2, "Polynomial samples require --degree."))?,
    };

    let dataset = generate_sample(&SampleConfig {
        model,
        coefficients: args.coefficients,
        count: args.count,
        x_min: args.x_min,
        x_max: args.x_max,
        noise: args.noise,
        seed: args.seed,
    })?;

    match &args.output {
        Some(path) => {
            write_dataset(path, &dataset)?;
            println!("Wrote {} points to {}", dataset.len(), path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_pairs(&mut out, &dataset)
                .and_then(|_| out.flush())
                .map_err(|e| AppError::new(2, format!("Failed to write output: {e}")))?;
        }
    }
    Ok(())
}

fn handle_shell(args: ShellArgs) -> Result<(), AppError> {
    let log = resolve_log_path(args.log, args.no_log)
        .map(|path| RegressionLog::open(&path))
        .transpose()?;

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), log);
    shell.run()
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    RunConfig {
        input: args.input.clone(),
        model_spec: args.model,
        degree: args.degree,
        log_path: resolve_log_path(args.log.clone(), args.no_log),
        export: args.export.clone(),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Flag, then `LSQ_LOG_FILE`, then the built-in default; `None` when disabled.
fn resolve_log_path(flag: Option<PathBuf>, disabled: bool) -> Option<PathBuf> {
    if disabled {
        return None;
    }
    let env_path = env::var(LOG_FILE_ENV).ok().filter(|v| !v.trim().is_empty());
    Some(log_path_or_default(flag, env_path))
}

fn log_path_or_default(flag: Option<PathBuf>, env_path: Option<String>) -> PathBuf {
    flag.or_else(|| env_path.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Rewrite argv so `lsq` defaults to `lsq shell`.
///
/// Rules:
/// - `lsq`                      -> `lsq shell`
/// - `lsq --log F ...`          -> `lsq shell --log F ...`
/// - `lsq --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("shell".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "shell".to_string());
    }
    argv
}
