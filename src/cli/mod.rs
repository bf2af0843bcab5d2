//! Command-line parsing for the least-squares curve fitter.
//!
//! Argument parsing and command dispatch stay separate from the fitting code:
//! this module only describes the flags, `app` turns them into a `RunConfig`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ModelSpec;
use crate::report::DEFAULT_PREVIEW_ROWS;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Least-squares curve fitting (linear, log, exp, polynomial)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit one model (or all of them) to a data file and print the report.
    Fit(FitArgs),
    /// Print a preview table of a data file.
    Show(ShowArgs),
    /// Write a synthetic data file drawn from a known model.
    Generate(GenerateArgs),
    /// Interactive menu: enter data, then run regressions one at a time.
    Shell(ShellArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Data file of whitespace or comma separated `x y` pairs.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Which model(s) to fit.
    #[arg(short, long, value_enum, default_value_t = ModelSpec::All)]
    pub model: ModelSpec,

    /// Polynomial degree (required for `--model poly`; adds a polynomial to `all`).
    #[arg(short, long)]
    pub degree: Option<usize>,

    /// Regression log file (default: `LSQ_LOG_FILE` or `regression_log.txt`).
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Do not write the regression log.
    #[arg(long, conflicts_with = "log")]
    pub no_log: bool,

    /// Export fit results to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Render an ASCII plot of the best fit.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns, at most 500).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows, at most 200).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Data file of `x y` pairs.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Rows shown before eliding.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub limit: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Model to draw samples from (`all` is not accepted).
    #[arg(short, long, value_enum)]
    pub model: ModelSpec,

    /// Polynomial degree (for `--model poly`).
    #[arg(short, long)]
    pub degree: Option<usize>,

    /// Model coefficients, lowest order first (e.g. `--coef 1 2` for y = 1 + 2x).
    #[arg(long = "coef", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub coefficients: Vec<f64>,

    /// Number of samples.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Standard deviation of Gaussian noise added to y.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output file (stdout when omitted).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone, Default)]
pub struct ShellArgs {
    /// Regression log file (default: `LSQ_LOG_FILE` or `regression_log.txt`).
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Do not write the regression log.
    #[arg(long, conflicts_with = "log")]
    pub no_log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_defaults_to_all_models() {
        let cli = Cli::parse_from(["lsq", "fit", "--input", "data.txt"]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.model, ModelSpec::All);
        assert_eq!(args.degree, None);
        assert!(!args.no_log && !args.plot);
    }

    #[test]
    fn model_aliases_parse() {
        let cli = Cli::parse_from(["lsq", "fit", "-i", "d.txt", "--model", "logarithmic"]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.model, ModelSpec::Log);
    }

    #[test]
    fn generate_accepts_negative_coefficients() {
        let cli = Cli::parse_from([
            "lsq", "generate", "--model", "quadratic", "--coef", "1", "-2", "0.5", "--x-min", "-3",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.coefficients, [1.0, -2.0, 0.5]);
        assert_eq!(args.x_min, -3.0);
    }

    #[test]
    fn log_and_no_log_conflict() {
        assert!(Cli::try_parse_from(["lsq", "shell", "--log", "a.txt", "--no-log"]).is_err());
    }
}
