//! Shared "fit pipeline" logic behind `lsq fit`.
//!
//! Workflow: ingest -> fit/select -> regression log -> optional export.
//! Presentation (tables, plot) is left to the caller.

use crate::domain::RunConfig;
use crate::error::AppError;
use crate::fit::{fit_and_select, FitSelection};
use crate::io::{load_dataset, write_results_json, IngestedData, RegressionLog};

/// All computed outputs of a single `lsq fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub selection: FitSelection,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, AppError> {
    let ingest = load_dataset(&config.input)?;
    let selection = fit_and_select(&ingest.dataset, config.model_spec, config.degree)?;

    if let Some(path) = &config.log_path {
        let mut log = RegressionLog::open(path)?;
        for fit in &selection.fits {
            log.record(fit)?;
        }
        for (model, err) in &selection.skipped {
            log.record_failure(*model, err)?;
        }
    }

    if let Some(path) = &config.export {
        write_results_json(path, ingest.dataset.len(), &selection.fits)?;
    }

    Ok(RunOutput { ingest, selection })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelKind, ModelSpec};
    use std::path::PathBuf;

    fn temp(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lsq_curves_pipeline_{}_{name}", std::process::id()))
    }

    fn config(input: PathBuf) -> RunConfig {
        RunConfig {
            input,
            model_spec: ModelSpec::All,
            degree: None,
            log_path: None,
            export: None,
            plot: false,
            plot_width: 60,
            plot_height: 15,
        }
    }

    #[test]
    fn fits_logs_and_exports() {
        let input = temp("in.txt");
        let log = temp("log.txt");
        let export = temp("out.json");
        let _ = std::fs::remove_file(&log);
        std::fs::write(&input, "-1 2\n0 1\n1 2\n2 5\n3 10\n").unwrap();

        let mut cfg = config(input.clone());
        cfg.log_path = Some(log.clone());
        cfg.export = Some(export.clone());
        let run = run_fit(&cfg).unwrap();

        assert_eq!(run.ingest.dataset.len(), 5);
        let best = run.selection.best().unwrap();
        assert_eq!(best.model, ModelKind::Quadratic);

        let text = std::fs::read_to_string(&log).unwrap();
        assert!(text.contains("[Quadratic] R^2 = 1.000000"), "{text}");
        assert!(text.contains("[Logarithmic] error: x[0]"), "{text}");
        assert!(std::fs::metadata(&export).unwrap().len() > 0);

        for p in [input, log, export] {
            let _ = std::fs::remove_file(p);
        }
    }

    #[test]
    fn single_model_failure_stops_the_run() {
        let input = temp("bad.txt");
        std::fs::write(&input, "1 -1\n2 3\n").unwrap();
        let mut cfg = config(input.clone());
        cfg.model_spec = ModelSpec::Exp;
        let err = run_fit(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("y[0]"), "{}", err.message());
        let _ = std::fs::remove_file(input);
    }
}
