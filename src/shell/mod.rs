//! Interactive menu shell.
//!
//! The shell drives the whole workflow from a line-oriented prompt:
//!
//! 1. a data-entry menu (keyboard or file), repeated until data exists
//! 2. a main menu that runs one regression per choice, prints its report and
//!    appends it to the regression log
//!
//! Input and output are injected (`BufRead` / `Write`) so a session can be
//! scripted in tests. End of input ends the session cleanly.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::data::Dataset;
use crate::domain::ModelKind;
use crate::error::{AppError, FitError};
use crate::fit::fit_model;
use crate::io::{load_dataset, parse_pairs, RegressionLog};
use crate::report::{format_dataset, format_fit, DEFAULT_PREVIEW_ROWS};

/// Interactive session state.
pub struct Shell<R, W, L: Write> {
    input: R,
    out: W,
    log: Option<RegressionLog<L>>,
    dataset: Dataset,
}

impl<R: BufRead, W: Write, L: Write> Shell<R, W, L> {
    pub fn new(input: R, out: W, log: Option<RegressionLog<L>>) -> Self {
        Self {
            input,
            out,
            log,
            dataset: Dataset::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Consume the shell, returning the output writer and the log.
    pub fn into_parts(self) -> (W, Option<RegressionLog<L>>) {
        (self.out, self.log)
    }

    /// Run the full session.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.say("\n=== LEAST-SQUARES CURVE FITTING ===\n")?;

        if !self.data_entry()? {
            return Ok(());
        }
        if self.dataset.is_empty() {
            self.say("No data to process.\n")?;
            return Ok(());
        }

        self.main_menu()
    }

    /// Returns `false` when input ended.
    fn data_entry(&mut self) -> Result<bool, AppError> {
        loop {
            self.say(concat!(
                "\n+-------------------------------------+\n",
                "|        CHOOSE INPUT METHOD          |\n",
                "+-------------------------------------+\n",
                "| 1. Enter from keyboard              |\n",
                "| 2. Read from file                   |\n",
                "| 0. Back                             |\n",
                "+-------------------------------------+\n",
                "Your choice: ",
            ))?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.parse::<u32>() {
                Ok(1) => {
                    if !self.keyboard_entry()? {
                        return Ok(false);
                    }
                }
                Ok(2) => {
                    if !self.file_entry()? {
                        return Ok(false);
                    }
                }
                Ok(0) => return Ok(true),
                Ok(_) => self.say("Invalid choice!\n")?,
                Err(_) => self.say("Please enter a number!\n")?,
            }
            if !self.dataset.is_empty() {
                return Ok(true);
            }
        }
    }

    fn keyboard_entry(&mut self) -> Result<bool, AppError> {
        self.say("Number of points: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let count = match line.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                self.say("Invalid number of points!\n")?;
                return Ok(true);
            }
        };

        self.say("Enter pairs (x y), one per line:\n")?;
        let mut i = 0;
        while i < count {
            self.say(&format!("Point {}: ", i + 1))?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match parse_pairs(&line).as_deref() {
                Ok([(x, y)]) => {
                    self.dataset.add_point(*x, *y)?;
                    i += 1;
                }
                _ => self.say("Invalid input! Please try again.\n")?,
            }
        }
        Ok(true)
    }

    fn file_entry(&mut self) -> Result<bool, AppError> {
        self.say("File name: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        if line.is_empty() {
            self.say("Invalid file name!\n")?;
            return Ok(true);
        }

        match load_dataset(Path::new(&line)) {
            Ok(data) => {
                for s in data.dataset.iter() {
                    self.dataset.add_point(s.x, s.y)?;
                }
                self.say(&format!("Read {} points from file.\n", data.dataset.len()))?;
                if !data.row_errors.is_empty() {
                    self.say(&format!("Skipped {} malformed line(s).\n", data.row_errors.len()))?;
                }
            }
            Err(err) => self.say(&format!("Error: {err}\n"))?,
        }
        Ok(true)
    }

    fn main_menu(&mut self) -> Result<(), AppError> {
        loop {
            self.say(concat!(
                "\n+-------------------------------------+\n",
                "|     LEAST-SQUARES REGRESSION        |\n",
                "+-------------------------------------+\n",
                "| 1. Linear regression                |\n",
                "| 2. Logarithmic regression           |\n",
                "| 3. Exponential regression           |\n",
                "| 4. Quadratic regression             |\n",
                "| 5. Polynomial regression (degree n) |\n",
                "| 6. Show entered data                |\n",
                "| 0. Exit                             |\n",
                "+-------------------------------------+\n",
                "Your choice: ",
            ))?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match line.parse::<u32>() {
                Ok(1) => self.run_fit(ModelKind::Linear)?,
                Ok(2) => self.run_fit(ModelKind::Logarithmic)?,
                Ok(3) => self.run_fit(ModelKind::Exponential)?,
                Ok(4) => self.run_fit(ModelKind::Quadratic)?,
                Ok(5) => {
                    if !self.polynomial()? {
                        return Ok(());
                    }
                }
                Ok(6) => {
                    let table = format_dataset(&self.dataset, DEFAULT_PREVIEW_ROWS);
                    self.say(&table)?;
                }
                Ok(0) => {
                    self.say("Goodbye!\n")?;
                    return Ok(());
                }
                Ok(_) => self.say("Invalid choice!\n")?,
                Err(_) => self.say("Please enter a number from 0 to 6!\n")?,
            }
        }
    }

    fn polynomial(&mut self) -> Result<bool, AppError> {
        let max = self.dataset.len().saturating_sub(1);
        self.say(&format!("Polynomial degree (max {max}): "))?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        match line.parse::<usize>() {
            Ok(degree) if (1..=max).contains(&degree) => self.run_fit(ModelKind::Polynomial(degree))?,
            Ok(degree) => {
                let err = FitError::InvalidDegree { degree, max };
                self.say(&format!("Error: {err}\n"))?;
            }
            Err(_) => self.say("Invalid polynomial degree!\n")?,
        }
        Ok(true)
    }

    fn run_fit(&mut self, model: ModelKind) -> Result<(), AppError> {
        match fit_model(&self.dataset, model) {
            Ok(fit) => {
                self.say(&format_fit(&fit))?;
                if let Some(log) = self.log.as_mut() {
                    log.record(&fit)?;
                }
            }
            Err(err) => {
                self.say(&format!("Error: {err}\n"))?;
                if let Some(log) = self.log.as_mut() {
                    log.record_failure(model, &err)?;
                }
            }
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| AppError::new(2, format!("Failed to write output: {e}")))
    }

    /// Next trimmed input line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = String::new();
        let bytes = self
            .input
            .read_line(&mut buf)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
