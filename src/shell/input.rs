/*!
 * Interactive Input Provider
 * Prompts for quantum and process specs on a terminal
 */

use crate::config::Workload;
use crate::core::errors::ConfigError;
use crate::core::limits::{MAX_PROCESSES, MAX_PROMPT_ATTEMPTS};
use crate::process::{Process, ProcessSpec};
use crate::scheduler::TimeQuantum;
use std::io::{BufRead, Write};

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for process count, quantum, then each process
    pub fn read_workload(&mut self) -> Result<Workload, ConfigError> {
        let count = self.ask("Number of processes: ", |value| {
            usize::try_from(value)
                .ok()
                .filter(|count| *count <= MAX_PROCESSES)
                .ok_or_else(|| format!("must be between 0 and {}", MAX_PROCESSES))
        })?;

        let quantum = self.ask("Time quantum: ", |value| {
            TimeQuantum::new(value)
                .map(|_| value)
                .map_err(|e| e.to_string())
        })?;

        let mut processes = Vec::with_capacity(count);
        for index in 0..count {
            writeln!(self.output, "\nProcess {}", index + 1)?;
            let id = self.ask("  ID: ", Ok)?;
            let priority = self.ask("  Priority: ", Ok)?;
            let total_time = self.ask("  Total execution time: ", |value| {
                Process::new(ProcessSpec::new(id, priority, value))
                    .map(|_| value)
                    .map_err(|e| e.to_string())
            })?;
            processes.push(ProcessSpec::new(id, priority, total_time));
        }

        Ok(Workload::new(quantum, processes))
    }

    /// Block until the user presses Enter
    pub fn wait_for_enter(&mut self) -> Result<(), ConfigError> {
        writeln!(self.output, "\nPress Enter to continue to the next step...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Prompt for an integer until `check` accepts it
    fn ask<T>(
        &mut self,
        label: &str,
        check: impl Fn(i64) -> Result<T, String>,
    ) -> Result<T, ConfigError> {
        let mut last_error = String::new();
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            write!(self.output, "{}", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConfigError::Io("unexpected end of input".to_string()));
            }

            let parsed = line
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("'{}' is not a whole number", line.trim()))
                .and_then(&check);
            match parsed {
                Ok(value) => return Ok(value),
                Err(message) => {
                    writeln!(self.output, "Invalid value: {}", message)?;
                    last_error = message;
                }
            }
        }

        Err(ConfigError::InvalidInput(format!(
            "{} {}",
            label.trim().trim_end_matches(':'),
            last_error
        )))
    }
}
