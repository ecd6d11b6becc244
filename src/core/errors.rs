/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process {pid}: total execution time {total_time} must be positive")]
    #[diagnostic(
        code(scheduler::invalid_process_spec),
        help("Every process needs at least one unit of CPU time.")
    )]
    InvalidProcessSpec { pid: Pid, total_time: i64 },

    #[error("Invalid quantum: {0} must be positive")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The time quantum is the maximum burst length and must be at least 1.")
    )]
    InvalidQuantum(i64),

    #[error("Ready queue is empty")]
    #[diagnostic(
        code(scheduler::empty_queue),
        help("The run already reached its terminal state. Check is_empty() before extracting.")
    )]
    EmptyQueue,
}

/// Workload and shell configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    #[diagnostic(
        code(config::io_error),
        help("Workload file or terminal could not be read. Check the path and permissions.")
    )]
    Io(String),

    #[error("Malformed workload: {0}")]
    #[diagnostic(
        code(config::parse_error),
        help("Expected JSON like {{\"quantum\": 2, \"processes\": [{{\"id\": 1, \"priority\": 1, \"total_time\": 4}}]}}.")
    )]
    Parse(String),

    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(config::invalid_input),
        help("Enter a whole number within the accepted range.")
    )]
    InvalidInput(String),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
