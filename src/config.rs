/*!
 * Configuration
 * Workload files and environment-driven shell settings
 */

use crate::core::errors::ConfigError;
use crate::core::limits::MAX_PROCESSES;
use crate::process::ProcessSpec;
use crate::scheduler::{ReadyQueue, Simulation};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a workload file
pub const WORKLOAD_ENV: &str = "SCHED_WORKLOAD";

/// Environment variable enabling pause-between-steps
pub const STEP_MODE_ENV: &str = "SCHED_STEP_MODE";

/// Processes and quantum for one run
///
/// ```json
/// { "quantum": 2, "processes": [{ "id": 1, "priority": 1, "total_time": 4 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub quantum: i64,
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn new(quantum: i64, processes: Vec<ProcessSpec>) -> Self {
        Self { quantum, processes }
    }

    /// Parse a workload from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let workload: Self = serde_json::from_str(json)?;
        if workload.processes.len() > MAX_PROCESSES {
            return Err(ConfigError::InvalidInput(format!(
                "{} processes exceeds the limit of {}",
                workload.processes.len(),
                MAX_PROCESSES
            )));
        }
        Ok(workload)
    }

    /// Load a workload from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let workload = Self::from_json(&text)?;
        info!(
            "Loaded workload from {} ({} processes, quantum {})",
            path.display(),
            workload.processes.len(),
            workload.quantum
        );
        Ok(workload)
    }

    /// Validate everything and build a ready-to-run simulation
    ///
    /// The quantum is checked first, so an invalid quantum is reported even
    /// when process specs are also broken.
    pub fn into_simulation(self) -> Result<Simulation, ConfigError> {
        let quantum = crate::scheduler::TimeQuantum::new(self.quantum)?;
        let queue = ReadyQueue::from_specs(self.processes)?;
        Ok(Simulation::with_quantum(queue, quantum))
    }
}

/// Shell settings resolved from arguments and environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Workload file; interactive prompts are used when absent
    pub workload: Option<PathBuf>,
    /// Wait for Enter between steps
    pub step_mode: bool,
}

impl ShellConfig {
    /// Resolve from the process environment and command-line arguments
    pub fn from_env() -> Self {
        let arg = std::env::args().nth(1);
        let workload_env = std::env::var(WORKLOAD_ENV).ok();
        let step_env = std::env::var(STEP_MODE_ENV).ok();
        Self::resolve(arg.as_deref(), workload_env.as_deref(), step_env.as_deref())
    }

    /// The first argument wins over `SCHED_WORKLOAD`
    pub fn resolve(arg: Option<&str>, workload_env: Option<&str>, step_env: Option<&str>) -> Self {
        let workload = arg
            .or(workload_env)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let step_mode = matches!(step_env, Some("1") | Some("true"));
        Self {
            workload,
            step_mode,
        }
    }
}
