/*!
 * Priority Scheduler Library
 * Preemptive priority scheduling simulation with quantum-based aging
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod shell;

// Re-exports
pub use crate::core::errors::{ConfigError, SchedulerError};
pub use crate::core::types::{Pid, Priority, SchedulerResult, Ticks};
pub use config::{ShellConfig, Workload};
pub use monitoring::{init_tracing, EventRecorder, LogSink, SchedEvent, TraceSink};
pub use process::{Process, ProcessSpec};
pub use scheduler::{
    Execution, Outcome, ReadyQueue, RunState, Simulation, SimulationReport, Step, TimeQuantum,
};
