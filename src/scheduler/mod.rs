/*!
 * CPU Scheduler
 * Preemptive priority scheduling with a fixed quantum and priority aging
 */

use crate::core::types::{Pid, Ticks};
use uuid::Uuid;

mod entry;
mod operations;
pub mod queue;
pub mod stats;
pub mod types;

pub use queue::ReadyQueue;
pub use stats::{ProcessRecord, SchedulerStats, SimulationReport};
pub use types::{Execution, Outcome, RunState, Step, TimeQuantum};

/// Scheduler loop over a single ready queue
///
/// Each step extracts the most urgent process, runs it for at most one
/// quantum and either retires it or ages it by one and puts it back. The
/// run is a lazy, finite iterator of [`Step`]s; it cannot be restarted.
#[derive(Debug)]
pub struct Simulation {
    run_id: Uuid,
    queue: ReadyQueue,
    quantum: TimeQuantum,
    elapsed: Ticks,
    state: RunState,
    last_dispatched: Option<Pid>,
    stats: SchedulerStats,
    completed: Vec<ProcessRecord>,
}

impl Simulation {
    /// Unique id of this run, attached to its tracing span
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Total simulated time executed so far
    pub fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    /// `Idle` or `Terminal`; a step never returns while `Dispatched`
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state == RunState::Terminal
    }

    /// Read-only access to the processes still waiting
    pub fn queue(&self) -> &ReadyQueue {
        &self.queue
    }

    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Report covering every process completed so far
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            quantum: self.quantum.as_ticks(),
            total_elapsed: self.elapsed,
            stats: self.stats,
            processes: self.completed.clone(),
        }
    }
}

impl Iterator for Simulation {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}

impl std::iter::FusedIterator for Simulation {}
