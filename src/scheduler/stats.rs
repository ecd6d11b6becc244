/*!
 * Scheduler Statistics
 * Track and report per-run scheduling metrics
 */

use crate::core::types::{Pid, Priority, Ticks};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Run-wide counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Bursts executed
    pub dispatches: u64,
    /// Bursts that ended with time left (process aged and requeued)
    pub preemptions: u64,
    pub completions: u64,
    /// Dispatches that picked a different process than the previous one
    pub context_switches: u64,
}

impl SchedulerStats {
    pub(super) fn record_dispatch(&mut self, pid: Pid, previous: Option<Pid>) {
        self.dispatches += 1;
        if previous != Some(pid) {
            self.context_switches += 1;
        }
    }

    pub(super) fn record_preemption(&mut self) {
        self.preemptions += 1;
    }

    pub(super) fn record_completion(&mut self) {
        self.completions += 1;
    }
}

/// Final accounting for a completed process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub initial_priority: Priority,
    pub final_priority: Priority,
    pub total_time: Ticks,
    pub dispatches: u32,
    pub completion_time: Ticks,
}

impl ProcessRecord {
    pub(super) fn completed(process: &Process, completion_time: Ticks) -> Self {
        Self {
            pid: process.id,
            initial_priority: process.initial_priority(),
            final_priority: process.priority,
            total_time: process.total_time(),
            dispatches: process.dispatches(),
            completion_time,
        }
    }

    /// Every process is ready at time zero, so turnaround equals completion time
    #[inline]
    pub fn turnaround_time(&self) -> Ticks {
        self.completion_time
    }

    /// Time spent in the ready queue
    #[inline]
    pub fn waiting_time(&self) -> Ticks {
        self.completion_time.saturating_sub(self.total_time)
    }
}

/// Summary of a run (or of the part executed so far)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub quantum: Ticks,
    pub total_elapsed: Ticks,
    pub stats: SchedulerStats,
    /// Completed processes in completion order
    pub processes: Vec<ProcessRecord>,
}

impl SimulationReport {
    pub fn average_waiting_time(&self) -> f64 {
        self.average(ProcessRecord::waiting_time)
    }

    pub fn average_turnaround_time(&self) -> f64 {
        self.average(ProcessRecord::turnaround_time)
    }

    fn average(&self, metric: impl Fn(&ProcessRecord) -> Ticks) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        let sum: u128 = self.processes.iter().map(|p| metric(p) as u128).sum();
        sum as f64 / self.processes.len() as f64
    }
}
