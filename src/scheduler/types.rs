/*!
 * Scheduler Types
 * Domain types for simulation runs
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Priority, SchedulerResult, Ticks};
use crate::monitoring::events::SchedEvent;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Time quantum configuration
///
/// Maximum burst a dispatched process may run before it is preempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum {
    pub ticks: Ticks,
}

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: i64) -> SchedulerResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self {
            ticks: ticks as Ticks,
        })
    }

    #[inline(always)]
    pub const fn as_ticks(&self) -> Ticks {
        self.ticks
    }
}

/// Simulation run state
///
/// Between calls a run is only ever `Idle` or `Terminal`. `Dispatched` is
/// held while a single step executes its burst and is never visible through
/// [`Simulation::state`](super::Simulation::state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Processes are waiting, none is running
    Idle,
    /// A process has been extracted and is running its burst (inside a step only)
    Dispatched,
    /// Queue drained, run complete
    Terminal,
}

/// One executed burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub pid: Pid,
    pub priority_at_dispatch: Priority,
    pub burst: Ticks,
    pub remaining_after: Ticks,
    pub elapsed_total: Ticks,
}

/// What happened to the process after its burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// No time left, process leaves the simulation
    Completed,
    /// Time left, process aged and put back in the ready queue
    Requeued { new_priority: Priority },
}

/// Result of advancing the simulation by one iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Queue contents right before the extraction, most urgent first
    pub snapshot: Vec<Process>,
    pub execution: Execution,
    pub outcome: Outcome,
}

impl Step {
    /// Trace events for this step, in emission order
    pub fn into_events(self) -> Vec<SchedEvent> {
        let pid = self.execution.pid;
        let last = match self.outcome {
            Outcome::Completed => SchedEvent::Completed {
                pid,
                elapsed_total: self.execution.elapsed_total,
            },
            Outcome::Requeued { new_priority } => SchedEvent::Requeued {
                pid,
                priority: new_priority,
            },
        };

        vec![
            SchedEvent::Snapshot {
                processes: self.snapshot,
            },
            SchedEvent::Executed(self.execution),
            last,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_quantum_validation() {
        assert_eq!(TimeQuantum::new(0), Err(SchedulerError::InvalidQuantum(0)));
        assert_eq!(TimeQuantum::new(-4), Err(SchedulerError::InvalidQuantum(-4)));
        assert_eq!(TimeQuantum::new(3).unwrap().as_ticks(), 3);
    }

    #[test]
    fn test_step_events_order() {
        let step = Step {
            snapshot: Vec::new(),
            execution: Execution {
                pid: 3,
                priority_at_dispatch: 1,
                burst: 2,
                remaining_after: 1,
                elapsed_total: 2,
            },
            outcome: Outcome::Requeued { new_priority: 2 },
        };

        let events = step.into_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], SchedEvent::Snapshot { .. }));
        assert!(matches!(events[1], SchedEvent::Executed(_)));
        assert_eq!(events[2], SchedEvent::Requeued { pid: 3, priority: 2 });
    }
}
