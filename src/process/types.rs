/*!
 * Process Types
 * Scheduling unit and its input specification
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Priority, SchedulerResult, Ticks};
use serde::{Deserialize, Serialize};

/// Process description as produced by an input provider
///
/// `total_time` is signed so that non-positive values coming from a file or
/// a prompt can be reported instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: Pid,
    pub priority: Priority,
    pub total_time: i64,
}

impl ProcessSpec {
    pub fn new(id: Pid, priority: Priority, total_time: i64) -> Self {
        Self {
            id,
            priority,
            total_time,
        }
    }
}

/// Scheduling unit
///
/// Only the scheduler loop mutates a process: `remaining_time` shrinks by each
/// burst and `priority` grows by one after every incomplete burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pub id: Pid,
    pub priority: Priority,
    initial_priority: Priority,
    total_time: Ticks,
    remaining_time: Ticks,
    dispatches: u32,
}

impl Process {
    /// Validate a spec into a runnable process
    pub fn new(spec: ProcessSpec) -> SchedulerResult<Self> {
        if spec.total_time <= 0 {
            return Err(SchedulerError::InvalidProcessSpec {
                pid: spec.id,
                total_time: spec.total_time,
            });
        }

        let total_time = spec.total_time as Ticks;
        Ok(Self {
            id: spec.id,
            priority: spec.priority,
            initial_priority: spec.priority,
            total_time,
            remaining_time: total_time,
            dispatches: 0,
        })
    }

    #[inline]
    pub fn total_time(&self) -> Ticks {
        self.total_time
    }

    #[inline]
    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    /// Priority the process was submitted with, before any aging
    #[inline]
    pub fn initial_priority(&self) -> Priority {
        self.initial_priority
    }

    /// Number of bursts this process has been dispatched for
    #[inline]
    pub fn dispatches(&self) -> u32 {
        self.dispatches
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Run for at most `quantum` ticks, returning the burst actually executed
    pub(crate) fn execute(&mut self, quantum: Ticks) -> Ticks {
        let burst = self.remaining_time.min(quantum);
        self.remaining_time -= burst;
        self.dispatches = self.dispatches.saturating_add(1);
        burst
    }

    /// Worsen priority by `step` (saturating at the representable bound)
    pub(crate) fn age(&mut self, step: Priority) -> Priority {
        self.priority = self.priority.saturating_add(step);
        self.priority
    }
}

impl TryFrom<ProcessSpec> for Process {
    type Error = SchedulerError;

    fn try_from(spec: ProcessSpec) -> Result<Self, Self::Error> {
        Process::new(spec)
    }
}
