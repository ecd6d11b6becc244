/*!
 * Event System
 * Strongly-typed trace events emitted by the scheduler loop
 */

use crate::core::types::{Pid, Priority, Ticks};
use crate::process::Process;
use crate::scheduler::types::Execution;
use serde::Serialize;

/// Scheduler trace event
///
/// Per step the loop emits `Snapshot`, `Executed`, then either `Completed`
/// or `Requeued`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SchedEvent {
    /// Ready queue contents before the extraction, most urgent first
    Snapshot { processes: Vec<Process> },
    /// A burst was executed
    Executed(Execution),
    /// Process ran out of work and left the simulation
    Completed { pid: Pid, elapsed_total: Ticks },
    /// Process was aged and put back in the ready queue
    Requeued { pid: Pid, priority: Priority },
}

impl SchedEvent {
    /// Stable event name for structured logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Snapshot { .. } => "snapshot",
            Self::Executed(_) => "executed",
            Self::Completed { .. } => "completed",
            Self::Requeued { .. } => "requeued",
        }
    }

    /// Process the event is about, if any
    pub fn pid(&self) -> Option<Pid> {
        match self {
            Self::Snapshot { .. } => None,
            Self::Executed(execution) => Some(execution.pid),
            Self::Completed { pid, .. } | Self::Requeued { pid, .. } => Some(*pid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = SchedEvent::Requeued { pid: 2, priority: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"requeued","pid":2,"priority":3}"#);
    }

    #[test]
    fn test_event_pid() {
        assert_eq!(SchedEvent::Snapshot { processes: vec![] }.pid(), None);
        assert_eq!(
            SchedEvent::Completed {
                pid: 9,
                elapsed_total: 1
            }
            .pid(),
            Some(9)
        );
    }
}
