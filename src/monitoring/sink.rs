/*!
 * Trace Sinks
 * Synchronous consumers of the scheduler event stream
 */

use super::events::SchedEvent;
use tracing::{debug, info};

/// Receives scheduler events in emission order
///
/// Called synchronously from the scheduler loop. A sink only observes events
/// and has no handle on scheduling state.
pub trait TraceSink {
    fn record(&mut self, event: &SchedEvent);
}

impl<F> TraceSink for F
where
    F: FnMut(&SchedEvent),
{
    fn record(&mut self, event: &SchedEvent) {
        self(event)
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<SchedEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SchedEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SchedEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for EventRecorder {
    fn record(&mut self, event: &SchedEvent) {
        self.events.push(event.clone());
    }
}

/// Sink that forwards events to structured tracing output
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: &SchedEvent) {
        match event {
            SchedEvent::Snapshot { processes } => {
                debug!(event = event.name(), queued = processes.len(), "ready queue snapshot");
            }
            SchedEvent::Executed(execution) => {
                info!(
                    event = event.name(),
                    pid = execution.pid,
                    priority = execution.priority_at_dispatch,
                    burst = execution.burst,
                    remaining = execution.remaining_after,
                    elapsed = execution.elapsed_total,
                    "burst executed"
                );
            }
            SchedEvent::Completed { pid, elapsed_total } => {
                info!(event = event.name(), pid = *pid, elapsed = *elapsed_total, "process completed");
            }
            SchedEvent::Requeued { pid, priority } => {
                info!(event = event.name(), pid = *pid, priority = *priority, "process requeued");
            }
        }
    }
}

/// Fan out to two sinks
pub struct Tee<'a, A: ?Sized, B: ?Sized> {
    first: &'a mut A,
    second: &'a mut B,
}

impl<'a, A, B> Tee<'a, A, B>
where
    A: TraceSink + ?Sized,
    B: TraceSink + ?Sized,
{
    pub fn new(first: &'a mut A, second: &'a mut B) -> Self {
        Self { first, second }
    }
}

impl<A, B> TraceSink for Tee<'_, A, B>
where
    A: TraceSink + ?Sized,
    B: TraceSink + ?Sized,
{
    fn record(&mut self, event: &SchedEvent) {
        self.first.record(event);
        self.second.record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_: &SchedEvent| count += 1;
        sink.record(&SchedEvent::Snapshot { processes: vec![] });
        sink.record(&SchedEvent::Snapshot { processes: vec![] });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_tee_records_both() {
        let mut first = EventRecorder::new();
        let mut second = EventRecorder::new();
        {
            let mut tee = Tee::new(&mut first, &mut second);
            tee.record(&SchedEvent::Requeued { pid: 1, priority: 2 });
        }
        assert_eq!(first.events(), second.events());
        assert_eq!(first.len(), 1);
    }
}
