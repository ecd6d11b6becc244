/*!
 * Scheduler Core Operations
 * Run construction, single-step dispatch, and draining into a trace sink
 */

use super::stats::ProcessRecord;
use super::types::{Execution, Outcome, RunState, Step, TimeQuantum};
use super::{ReadyQueue, SchedulerStats, Simulation};
use crate::core::limits::PRIORITY_AGING_STEP;
use crate::core::types::{SchedulerResult, Ticks};
use crate::monitoring::sink::TraceSink;
use log::{debug, info};
use uuid::Uuid;

impl Simulation {
    /// Create a run over `queue`; fails with `InvalidQuantum` when `quantum <= 0`
    pub fn new(queue: ReadyQueue, quantum: i64) -> SchedulerResult<Self> {
        let quantum = TimeQuantum::new(quantum)?;
        Ok(Self::with_quantum(queue, quantum))
    }

    /// Create a run with an already validated quantum
    pub fn with_quantum(queue: ReadyQueue, quantum: TimeQuantum) -> Self {
        let run_id = Uuid::new_v4();
        let state = if queue.is_empty() {
            RunState::Terminal
        } else {
            RunState::Idle
        };

        info!(
            "Simulation {} initialized: processes={}, quantum={}",
            run_id,
            queue.len(),
            quantum.as_ticks()
        );

        Self {
            run_id,
            queue,
            quantum,
            elapsed: 0,
            state,
            last_dispatched: None,
            stats: SchedulerStats::default(),
            completed: Vec::new(),
        }
    }

    /// Advance one iteration; `None` once the queue is drained
    pub fn step(&mut self) -> Option<Step> {
        if self.queue.is_empty() {
            self.state = RunState::Terminal;
            return None;
        }
        self.try_step().ok()
    }

    /// Advance one iteration, reporting `EmptyQueue` when already terminal
    pub fn try_step(&mut self) -> SchedulerResult<Step> {
        let snapshot = self.queue.peek_all_ordered();
        let mut process = match self.queue.extract_highest_priority() {
            Ok(process) => process,
            Err(err) => {
                self.state = RunState::Terminal;
                return Err(err);
            }
        };
        // Held only until this call returns
        self.state = RunState::Dispatched;

        let priority_at_dispatch = process.priority;
        self.stats.record_dispatch(process.id, self.last_dispatched);
        self.last_dispatched = Some(process.id);

        let burst = process.execute(self.quantum.as_ticks());
        self.elapsed = self.elapsed.saturating_add(burst);

        let execution = Execution {
            pid: process.id,
            priority_at_dispatch,
            burst,
            remaining_after: process.remaining_time(),
            elapsed_total: self.elapsed,
        };
        debug!(
            "Process {} ran {} ticks at priority {} (remaining: {}, elapsed: {})",
            execution.pid, burst, priority_at_dispatch, execution.remaining_after, self.elapsed
        );

        let outcome = if process.is_finished() {
            self.stats.record_completion();
            self.completed
                .push(ProcessRecord::completed(&process, self.elapsed));
            info!("Process {} finished at t={}", process.id, self.elapsed);
            Outcome::Completed
        } else {
            let new_priority = process.age(PRIORITY_AGING_STEP);
            self.stats.record_preemption();
            debug!(
                "Process {} preempted, priority lowered to {}",
                process.id, new_priority
            );
            self.queue.insert(process);
            Outcome::Requeued { new_priority }
        };

        self.state = if self.queue.is_empty() {
            RunState::Terminal
        } else {
            RunState::Idle
        };

        Ok(Step {
            snapshot,
            execution,
            outcome,
        })
    }

    /// Tracing span for this run, tagged with its run id and quantum
    ///
    /// `run` enters it for the whole drain; callers driving `step` by hand
    /// enter it themselves.
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "simulation",
            run_id = %self.run_id,
            quantum = self.quantum.as_ticks()
        )
    }

    /// Drain every remaining step into `sink` and return the total elapsed time
    pub fn run<S>(&mut self, sink: &mut S) -> Ticks
    where
        S: TraceSink + ?Sized,
    {
        let span = self.span();
        let _entered = span.enter();

        while let Some(step) = self.step() {
            for event in step.into_events() {
                sink.record(&event);
            }
        }

        info!(
            "Simulation {} complete: total elapsed {} ({} dispatches, {} preemptions)",
            self.run_id, self.elapsed, self.stats.dispatches, self.stats.preemptions
        );
        self.elapsed
    }
}
