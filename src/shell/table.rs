/*!
 * Table Trace Sink
 * Renders the event stream as the classic console trace
 */

use crate::monitoring::events::SchedEvent;
use crate::monitoring::sink::TraceSink;
use crate::process::Process;
use crate::scheduler::SimulationReport;
use std::io::{self, Write};

/// Writes queue tables and step lines to any writer
///
/// A sink cannot fail mid-run, so the first write error is kept and returned
/// from [`TablePrinter::finish`].
pub struct TablePrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and surface any write error seen while recording
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event(&mut self, event: &SchedEvent) -> io::Result<()> {
        match event {
            SchedEvent::Snapshot { processes } => write_queue(&mut self.out, processes),
            SchedEvent::Executed(execution) => {
                writeln!(
                    self.out,
                    "\nRunning process {} at priority {}",
                    execution.pid, execution.priority_at_dispatch
                )?;
                writeln!(
                    self.out,
                    "Process {} ran for {} time units. Remaining: {}",
                    execution.pid, execution.burst, execution.remaining_after
                )?;
                writeln!(
                    self.out,
                    "Total elapsed time so far: {}",
                    execution.elapsed_total
                )
            }
            SchedEvent::Requeued { pid, priority } => {
                writeln!(self.out, "Process {} lowered to priority {}", pid, priority)
            }
            SchedEvent::Completed { pid, .. } => writeln!(self.out, "Process {} finished.", pid),
        }
    }
}

impl<W: Write> TraceSink for TablePrinter<W> {
    fn record(&mut self, event: &SchedEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            self.error = Some(err);
        }
    }
}

fn write_queue<W: Write>(out: &mut W, processes: &[Process]) -> io::Result<()> {
    writeln!(out, "\nCurrent ready queue:")?;
    writeln!(
        out,
        "{:<10}{:<15}{:<20}{:<20}",
        "ID", "Priority", "Total Time", "Remaining Time"
    )?;
    for process in processes {
        writeln!(
            out,
            "{:<10}{:<15}{:<20}{:<20}",
            process.id,
            process.priority,
            process.total_time(),
            process.remaining_time()
        )?;
    }
    Ok(())
}

/// Final summary lines printed after a run
pub fn write_report<W: Write>(out: &mut W, report: &SimulationReport) -> io::Result<()> {
    writeln!(
        out,
        "\nAll processes finished! Total execution time: {}",
        report.total_elapsed
    )?;
    if report.processes.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "\n{:<10}{:<12}{:<12}{:<12}{:<12}{:<12}",
        "ID", "Priority", "Final", "Bursts", "Waiting", "Turnaround"
    )?;
    for record in &report.processes {
        writeln!(
            out,
            "{:<10}{:<12}{:<12}{:<12}{:<12}{:<12}",
            record.pid,
            record.initial_priority,
            record.final_priority,
            record.dispatches,
            record.waiting_time(),
            record.turnaround_time()
        )?;
    }
    writeln!(
        out,
        "\nAverage waiting time: {:.2}\nAverage turnaround time: {:.2}",
        report.average_waiting_time(),
        report.average_turnaround_time()
    )?;
    writeln!(
        out,
        "Dispatches: {}, preemptions: {}, context switches: {}",
        report.stats.dispatches, report.stats.preemptions, report.stats.context_switches
    )
}
