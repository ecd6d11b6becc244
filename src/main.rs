/*!
 * Priority Scheduler - Main Entry Point
 *
 * Thin shell around the scheduling core:
 * - Reads a workload file or prompts for processes
 * - Prints the ready queue and every burst
 * - Optionally pauses between steps
 */

use miette::IntoDiagnostic;
use std::io;
use tracing::info;

use priority_scheduler::monitoring::{LogSink, Tee, TraceSink};
use priority_scheduler::shell::{write_report, Prompter, TablePrinter};
use priority_scheduler::{init_tracing, ShellConfig, Workload};

fn main() -> miette::Result<()> {
    // Initialize structured tracing
    init_tracing();

    let config = ShellConfig::from_env();
    info!(workload = ?config.workload, step_mode = config.step_mode, "Priority scheduler starting");

    let workload = match &config.workload {
        Some(path) => Workload::load(path)?,
        None => {
            println!("Welcome to the priority scheduler!");
            Prompter::new(io::stdin().lock(), io::stdout()).read_workload()?
        }
    };

    let mut simulation = workload.into_simulation()?;
    let mut printer = TablePrinter::new(io::stdout());
    let mut log_sink = LogSink;

    if config.step_mode {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        let span = simulation.span();
        let _entered = span.enter();
        while let Some(step) = simulation.step() {
            for event in step.into_events() {
                printer.record(&event);
                log_sink.record(&event);
            }
            prompter.wait_for_enter()?;
        }
    } else {
        simulation.run(&mut Tee::new(&mut printer, &mut log_sink));
    }

    let mut out = printer.finish().into_diagnostic()?;
    write_report(&mut out, &simulation.report()).into_diagnostic()?;

    info!(
        run_id = %simulation.run_id(),
        total_elapsed = simulation.elapsed(),
        "Priority scheduler finished"
    );
    Ok(())
}
