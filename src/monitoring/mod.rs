/*!
 * Monitoring Module
 * Trace events, sinks and tracing subscriber setup
 */

pub mod events;
pub mod sink;
pub mod tracer;

pub use events::SchedEvent;
pub use sink::{EventRecorder, LogSink, Tee, TraceSink};
pub use tracer::init_tracing;
