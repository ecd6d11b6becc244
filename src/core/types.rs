/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (caller assigned, opaque, any sign)
pub type Pid = i64;

/// Priority level (lower value is more urgent, any sign allowed)
pub type Priority = i64;

/// Simulated time units
pub type Ticks = u64;

/// Common result type for scheduler operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;
