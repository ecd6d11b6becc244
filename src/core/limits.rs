/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the scheduling constants and input bounds.
 */

// =============================================================================
// SCHEDULING POLICY
// =============================================================================

/// Priority penalty applied after every incomplete burst
/// A preempted process always goes back one step less urgent
pub const PRIORITY_AGING_STEP: i64 = 1;

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum number of processes accepted from the interactive prompt
pub const MAX_PROCESSES: usize = 1024;

/// Maximum number of attempts for a single interactive answer
pub const MAX_PROMPT_ATTEMPTS: usize = 5;
