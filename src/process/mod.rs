/*!
 * Process Module
 * Scheduling units and the specifications they are built from
 */

pub mod types;

pub use types::{Process, ProcessSpec};
