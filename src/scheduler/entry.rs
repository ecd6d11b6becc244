/*!
 * Ready Queue Entry
 * Heap ordering for queued processes
 */

use crate::process::Process;
use std::cmp::Ordering;

/// Queued process tagged with its insertion sequence
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub process: Process,
    pub seq: u64,
}

impl Entry {
    pub fn new(process: Process, seq: u64) -> Self {
        Self { process, seq }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so lower priority values must compare greater.
        // Equal priorities fall back to insertion order (earlier first).
        other
            .process
            .priority
            .cmp(&self.process.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
