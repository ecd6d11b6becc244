/*!
 * Ready Queue
 * Priority-ordered container of runnable processes
 */

use super::entry::Entry;
use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use crate::process::{Process, ProcessSpec};
use log::debug;
use std::collections::BinaryHeap;

/// Ready queue yielding the numerically lowest priority first
///
/// Equal priorities are served in insertion order. A process put back after
/// preemption counts as a new insertion, so it queues behind peers that were
/// already waiting at its new priority.
///
/// # Performance
/// - O(log n) insert and extract
/// - Snapshots clone and sort, O(n log n), and leave the heap untouched
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate specs and enqueue them in the order given
    ///
    /// Fails on the first invalid spec; no partially filled queue is returned.
    pub fn from_specs<I>(specs: I) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        let mut queue = Self::new();
        for spec in specs {
            queue.insert(Process::new(spec)?);
        }
        Ok(queue)
    }

    /// Add a process to the queue
    pub fn insert(&mut self, process: Process) {
        let seq = self.next_seq;
        self.next_seq += 1;

        debug!(
            "Process {} enqueued (priority: {}, remaining: {}, seq: {})",
            process.id,
            process.priority,
            process.remaining_time(),
            seq
        );
        self.heap.push(Entry::new(process, seq));
    }

    /// Remove and return the most urgent process
    pub fn extract_highest_priority(&mut self) -> SchedulerResult<Process> {
        self.heap
            .pop()
            .map(|entry| entry.process)
            .ok_or(SchedulerError::EmptyQueue)
    }

    /// Ordered read-only view of every queued process
    pub fn peek_all_ordered(&self) -> Vec<Process> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        // Greatest entry is the most urgent, so sort descending
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| e.process.clone()).collect()
    }

    /// Most urgent process without removing it
    pub fn peek(&self) -> Option<&Process> {
        self.heap.peek().map(|entry| &entry.process)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Process> for ReadyQueue {
    fn extend<T: IntoIterator<Item = Process>>(&mut self, iter: T) {
        for process in iter {
            self.insert(process);
        }
    }
}

impl FromIterator<Process> for ReadyQueue {
    fn from_iter<T: IntoIterator<Item = Process>>(iter: T) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(specs: &[(i64, i64, i64)]) -> ReadyQueue {
        ReadyQueue::from_specs(
            specs
                .iter()
                .map(|&(id, priority, time)| ProcessSpec::new(id, priority, time)),
        )
        .unwrap()
    }

    fn ids(processes: &[Process]) -> Vec<i64> {
        processes.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_extract_order() {
        let mut queue = queue_of(&[(1, 3, 1), (2, 1, 1), (3, 2, 1)]);

        assert_eq!(queue.extract_highest_priority().unwrap().id, 2);
        assert_eq!(queue.extract_highest_priority().unwrap().id, 3);
        assert_eq!(queue.extract_highest_priority().unwrap().id, 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fifo_tie_break() {
        let mut queue = queue_of(&[(10, 5, 1), (11, 5, 1), (12, 5, 1)]);

        assert_eq!(queue.extract_highest_priority().unwrap().id, 10);
        assert_eq!(queue.extract_highest_priority().unwrap().id, 11);
        assert_eq!(queue.extract_highest_priority().unwrap().id, 12);
    }

    #[test]
    fn test_reinsert_goes_behind_peers() {
        let mut queue = queue_of(&[(1, 2, 1), (2, 1, 1)]);

        let mut first = queue.extract_highest_priority().unwrap();
        assert_eq!(first.id, 2);
        first.priority = 2;
        queue.insert(first);

        // Process 1 was already waiting at priority 2
        assert_eq!(ids(&queue.peek_all_ordered()), vec![1, 2]);
    }

    #[test]
    fn test_empty_extract() {
        let mut queue = ReadyQueue::new();
        assert_eq!(
            queue.extract_highest_priority(),
            Err(SchedulerError::EmptyQueue)
        );
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut queue = queue_of(&[(1, 4, 1), (2, -1, 1), (3, 4, 1), (4, 0, 1)]);

        let first = queue.peek_all_ordered();
        let second = queue.peek_all_ordered();
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![2, 4, 1, 3]);
        assert_eq!(queue.len(), 4);

        let drained: Vec<i64> = std::iter::from_fn(|| queue.extract_highest_priority().ok())
            .map(|p| p.id)
            .collect();
        assert_eq!(drained, ids(&first));
    }

    #[test]
    fn test_from_specs_rejects_invalid() {
        let result = ReadyQueue::from_specs(vec![
            ProcessSpec::new(1, 1, 3),
            ProcessSpec::new(2, 1, 0),
        ]);
        assert_eq!(
            result.unwrap_err(),
            SchedulerError::InvalidProcessSpec {
                pid: 2,
                total_time: 0
            }
        );
    }
}
