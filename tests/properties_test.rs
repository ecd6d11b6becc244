/*!
 * Scheduler Property Tests
 * Conservation, termination, aging and ordering over random workloads
 */

use priority_scheduler::{ProcessSpec, ReadyQueue, SchedEvent, Simulation, Step};
use proptest::prelude::*;
use std::collections::HashMap;

fn specs_strategy() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((-20i64..20, 1i64..40), 0..12).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (priority, time))| ProcessSpec::new(i as i64, priority, time))
            .collect()
    })
}

fn run(specs: &[ProcessSpec], quantum: i64) -> Vec<Step> {
    let queue = ReadyQueue::from_specs(specs.iter().copied()).unwrap();
    Simulation::new(queue, quantum).unwrap().collect()
}

proptest! {
    #[test]
    fn bursts_sum_to_total_time(specs in specs_strategy(), quantum in 1i64..10) {
        let steps = run(&specs, quantum);

        let mut executed: HashMap<i64, u64> = HashMap::new();
        for step in &steps {
            *executed.entry(step.execution.pid).or_default() += step.execution.burst;
        }

        prop_assert_eq!(executed.len(), specs.len());
        for spec in &specs {
            prop_assert_eq!(executed[&spec.id], spec.total_time as u64);
        }

        let total: u64 = specs.iter().map(|s| s.total_time as u64).sum();
        let last = steps.last().map(|s| s.execution.elapsed_total).unwrap_or(0);
        prop_assert_eq!(last, total);
    }

    #[test]
    fn run_terminates_within_bound(specs in specs_strategy(), quantum in 1i64..10) {
        // Each process needs ceil(total / quantum) bursts
        let bound: usize = specs
            .iter()
            .map(|s| ((s.total_time + quantum - 1) / quantum) as usize)
            .sum();
        let queue = ReadyQueue::from_specs(specs.iter().copied()).unwrap();
        let mut sim = Simulation::new(queue, quantum).unwrap();

        let mut steps = 0;
        while sim.step().is_some() {
            steps += 1;
            prop_assert!(steps <= bound);
        }
        prop_assert_eq!(steps, bound);
        prop_assert!(sim.is_terminal());
    }

    #[test]
    fn priority_ages_by_one_per_preemption(specs in specs_strategy(), quantum in 1i64..10) {
        let steps = run(&specs, quantum);

        let mut last_seen: HashMap<i64, i64> = HashMap::new();
        for step in &steps {
            let pid = step.execution.pid;
            let priority = step.execution.priority_at_dispatch;
            if let Some(previous) = last_seen.insert(pid, priority) {
                prop_assert_eq!(priority, previous + 1);
            }
        }
    }

    #[test]
    fn extraction_is_non_decreasing(
        priorities in prop::collection::vec(-50i64..50, 0..30)
    ) {
        let specs: Vec<ProcessSpec> = priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| ProcessSpec::new(i as i64, p, 1))
            .collect();
        let mut queue = ReadyQueue::from_specs(specs).unwrap();

        let mut previous: Option<(i64, i64)> = None;
        while let Ok(process) = queue.extract_highest_priority() {
            if let Some((priority, id)) = previous {
                prop_assert!(priority <= process.priority);
                if priority == process.priority {
                    // Same priority keeps insertion order
                    prop_assert!(id < process.id);
                }
            }
            previous = Some((process.priority, process.id));
        }
    }

    #[test]
    fn snapshot_matches_next_dispatch(specs in specs_strategy(), quantum in 1i64..10) {
        let queue = ReadyQueue::from_specs(specs.iter().copied()).unwrap();
        let mut sim = Simulation::new(queue, quantum).unwrap();

        loop {
            let before = sim.queue().peek_all_ordered();
            prop_assert_eq!(&before, &sim.queue().peek_all_ordered());
            let Some(step) = sim.step() else { break };

            prop_assert_eq!(&step.snapshot, &before);
            prop_assert_eq!(step.execution.pid, before[0].id);
            let events = step.into_events();
            let snapshot_first = matches!(events[0], SchedEvent::Snapshot { .. });
            prop_assert!(snapshot_first, "snapshot must lead each step");
        }
    }
}
