/*!
 * Scheduler Benchmarks
 *
 * Measure ready queue throughput and full simulation runs
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use priority_scheduler::{ProcessSpec, ReadyQueue, SchedEvent, Simulation};

fn workload(count: usize) -> Vec<ProcessSpec> {
    (0..count)
        .map(|i| ProcessSpec::new(i as i64, (i % 7) as i64, 1 + (i % 13) as i64))
        .collect()
}

fn bench_queue_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_fill_drain");

    for count in [16usize, 256, 4096] {
        let specs = workload(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &specs, |b, specs| {
            b.iter(|| {
                let mut queue = ReadyQueue::from_specs(specs.iter().copied()).unwrap();
                while let Ok(process) = queue.extract_highest_priority() {
                    black_box(process);
                }
            });
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for quantum in [1i64, 4, 16] {
        let specs = workload(512);
        group.bench_with_input(
            BenchmarkId::from_parameter(quantum),
            &quantum,
            |b, &quantum| {
                b.iter(|| {
                    let queue = ReadyQueue::from_specs(specs.iter().copied()).unwrap();
                    let mut sim = Simulation::new(queue, quantum).unwrap();
                    black_box(sim.run(&mut |_: &SchedEvent| {}))
                });
            },
        );
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let queue = ReadyQueue::from_specs(workload(1024)).unwrap();
    c.bench_function("peek_all_ordered_1024", |b| {
        b.iter(|| black_box(queue.peek_all_ordered()))
    });
}

criterion_group!(benches, bench_queue_fill_drain, bench_full_run, bench_snapshot);
criterion_main!(benches);
