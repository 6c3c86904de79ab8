//! Criterion benchmarks for the growable ring buffer.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ringdeque::{Queue, RingBuffer};

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    // steady state, no growth
    group.bench_function("push_back_pop_front", |b| {
        let mut buf: RingBuffer<u64> = RingBuffer::with_capacity(1024);
        buf.extend(0..512);
        let mut i = 0u64;
        b.iter(|| {
            buf.push_back(black_box(i));
            let _ = black_box(buf.pop_front());
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("push_front_pop_back", |b| {
        let mut buf: RingBuffer<u64> = RingBuffer::with_capacity(1024);
        buf.extend(0..512);
        let mut i = 0u64;
        b.iter(|| {
            buf.push_front(black_box(i));
            let _ = black_box(buf.pop_back());
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("queue_cycle", |b| {
        let mut queue: Queue<u64> = Queue::new();
        let mut i = 0u64;
        b.iter(|| {
            queue.enqueue(black_box(i));
            let _ = black_box(queue.dequeue());
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");
    const N: u64 = 65536;
    group.throughput(Throughput::Elements(N));

    group.bench_function("push_back_from_empty", |b| {
        b.iter_batched(
            RingBuffer::<u64>::new,
            |mut buf| {
                for i in 0..N {
                    buf.push_back(i);
                }
                buf
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("push_back_presized", |b| {
        b.iter_batched(
            || RingBuffer::<u64>::with_capacity(N as usize),
            |mut buf| {
                for i in 0..N {
                    buf.push_back(i);
                }
                buf
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_growth);
criterion_main!(benches);
