//! Criterion benchmark untuk Guarded Buffer
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use guarded_buffer::workload::{fill_with_random_bytes, LockExercise};
use guarded_buffer::{GuardedBuffer, Status};

fn random_buffer(size: usize) -> GuardedBuffer {
    let mut buffer = GuardedBuffer::new();
    buffer.initialize(Status::Idle);
    let mut memory = vec![0u8; size];
    fill_with_random_bytes(&mut memory);
    buffer.set_memory(&memory);
    buffer
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("guarded_buffer");

    for size in [128usize, 8192, 1024 * 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let buffer = random_buffer(*size);

        group.bench_with_input(BenchmarkId::new("status", size), size, |b, _| {
            b.iter(|| black_box(buffer.status()));
        });

        group.bench_with_input(BenchmarkId::new("memory", size), size, |b, _| {
            b.iter(|| black_box(buffer.memory()));
        });

        // Full scan: 255 tidak pernah ada di buffer digit hex
        group.bench_with_input(BenchmarkId::new("find_miss", size), size, |b, _| {
            b.iter(|| black_box(buffer.find_and_update_first(black_box(255), 0)));
        });

        // 'A' -> 'A' menjaga isi buffer tetap sama di setiap iterasi
        group.bench_with_input(BenchmarkId::new("replace_all", size), size, |b, _| {
            b.iter(|| black_box(buffer.replace_all(black_box(b'A'), b'A')));
        });
    }

    group.finish();
}

fn bench_lock_exercise(c: &mut Criterion) {
    let mut group = c.benchmark_group("lock_exercise");
    group.sample_size(20);

    for workers in [1usize, 5, 16].iter() {
        let exercise = LockExercise::new(*workers, 1024 * 1024);
        let buffer = match exercise.prepare() {
            Ok(buffer) => buffer,
            Err(e) => panic!("invalid exercise: {}", e),
        };

        group.bench_with_input(BenchmarkId::new("workers", workers), workers, |b, _| {
            b.iter(|| black_box(exercise.run(&buffer)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_operations, bench_lock_exercise);
criterion_main!(benches);
