use bytevec::ByteVec;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("u64_elements", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = ByteVec::new(8, 0).unwrap();

                for i in 0..size as u64 {
                    black_box(vec.push_back(&i.to_ne_bytes()).unwrap());
                }

                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved_upfront", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = ByteVec::new(8, size).unwrap();

                for i in 0..size as u64 {
                    black_box(vec.push_back(&i.to_ne_bytes()).unwrap());
                }

                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at_operations", size), size, |b, &size| {
            let mut vec = ByteVec::new(8, size).unwrap();
            for i in 0..size as u64 {
                vec.push_back(&i.to_ne_bytes()).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(vec.at(i));
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let mut vec = ByteVec::new(8, size).unwrap();
            for i in 0..size as u64 {
                vec.push_back(&i.to_ne_bytes()).unwrap();
            }

            b.iter(|| {
                for element in black_box(&vec) {
                    black_box(element);
                }
            });
        });
    }
    group.finish();
}

fn bench_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("front_cycle", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = ByteVec::new(8, 0).unwrap();
                vec.push_back(&0u64.to_ne_bytes()).unwrap();

                for i in 0..size as u64 {
                    black_box(vec.insert(&i.to_ne_bytes(), 0).unwrap());
                }
                while vec.len() > 1 {
                    black_box(vec.erase(0, 0).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_large_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_elements");

    for element_size in [1024, 4096].iter() {
        group.throughput(Throughput::Bytes(*element_size as u64 * 10));
        group.bench_with_input(
            BenchmarkId::new("push_large", element_size),
            element_size,
            |b, &element_size| {
                let large_data = vec![b'x'; element_size];

                b.iter(|| {
                    let mut vec = ByteVec::new(element_size, 0).unwrap();

                    for _ in 0..10 {
                        black_box(vec.push_back(&large_data).unwrap());
                    }

                    black_box(vec.len())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_insert_erase,
    bench_large_elements
);
criterion_main!(benches);
