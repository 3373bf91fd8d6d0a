use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use md5sum::{md5_digest, Md5};

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_one_shot");

    for size in [10, 64, 1024, 65536] {
        let data = vec![1u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| md5_digest(black_box(data)))
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_streaming");
    let data = vec![1u8; 65536];
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Odd chunk sizes keep the pending buffer busy on every call.
    for chunk in [7, 61, 4096] {
        group.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut hasher = Md5::new();
                for piece in data.chunks(chunk) {
                    hasher.update(black_box(piece)).unwrap();
                }
                hasher.finalize()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_streaming);
criterion_main!(benches);
