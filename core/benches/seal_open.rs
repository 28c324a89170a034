use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use envelope_core::{constants::KEY_LEN, Sealer};

const SECRET: [u8; KEY_LEN] = [0x5a; KEY_LEN];

fn payload(len: usize) -> String {
    "flash message ".repeat(len / 14 + 1)[..len].to_string()
}

fn bench_seal(c: &mut Criterion) {
    let sealer = Sealer::default();
    let mut group = c.benchmark_group("seal");
    for len in [16usize, 256, 2048] {
        let value = payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &value, |b, v| {
            b.iter(|| sealer.seal(&SECRET, None, black_box(v)))
        });
    }
    group.finish();
}

fn bench_open(c: &mut Criterion) {
    let sealer = Sealer::default();
    let mut group = c.benchmark_group("open");
    for len in [16usize, 256, 2048] {
        let Ok(token) = sealer.seal(&SECRET, None, &payload(len)) else {
            continue;
        };
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &token, |b, t| {
            b.iter(|| sealer.open::<String>(&SECRET, black_box(t)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_seal, bench_open);
criterion_main!(benches);
