use bech32_text::{
    Variant, convert_bits, create_checksum, decode, decode_generic, decode_no_limit, encode,
    encode_with_variant, value_to_char,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn values(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 32) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [0usize, 20, 40, 81].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let data = values(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box("bc"), black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [0usize, 20, 40, 81].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let encoded = encode("bc", &values(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)));
        });
    }
    group.finish();
}

fn bench_decode_generic(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_generic");

    for variant in [Variant::Bech32, Variant::Bech32m] {
        let encoded = encode_with_variant("bc", &values(81), variant).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(variant.as_str()),
            &encoded,
            |b, encoded| {
                b.iter(|| decode_generic(black_box(encoded)));
            },
        );
    }
    group.finish();
}

fn bench_decode_no_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_no_limit");

    for size in [256usize, 1024, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let data = values(*size);
        let checksum = create_checksum("lnbc", &data, Variant::Bech32);
        let mut encoded = String::from("lnbc1");
        encoded.extend(data.iter().chain(checksum.iter()).filter_map(|&v| value_to_char(v)));

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_no_limit(black_box(encoded)));
        });
    }
    group.finish();
}

fn bench_convert_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_bits");

    for size in [32usize, 256, 4096].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let bytes: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        let fives = convert_bits(&bytes, 8, 5, true).unwrap();

        group.bench_with_input(BenchmarkId::new("8_to_5", size), &bytes, |b, bytes| {
            b.iter(|| convert_bits(black_box(bytes), 8, 5, true));
        });
        group.bench_with_input(BenchmarkId::new("5_to_8", size), &fives, |b, fives| {
            b.iter(|| convert_bits(black_box(fives), 5, 8, false));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_decode_generic,
    bench_decode_no_limit,
    bench_convert_bits
);
criterion_main!(benches);
