// Encode/decode benchmarks for the Spartancoin wire codec.
//
// Covers varint encoding across all four width classes, record encoding,
// and full record decode round trips at several script sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use spartancoin::keys::{generate_private_key, PublicKey};
use spartancoin::varint::{decode_varint, encode_varint};
use spartancoin::{Receiver, Sender};

fn bench_varint_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint/encode");
    for (label, value) in [
        ("1byte", 0xAAu64),
        ("3byte", 0xAAAA),
        ("5byte", 0xAAAA_AAAA),
        ("9byte", 0xAAAA_AAAA_AAAA_AAAA),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &value, |b, &v| {
            b.iter(|| encode_varint(v));
        });
    }
    group.finish();
}

fn bench_varint_decode(c: &mut Criterion) {
    let encoded = encode_varint(0xAAAA_AAAA_AAAA_AAAA);
    c.bench_function("varint/decode_9byte", |b| {
        b.iter(|| decode_varint(&encoded).unwrap());
    });
}

fn bench_sender_roundtrip(c: &mut Criterion) {
    let key = generate_private_key();
    let public_key = PublicKey::from_private_key(&key);

    let mut group = c.benchmark_group("sender/roundtrip");
    for script_len in [0usize, 32, 512] {
        let sender = Sender::new([7u8; 32], 1, vec![0x51; script_len], public_key.clone());
        let encoded = sender.encode();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(script_len),
            &encoded,
            |b, encoded| {
                b.iter(|| Sender::from_bytes(encoded).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_receiver_encode(c: &mut Criterion) {
    let receiver = Receiver::from_private_key(1_000_000, &generate_private_key());
    c.bench_function("receiver/encode", |b| {
        b.iter(|| receiver.encode());
    });
}

criterion_group!(
    benches,
    bench_varint_encode,
    bench_varint_decode,
    bench_sender_roundtrip,
    bench_receiver_encode,
);
criterion_main!(benches);
