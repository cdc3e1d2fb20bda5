use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tessera_codec::{scalar::I32, ByteOrder, Codec, Layout, ShapeCodec, StructCodec, Value};

#[derive(Debug, Clone, PartialEq, Layout)]
struct Tick {
    instrument: u32,
    price: i64,
    size: u32,
    side: bool,
    levels: [i32; 8],
}

fn random_tick(rng: &mut StdRng) -> Tick {
    let mut levels = [0i32; 8];
    rng.fill(&mut levels[..]);
    Tick {
        instrument: rng.gen(),
        price: rng.gen(),
        size: rng.gen(),
        side: rng.gen(),
        levels,
    }
}

fn bench_int32(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let value: i32 = rng.gen();
    let encoded = I32.encode(&value).unwrap();

    c.bench_function("int32/encode", |b| {
        b.iter(|| I32.encode(black_box(&value)).unwrap())
    });
    c.bench_function("int32/decode", |b| {
        b.iter(|| I32.decode(black_box(&encoded)).unwrap())
    });
}

fn bench_struct(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let tick = random_tick(&mut rng);
    let mut group = c.benchmark_group("struct");

    for order in [ByteOrder::Little, ByteOrder::Big] {
        let codec = StructCodec::<Tick>::with_order(order).unwrap();
        let encoded = codec.encode(&tick).unwrap();
        group.bench_with_input(BenchmarkId::new("encode", order), &tick, |b, tick| {
            b.iter(|| codec.encode(black_box(tick)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", order), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded)).unwrap())
        });
    }

    let shape = ShapeCodec::of::<Tick>(ByteOrder::Little).unwrap();
    let encoded = StructCodec::<Tick>::new().unwrap().encode(&tick).unwrap();
    let (_, value): (usize, Value) = shape.decode(&encoded).unwrap();
    group.bench_function("shape/encode", |b| {
        b.iter(|| shape.encode(black_box(&value)).unwrap())
    });
    group.bench_function("shape/decode", |b| {
        b.iter(|| shape.decode(black_box(&encoded)).unwrap())
    });

    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    c.bench_function("struct/construct", |b| {
        b.iter(|| StructCodec::<Tick>::new().unwrap())
    });
}

criterion_group!(benches, bench_int32, bench_struct, bench_construct);
criterion_main!(benches);
