use criterion::{criterion_group, criterion_main, Criterion};
use ptpmgmt_codec::ByteCursor;

fn bench_u48_round_trip(c: &mut Criterion) {
    c.bench_function("u48_round_trip", |b| {
        b.iter(|| {
            let mut buf = [0u8; 6];
            let mut cursor = ByteCursor::for_build(&mut buf);
            let mut v = 281_474_976_710_655u64;
            cursor.u48(&mut v).unwrap();
        })
    });
}

criterion_group!(benches, bench_u48_round_trip);
criterion_main!(benches);
