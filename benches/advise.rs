use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bike_fit_advisor::{advise, RiderProfile};

fn bench_advise(c: &mut Criterion) {
    let plain = RiderProfile::from_input(74.0, 35.0, "endurance", "medium", &[] as &[&str]);
    let with_pain = RiderProfile::from_input(
        70.0,
        32.0,
        "Race",
        "low",
        &["knee_front", "hand_numbness", "neck_pain", "unknown"],
    );

    c.bench_function("advise_no_pain", |b| b.iter(|| advise(black_box(&plain))));
    c.bench_function("advise_with_pain", |b| b.iter(|| advise(black_box(&with_pain))));
}

criterion_group!(benches, bench_advise);
criterion_main!(benches);
