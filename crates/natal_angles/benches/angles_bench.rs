use criterion::{Criterion, black_box, criterion_group, criterion_main};

use natal_angles::{OBLIQUITY_DEG, ascendant_deg, build_house_system, house_of, placement_of};

fn bench_ascendant(c: &mut Criterion) {
    c.bench_function("ascendant_deg", |b| {
        b.iter(|| ascendant_deg(black_box(9.944), black_box(48.8844), OBLIQUITY_DEG))
    });
}

fn bench_house_system(c: &mut Criterion) {
    let hs = build_house_system(222.85, 149.17, 48.8844);
    c.bench_function("build_house_system", |b| {
        b.iter(|| build_house_system(black_box(222.85), black_box(149.17), 48.8844))
    });
    c.bench_function("house_of", |b| b.iter(|| house_of(black_box(187.3), &hs)));
}

fn bench_placement(c: &mut Criterion) {
    c.bench_function("placement_of", |b| b.iter(|| placement_of(black_box(222.83))));
}

criterion_group!(benches, bench_ascendant, bench_house_system, bench_placement);
criterion_main!(benches);
