use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_delta_core::{shared, Delta, DeltaProps, PropertyBag, PropertySpec};

fn delta(key: &str, spec: PropertySpec) -> Delta {
    let el = shared(PropertyBag::new());
    Delta::new(DeltaProps::new(key, spec).with_target(el)).expect("valid spec")
}

fn bench_update(c: &mut Criterion) {
    let number = delta("radius", PropertySpec::pair("20", 30));
    let unit = delta("x", PropertySpec::pair("20", "30rem"));
    let color = delta("fill", PropertySpec::pair("cyan", "hotpink").curve("cubic.out"));

    c.bench_function("delta_update_number", |b| {
        b.iter(|| number.update(black_box(0.5), black_box(0.5), true))
    });
    c.bench_function("delta_update_unit", |b| {
        b.iter(|| unit.update(black_box(0.5), black_box(0.5), true))
    });
    c.bench_function("delta_update_color_curved", |b| {
        b.iter(|| color.update(black_box(0.5), black_box(0.5), true))
    });
}

fn bench_construct(c: &mut Criterion) {
    c.bench_function("delta_new_guess_color", |b| {
        b.iter(|| {
            Delta::new(DeltaProps::new(
                "fill",
                black_box(PropertySpec::pair("cyan", "rgba(20,10,5,.25)")),
            ))
        })
    });
}

criterion_group!(benches, bench_update, bench_construct);
criterion_main!(benches);
