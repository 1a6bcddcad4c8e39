use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use outcome_rail::{ops, Outcome};
use std::hint::black_box;

pub fn bench_map_and_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("core");

    group.bench_function("map_ok", |b| {
        b.iter(|| black_box(Outcome::<&str, i32>::ok(black_box(21)).map(|x| x * 2)))
    });

    group.bench_function("map_err_passthrough", |b| {
        b.iter(|| black_box(Outcome::<&str, i32>::error(black_box("bad")).map(|x| x * 2)))
    });

    group.bench_function("format_err", |b| {
        b.iter(|| black_box(Outcome::<&str, i32>::error(black_box("bad")).format(str::len)))
    });

    group.bench_function("std_result_map", |b| {
        b.iter(|| black_box(Ok::<i32, &str>(black_box(21)).map(|x| x * 2)))
    });

    group.finish();
}

pub fn bench_method_vs_free(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/style");

    group.bench_function("method_chain", |b| {
        b.iter(|| {
            black_box(
                Outcome::<&str, i32>::ok(black_box(5))
                    .map(|x| x + 1)
                    .chain(|x| if x > 3 { Outcome::ok(x) } else { Outcome::error("small") })
                    .recover(|_| 0),
            )
        })
    });

    group.bench_function("free_functions", |b| {
        b.iter(|| {
            let r = ops::map(|x: i32| x + 1, ops::ok::<&str, _>(black_box(5)));
            let r = ops::chain(|x| if x > 3 { ops::ok(x) } else { ops::error("small") }, r);
            black_box(ops::recover(|_| 0, r))
        })
    });

    group.finish();
}

pub fn bench_lazy_vs_eager(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/and");

    group.bench_function("eager_and_on_err", |b| {
        b.iter(|| {
            let left = Outcome::<&str, ()>::error(black_box("bad"));
            black_box(left.and(Outcome::ok(vec![0_u8; 64])))
        })
    });

    group.bench_function("lazy_and_with_on_err", |b| {
        b.iter(|| {
            let left = Outcome::<&str, ()>::error(black_box("bad"));
            black_box(left.and_with(|| Outcome::ok(vec![0_u8; 64])))
        })
    });

    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_map_and_format,
        bench_method_vs_free,
        bench_lazy_vs_eager,
}
