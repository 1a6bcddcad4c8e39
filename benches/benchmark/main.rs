use criterion::criterion_main;

mod core;

criterion_main!(core::core_benches, scenarios::scenario_benches);
