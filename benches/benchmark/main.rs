use criterion::criterion_main;

mod common;

criterion_main!(
    rules::rule_benches,
    scenarios::real_world_benches,
);
