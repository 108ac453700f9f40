#[macro_use]
extern crate criterion;


criterion_group!(benches, crate::sorted_list::benchmark);
criterion_main!(benches);
