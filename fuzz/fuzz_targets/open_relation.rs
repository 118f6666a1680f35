#![no_main]

use libfuzzer_sys::fuzz_target;

use relgraph::{infra::testing::check_consistency, Graph};

fuzz_target!(|graph: Graph<i8>| {
    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
