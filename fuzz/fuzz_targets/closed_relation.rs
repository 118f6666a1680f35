#![no_main]

use libfuzzer_sys::fuzz_target;

use relgraph::infra::{arbitrary::ClosedGraph, testing::check_consistency};

fuzz_target!(|graph: ClosedGraph<i8>| {
    let ClosedGraph(graph) = graph;

    check_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    if !graph.is_empty() && graph.is_equivalence().unwrap() {
        let classes = graph.equivalence_classes().unwrap();
        assert_eq!(graph.roots().unwrap().len(), classes.len());
    }
});
