//! Traversals over the whole relation.
//!
//! A traversal starts from the first [root](Graph::roots) in canonical order.
//! Whenever the frontier runs empty, it continues from the next root that has
//! not been discovered yet, and finally from any vertex that no root reaches.
//! The discovered set is never reset, so every vertex appears exactly once in
//! the result. Values that are only edge endpoints appear if reachable.
//!
//! Successors are discovered in canonical edge order. Iterative and recursive
//! modes of the same [algorithm](Algo) produce identical sequences.
//!
//! # Examples
//!
//! ```
//! use relgraph::{visit::Traversal, Graph};
//!
//! let graph = Graph::new([1, 2, 3, 4, 5], [(1, 2), (1, 3), (2, 4), (3, 5)]);
//!
//! assert_eq!(graph.iterative_breadth_first_search().unwrap(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(graph.recursive_depth_first_search().unwrap(), vec![1, 2, 4, 3, 5]);
//!
//! let order = Traversal::on(&graph).dfs().recursive().run().unwrap();
//! assert_eq!(order, vec![1, 2, 4, 3, 5]);
//! ```

mod bfs;
mod dfs;
mod raw;

use crate::{core::EmptyGraphError, Graph};

use self::{bfs::RawBfs, dfs::RawDfs};

/// Algorithm for [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algo {
    /// [Breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search).
    ///
    /// The frontier is a queue. Its head is removed in every iteration after
    /// its undiscovered successors were enqueued.
    #[default]
    Bfs,

    /// [Depth-first search](https://en.wikipedia.org/wiki/Depth-first_search).
    ///
    /// The frontier is a stack. Undiscovered successors are pushed while
    /// scanning the edges in canonical order, each one becoming the new top,
    /// and the top is popped only when none is left.
    Dfs,
}

/// Execution mode for [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// An explicit loop.
    #[default]
    Iterative,

    /// A helper recursing once per iteration with all state passed
    /// explicitly. The recursion depth grows with the size of the graph.
    Recursive,
}

/// Builder of a whole-graph traversal.
///
/// Defaults to iterative BFS.
#[derive(Debug)]
pub struct Traversal<'a, V> {
    graph: &'a Graph<V>,
    algo: Algo,
    mode: Mode,
}

impl<'a, V> Traversal<'a, V> {
    pub fn on(graph: &'a Graph<V>) -> Self {
        Self {
            graph,
            algo: Algo::default(),
            mode: Mode::default(),
        }
    }

    pub fn bfs(self) -> Self {
        self.with(Algo::Bfs)
    }

    pub fn dfs(self) -> Self {
        self.with(Algo::Dfs)
    }

    pub fn with(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn iterative(self) -> Self {
        self.with_mode(Mode::Iterative)
    }

    pub fn recursive(self) -> Self {
        self.with_mode(Mode::Recursive)
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}

impl<V: Ord + Clone> Traversal<'_, V> {
    /// Returns the discovered values in the order of discovery.
    pub fn run(self) -> Result<Vec<V>, EmptyGraphError> {
        match self.algo {
            Algo::Bfs => raw::traverse::<RawBfs, V>(self.graph, self.mode),
            Algo::Dfs => raw::traverse::<RawDfs, V>(self.graph, self.mode),
        }
    }
}

impl<V: Ord + Clone> Graph<V> {
    pub fn iterative_breadth_first_search(&self) -> Result<Vec<V>, EmptyGraphError> {
        Traversal::on(self).bfs().iterative().run()
    }

    pub fn iterative_depth_first_search(&self) -> Result<Vec<V>, EmptyGraphError> {
        Traversal::on(self).dfs().iterative().run()
    }

    pub fn recursive_breadth_first_search(&self) -> Result<Vec<V>, EmptyGraphError> {
        Traversal::on(self).bfs().recursive().run()
    }

    pub fn recursive_depth_first_search(&self) -> Result<Vec<V>, EmptyGraphError> {
        Traversal::on(self).dfs().recursive().run()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        common::VisitSet,
        infra::{proptest::relation, testing::*},
    };

    use super::*;

    fn assert_valid<V>(order: &[V], graph: &Graph<V>)
    where
        V: Ord + Clone + std::fmt::Debug,
    {
        let mut seen = BTreeSet::new();
        for value in order {
            assert!(seen.visit(value.clone()), "{value:?} visited twice");
        }

        for vertex in graph.vertices() {
            assert!(seen.is_visited(vertex), "{vertex:?} not visited");
        }

        for value in order {
            assert!(
                graph.domain().contains(value),
                "{value:?} does not belong to the graph"
            );
        }
    }

    #[test]
    fn empty_graph_fails() {
        let graph = Graph::<u32>::default();

        assert_matches!(graph.iterative_breadth_first_search(), Err(EmptyGraphError));
        assert_matches!(graph.iterative_depth_first_search(), Err(EmptyGraphError));
        assert_matches!(graph.recursive_breadth_first_search(), Err(EmptyGraphError));
        assert_matches!(graph.recursive_depth_first_search(), Err(EmptyGraphError));
    }

    #[test]
    fn builder_defaults() {
        let graph = create_branching();
        let traversal = Traversal::on(&graph);

        assert_eq!(traversal.algo, Algo::Bfs);
        assert_eq!(traversal.mode, Mode::Iterative);
    }

    #[test]
    fn builder_options() {
        let graph = create_branching();

        for algo in [Algo::Bfs, Algo::Dfs] {
            for mode in [Mode::Iterative, Mode::Recursive] {
                let order = Traversal::on(&graph)
                    .with(algo)
                    .with_mode(mode)
                    .run()
                    .unwrap();
                assert_valid(&order, &graph);
            }
        }
    }

    #[test]
    fn named_methods() {
        let graph = create_branching();

        assert_eq!(
            graph.iterative_breadth_first_search(),
            graph.recursive_breadth_first_search()
        );
        assert_eq!(
            graph.iterative_depth_first_search(),
            graph.recursive_depth_first_search()
        );
        assert_eq!(graph.iterative_breadth_first_search(), Ok(vec![1, 2, 3, 4, 5]));
        assert_eq!(graph.iterative_depth_first_search(), Ok(vec![1, 2, 4, 3, 5]));
    }

    #[test]
    fn all_variants_agree_on_fixtures() {
        for graph in [
            create_chain(),
            create_two_classes(),
            create_disconnected(),
            create_rootless_cycle(),
        ] {
            let expected = graph.iterative_breadth_first_search().unwrap();
            assert_valid(&expected, &graph);

            assert_eq!(graph.recursive_breadth_first_search().unwrap(), expected);
            assert_eq!(graph.iterative_depth_first_search().unwrap(), expected);
            assert_eq!(graph.recursive_depth_first_search().unwrap(), expected);
        }
    }

    #[test]
    fn isolated_vertices() {
        let graph = Graph::new([3, 1, 2], Vec::<crate::core::Edge<u32>>::new());

        assert_eq!(graph.iterative_depth_first_search(), Ok(vec![1, 2, 3]));
        assert_eq!(graph.recursive_breadth_first_search(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn root_reachable_from_another_root() {
        // In an equivalence, the class representative 1 reaches 2, which is
        // never used as a start again.
        let graph = Graph::new(
            [1, 2, 3],
            [(1, 1), (1, 2), (2, 1), (2, 2), (3, 3)],
        );

        assert_eq!(graph.iterative_breadth_first_search(), Ok(vec![1, 2, 3]));
        assert_eq!(graph.recursive_depth_first_search(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn idempotent() {
        let graph = create_disconnected();

        assert_eq!(
            graph.iterative_depth_first_search(),
            graph.iterative_depth_first_search()
        );
    }

    #[test]
    fn deep_recursion() {
        let n = 500u32;
        let graph = Graph::new(0..n, (1..n).map(|i| (i - 1, i)));

        let expected = (0..n).collect::<Vec<_>>();
        assert_eq!(graph.recursive_breadth_first_search(), Ok(expected.clone()));
        assert_eq!(graph.recursive_depth_first_search(), Ok(expected));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_modes_agree(graph in relation(0..32u16)) {
            prop_assume!(!graph.is_empty());

            let iterative = graph.iterative_breadth_first_search().unwrap();
            let recursive = graph.recursive_breadth_first_search().unwrap();

            assert_valid(&iterative, &graph);
            prop_assert_eq!(iterative, recursive);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dfs_modes_agree(graph in relation(0..32u16)) {
            prop_assume!(!graph.is_empty());

            let iterative = graph.iterative_depth_first_search().unwrap();
            let recursive = graph.recursive_depth_first_search().unwrap();

            assert_valid(&iterative, &graph);
            prop_assert_eq!(iterative, recursive);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_dfs_same_values(graph in relation(0..32u16)) {
            prop_assume!(!graph.is_empty());

            let bfs = graph.iterative_breadth_first_search().unwrap();
            let dfs = graph.iterative_depth_first_search().unwrap();

            prop_assert_eq!(
                bfs.into_iter().collect::<BTreeSet<_>>(),
                dfs.into_iter().collect::<BTreeSet<_>>()
            );
        }
    }
}
