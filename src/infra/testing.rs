use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    core::Edge,
    visit::{Algo, Traversal},
    Graph,
};

/// Vertices {1, 2, 3} with edges 1 → 2 → 3.
pub fn create_chain() -> Graph<u32> {
    Graph::new([1, 2, 3], [(1, 2), (2, 3)])
}

/// Vertices 1..=5 with 1 → {2, 3}, 2 → 4 and 3 → 5.
pub fn create_branching() -> Graph<u32> {
    Graph::new([1, 2, 3, 4, 5], [(1, 2), (1, 3), (2, 4), (3, 5)])
}

/// Equivalence with classes {1, 2} and {3, 4}.
pub fn create_two_classes() -> Graph<u32> {
    Graph::new(
        [1, 2, 3, 4],
        [
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
            (3, 3),
            (3, 4),
            (4, 3),
            (4, 4),
        ],
    )
}

/// Two components with roots 1 and 4.
pub fn create_disconnected() -> Graph<u32> {
    Graph::new(
        [1, 2, 3, 4, 5, 6],
        [(1, 3), (4, 2), (4, 5), (5, 6), (6, 6)],
    )
}

/// Cycle 1 → 2 → 3 → 1 which has no root at all.
pub fn create_rootless_cycle() -> Graph<u32> {
    Graph::new([1, 2, 3], [(1, 2), (2, 3), (3, 1)])
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsistencyCheckError {
    #[error("vertices are not strictly ascending at position {0}")]
    VerticesNotCanonical(usize),
    #[error("edges are not strictly ascending at position {0}")]
    EdgesNotCanonical(usize),
    #[error("domain size ({0}) does not match the number of distinct values ({1})")]
    DomainSizeMismatch(usize, usize),
    #[error("equivalence ({0}) is not the conjunction of reflexivity, symmetry and transitivity")]
    EquivalenceMismatch(bool),
    #[error("{0} traversal visits a value twice")]
    TraversalDuplicate(&'static str),
    #[error("{0} traversal misses a vertex")]
    TraversalIncomplete(&'static str),
    #[error("iterative and recursive {0} traversals differ")]
    TraversalModesDiffer(&'static str),
}

/// Checks the invariants of the graph representation and of all queries.
pub fn check_consistency<V>(graph: &Graph<V>) -> Result<(), ConsistencyCheckError>
where
    V: Ord + Clone,
{
    fn first_unordered<T: Ord>(values: &[T]) -> Option<usize> {
        values
            .windows(2)
            .position(|pair| pair[0] >= pair[1])
            .map(|i| i + 1)
    }

    if let Some(i) = first_unordered(graph.vertices()) {
        return Err(ConsistencyCheckError::VerticesNotCanonical(i));
    }

    if let Some(i) = first_unordered(graph.edges()) {
        return Err(ConsistencyCheckError::EdgesNotCanonical(i));
    }

    let distinct = graph
        .vertices()
        .iter()
        .chain(graph.edges().iter().flat_map(|edge| {
            let (source, destination) = edge.endpoints();
            [source, destination]
        }))
        .collect::<BTreeSet<_>>()
        .len();

    if graph.domain().len() != distinct {
        return Err(ConsistencyCheckError::DomainSizeMismatch(
            graph.domain().len(),
            distinct,
        ));
    }

    if graph.is_empty() {
        return Ok(());
    }

    let props = graph.properties().expect("graph is not empty");
    let equivalence = graph.is_equivalence().expect("graph is not empty");
    if equivalence != props.is_equivalence() {
        return Err(ConsistencyCheckError::EquivalenceMismatch(equivalence));
    }

    for (name, algo) in [("BFS", Algo::Bfs), ("DFS", Algo::Dfs)] {
        let traversal = || Traversal::on(graph).with(algo);
        let iterative = traversal().iterative().run().expect("graph is not empty");
        let recursive = traversal().recursive().run().expect("graph is not empty");

        if iterative != recursive {
            return Err(ConsistencyCheckError::TraversalModesDiffer(name));
        }

        let visited = iterative.iter().collect::<BTreeSet<_>>();
        if visited.len() != iterative.len() {
            return Err(ConsistencyCheckError::TraversalDuplicate(name));
        }

        if !graph.vertices().iter().all(|vertex| visited.contains(vertex)) {
            return Err(ConsistencyCheckError::TraversalIncomplete(name));
        }
    }

    Ok(())
}

/// Edges of the complete relation on given values, loops included.
pub fn complete_edges<V: Clone>(values: &[V]) -> Vec<Edge<V>> {
    values
        .iter()
        .flat_map(|u| values.iter().map(move |v| Edge::new(u.clone(), v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_consistent() {
        for graph in [
            create_chain(),
            create_branching(),
            create_two_classes(),
            create_disconnected(),
            create_rootless_cycle(),
        ] {
            assert_eq!(check_consistency(&graph), Ok(()));
        }
    }

    #[test]
    fn empty_is_consistent() {
        assert_eq!(check_consistency(&Graph::<u32>::default()), Ok(()));
    }

    #[test]
    fn complete_relation_is_equivalence() {
        let graph = Graph::new([1, 2, 3], complete_edges(&[1, 2, 3]));

        assert_eq!(graph.edge_count(), 9);
        assert_eq!(graph.is_equivalence(), Ok(true));
        assert_eq!(graph.roots().map(|roots| roots.len()), Ok(1));
    }
}
