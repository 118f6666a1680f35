//! Classification of the relation represented by a graph.
//!
//! Every predicate fails with [`EmptyGraphError`] when the graph has neither
//! vertices nor edges. Predicates quantifying over edges are vacuously true
//! for a graph without edges.
//!
//! # Examples
//!
//! ```
//! use relgraph::Graph;
//!
//! // "Has the same parity as" on a few integers.
//! let graph = Graph::new(
//!     [1, 2, 3],
//!     [(1, 1), (1, 3), (3, 1), (3, 3), (2, 2)],
//! );
//!
//! assert!(graph.is_equivalence().unwrap());
//! assert!(!graph.is_antisymmetric().unwrap());
//! ```

use crate::{core::EmptyGraphError, Graph};

/// All relation properties of a graph at once.
///
/// Returned by [`Graph::properties`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Properties {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
}

impl Properties {
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }

    pub fn is_partial_order(&self) -> bool {
        self.reflexive && self.antisymmetric && self.transitive
    }
}

impl<V: Ord> Graph<V> {
    /// Returns `true` if every vertex is related to itself.
    ///
    /// A graph with vertices but no edges is not reflexive. A graph without
    /// vertices is.
    pub fn is_reflexive(&self) -> Result<bool, EmptyGraphError> {
        self.check_not_empty()?;

        if self.edge_count() == 0 {
            // Non-empty vertices, otherwise the check above would fail.
            return Ok(false);
        }

        Ok(self
            .vertices()
            .iter()
            .all(|vertex| self.contains_edge(vertex, vertex)))
    }

    /// Returns `true` if every edge has its reverse counterpart.
    pub fn is_symmetric(&self) -> Result<bool, EmptyGraphError> {
        self.check_not_empty()?;

        Ok(self.edges().iter().all(|edge| {
            let (source, destination) = edge.endpoints();
            self.contains_edge(destination, source)
        }))
    }

    /// Returns `true` if for every `(a, b)` and `(b, c)` there is `(a, c)`.
    ///
    /// Pairs in which an edge is chained with itself (self-loops) are checked
    /// as well.
    pub fn is_transitive(&self) -> Result<bool, EmptyGraphError> {
        self.check_not_empty()?;

        Ok(self.edges().iter().all(|first| {
            let (a, b) = first.endpoints();
            self.successors(b).all(|c| self.contains_edge(a, c))
        }))
    }

    /// Returns `true` if no two distinct vertices are related in both
    /// directions.
    pub fn is_antisymmetric(&self) -> Result<bool, EmptyGraphError> {
        self.check_not_empty()?;

        Ok(self.edges().iter().all(|edge| {
            let (source, destination) = edge.endpoints();
            edge.is_loop() || !self.contains_edge(destination, source)
        }))
    }

    /// Returns `true` if the relation is reflexive, symmetric and transitive.
    pub fn is_equivalence(&self) -> Result<bool, EmptyGraphError> {
        Ok(self.is_reflexive()? && self.is_symmetric()? && self.is_transitive()?)
    }

    /// Computes all relation properties in one call.
    pub fn properties(&self) -> Result<Properties, EmptyGraphError> {
        Ok(Properties {
            reflexive: self.is_reflexive()?,
            symmetric: self.is_symmetric()?,
            transitive: self.is_transitive()?,
            antisymmetric: self.is_antisymmetric()?,
        })
    }
}
