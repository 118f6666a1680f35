//! Roots and equivalence classes.
//!
//! # Examples
//!
//! ```
//! use relgraph::Graph;
//!
//! let graph = Graph::new(
//!     [1, 2, 3, 4],
//!     [
//!         (1, 1), (1, 2), (2, 1), (2, 2),
//!         (3, 3), (3, 4), (4, 3), (4, 4),
//!     ],
//! );
//!
//! let class = graph.equivalence_class(&1).unwrap();
//! assert_eq!(class.into_iter().collect::<Vec<_>>(), vec![1, 2]);
//!
//! // One representative per class.
//! let roots = graph.roots().unwrap();
//! assert_eq!(roots.into_iter().collect::<Vec<_>>(), vec![1, 3]);
//! ```

use std::collections::BTreeSet;

use fixedbitset::FixedBitSet;

use crate::{core::EmptyGraphError, Graph};

impl<V: Ord + Clone> Graph<V> {
    /// Returns the vertices directly related to given vertex, provided that
    /// the whole relation is an equivalence. Otherwise the set is empty.
    pub fn equivalence_class(&self, vertex: &V) -> Result<BTreeSet<V>, EmptyGraphError> {
        if !self.is_equivalence()? {
            return Ok(BTreeSet::new());
        }

        Ok(self.successors(vertex).cloned().collect())
    }

    /// Returns the partition of the vertices into equivalence classes, ordered
    /// by their least member. The partition is empty if the relation is not an
    /// equivalence.
    pub fn equivalence_classes(&self) -> Result<Vec<BTreeSet<V>>, EmptyGraphError> {
        if !self.is_equivalence()? {
            return Ok(Vec::new());
        }

        let mut classes: Vec<BTreeSet<V>> = Vec::new();
        let mut assigned = BTreeSet::new();

        // Vertices are iterated in ascending order, so the first unassigned
        // vertex of a class is its least member.
        for vertex in self.vertices() {
            if assigned.contains(vertex) {
                continue;
            }

            let class = self.successors(vertex).cloned().collect::<BTreeSet<_>>();
            assigned.extend(class.iter().cloned());
            classes.push(class);
        }

        Ok(classes)
    }

    /// Returns the set of roots.
    ///
    /// A root is a vertex without an incoming edge from a distinct vertex. If
    /// the relation is an equivalence, the least member of every equivalence
    /// class is a root as well, because members of non-trivial classes always
    /// have incoming edges.
    ///
    /// The least member of a class may be a value that appears only as an
    /// edge endpoint. It is a root nonetheless, and traversals start from it.
    pub fn roots(&self) -> Result<BTreeSet<V>, EmptyGraphError> {
        self.check_not_empty()?;

        let domain = self.domain();
        let mut has_incoming = FixedBitSet::with_capacity(domain.len());
        for edge in self.edges().iter().filter(|edge| !edge.is_loop()) {
            if let Some(index) = domain.to_index(edge.destination()) {
                has_incoming.insert(index);
            }
        }

        let mut roots = self
            .vertices()
            .iter()
            .filter(|vertex| {
                domain
                    .to_index(vertex)
                    .map_or(true, |index| !has_incoming.contains(index))
            })
            .cloned()
            .collect::<BTreeSet<_>>();

        if self.is_equivalence()? {
            // In an equivalence, successors are exactly the class.
            for vertex in self.vertices() {
                if let Some(least) = self.successors(vertex).next() {
                    roots.insert(least.clone());
                }
            }
        }

        Ok(roots)
    }
}
