//! The relation graph.
//!
//! A [`Graph`] is a finite binary relation over values of a totally ordered
//! type. It is built once from a set of vertices and a set of edges and never
//! changes afterwards.
//!
//! # Examples
//!
//! ```
//! use relgraph::Graph;
//!
//! let graph = Graph::new([3, 1, 2], [(1, 2), (2, 3)]);
//!
//! assert_eq!(graph.vertices(), &[1, 2, 3]);
//! assert!(graph.contains_edge(&1, &2));
//! assert!(!graph.is_symmetric().unwrap());
//! assert_eq!(graph.roots().unwrap().into_iter().collect::<Vec<_>>(), vec![1]);
//! ```

use std::fmt;

use crate::core::{Domain, Edge, EmptyGraphError};

/// Finite relation over a totally ordered vertex type.
///
/// Vertices are held sorted ascending, edges sorted by source and then by
/// destination. This canonical order determines which root is considered
/// first and in which order neighbors are discovered during traversals. Two
/// graphs built from the same sets are equal no matter the order in which the
/// sets were iterated.
///
/// Edge endpoints are *not* added to the vertex set. Only explicitly given
/// vertices count as vertices of the relation.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
    domain: Domain<V>,
}

impl<V: Ord + Clone> Graph<V> {
    /// Creates the graph from given vertices and edges. Duplicates collapse.
    pub fn new<I, J, E>(vertices: I, edges: J) -> Self
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut vertices = vertices.into_iter().collect::<Vec<_>>();
        vertices.sort_unstable();
        vertices.dedup();

        let mut edges = edges.into_iter().map(Into::into).collect::<Vec<_>>();
        edges.sort_unstable();
        edges.dedup();

        let domain = Domain::new(
            vertices
                .iter()
                .cloned()
                .chain(edges.iter().flat_map(|edge| {
                    let (source, destination) = edge.endpoints();
                    [source.clone(), destination.clone()]
                })),
        );

        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            domain = domain.len(),
            "constructed relation graph"
        );

        Self {
            vertices,
            edges,
            domain,
        }
    }
}

impl<V> Graph<V> {
    /// Vertices in canonical order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Edges in canonical order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// All values mentioned by the graph, both vertices and edge endpoints.
    pub fn domain(&self) -> &Domain<V> {
        &self.domain
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub(crate) fn check_not_empty(&self) -> Result<(), EmptyGraphError> {
        if self.is_empty() {
            Err(EmptyGraphError)
        } else {
            Ok(())
        }
    }
}

impl<V: Ord> Graph<V> {
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.binary_search(vertex).is_ok()
    }

    pub fn contains_edge(&self, source: &V, destination: &V) -> bool {
        self.edges
            .binary_search_by(|edge| edge.endpoints().cmp(&(source, destination)))
            .is_ok()
    }

    /// Edges going out of given vertex, in canonical order.
    ///
    /// Since the edges are sorted by their source, these form a contiguous
    /// slice of [`edges`](Graph::edges).
    pub fn out_edges(&self, vertex: &V) -> &[Edge<V>] {
        let start = self.edges.partition_point(|edge| edge.source() < vertex);
        let len = self.edges[start..].partition_point(|edge| edge.source() == vertex);
        &self.edges[start..start + len]
    }

    /// Destinations of edges going out of given vertex, in ascending order.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.out_edges(vertex).iter().map(Edge::destination)
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.out_edges(vertex).len()
    }

    /// Number of edges coming into given vertex from a distinct vertex.
    ///
    /// Self-loops are not counted.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.destination() == vertex && edge.source() != vertex)
            .count()
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            domain: Domain::default(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
