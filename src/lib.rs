//! Finite binary relations over totally ordered values.
//!
//! A [`Graph`] holds a set of vertices and a set of [edges](Edge) in canonical
//! ascending order and answers structural questions about the relation they
//! form:
//!
//! * [relation properties](algo::props) such as reflexivity, symmetry,
//!   transitivity, antisymmetry and equivalence,
//! * [roots and equivalence classes](algo::roots),
//! * breadth-first and depth-first [traversals](visit) over all components,
//!   in iterative and recursive flavor.
//!
//! All queries fail with [`EmptyGraphError`] on a graph that has neither
//! vertices nor edges.
//!
//! # Examples
//!
//! ```
//! use relgraph::Graph;
//!
//! let graph = Graph::new(
//!     ["a", "b", "c"],
//!     [("a", "a"), ("a", "b"), ("b", "b"), ("c", "c")],
//! );
//!
//! assert!(graph.is_reflexive()?);
//! assert!(graph.is_antisymmetric()?);
//! assert!(!graph.is_equivalence()?);
//! assert_eq!(graph.iterative_breadth_first_search()?, vec!["a", "b", "c"]);
//! # Ok::<(), relgraph::EmptyGraphError>(())
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

#[doc(inline)]
pub use self::{
    algo::Properties,
    core::{Edge, EmptyGraphError},
    graph::Graph,
    visit::Traversal,
};
