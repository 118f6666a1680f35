//! Relation analysis on [`Graph`](crate::Graph): property predicates, roots
//! and equivalence classes.

pub mod props;
pub mod roots;

pub use props::Properties;
