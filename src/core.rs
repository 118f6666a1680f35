//! Building blocks of a relation graph: edges, the value domain and the error
//! type shared by all queries.

pub mod domain;
pub mod edge;
pub mod error;

pub use domain::Domain;
pub use edge::Edge;
pub use error::EmptyGraphError;
