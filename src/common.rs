pub mod collections;
pub mod visit_set;

pub use collections::{Frontier, Queue, Stack};
pub use visit_set::VisitSet;
