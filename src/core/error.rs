use thiserror::Error;

/// The error returned by relation and traversal queries on a graph without any
/// vertices and edges.
///
/// There is no meaningful relation to classify nor anything to traverse in
/// such a graph. The condition is structural, so retrying the query on the
/// same graph always fails again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("graph has no vertices and no edges")]
pub struct EmptyGraphError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(
            EmptyGraphError.to_string(),
            "graph has no vertices and no edges"
        );
    }
}
