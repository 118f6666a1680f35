use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{core::Edge, Graph};

impl<'a, V> Arbitrary<'a> for Edge<V>
where
    V: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let (source, destination) = u.arbitrary()?;
        Ok(Edge::new(source, destination))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <(V, V)>::size_hint(depth)
    }
}

impl<'a, V> Arbitrary<'a> for Graph<V>
where
    V: Arbitrary<'a> + Ord + Clone,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertices: Vec<V> = u.arbitrary()?;
        let edges: Vec<Edge<V>> = u.arbitrary()?;
        Ok(Graph::new(vertices, edges))
    }
}

/// A graph whose edges only connect its own vertices.
#[derive(Debug, Clone)]
pub struct ClosedGraph<V>(pub Graph<V>);

impl<'a, V> Arbitrary<'a> for ClosedGraph<V>
where
    V: Arbitrary<'a> + Ord + Clone,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertices: Vec<V> = u.arbitrary()?;
        let edges = if vertices.is_empty() {
            Vec::new()
        } else {
            let count = u.arbitrary_len::<(u8, u8)>()?;
            (0..count)
                .map(|_| {
                    let source = u.choose(&vertices)?.clone();
                    let destination = u.choose(&vertices)?.clone();
                    Ok((source, destination))
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self(Graph::new(vertices, edges)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infra::testing::check_consistency;

    const DATA: &[u8] = &[
        7, 3, 9, 1, 4, 4, 2, 8, 0, 5, 6, 1, 3, 3, 2, 7, 9, 9, 0, 1, 4, 2, 6, 8, 5, 3, 1, 0,
    ];

    #[test]
    fn arbitrary_graph_is_consistent() {
        let mut u = Unstructured::new(DATA);
        let graph = Graph::<u8>::arbitrary(&mut u).unwrap();

        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn closed_graph_endpoints_are_vertices() {
        let mut u = Unstructured::new(DATA);
        let ClosedGraph(graph) = ClosedGraph::<u8>::arbitrary(&mut u).unwrap();

        for edge in graph.edges() {
            let (source, destination) = edge.endpoints();
            assert!(graph.contains_vertex(source));
            assert!(graph.contains_vertex(destination));
        }
        assert_eq!(check_consistency(&graph), Ok(()));
    }
}
