use std::{collections::BTreeMap, fmt};

use proptest::{
    collection::vec,
    prelude::any,
    sample::Index,
    strategy::{BoxedStrategy, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::Graph;

pub fn relation<S: Strategy>(vertex: S) -> RelationStrategy<S> {
    RelationStrategy::new(vertex)
}

/// Shape of the generated relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationClass {
    /// Independent vertices and edges. Edge endpoints need not be vertices.
    Any,
    /// Edges only between generated vertices.
    Closed,
    /// Equivalence relations with all endpoints being vertices.
    Equivalence,
}

#[derive(Debug)]
pub struct RelationStrategy<S> {
    vertex: S,
    max_size: usize,
    class: RelationClass,
}

impl<S: Strategy> RelationStrategy<S> {
    pub fn new(vertex: S) -> Self {
        Self {
            vertex,
            max_size: 24,
            class: RelationClass::Closed,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `relation(0..10u8).max_size(8).equivalence()`.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn open(self) -> Self {
        self.class(RelationClass::Any)
    }

    pub fn equivalence(self) -> Self {
        self.class(RelationClass::Equivalence)
    }

    pub fn class(self, class: RelationClass) -> Self {
        Self { class, ..self }
    }
}

impl<S> RelationStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: Ord + Clone + fmt::Debug + 'static,
{
    fn build(&self) -> BoxedStrategy<Graph<S::Value>> {
        let vertices = vec(self.vertex.clone(), 0..=self.max_size);
        let max_edges = 2 * self.max_size;

        match self.class {
            RelationClass::Any => (
                vertices,
                vec((self.vertex.clone(), self.vertex.clone()), 0..=max_edges),
            )
                .prop_map(|(vertices, edges)| Graph::new(vertices, edges))
                .boxed(),
            RelationClass::Closed => (vertices, vec(any::<(Index, Index)>(), 0..=max_edges))
                .prop_map(|(vertices, pairs)| {
                    let edges = if vertices.is_empty() {
                        Vec::new()
                    } else {
                        pairs
                            .iter()
                            .map(|(i, j)| (i.get(&vertices).clone(), j.get(&vertices).clone()))
                            .collect()
                    };
                    Graph::new(vertices, edges)
                })
                .boxed(),
            RelationClass::Equivalence => {
                vec((self.vertex.clone(), 0..4usize), 0..=self.max_size)
                    .prop_map(|labeled| {
                        // A repeated value keeps its first label.
                        let mut labels = BTreeMap::new();
                        for (vertex, label) in labeled {
                            labels.entry(vertex).or_insert(label);
                        }

                        let mut edges = Vec::new();
                        for (u, lu) in labels.iter() {
                            for (v, lv) in labels.iter() {
                                if lu == lv {
                                    edges.push((u.clone(), v.clone()));
                                }
                            }
                        }

                        Graph::new(labels.into_keys(), edges)
                    })
                    .boxed()
            }
        }
    }
}

impl<S> Strategy for RelationStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: Ord + Clone + fmt::Debug + 'static,
{
    type Tree = Box<dyn ValueTree<Value = Graph<S::Value>>>;
    type Value = Graph<S::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}
