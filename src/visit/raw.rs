use fixedbitset::FixedBitSet;

use crate::{
    common::{Frontier, VisitSet},
    core::{Domain, EmptyGraphError},
    Graph,
};

use super::{Algo, Mode};

/// Visited values in the order of their discovery.
pub(crate) struct Discovery<'a, V> {
    domain: &'a Domain<V>,
    // Values are mapped to compact domain indices, so a bit set suffices.
    visited: FixedBitSet,
    order: Vec<V>,
}

impl<'a, V: Ord + Clone> Discovery<'a, V> {
    pub fn new(domain: &'a Domain<V>) -> Self {
        Self {
            domain,
            visited: FixedBitSet::with_capacity(domain.len()),
            order: Vec::with_capacity(domain.len()),
        }
    }

    fn index(&self, value: &V) -> usize {
        self.domain
            .to_index(value)
            .expect("traversed value does not belong to the graph domain")
    }

    /// Marks the value as visited and records it. Returns `false` if it had
    /// been discovered already.
    pub fn discover(&mut self, value: &V) -> bool {
        let index = self.index(value);
        if self.visited.visit(index) {
            self.order.push(value.clone());
            true
        } else {
            false
        }
    }

    pub fn is_discovered(&self, value: &V) -> bool {
        self.visited.is_visited(&self.index(value))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn into_vec(self) -> Vec<V> {
        self.order
    }
}

/// Starting points of a traversal.
///
/// The roots come first, in canonical order. They are followed by all vertices
/// in canonical order, which only matters for vertices that are not reachable
/// from any root (e.g., a cycle without incoming edges).
pub(crate) struct Starts<V> {
    values: Vec<V>,
    roots: usize,
}

impl<V: Ord + Clone> Starts<V> {
    pub fn new(graph: &Graph<V>) -> Result<Self, EmptyGraphError> {
        let roots = graph.roots()?;
        let count = roots.len();
        let values = roots
            .into_iter()
            .chain(graph.vertices().iter().cloned())
            .collect();

        Ok(Self {
            values,
            roots: count,
        })
    }

    pub fn root_count(&self) -> usize {
        self.roots
    }

    /// Finds the first start at position `next` or later that was not yet
    /// discovered, discovers it and puts it on the frontier. Returns the
    /// position of the following start, or `None` if all starts were
    /// consumed.
    pub fn advance<F>(
        &self,
        next: usize,
        frontier: &mut F,
        discovery: &mut Discovery<'_, V>,
    ) -> Option<usize>
    where
        F: Frontier<V>,
    {
        let (offset, start) = self
            .values
            .iter()
            .enumerate()
            .skip(next)
            .find(|(_, start)| !discovery.is_discovered(start))?;

        let is_root = offset < self.roots;
        tracing::trace!(
            position = offset,
            root = is_root,
            discovered = discovery.len(),
            "advancing traversal to next start"
        );

        discovery.discover(start);
        frontier.put(start.clone());

        Some(offset + 1)
    }
}

/// A single traversal strategy.
pub(crate) trait RawAlgo<V> {
    type Frontier: Frontier<V>;

    const ALGO: Algo;

    /// Performs one iteration on the non-empty frontier.
    fn step(graph: &Graph<V>, frontier: &mut Self::Frontier, discovery: &mut Discovery<'_, V>);
}

pub(crate) fn traverse<A, V>(graph: &Graph<V>, mode: Mode) -> Result<Vec<V>, EmptyGraphError>
where
    A: RawAlgo<V>,
    V: Ord + Clone,
{
    let starts = Starts::new(graph)?;

    tracing::debug!(
        algo = ?A::ALGO,
        mode = ?mode,
        roots = starts.root_count(),
        "starting traversal"
    );

    let discovery = Discovery::new(graph.domain());
    let frontier = A::Frontier::default();

    let discovery = match mode {
        Mode::Iterative => iterative::<A, V>(graph, &starts, frontier, discovery),
        Mode::Recursive => recursive::<A, V>(graph, &starts, 0, frontier, discovery),
    };

    Ok(discovery.into_vec())
}

fn iterative<'a, A, V>(
    graph: &Graph<V>,
    starts: &Starts<V>,
    mut frontier: A::Frontier,
    mut discovery: Discovery<'a, V>,
) -> Discovery<'a, V>
where
    A: RawAlgo<V>,
    V: Ord + Clone,
{
    let mut next = 0;

    loop {
        if frontier.is_empty() {
            match starts.advance(next, &mut frontier, &mut discovery) {
                Some(following) => next = following,
                None => return discovery,
            }
        }

        A::step(graph, &mut frontier, &mut discovery);
    }
}

// Recurses once per iteration, so the depth grows with the size of the graph.
fn recursive<'a, A, V>(
    graph: &Graph<V>,
    starts: &Starts<V>,
    next: usize,
    mut frontier: A::Frontier,
    mut discovery: Discovery<'a, V>,
) -> Discovery<'a, V>
where
    A: RawAlgo<V>,
    V: Ord + Clone,
{
    if frontier.is_empty() {
        return match starts.advance(next, &mut frontier, &mut discovery) {
            Some(following) => recursive::<A, V>(graph, starts, following, frontier, discovery),
            None => discovery,
        };
    }

    A::step(graph, &mut frontier, &mut discovery);
    recursive::<A, V>(graph, starts, next, frontier, discovery)
}
