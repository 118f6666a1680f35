/// An ordered pair of related values.
///
/// Equality, ordering and hashing are all by value. The derived ordering
/// compares the source first and the destination second, which is the
/// canonical order of edges in a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Edge<V> {
    source: V,
    destination: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.destination)
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.source, self.destination)
    }

    /// Returns `true` if the source and destination are equal values.
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source == self.destination
    }

    /// Returns the edge going in the opposite direction.
    pub fn reversed(&self) -> Self
    where
        V: Clone,
    {
        Self::new(self.destination.clone(), self.source.clone())
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, destination): (V, V)) -> Self {
        Self::new(source, destination)
    }
}

impl<V> From<Edge<V>> for (V, V) {
    fn from(edge: Edge<V>) -> Self {
        edge.into_endpoints()
    }
}
