/// Mapping from the values mentioned by a graph to a contiguous sequence of
/// indices that can be used in algorithms.
///
/// The domain contains every explicitly given vertex as well as every edge
/// endpoint. Values are held in ascending order, so the index of a value is
/// its position in the canonical order.
///
/// * memory used: _O(N)_
/// * index to value mapping: _O(1)_
/// * value to index mapping: _O(log(N))_
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain<V> {
    values: Vec<V>,
}

impl<V: Ord> Domain<V> {
    /// Constructs the domain from the iterator of values. Duplicates collapse.
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = iter.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        values.dedup();

        Self { values }
    }

    /// Maps given value to its index in the contiguous sequence.
    pub fn to_index(&self, value: &V) -> Option<usize> {
        self.values.binary_search(value).ok()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.to_index(value).is_some()
    }
}

impl<V> Domain<V> {
    /// Maps given index back to the value.
    pub fn to_value(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Returns the number of values in the domain.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the domain contains no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }
}

impl<V> Default for Domain<V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}
