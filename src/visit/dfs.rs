use crate::{common::Stack, Graph};

use super::{
    raw::{Discovery, RawAlgo},
    Algo,
};

/// Depth-first discovery.
///
/// Edges are scanned in canonical order against the current top of the stack.
/// Once an undiscovered successor is pushed, the scan continues with the edges
/// of that successor, so a single iteration may descend several levels. The
/// scan cannot go back in the canonical order, so it stops when the pushed
/// successor is less than its predecessor. The top is popped only when it has
/// no undiscovered successor left.
pub(crate) enum RawDfs {}

impl<V: Ord + Clone> RawAlgo<V> for RawDfs {
    type Frontier = Stack<V>;

    const ALGO: Algo = Algo::Dfs;

    fn step(graph: &Graph<V>, stack: &mut Stack<V>, discovery: &mut Discovery<'_, V>) {
        let mut current = stack
            .peek()
            .cloned()
            .expect("traversal step on an empty frontier");

        let mut found = false;
        loop {
            let next = graph
                .successors(&current)
                .find(|destination| !discovery.is_discovered(destination))
                .cloned();

            let Some(destination) = next else {
                break;
            };

            discovery.discover(&destination);
            stack.push(destination.clone());
            found = true;

            // Edges of lesser sources were already scanned.
            if destination < current {
                break;
            }
            current = destination;
        }

        if !found {
            // Dead end, backtrack.
            stack.pop();
        }
    }
}
