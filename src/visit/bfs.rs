use crate::{common::Queue, Graph};

use super::{
    raw::{Discovery, RawAlgo},
    Algo,
};

/// Breadth-first discovery.
///
/// The head of the queue is dequeued and all its undiscovered successors are
/// enqueued in canonical edge order.
pub(crate) enum RawBfs {}

impl<V: Ord + Clone> RawAlgo<V> for RawBfs {
    type Frontier = Queue<V>;

    const ALGO: Algo = Algo::Bfs;

    fn step(graph: &Graph<V>, queue: &mut Queue<V>, discovery: &mut Discovery<'_, V>) {
        let head = queue
            .dequeue()
            .expect("traversal step on an empty frontier");

        for destination in graph.successors(&head) {
            if discovery.discover(destination) {
                queue.enqueue(destination.clone());
            }
        }
    }
}
