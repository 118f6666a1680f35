#![allow(dead_code)]

use fastrand::Rng;
use petgraph::graph::NodeIndex;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Geometric skipping over the lower triangle of the adjacency matrix.
///
/// Efficient generation of large random networks,
/// http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Random edges oriented either way with equal probability.
pub fn random_pairs(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(u32, u32)> {
    let mut edges = RandomEdges::new(vertex_count, density);
    let mut pairs = Vec::new();

    while let Some((u, v)) = edges.next_edge(rng) {
        let (u, v) = (u as u32, v as u32);
        pairs.push(if rng.bool() { (u, v) } else { (v, u) });
    }

    pairs
}

pub fn relgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> relgraph::Graph<u32> {
    let pairs = random_pairs(vertex_count, density, rng);
    relgraph::Graph::new(0..vertex_count as u32, pairs)
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for i in 0..vertex_count {
        graph.add_node(i as u32);
    }

    for (u, v) in random_pairs(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize), ());
    }

    graph
}
