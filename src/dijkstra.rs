use crate::error::Result;
use crate::graph::Graph;
use crate::heap_min_pq::HeapMinPq;
use crate::min_pq::MinPq;
use crate::shortest_paths::{ShortestPathSolver, ShortestPathTree};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Dijkstra from `start` over any graph with non-negative edge weights, cycles allowed.
///
/// The frontier is a `HeapMinPq` keyed by vertex, so an improved vertex has its priority
/// lowered in place instead of being pushed a second time.
#[derive(Debug, Clone)]
pub struct DijkstraSolver<V>
where
    V: Clone + Eq + Hash,
{
    tree: ShortestPathTree<V>,
}

impl<V> DijkstraSolver<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new<G>(graph: &G, start: V) -> Self
    where
        G: Graph<Vertex = V>,
    {
        let mut tree = ShortestPathTree::new(start.clone());
        let mut pq = HeapMinPq::new();
        pq.decrease_key_or_push(start, 0.0);

        let mut settled = 0usize;
        while let Ok(vertex) = pq.remove_min() {
            settled += 1;
            for edge in graph.neighbors(&vertex) {
                if let Some(dist) = tree.relax(&edge) {
                    pq.decrease_key_or_push(edge.to, dist);
                }
            }
        }
        debug!(
            start = ?tree.start(),
            settled,
            vertices = tree.num_vertices(),
            "dijkstra shortest paths solved"
        );

        Self { tree }
    }
}

impl<V> ShortestPathSolver<V> for DijkstraSolver<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn solution(&self, goal: &V) -> Result<Vec<V>> {
        self.tree.path_to(goal)
    }

    fn distance_to(&self, goal: &V) -> Option<f64> {
        self.tree.distance_to(goal)
    }
}
