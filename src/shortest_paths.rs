use crate::dijkstra::DijkstraSolver;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::toposort_dag::ToposortDagSolver;
use hashbrown::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Single-source shortest paths, already solved from a fixed start vertex.
pub trait ShortestPathSolver<V> {
    /// Vertices on a shortest path from the start to `goal`, both inclusive.
    fn solution(&self, goal: &V) -> Result<Vec<V>>;

    /// Length of the shortest path from the start to `goal`, `None` when unreachable.
    fn distance_to(&self, goal: &V) -> Option<f64>;
}

/// Distance and predecessor tables for one solve.
///
/// Only the start vertex may lack a predecessor edge once a goal is considered reached.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V>
where
    V: Clone + Eq + Hash,
{
    start: V,
    dist_to: HashMap<V, f64>,
    edge_to: HashMap<V, Edge<V>>,
}

impl<V> ShortestPathTree<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new(start: V) -> Self {
        let mut dist_to = HashMap::new();
        dist_to.insert(start.clone(), 0.0);
        Self {
            start,
            dist_to,
            edge_to: HashMap::new(),
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    /// Current best distance; vertices never seen are infinitely far.
    pub fn dist(&self, vertex: &V) -> f64 {
        self.dist_to.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Seeds a vertex at +inf without touching an existing entry.
    pub fn discover(&mut self, vertex: V) {
        self.dist_to.entry(vertex).or_insert(f64::INFINITY);
    }

    pub fn num_vertices(&self) -> usize {
        self.dist_to.len()
    }

    /// Relaxes `edge`. Returns the improved distance of `edge.to`, if any.
    pub fn relax(&mut self, edge: &Edge<V>) -> Option<f64> {
        let candidate = self.dist(&edge.from) + edge.weight;
        if candidate < self.dist(&edge.to) {
            self.dist_to.insert(edge.to.clone(), candidate);
            self.edge_to.insert(edge.to.clone(), edge.clone());
            Some(candidate)
        } else {
            None
        }
    }

    pub fn distance_to(&self, goal: &V) -> Option<f64> {
        let d = self.dist(goal);
        d.is_finite().then_some(d)
    }

    /// Follows predecessor edges back from `goal` to the start.
    pub fn path_to(&self, goal: &V) -> Result<Vec<V>> {
        if goal != &self.start && !self.edge_to.contains_key(goal) {
            return Err(Error::Unreachable(format!("{:?}", goal)));
        }
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(edge) = self.edge_to.get(current) {
            current = &edge.from;
            path.push(current.clone());
        }
        path.reverse();
        Ok(path)
    }
}

/// Choice of shortest-path strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SspAlgorithm {
    /// Reverse-postorder relaxation. Only valid when the graph reachable from the start is acyclic.
    Toposort,
    /// Priority-queue search. Any graph with non-negative weights.
    Dijkstra,
}

impl SspAlgorithm {
    pub fn from_name(name: &str) -> std::result::Result<Self, String> {
        match name {
            "toposort" => Ok(SspAlgorithm::Toposort),
            "dijkstra" => Ok(SspAlgorithm::Dijkstra),
            _ => Err(format!(
                "Algorithm not found for input string: {}, possible options are: (\"toposort\", \"dijkstra\")",
                name
            )),
        }
    }

    pub fn run<G>(&self, graph: &G, start: G::Vertex) -> Box<dyn ShortestPathSolver<G::Vertex>>
    where
        G: Graph,
        G::Vertex: 'static,
    {
        match self {
            SspAlgorithm::Toposort => Box::new(ToposortDagSolver::new(graph, start)),
            SspAlgorithm::Dijkstra => Box::new(DijkstraSolver::new(graph, start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    // 0 -> 1 -> 3 costs 1 + 2, 0 -> 2 -> 3 costs 4 + 1.
    fn diamond() -> AdjacencyListGraph<u32> {
        AdjacencyListGraph::from_edges(vec![(0, 1, 1.0), (0, 2, 4.0), (1, 3, 2.0), (2, 3, 1.0)])
    }

    #[test]
    fn both_algorithms_take_the_cheaper_side_of_the_diamond() {
        let graph = diamond();
        for algorithm in [SspAlgorithm::Toposort, SspAlgorithm::Dijkstra] {
            let solver = algorithm.run(&graph, 0);
            assert_eq!(solver.solution(&3).unwrap(), vec![0, 1, 3], "{:?}", algorithm);
            assert_eq!(solver.distance_to(&3), Some(3.0));
            assert_eq!(solver.distance_to(&2), Some(4.0));
        }
    }

    #[test]
    fn path_to_start_is_just_the_start() {
        let solver = SspAlgorithm::Toposort.run(&diamond(), 0);
        assert_eq!(solver.solution(&0).unwrap(), vec![0]);
        assert_eq!(solver.distance_to(&0), Some(0.0));
    }

    #[test]
    fn unreachable_goal_is_an_error() {
        let graph = diamond();
        for algorithm in [SspAlgorithm::Toposort, SspAlgorithm::Dijkstra] {
            let solver = algorithm.run(&graph, 1);
            assert_eq!(solver.solution(&2), Err(Error::Unreachable("2".into())));
            assert_eq!(solver.distance_to(&2), None);
            assert_eq!(solver.solution(&99), Err(Error::Unreachable("99".into())));
        }
    }

    #[test]
    fn relax_only_keeps_improvements() {
        let mut tree = ShortestPathTree::new('s');
        assert_eq!(tree.start(), &'s');
        assert_eq!(tree.relax(&Edge::new('s', 'a', 5.0)), Some(5.0));
        assert_eq!(tree.relax(&Edge::new('s', 'a', 7.0)), None);
        assert_eq!(tree.relax(&Edge::new('s', 'a', 2.0)), Some(2.0));
        assert_eq!(tree.path_to(&'a').unwrap(), vec!['s', 'a']);
        tree.discover('a');
        assert_eq!(tree.dist(&'a'), 2.0);
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(SspAlgorithm::from_name("toposort"), Ok(SspAlgorithm::Toposort));
        assert_eq!(SspAlgorithm::from_name("dijkstra"), Ok(SspAlgorithm::Dijkstra));
        assert!(SspAlgorithm::from_name("bmssp").is_err());
    }
}
