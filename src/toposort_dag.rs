/*
Shortest paths on a directed acyclic graph in O(V + E).

Vertices reachable from the start are relaxed once each, in reverse DFS postorder (a
topological order of the reachable subgraph). Every edge into a vertex has been relaxed by the
time that vertex is processed, so no priority queue and no revisiting are needed.

The graph reachable from the start must be acyclic. This is not checked: a cycle produces
wrong distances, not an error.
*/

use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::shortest_paths::{ShortestPathSolver, ShortestPathTree};
use hashbrown::HashSet;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ToposortDagSolver<V>
where
    V: Clone + Eq + Hash,
{
    tree: ShortestPathTree<V>,
}

impl<V> ToposortDagSolver<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new<G>(graph: &G, start: V) -> Self
    where
        G: Graph<Vertex = V>,
    {
        let mut tree = ShortestPathTree::new(start.clone());
        for vertex in reachable_from(graph, &start) {
            tree.discover(vertex);
        }

        let order = reverse_postorder(graph, &start);
        let mut relaxations = 0usize;
        for vertex in &order {
            for edge in graph.neighbors(vertex) {
                if tree.relax(&edge).is_some() {
                    relaxations += 1;
                }
            }
        }
        debug!(
            start = ?tree.start(),
            vertices = order.len(),
            relaxations, "toposort shortest paths solved"
        );

        Self { tree }
    }

    pub fn tree(&self) -> &ShortestPathTree<V> {
        &self.tree
    }
}

impl<V> ShortestPathSolver<V> for ToposortDagSolver<V>
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

/// Breadth-first set of vertices reachable from `start`, `start` included.
pub fn reachable_from<G: Graph>(graph: &G, start: &G::Vertex) -> HashSet<G::Vertex> {
    let mut reachable = HashSet::new();
    let mut queue = VecDeque::new();
    reachable.insert(start.clone());
    queue.push_back(start.clone());
    while let Some(vertex) = queue.pop_front() {
        for Edge { to, .. } in graph.neighbors(&vertex) {
            if reachable.insert(to.clone()) {
                queue.push_back(to);
            }
        }
    }
    reachable
}

/// Reverse DFS postorder of the subgraph reachable from `start`.
///
/// The DFS keeps its own stack so long chains (one vertex per picture column) cannot overflow
/// the call stack.
pub fn reverse_postorder<G: Graph>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex> {
    let mut postorder = Vec::new();
    let mut visited = HashSet::new();
    // Each frame is a vertex and its remaining outgoing edges, consumed front to back.
    let mut stack: Vec<(G::Vertex, std::vec::IntoIter<Edge<G::Vertex>>)> = Vec::new();

    visited.insert(start.clone());
    stack.push((start.clone(), graph.neighbors(start).into_iter()));
    while let Some((_, edges)) = stack.last_mut() {
        match edges.next() {
            Some(edge) => {
                if visited.insert(edge.to.clone()) {
                    let next = graph.neighbors(&edge.to).into_iter();
                    stack.push((edge.to, next));
                }
            }
            None => {
                if let Some((vertex, _)) = stack.pop() {
                    postorder.push(vertex);
                }
            }
        }
    }

    postorder.reverse();
    postorder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::AdjacencyListGraph;

    fn sample_graph() -> AdjacencyListGraph<usize> {
        let mut graph = AdjacencyListGraph::new();
        for (from, edges) in [
            (0, vec![(1, 0.0), (2, 1.0), (7, 5.0)]),
            (1, vec![(3, 3.0), (4, 2.0)]),
            (2, vec![(4, 3.0), (5, 2.0)]),
            (3, vec![(6, 2.0)]),
            (4, vec![(6, 2.0)]),
            (6, vec![(8, 3.0)]),
            (7, vec![(9, 2.0)]),
            (8, vec![(10, 1.0)]),
            (9, vec![(10, 2.0)]),
        ] {
            for (to, weight) in edges {
                graph.add_edge(from, to, weight);
            }
        }
        graph
    }

    #[test]
    fn sample_graph_distances() {
        let solver = ToposortDagSolver::new(&sample_graph(), 0);
        let expected = [0.0, 0.0, 1.0, 3.0, 2.0, 3.0, 4.0, 5.0, 7.0, 7.0, 8.0];
        for (vertex, &dist) in expected.iter().enumerate() {
            assert_eq!(solver.distance_to(&vertex), Some(dist), "vertex {}", vertex);
        }
        // 0 -> 7 -> 9 -> 10 costs 9.
        assert_eq!(solver.solution(&10).unwrap(), vec![0, 1, 4, 6, 8, 10]);
    }

    #[test]
    fn postorder_is_topological() {
        let graph = sample_graph();
        let order = reverse_postorder(&graph, &0);
        assert_eq!(order.len(), 11);
        let position = |v: usize| order.iter().position(|&u| u == v).unwrap();
        for from in 0..11 {
            for edge in graph.neighbors(&from) {
                assert!(position(edge.from) < position(edge.to), "{:?}", edge);
            }
        }
    }

    #[test]
    fn only_reachable_vertices_are_tabled() {
        let solver = ToposortDagSolver::new(&sample_graph(), 2);
        assert_eq!(reachable_from(&sample_graph(), &2).len(), 6);
        assert_eq!(solver.tree().num_vertices(), 6);
        assert_eq!(solver.distance_to(&10), Some(3.0 + 2.0 + 3.0 + 1.0));
        assert!(matches!(solver.solution(&7), Err(Error::Unreachable(_))));
    }

    #[test]
    fn negative_weights_are_fine_on_a_dag() {
        let graph = AdjacencyListGraph::from_edges(vec![("s", "a", 2.0), ("s", "b", 1.0), ("a", "b", -3.0)]);
        let solver = ToposortDagSolver::new(&graph, "s");
        assert_eq!(solver.distance_to(&"b"), Some(-1.0));
        assert_eq!(solver.solution(&"b").unwrap(), vec!["s", "a", "b"]);
    }
}
