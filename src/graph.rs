use hashbrown::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed, weighted edge. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// A directed graph that only has to answer "what leaves this vertex?".
///
/// Nothing requires the vertex or edge sets to exist up front: implementations are free to
/// compute the outgoing edges of a vertex on every call.
pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;

    /// Outgoing edges of `vertex`, in a deterministic order.
    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Edge<Self::Vertex>>;
}

/// Explicit graph stored as per-vertex edge lists.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V>
where
    V: Clone + Eq + Hash,
{
    adjacency: HashMap<V, Vec<Edge<V>>>,
    num_edges: usize,
}

impl<V> Default for AdjacencyListGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            num_edges: 0,
        }
    }
}

impl<V> AdjacencyListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        // Register the target too so it counts as a vertex with no outgoing edges.
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Edge::new(from, to, weight));
        self.num_edges += 1;
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

impl<V> Graph for AdjacencyListGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;

    fn neighbors(&self, vertex: &V) -> Vec<Edge<V>> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }
}
