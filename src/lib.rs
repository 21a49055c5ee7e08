//! Minimum-energy seams through a cost grid.
//!
//! A seam is found two ways: as a shortest path through a generative pixel graph
//! (`GenerativeSeamFinder`, using either the DAG toposort solver or Dijkstra over an indexed
//! heap), and by direct tabulation (`DynamicProgrammingSeamFinder`). Both report seams of equal
//! total energy.

pub mod dijkstra;
pub mod double_map_min_pq;
pub mod dp_seam_finder;
pub mod error;
pub mod graph;
pub mod heap_min_pq;
pub mod min_pq;
pub mod picture;
pub mod pixel_graph;
pub mod seam_finder;
pub mod shortest_paths;
pub mod toposort_dag;
pub mod unsorted_array_min_pq;

pub use dijkstra::DijkstraSolver;
pub use double_map_min_pq::DoubleMapMinPq;
pub use dp_seam_finder::DynamicProgrammingSeamFinder;
pub use error::{Error, Result};
pub use graph::{AdjacencyListGraph, Edge, Graph};
pub use heap_min_pq::HeapMinPq;
pub use min_pq::{MinPq, Priority, PriorityNode};
pub use picture::{EnergyFunction, Grid, GridEnergy, Picture, Transposed, TransposedEnergy};
pub use pixel_graph::{Node, PixelGraph};
pub use seam_finder::{seam_cost, GenerativeSeamFinder, SeamFinder};
pub use shortest_paths::{ShortestPathSolver, ShortestPathTree, SspAlgorithm};
pub use toposort_dag::ToposortDagSolver;
pub use unsorted_array_min_pq::UnsortedArrayMinPq;
