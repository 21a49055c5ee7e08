/*
Generative graph over the pixels of a picture.

Vertices are a virtual source, a virtual sink and one vertex per pixel. Nothing is stored:
the outgoing edges of a vertex are computed from the energy function each time they are
asked for.

  Source        -> every (0, y), weighted by the energy of (0, y)
  (x, y)        -> (x+1, y-1), (x+1, y), (x+1, y+1) when in bounds, weighted by the target energy
  (width-1, y)  -> Sink, weight 0
  Sink          -> nothing

Every edge moves one column right (or into the sink), so the graph is acyclic and any
source-to-sink path crosses each column exactly once.
*/

use crate::graph::{Edge, Graph};
use crate::picture::{EnergyFunction, Picture};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Source,
    Sink,
    Pixel { x: usize, y: usize },
}

pub struct PixelGraph<'a, P: ?Sized, F: ?Sized> {
    picture: &'a P,
    f: &'a F,
}

impl<'a, P, F> PixelGraph<'a, P, F>
where
    P: Picture + ?Sized,
    F: EnergyFunction<P> + ?Sized,
{
    pub fn new(picture: &'a P, f: &'a F) -> Self {
        Self { picture, f }
    }

    pub fn source(&self) -> Node {
        Node::Source
    }

    pub fn sink(&self) -> Node {
        Node::Sink
    }

    fn pixel_edge(&self, from: Node, x: usize, y: usize) -> Edge<Node> {
        Edge::new(from, Node::Pixel { x, y }, self.f.apply(self.picture, x, y))
    }
}

impl<P, F> Graph for PixelGraph<'_, P, F>
where
    P: Picture + ?Sized,
    F: EnergyFunction<P> + ?Sized,
{
    type Vertex = Node;

    fn neighbors(&self, node: &Node) -> Vec<Edge<Node>> {
        let (width, height) = (self.picture.width(), self.picture.height());
        match *node {
            Node::Source => (0..height)
                .map(|y| self.pixel_edge(Node::Source, 0, y))
                .collect(),
            Node::Sink => Vec::new(),
            Node::Pixel { x, .. } if x + 1 == width => {
                vec![Edge::new(*node, Node::Sink, 0.0)]
            }
            Node::Pixel { x, y } => {
                let lo = y.saturating_sub(1);
                let hi = (y + 1).min(height - 1);
                (lo..=hi).map(|ny| self.pixel_edge(*node, x + 1, ny)).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::{Grid, GridEnergy};

    fn grid_3x3() -> Grid {
        Grid::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    fn targets(edges: &[Edge<Node>]) -> Vec<(Node, f64)> {
        edges.iter().map(|e| (e.to, e.weight)).collect()
    }

    #[test]
    fn source_reaches_first_column() {
        let grid = grid_3x3();
        let graph = PixelGraph::new(&grid, &GridEnergy);
        assert_eq!(
            targets(&graph.neighbors(&graph.source())),
            vec![
                (Node::Pixel { x: 0, y: 0 }, 1.0),
                (Node::Pixel { x: 0, y: 1 }, 4.0),
                (Node::Pixel { x: 0, y: 2 }, 7.0),
            ]
        );
        assert!(graph.neighbors(&graph.sink()).is_empty());
    }

    #[test]
    fn pixels_fan_out_up_same_down() {
        let grid = grid_3x3();
        let graph = PixelGraph::new(&grid, &GridEnergy);
        assert_eq!(
            targets(&graph.neighbors(&Node::Pixel { x: 0, y: 1 })),
            vec![
                (Node::Pixel { x: 1, y: 0 }, 2.0),
                (Node::Pixel { x: 1, y: 1 }, 5.0),
                (Node::Pixel { x: 1, y: 2 }, 8.0),
            ]
        );
        // Clamped at the top and bottom edges.
        assert_eq!(graph.neighbors(&Node::Pixel { x: 0, y: 0 }).len(), 2);
        assert_eq!(
            targets(&graph.neighbors(&Node::Pixel { x: 1, y: 2 })),
            vec![(Node::Pixel { x: 2, y: 1 }, 6.0), (Node::Pixel { x: 2, y: 2 }, 9.0)]
        );
    }

    #[test]
    fn last_column_drains_into_sink() {
        let grid = grid_3x3();
        let graph = PixelGraph::new(&grid, &GridEnergy);
        let edges = graph.neighbors(&Node::Pixel { x: 2, y: 1 });
        assert_eq!(targets(&edges), vec![(Node::Sink, 0.0)]);
        assert_eq!(edges[0].from, Node::Pixel { x: 2, y: 1 });
    }

    #[test]
    fn single_row_has_one_edge_per_pixel() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let graph = PixelGraph::new(&grid, &GridEnergy);
        assert_eq!(
            targets(&graph.neighbors(&Node::Pixel { x: 0, y: 0 })),
            vec![(Node::Pixel { x: 1, y: 0 }, 2.0)]
        );
    }

    #[test]
    fn pixels_compare_by_coordinate() {
        let grid = grid_3x3();
        let graph = PixelGraph::new(&grid, &GridEnergy);
        let a = graph.neighbors(&Node::Pixel { x: 0, y: 0 })[1].to;
        let b = graph.neighbors(&Node::Pixel { x: 0, y: 2 })[0].to;
        assert_eq!(a, Node::Pixel { x: 1, y: 1 });
        assert_eq!(a, b);
    }
}
