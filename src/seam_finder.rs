use crate::error::Result;
use crate::picture::{check_dimensions, EnergyFunction, Picture, Transposed, TransposedEnergy};
use crate::pixel_graph::{Node, PixelGraph};
use crate::shortest_paths::SspAlgorithm;
use tracing::debug;

/// Finds minimum-energy seams: one pixel per column (or row), neighbours at most one apart.
pub trait SeamFinder {
    /// Row index of the seam pixel in each column, left to right.
    fn find_horizontal<P, F>(&self, picture: &P, f: &F) -> Result<Vec<usize>>
    where
        P: Picture + ?Sized,
        F: EnergyFunction<P> + ?Sized;

    /// Column index of the seam pixel in each row, top to bottom.
    fn find_vertical<P, F>(&self, picture: &P, f: &F) -> Result<Vec<usize>>
    where
        P: Picture + ?Sized,
        F: EnergyFunction<P> + ?Sized,
    {
        self.find_horizontal(&Transposed(picture), &TransposedEnergy(f))
    }
}

/// Seam search as a shortest path from a virtual source left of the picture to a virtual sink
/// right of it, over a `PixelGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerativeSeamFinder {
    algorithm: SspAlgorithm,
}

impl GenerativeSeamFinder {
    pub fn new(algorithm: SspAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Default for GenerativeSeamFinder {
    fn default() -> Self {
        // The pixel graph is always acyclic.
        Self::new(SspAlgorithm::Toposort)
    }
}

impl SeamFinder for GenerativeSeamFinder {
    fn find_horizontal<P, F>(&self, picture: &P, f: &F) -> Result<Vec<usize>>
    where
        P: Picture + ?Sized,
        F: EnergyFunction<P> + ?Sized,
    {
        check_dimensions(picture)?;
        debug!(
            width = picture.width(),
            height = picture.height(),
            algorithm = ?self.algorithm,
            "searching pixel graph for a horizontal seam"
        );

        let graph = PixelGraph::new(picture, f);
        let solver = self.algorithm.run(&graph, graph.source());
        let path = solver.solution(&graph.sink())?;

        // Drop the virtual endpoints; everything in between is a pixel, one per column.
        Ok(path
            .into_iter()
            .filter_map(|node| match node {
                Node::Pixel { y, .. } => Some(y),
                Node::Source | Node::Sink => None,
            })
            .collect())
    }
}

/// Total energy of the pixels on a horizontal seam.
pub fn seam_cost<P, F>(picture: &P, f: &F, seam: &[usize]) -> f64
where
    P: Picture + ?Sized,
    F: EnergyFunction<P> + ?Sized,
{
    seam.iter()
        .enumerate()
        .map(|(x, &y)| f.apply(picture, x, y))
        .sum()
}
