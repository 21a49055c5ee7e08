use crate::error::Result;
use crate::picture::{check_dimensions, EnergyFunction, Grid, Picture};
use crate::seam_finder::SeamFinder;
use tracing::debug;

/// Seam search by tabulation, no graph involved.
///
/// `table[(x, y)]` holds the cheapest total energy of any seam prefix that ends at pixel
/// (x, y). Column 0 is the raw energy; column x adds the cheapest of the up to three
/// neighbours in column x-1. The seam is recovered by walking back from the cheapest cell in
/// the last column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicProgrammingSeamFinder;

impl DynamicProgrammingSeamFinder {
    pub fn new() -> Self {
        Self
    }

    /// Cumulative minimum-energy table for `picture`.
    pub fn cost_table<P, F>(picture: &P, f: &F) -> Result<Grid>
    where
        P: Picture + ?Sized,
        F: EnergyFunction<P> + ?Sized,
    {
        check_dimensions(picture)?;
        let (width, height) = (picture.width(), picture.height());
        let mut table = Grid::new(width, height, 0.0);

        for y in 0..height {
            table.set(0, y, f.apply(picture, 0, y));
        }
        for x in 1..width {
            for y in 0..height {
                let mut best = table[(x - 1, y)];
                if y > 0 {
                    best = best.min(table[(x - 1, y - 1)]);
                }
                if y + 1 < height {
                    best = best.min(table[(x - 1, y + 1)]);
                }
                table.set(x, y, f.apply(picture, x, y) + best);
            }
        }
        Ok(table)
    }
}

impl SeamFinder for DynamicProgrammingSeamFinder {
    fn find_horizontal<P, F>(&self, picture: &P, f: &F) -> Result<Vec<usize>>
    where
        P: Picture + ?Sized,
        F: EnergyFunction<P> + ?Sized,
    {
        let table = Self::cost_table(picture, f)?;
        let (width, height) = (table.width(), table.height());
        debug!(width, height, "tabulated seam costs");

        // Lowest row wins ties in the last column.
        let last = width - 1;
        let mut y = 0;
        for candidate in 1..height {
            if table[(last, candidate)] < table[(last, y)] {
                y = candidate;
            }
        }

        let mut seam = Vec::with_capacity(width);
        seam.push(y);
        for x in (1..width).rev() {
            // Same row first, then up, then down; only a strictly cheaper neighbour moves the seam.
            let mut best = y;
            if y > 0 && table[(x - 1, y - 1)] < table[(x - 1, best)] {
                best = y - 1;
            }
            if y + 1 < height && table[(x - 1, y + 1)] < table[(x - 1, best)] {
                best = y + 1;
            }
            y = best;
            seam.push(y);
        }
        seam.reverse();
        Ok(seam)
    }
}
