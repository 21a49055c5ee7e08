use crate::error::{Error, Result};
use std::ops::Index;

/// Anything with a width and a height. Must not change while a seam is being searched.
pub trait Picture {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
}

/// Cost of the pixel at column `x`, row `y`.
///
/// Must be deterministic: the seam finders may ask for the same pixel several times.
pub trait EnergyFunction<P: ?Sized> {
    fn apply(&self, picture: &P, x: usize, y: usize) -> f64;
}

impl<P: ?Sized, F> EnergyFunction<P> for F
where
    F: Fn(&P, usize, usize) -> f64,
{
    fn apply(&self, picture: &P, x: usize, y: usize) -> f64 {
        self(picture, x, y)
    }
}

pub fn check_dimensions<P: Picture + ?Sized>(picture: &P) -> Result<()> {
    let (width, height) = (picture.width(), picture.height());
    if width == 0 || height == 0 {
        return Err(Error::InvalidPicture { width, height });
    }
    Ok(())
}

/// Row-major grid of precomputed costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: f64) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Builds a grid from rows (`rows[y][x]`). All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(Error::RaggedGrid {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        let grid = Self {
            width,
            height,
            cells,
        };
        check_dimensions(&grid)?;
        Ok(grid)
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let i = self.index_of(x, y);
        self.cells[i] = value;
    }

    // Out-of-range x would otherwise wrap into the next row.
    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl Picture for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        &self.cells[self.index_of(x, y)]
    }
}

/// Energy of a `Grid` pixel is the value stored in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEnergy;

impl EnergyFunction<Grid> for GridEnergy {
    fn apply(&self, grid: &Grid, x: usize, y: usize) -> f64 {
        grid[(x, y)]
    }
}

/// View of a picture with rows and columns swapped.
pub struct Transposed<'a, P: ?Sized>(pub &'a P);

impl<P: Picture + ?Sized> Picture for Transposed<'_, P> {
    fn width(&self) -> usize {
        self.0.height()
    }

    fn height(&self) -> usize {
        self.0.width()
    }
}

/// Energy function over a `Transposed` view, delegating with swapped coordinates.
pub struct TransposedEnergy<'f, F: ?Sized>(pub &'f F);

impl<'a, P, F> EnergyFunction<Transposed<'a, P>> for TransposedEnergy<'_, F>
where
    P: ?Sized,
    F: EnergyFunction<P> + ?Sized,
{
    fn apply(&self, picture: &Transposed<'a, P>, x: usize, y: usize) -> f64 {
        self.0.apply(picture.0, y, x)
    }
}
