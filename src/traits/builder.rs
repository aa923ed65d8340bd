//! Grid builder
use crate::{traits::Grid, types::RealScalar};

/// Incremental construction of a grid
///
/// Points and cells are numbered by the order in which they are added: the `id` passed to
/// [Builder::add_point] and [Builder::add_cell] must be the number of points or cells added
/// before it. Implementations panic when this is not the case.
pub trait Builder {
    /// The grid created by [Builder::create_grid]
    type Grid: Grid;
    /// Coordinate type
    type T: RealScalar;
    /// Description of one cell
    ///
    /// For grids read from SU2 files this is the cell type together with the point indices of
    /// the cell, in the order they appear in the element record.
    type CellData<'a>;

    /// Add a point with the given coordinates
    ///
    /// `data` holds as many coordinates as the dimension the builder was created with.
    fn add_point(&mut self, id: usize, data: &[Self::T]);

    /// Add a cell
    fn add_cell(&mut self, id: usize, cell_data: Self::CellData<'_>);

    /// Create the grid from the points and cells added so far
    fn create_grid(self) -> Self::Grid;
}
