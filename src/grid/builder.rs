//! Grid builder

use super::UnstructuredGrid;
use crate::{
    traits::Builder,
    types::{CellType, RealScalar},
};
use itertools::izip;

/// Grid builder for an unstructured grid with a mixture of cell types
///
/// Points and cells must be added in the order of their ids, starting at 0. Points with fewer
/// than three coordinates are padded with zeros.
#[derive(Debug)]
pub struct UnstructuredGridBuilder<T: RealScalar> {
    gdim: usize,
    points: Vec<T>,
    cells: Vec<usize>,
    cell_starts: Vec<usize>,
    cell_types: Vec<CellType>,
}

impl<T: RealScalar> UnstructuredGridBuilder<T> {
    /// Create a new grid builder
    pub fn new(gdim: usize) -> Self {
        Self::new_with_capacity(gdim, 0, 0)
    }

    /// Create a new grid builder with capacity for a given number of points and cells
    pub fn new_with_capacity(gdim: usize, npoints: usize, ncells: usize) -> Self {
        if gdim == 0 || gdim > 3 {
            panic!("Geometric dimension must be 1, 2 or 3");
        }
        let mut cell_starts = Vec::with_capacity(ncells + 1);
        cell_starts.push(0);
        Self {
            gdim,
            points: Vec::with_capacity(3 * npoints),
            cells: Vec::with_capacity(4 * ncells),
            cell_starts,
            cell_types: Vec::with_capacity(ncells),
        }
    }

    /// Number of points added so far
    pub fn point_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Number of cells added so far
    pub fn cell_count(&self) -> usize {
        self.cell_types.len()
    }
}

impl<T: RealScalar> Builder for UnstructuredGridBuilder<T> {
    type Grid = UnstructuredGrid<T>;
    type T = T;
    type CellData<'a> = (CellType, &'a [usize]);

    fn add_point(&mut self, id: usize, data: &[T]) {
        if data.len() != self.gdim {
            panic!("Point has wrong number of coordinates");
        }
        if id != self.point_count() {
            panic!("Points must be added in order of their ids");
        }
        self.points.extend_from_slice(data);
        self.points
            .extend(std::iter::repeat(T::zero()).take(3 - self.gdim));
    }

    /// Add a cell
    ///
    /// Point indices are not checked against the points added: three dimensional SU2 records
    /// may carry trailing fields that are passed through unchanged.
    fn add_cell(&mut self, id: usize, cell_data: (CellType, &[usize])) {
        let (cell_type, points) = cell_data;
        if id != self.cell_count() {
            panic!("Cells must be added in order of their ids");
        }
        if points.len() < cell_type.node_count() {
            panic!("Cell has too few points for its type");
        }
        self.cells.extend_from_slice(points);
        self.cell_starts.push(self.cells.len());
        self.cell_types.push(cell_type);
    }

    fn create_grid(self) -> UnstructuredGrid<T> {
        UnstructuredGrid::from_raw_parts(self.points, self.cells, self.cell_starts, self.cell_types)
    }
}

/// Build a geometry-only grid from points, cell connectivity and cell types
///
/// `connectivity` and `cell_types` must have the same length.
pub fn build_grid<T: RealScalar>(
    points: &[[T; 3]],
    connectivity: &[Vec<usize>],
    cell_types: &[CellType],
) -> UnstructuredGrid<T> {
    assert_eq!(
        connectivity.len(),
        cell_types.len(),
        "Each cell needs exactly one cell type"
    );
    let mut b = UnstructuredGridBuilder::new_with_capacity(3, points.len(), cell_types.len());
    for (id, p) in points.iter().enumerate() {
        b.add_point(id, p);
    }
    for (id, (cell, cell_type)) in izip!(connectivity, cell_types).enumerate() {
        b.add_cell(id, (*cell_type, cell.as_slice()));
    }
    b.create_grid()
}
