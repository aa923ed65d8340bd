//! Unstructured grid
use crate::{
    traits::Grid,
    types::{CellType, RealScalar},
};
use std::collections::BTreeMap;

/// Named data arrays that a host may attach to a grid
#[derive(Debug, Clone, PartialEq)]
pub struct DataArrays<T: RealScalar> {
    point: BTreeMap<String, Vec<T>>,
    cell: BTreeMap<String, Vec<T>>,
    field: BTreeMap<String, Vec<T>>,
}

impl<T: RealScalar> Default for DataArrays<T> {
    fn default() -> Self {
        Self {
            point: BTreeMap::new(),
            cell: BTreeMap::new(),
            field: BTreeMap::new(),
        }
    }
}

impl<T: RealScalar> DataArrays<T> {
    /// Attach an array with one value per point
    pub fn insert_point_data(&mut self, name: &str, values: Vec<T>) {
        self.point.insert(String::from(name), values);
    }

    /// Attach an array with one value per cell
    pub fn insert_cell_data(&mut self, name: &str, values: Vec<T>) {
        self.cell.insert(String::from(name), values);
    }

    /// Attach an array that belongs to the grid as a whole
    pub fn insert_field_data(&mut self, name: &str, values: Vec<T>) {
        self.field.insert(String::from(name), values);
    }

    /// A point data array
    pub fn point_data(&self, name: &str) -> Option<&[T]> {
        self.point.get(name).map(|v| v.as_slice())
    }

    /// A cell data array
    pub fn cell_data(&self, name: &str) -> Option<&[T]> {
        self.cell.get(name).map(|v| v.as_slice())
    }

    /// A field data array
    pub fn field_data(&self, name: &str) -> Option<&[T]> {
        self.field.get(name).map(|v| v.as_slice())
    }

    /// Whether no arrays are attached
    pub fn is_empty(&self) -> bool {
        self.point.is_empty() && self.cell.is_empty() && self.field.is_empty()
    }

    /// Remove all arrays
    pub fn clear(&mut self) {
        self.point.clear();
        self.cell.clear();
        self.field.clear();
    }
}

/// A grid of points in 3D space and cells of mixed types
///
/// Grids created by this crate only hold geometry: no data arrays are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct UnstructuredGrid<T: RealScalar> {
    points: Vec<T>,
    cells: Vec<usize>,
    // cells[cell_starts[i]..cell_starts[i + 1]] are the points of cell i
    cell_starts: Vec<usize>,
    cell_types: Vec<CellType>,
    data: DataArrays<T>,
}

impl<T: RealScalar> Default for UnstructuredGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> UnstructuredGrid<T> {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            points: vec![],
            cells: vec![],
            cell_starts: vec![0],
            cell_types: vec![],
            data: DataArrays::default(),
        }
    }

    pub(crate) fn from_raw_parts(
        points: Vec<T>,
        cells: Vec<usize>,
        cell_starts: Vec<usize>,
        cell_types: Vec<CellType>,
    ) -> Self {
        debug_assert_eq!(points.len() % 3, 0);
        debug_assert_eq!(cell_starts.len(), cell_types.len() + 1);
        debug_assert_eq!(cell_starts.last(), Some(&cells.len()));
        Self {
            points,
            cells,
            cell_starts,
            cell_types,
            data: DataArrays::default(),
        }
    }

    /// Replace the geometry of this grid by the geometry of another grid
    ///
    /// Every data array attached to this grid is removed, and none of the arrays attached to
    /// `other` are taken over.
    pub fn replace_geometry(&mut self, other: Self) {
        self.points = other.points;
        self.cells = other.cells;
        self.cell_starts = other.cell_starts;
        self.cell_types = other.cell_types;
        self.data.clear();
    }

    /// The connectivity of all cells, one cell after another
    pub fn connectivity(&self) -> &[usize] {
        &self.cells
    }

    /// Offsets into [UnstructuredGrid::connectivity]; one more entry than there are cells
    pub fn cell_offsets(&self) -> &[usize] {
        &self.cell_starts
    }

    /// Data arrays attached to this grid
    pub fn data_arrays(&self) -> &DataArrays<T> {
        &self.data
    }

    /// Mutable access to the data arrays attached to this grid
    pub fn data_arrays_mut(&mut self) -> &mut DataArrays<T> {
        &mut self.data
    }
}

impl<T: RealScalar> Grid for UnstructuredGrid<T> {
    type T = T;
    type EntityDescriptor = CellType;

    fn geometry_dim(&self) -> usize {
        3
    }

    fn point_count(&self) -> usize {
        self.points.len() / 3
    }

    fn cell_count(&self) -> usize {
        self.cell_types.len()
    }

    fn point(&self, index: usize) -> Option<&[T]> {
        self.points.get(3 * index..3 * index + 3)
    }

    fn points(&self) -> &[T] {
        &self.points
    }

    fn cell_points(&self, index: usize) -> Option<&[usize]> {
        match self.cell_starts.get(index..index + 2) {
            Some([start, end]) => Some(&self.cells[*start..*end]),
            _ => None,
        }
    }

    fn cell_type(&self, index: usize) -> Option<CellType> {
        self.cell_types.get(index).copied()
    }

    fn cell_types(&self) -> &[CellType] {
        &self.cell_types
    }

    fn has_data_arrays(&self) -> bool {
        !self.data.is_empty()
    }
}
