//! Traits for a grid
use crate::types::RealScalar;
use std::fmt::Debug;
use std::hash::Hash;

/// A grid
pub trait Grid {
    /// Scalar type
    type T: RealScalar;

    /// Type used as identifier of different cell types
    type EntityDescriptor: Debug + PartialEq + Eq + Clone + Copy + Hash;

    /// Dimension of the geometry of this grid
    fn geometry_dim(&self) -> usize;

    /// Number of points
    fn point_count(&self) -> usize;

    /// Number of cells
    fn cell_count(&self) -> usize;

    /// The coordinates of a point
    fn point(&self, index: usize) -> Option<&[Self::T]>;

    /// The coordinates of all the points, one point after another
    fn points(&self) -> &[Self::T];

    /// The points of a cell
    fn cell_points(&self, index: usize) -> Option<&[usize]>;

    /// The type of a cell
    fn cell_type(&self, index: usize) -> Option<Self::EntityDescriptor>;

    /// The types of all cells
    fn cell_types(&self) -> &[Self::EntityDescriptor];

    /// Whether any point, cell or field data is attached to the grid
    fn has_data_arrays(&self) -> bool;
}
