//! Grids
mod builder;
mod multiblock;
mod unstructured;

pub use builder::{build_grid, UnstructuredGridBuilder};
pub use multiblock::MultiBlock;
pub use unstructured::{DataArrays, UnstructuredGrid};
