//! Named collection of grids
use super::UnstructuredGrid;
use crate::types::RealScalar;

/// An ordered collection of named grids
#[derive(Debug, Clone, PartialEq)]
pub struct MultiBlock<T: RealScalar> {
    blocks: Vec<(String, UnstructuredGrid<T>)>,
}

impl<T: RealScalar> Default for MultiBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> MultiBlock<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { blocks: vec![] }
    }

    /// Append a block
    pub fn push(&mut self, name: String, grid: UnstructuredGrid<T>) {
        self.blocks.push((name, grid));
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether there are no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The grid of a block
    pub fn block(&self, index: usize) -> Option<&UnstructuredGrid<T>> {
        self.blocks.get(index).map(|(_, g)| g)
    }

    /// The name of a block
    pub fn name(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(|(n, _)| n.as_str())
    }

    /// The first block with a given name
    pub fn get(&self, name: &str) -> Option<&UnstructuredGrid<T>> {
        self.blocks.iter().find(|(n, _)| n == name).map(|(_, g)| g)
    }

    /// Iterate over the names and grids of the blocks
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnstructuredGrid<T>)> {
        self.blocks.iter().map(|(n, g)| (n.as_str(), g))
    }
}
