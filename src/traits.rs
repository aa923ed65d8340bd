//! Traits

mod builder;
mod grid;
mod io;

pub use builder::Builder;
pub use grid::Grid;
pub use io::Su2Import;
