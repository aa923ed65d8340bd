//! Reader for SU2 mesh files
//!
//! An SU2 file is read into a [MeshFile], which is then turned into a volume grid holding every
//! interior element and one boundary grid per marker. Boundary grids only contain the points
//! their elements use, renumbered in increasing order of their index in the file.
//!
//! ```no_run
//! use su2grid::{read_su2, traits::Grid};
//!
//! let output = read_su2("mesh.su2").expect("Could not read mesh");
//! println!("{} volume cells", output.volume().cell_count());
//! for (name, grid) in output.boundaries().iter() {
//!     println!("{name}: {} points", grid.point_count());
//! }
//! ```
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod bindings;
pub mod compact;
pub mod config;
mod error;
pub mod grid;
mod io;
pub mod mesh;
pub mod reader;
pub mod traits;
pub mod types;

pub use config::ReaderOptions;
pub use error::{Error, Result};
pub use grid::{MultiBlock, UnstructuredGrid, UnstructuredGridBuilder};
pub use mesh::{Element, Marker, MeshFile};
pub use reader::{read_su2, Su2Output, Su2Reader};
