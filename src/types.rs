//! Types

mod cell_type;
pub use cell_type::CellType;

use num::Float;
use std::fmt::Debug;
use std::str::FromStr;

/// Scalar type used for point coordinates
pub trait RealScalar: Float + FromStr + Debug + Send + Sync + 'static {}

impl<T: Float + FromStr + Debug + Send + Sync + 'static> RealScalar for T {}
