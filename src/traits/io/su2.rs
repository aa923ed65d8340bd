//! SU2 I/O
use crate::error::Result;
use std::fs;
use std::path::Path;

pub trait Su2Import: Sized {
    //! Import from the SU2 mesh format

    /// Create from the contents of an SU2 file
    fn import_from_su2_string(s: &str) -> Result<Self>;

    /// Create from an SU2 file
    fn import_from_su2(filename: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        Self::import_from_su2_string(&content)
    }
}
