//! Reader options
use crate::compact::BoundaryKind;
#[cfg(feature = "serde")]
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use std::{fs, path::Path};

/// Options controlling how an SU2 file is turned into grids
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Prefix added to a marker tag to name its boundary block
    pub marker_prefix: String,
    /// Kind of boundary mesh built from each marker
    ///
    /// If `None`, two dimensional meshes get line boundaries and all other meshes get surface
    /// boundaries.
    pub boundary_kind: Option<BoundaryKind>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            marker_prefix: String::from("marker:"),
            boundary_kind: None,
        }
    }
}

impl ReaderOptions {
    /// Set the prefix of boundary block names
    pub fn with_marker_prefix(mut self, prefix: &str) -> Self {
        self.marker_prefix = String::from(prefix);
        self
    }

    /// Use one kind of boundary mesh whatever the mesh dimension
    pub fn with_boundary_kind(mut self, kind: BoundaryKind) -> Self {
        self.boundary_kind = Some(kind);
        self
    }

    /// The boundary kind used for a mesh of the given dimension
    pub fn boundary_kind_for(&self, dimension: usize) -> BoundaryKind {
        self.boundary_kind
            .unwrap_or_else(|| BoundaryKind::for_dimension(dimension))
    }

    /// The name of the boundary block of a marker
    pub fn block_name(&self, tag: &str) -> String {
        format!("{}{tag}", self.marker_prefix)
    }
}

#[cfg(feature = "serde")]
impl ReaderOptions {
    /// Read options from a RON string
    ///
    /// Missing fields take their default values.
    pub fn from_ron_string(s: &str) -> Result<Self> {
        ron::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read options from a RON file
    pub fn from_ron_file(filename: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        Self::from_ron_string(&content)
    }
}
