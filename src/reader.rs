//! Conversion of SU2 files into a volume grid and boundary grids

use crate::{
    compact::compact,
    config::ReaderOptions,
    error::Result,
    grid::{build_grid, MultiBlock, UnstructuredGrid},
    mesh::MeshFile,
    traits::{Grid, Su2Import},
    types::RealScalar,
};
use std::path::Path;
use tracing::{debug, info};

/// The grids read from an SU2 file
#[derive(Debug, Clone, PartialEq)]
pub struct Su2Output<T: RealScalar> {
    volume: UnstructuredGrid<T>,
    boundaries: MultiBlock<T>,
}

impl<T: RealScalar> Default for Su2Output<T> {
    fn default() -> Self {
        Self {
            volume: UnstructuredGrid::new(),
            boundaries: MultiBlock::new(),
        }
    }
}

impl<T: RealScalar> Su2Output<T> {
    /// The volume grid, using the global point numbering of the file
    pub fn volume(&self) -> &UnstructuredGrid<T> {
        &self.volume
    }

    /// Mutable access to the volume grid, for attaching data arrays
    pub fn volume_mut(&mut self) -> &mut UnstructuredGrid<T> {
        &mut self.volume
    }

    /// One grid per marker with at least one boundary element, named after the marker
    pub fn boundaries(&self) -> &MultiBlock<T> {
        &self.boundaries
    }

    /// Split into the volume grid and the boundary grids
    pub fn into_parts(self) -> (UnstructuredGrid<T>, MultiBlock<T>) {
        (self.volume, self.boundaries)
    }
}

/// Reader turning SU2 files into grids
#[derive(Debug, Clone, Default)]
pub struct Su2Reader {
    options: ReaderOptions,
}

impl Su2Reader {
    /// Create new
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// The options of this reader
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Read an SU2 file
    pub fn read<T: RealScalar>(&self, filename: impl AsRef<Path>) -> Result<Su2Output<T>> {
        let filename = filename.as_ref();
        let mesh = MeshFile::<T>::import_from_su2(filename)?;
        let output = self.convert(&mesh)?;
        info!(
            "Read {}: {} points, {} volume cells, {} boundary blocks",
            filename.display(),
            output.volume.point_count(),
            output.volume.cell_count(),
            output.boundaries.len()
        );
        Ok(output)
    }

    /// Read the contents of an SU2 file
    pub fn read_str<T: RealScalar>(&self, content: &str) -> Result<Su2Output<T>> {
        let mesh = MeshFile::<T>::import_from_su2_string(content)?;
        self.convert(&mesh)
    }

    /// Read an SU2 file into existing outputs
    ///
    /// On success, the geometry of `output` is replaced and any data arrays attached to its
    /// volume grid are removed. On failure, `output` is left as it was.
    pub fn read_into<T: RealScalar>(
        &self,
        filename: impl AsRef<Path>,
        output: &mut Su2Output<T>,
    ) -> Result<()> {
        let new_output = self.read::<T>(filename)?;
        output.volume.replace_geometry(new_output.volume);
        output.boundaries = new_output.boundaries;
        Ok(())
    }

    /// Build the volume grid and the boundary grids of a parsed file
    ///
    /// Fails if a boundary element that is used references a point outside the mesh.
    pub fn convert<T: RealScalar>(&self, mesh: &MeshFile<T>) -> Result<Su2Output<T>> {
        let (connectivity, cell_types) = mesh
            .volume_elements()
            .iter()
            .filter_map(|e| e.cell_type().map(|c| (e.nodes().to_vec(), c)))
            .unzip::<_, _, Vec<_>, Vec<_>>();
        let volume = build_grid(mesh.points(), &connectivity, &cell_types);

        let kind = self.options.boundary_kind_for(mesh.dimension());
        let mut boundaries = MultiBlock::new();
        for marker in mesh.markers() {
            match compact(mesh.points(), marker.elements(), kind)? {
                Some(boundary) => {
                    boundaries.push(self.options.block_name(marker.tag()), boundary.to_grid())
                }
                None => debug!("Marker {} has no {kind:?} elements, skipping", marker.tag()),
            }
        }

        Ok(Su2Output { volume, boundaries })
    }
}

impl<T: RealScalar> Su2Import for Su2Output<T> {
    fn import_from_su2_string(s: &str) -> Result<Self> {
        Su2Reader::default().read_str(s)
    }
}

/// Read an SU2 file with the default options
pub fn read_su2(filename: impl AsRef<Path>) -> Result<Su2Output<f64>> {
    Su2Reader::default().read(filename)
}
