//! SU2 input
//!
//! An SU2 mesh is a sequence of `KEY= value` section headers, each followed by as many records
//! as the value says:
//!
//! ```text
//! NDIME= 2
//! NPOIN= 4
//! 0.0 0.0
//! ...
//! NELEM= 1
//! 9 0 1 2 3
//! NMARK= 1
//! MARKER_TAG= wall
//! MARKER_ELEMS= 1
//! 3 0 1
//! ```
//!
//! Two dimensional files often end each element record with the element index. For these files,
//! element records are cut to the node count of their type. Three dimensional records are kept
//! as written.

use super::scanner::Scanner;
use crate::{
    error::{Error, Result},
    mesh::{Element, Marker, MeshFile},
    traits::Su2Import,
    types::{CellType, RealScalar},
};
use tracing::{debug, trace, warn};

impl<T: RealScalar> Su2Import for MeshFile<T> {
    fn import_from_su2_string(s: &str) -> Result<Self> {
        let scanner = Scanner::new(s);
        let dimension = read_dimension(&scanner)?;
        let points = read_points::<T>(&scanner, dimension)?;
        let volume_elements = read_volume_elements(&scanner, dimension, points.len())?;
        let markers = read_markers(&scanner, dimension)?;
        debug!(
            "Parsed SU2 mesh: dimension {dimension}, {} points, {} volume elements, {} markers",
            points.len(),
            volume_elements.len(),
            markers.len()
        );
        Ok(MeshFile::new(dimension, points, volume_elements, markers))
    }
}

fn read_dimension(scanner: &Scanner) -> Result<usize> {
    let i = scanner.require("NDIME")?;
    let dimension = scanner.value::<usize>(i)?;
    if dimension != 2 && dimension != 3 {
        warn!("NDIME= {dimension}: SU2 meshes are expected to be two or three dimensional");
    }
    Ok(dimension)
}

fn read_points<T: RealScalar>(scanner: &Scanner, dimension: usize) -> Result<Vec<[T; 3]>> {
    let i = scanner.require("NPOIN")?;
    let npoin = scanner.value::<usize>(i)?;
    let ncoords = dimension.min(3);

    let mut points = Vec::with_capacity(npoin.min(scanner.len()));
    for index in scanner.records_after(i, npoin)? {
        let coords = scanner.fields::<T>(index, ncoords)?;
        if coords.len() < ncoords {
            return Err(Error::malformed(
                scanner.line_number(index),
                format!("expected {ncoords} coordinates, found {}", coords.len()),
            ));
        }
        let mut point = [T::zero(); 3];
        point[..ncoords].copy_from_slice(&coords);
        points.push(point);
    }
    Ok(points)
}

fn read_volume_elements(
    scanner: &Scanner,
    dimension: usize,
    npoin: usize,
) -> Result<Vec<Element>> {
    let Some(i) = scanner.find("NELEM") else {
        debug!("No NELEM section: the volume mesh has no cells");
        return Ok(vec![]);
    };
    let nelem = scanner.value::<usize>(i)?;

    let mut elements = Vec::with_capacity(nelem.min(scanner.len()));
    let mut skipped = 0;
    for index in scanner.records_after(i, nelem)? {
        let element = read_element(scanner, index, dimension)?;
        match element.cell_type() {
            Some(cell_type) => {
                // Trailing fields of three dimensional records are carried through unchecked
                check_nodes(
                    scanner,
                    index,
                    &element.nodes()[..cell_type.node_count()],
                    npoin,
                )?;
                elements.push(element);
            }
            None => {
                trace!(
                    "Skipping volume element with unsupported type code {} at line {}",
                    element.type_code(),
                    scanner.line_number(index)
                );
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        debug!("Skipped {skipped} volume elements with unsupported type codes");
    }
    Ok(elements)
}

fn read_markers(scanner: &Scanner, dimension: usize) -> Result<Vec<Marker>> {
    let i = scanner.require("NMARK")?;
    let nmark = scanner.value::<usize>(i)?;

    // Node indices are checked when a marker is compacted: only eligible nodes are used
    let mut markers = Vec::with_capacity(nmark.min(scanner.len()));
    let mut index = i + 1;
    for _ in 0..nmark {
        let tag = scanner.value::<String>(index)?;
        let nelems = scanner.value::<usize>(index + 1)?;
        let records = scanner.records_after(index + 1, nelems)?;
        index = records.end;

        let elements = records
            .map(|r| read_element(scanner, r, dimension))
            .collect::<Result<Vec<_>>>()?;
        debug!("Marker {tag}: {} elements", elements.len());
        markers.push(Marker::new(tag, elements));
    }
    Ok(markers)
}

/// Read an element record: a type code followed by node indices
fn read_element(scanner: &Scanner, index: usize, dimension: usize) -> Result<Element> {
    let record = scanner.record::<usize>(index)?;
    let line = scanner.line_number(index);
    let Some((&code, nodes)) = record.split_first() else {
        return Err(Error::malformed(line, "empty element record"));
    };
    let code = u32::try_from(code)
        .map_err(|_| Error::malformed(line, format!("invalid element type code {code}")))?;

    let mut nodes = nodes.to_vec();
    if let Some(cell_type) = CellType::from_su2_code(code) {
        let expected = cell_type.node_count();
        if nodes.len() < expected {
            return Err(Error::malformed(
                line,
                format!(
                    "{cell_type:?} element needs {expected} nodes, found {}",
                    nodes.len()
                ),
            ));
        }
        if dimension == 2 {
            nodes.truncate(expected);
        }
    }
    Ok(Element::new(code, nodes))
}

fn check_nodes(scanner: &Scanner, index: usize, nodes: &[usize], npoin: usize) -> Result<()> {
    match nodes.iter().find(|n| **n >= npoin) {
        Some(n) => Err(Error::malformed(
            scanner.line_number(index),
            format!("node index {n} out of range for {npoin} points"),
        )),
        None => Ok(()),
    }
}
