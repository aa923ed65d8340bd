//! Parsed contents of an SU2 file

use crate::types::{CellType, RealScalar};

/// An element as written in an SU2 file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    type_code: u32,
    nodes: Vec<usize>,
}

impl Element {
    /// Create new
    pub fn new(type_code: u32, nodes: Vec<usize>) -> Self {
        Self { type_code, nodes }
    }

    /// The SU2 type code of this element
    pub fn type_code(&self) -> u32 {
        self.type_code
    }

    /// The cell type, if the type code is recognised
    pub fn cell_type(&self) -> Option<CellType> {
        CellType::from_su2_code(self.type_code)
    }

    /// Global indices of the nodes of this element
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }
}

/// A named group of boundary elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    tag: String,
    elements: Vec<Element>,
}

impl Marker {
    /// Create new
    pub fn new(tag: String, elements: Vec<Element>) -> Self {
        Self { tag, elements }
    }

    /// The marker tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The elements of this marker, including ones with unrecognised type codes
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// The result of reading one SU2 file
///
/// Points always have three coordinates; the z coordinate of a two dimensional mesh is zero.
/// Volume elements always have a recognised [CellType]. Marker elements are kept as read, so
/// that each kind of boundary output can choose which element types it uses.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshFile<T: RealScalar> {
    dimension: usize,
    points: Vec<[T; 3]>,
    volume_elements: Vec<Element>,
    markers: Vec<Marker>,
}

impl<T: RealScalar> MeshFile<T> {
    /// Create new
    ///
    /// Markers sharing a tag are merged: the later elements replace the earlier ones, and the
    /// marker keeps the position at which the tag first appeared.
    pub fn new(
        dimension: usize,
        points: Vec<[T; 3]>,
        volume_elements: Vec<Element>,
        markers: Vec<Marker>,
    ) -> Self {
        let mut unique: Vec<Marker> = Vec::with_capacity(markers.len());
        for marker in markers {
            if let Some(existing) = unique.iter_mut().find(|m| m.tag == marker.tag) {
                existing.elements = marker.elements;
            } else {
                unique.push(marker);
            }
        }
        Self {
            dimension,
            points,
            volume_elements,
            markers: unique,
        }
    }

    /// Spatial dimension declared in the file
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Point coordinates
    pub fn points(&self) -> &[[T; 3]] {
        &self.points
    }

    /// Volume elements
    pub fn volume_elements(&self) -> &[Element] {
        &self.volume_elements
    }

    /// Markers, in file order
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The marker with a given tag
    pub fn marker(&self, tag: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.tag == tag)
    }
}
