//! Cell types

/// The kinds of element that can be read from an SU2 file
///
/// SU2 element codes and VTK cell identifiers happen to share their numbering. The two tables
/// are nevertheless kept separate: [CellType::from_su2_code] reads the file, [CellType::vtk_id]
/// is what a VTK-based host should use.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum CellType {
    /// A two point line segment
    Line,
    /// A triangle
    Triangle,
    /// A quadrilateral
    Quadrilateral,
    /// A tetrahedron
    Tetrahedron,
    /// A hexahedron
    Hexahedron,
    /// A triangular prism (VTK wedge)
    Prism,
    /// A square-based pyramid
    Pyramid,
}

impl CellType {
    /// Every supported cell type
    pub const ALL: [CellType; 7] = [
        CellType::Line,
        CellType::Triangle,
        CellType::Quadrilateral,
        CellType::Tetrahedron,
        CellType::Hexahedron,
        CellType::Prism,
        CellType::Pyramid,
    ];

    /// Interpret an SU2 element type code
    pub fn from_su2_code(code: u32) -> Option<Self> {
        match code {
            3 => Some(CellType::Line),
            5 => Some(CellType::Triangle),
            9 => Some(CellType::Quadrilateral),
            10 => Some(CellType::Tetrahedron),
            12 => Some(CellType::Hexahedron),
            13 => Some(CellType::Prism),
            14 => Some(CellType::Pyramid),
            _ => None,
        }
    }

    /// The SU2 element type code
    pub fn su2_code(self) -> u32 {
        match self {
            CellType::Line => 3,
            CellType::Triangle => 5,
            CellType::Quadrilateral => 9,
            CellType::Tetrahedron => 10,
            CellType::Hexahedron => 12,
            CellType::Prism => 13,
            CellType::Pyramid => 14,
        }
    }

    /// The VTK cell type identifier
    pub fn vtk_id(self) -> u8 {
        match self {
            CellType::Line => 3,
            CellType::Triangle => 5,
            CellType::Quadrilateral => 9,
            CellType::Tetrahedron => 10,
            CellType::Hexahedron => 12,
            CellType::Prism => 13,
            CellType::Pyramid => 14,
        }
    }

    /// Number of nodes an element of this type has
    pub fn node_count(self) -> usize {
        match self {
            CellType::Line => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral => 4,
            CellType::Tetrahedron => 4,
            CellType::Hexahedron => 8,
            CellType::Prism => 6,
            CellType::Pyramid => 5,
        }
    }

    /// Topological dimension
    pub fn dim(self) -> usize {
        match self {
            CellType::Line => 1,
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Hexahedron | CellType::Prism | CellType::Pyramid => 3,
        }
    }
}
