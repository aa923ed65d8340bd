//! Compaction of boundary elements onto a local point numbering
//!
//! A marker references points by their global index in the mesh file. To build a standalone
//! boundary mesh, the referenced points are collected, sorted by global index and renumbered
//! by their rank in that sorted list.

use crate::{
    error::{Error, Result},
    grid::{build_grid, UnstructuredGrid},
    mesh::Element,
    types::{CellType, RealScalar},
};
use itertools::Itertools;

/// The kind of boundary mesh built from a marker
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BoundaryKind {
    /// Triangles and quadrilaterals, used for three dimensional meshes
    Surface,
    /// Lines, used for two dimensional meshes
    Lines,
}

impl BoundaryKind {
    /// The boundary kind of a mesh with the given dimension
    pub fn for_dimension(dimension: usize) -> Self {
        if dimension == 2 {
            BoundaryKind::Lines
        } else {
            BoundaryKind::Surface
        }
    }

    /// Whether elements of a cell type belong in this kind of boundary
    pub fn accepts(self, cell_type: CellType) -> bool {
        match self {
            BoundaryKind::Surface => {
                matches!(cell_type, CellType::Triangle | CellType::Quadrilateral)
            }
            BoundaryKind::Lines => cell_type == CellType::Line,
        }
    }

    /// The cell type and global connectivity used for an element, if it is eligible
    fn connectivity(self, element: &Element) -> Option<(CellType, &[usize])> {
        let cell_type = element.cell_type().filter(|c| self.accepts(*c))?;
        match self {
            BoundaryKind::Surface => Some((cell_type, element.nodes())),
            BoundaryKind::Lines => element.nodes().get(..2).map(|nodes| (cell_type, nodes)),
        }
    }
}

/// A subset of a mesh with its own point numbering
#[derive(Debug, Clone, PartialEq)]
pub struct CompactMesh<T: RealScalar> {
    point_ids: Vec<usize>,
    points: Vec<[T; 3]>,
    cells: Vec<Vec<usize>>,
    cell_types: Vec<CellType>,
}

impl<T: RealScalar> CompactMesh<T> {
    /// Global indices of the points, in increasing order
    ///
    /// Local point `i` is global point `point_ids()[i]`.
    pub fn point_ids(&self) -> &[usize] {
        &self.point_ids
    }

    /// Point coordinates, in local numbering
    pub fn points(&self) -> &[[T; 3]] {
        &self.points
    }

    /// Cell connectivity, in local numbering
    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Cell types
    pub fn cell_types(&self) -> &[CellType] {
        &self.cell_types
    }

    /// Cell connectivity translated back to global numbering
    pub fn global_cells(&self) -> Vec<Vec<usize>> {
        self.cells
            .iter()
            .map(|c| c.iter().map(|i| self.point_ids[*i]).collect())
            .collect()
    }

    /// Build a grid containing this mesh
    pub fn to_grid(&self) -> UnstructuredGrid<T> {
        build_grid(&self.points, &self.cells, &self.cell_types)
    }
}

/// Compact the elements of a marker that are eligible for a kind of boundary
///
/// Returns `None` if no element is eligible. Only the nodes of eligible elements are checked
/// against `points`; a node outside it is an error.
pub fn compact<T: RealScalar>(
    points: &[[T; 3]],
    elements: &[Element],
    kind: BoundaryKind,
) -> Result<Option<CompactMesh<T>>> {
    let kept = elements
        .iter()
        .filter_map(|e| kind.connectivity(e))
        .collect::<Vec<_>>();
    if kept.is_empty() {
        return Ok(None);
    }

    let point_ids = kept
        .iter()
        .flat_map(|(_, nodes)| nodes.iter().copied())
        .sorted_unstable()
        .dedup()
        .collect::<Vec<_>>();
    if let Some(&node) = point_ids.last().filter(|n| **n >= points.len()) {
        return Err(Error::NodeOutOfRange {
            node,
            point_count: points.len(),
        });
    }

    let cells = kept
        .iter()
        .map(|(_, nodes)| nodes.iter().map(|n| rank(&point_ids, *n)).collect())
        .collect();
    let cell_types = kept.iter().map(|(c, _)| *c).collect();
    let points = point_ids.iter().map(|i| points[*i]).collect();

    Ok(Some(CompactMesh {
        point_ids,
        points,
        cells,
        cell_types,
    }))
}

/// Compact the triangles and quadrilaterals in a list of elements
pub fn compact_surface<T: RealScalar>(
    points: &[[T; 3]],
    elements: &[Element],
) -> Result<Option<CompactMesh<T>>> {
    compact(points, elements, BoundaryKind::Surface)
}

/// Compact the lines in a list of elements
///
/// Only the first two nodes of each line are used.
pub fn compact_lines<T: RealScalar>(
    points: &[[T; 3]],
    elements: &[Element],
) -> Result<Option<CompactMesh<T>>> {
    compact(points, elements, BoundaryKind::Lines)
}

/// Position of a global index in the sorted list of used indices
fn rank(sorted_ids: &[usize], id: usize) -> usize {
    sorted_ids
        .binary_search(&id)
        .unwrap_or_else(|_| unreachable!("point {id} is not in the compacted set"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::Grid;
    use approx::assert_relative_eq;

    fn points(n: usize) -> Vec<[f64; 3]> {
        (0..n).map(|i| [i as f64, 2.0 * i as f64, 0.5]).collect()
    }

    #[test]
    fn test_triangle_and_quad() {
        let pts = points(14);
        let elements = vec![
            Element::new(5, vec![0, 1, 2]),
            Element::new(9, vec![10, 11, 12, 13]),
        ];
        let mesh = compact_surface(&pts, &elements).unwrap().unwrap();
        assert_eq!(mesh.point_ids(), &[0, 1, 2, 10, 11, 12, 13]);
        assert_eq!(mesh.points().len(), 7);
        assert_eq!(mesh.cells(), &[vec![0, 1, 2], vec![3, 4, 5, 6]]);
        assert_eq!(
            mesh.cell_types(),
            &[CellType::Triangle, CellType::Quadrilateral]
        );
        assert_relative_eq!(mesh.points()[3][0], 10.0);
        assert_relative_eq!(mesh.points()[6][1], 26.0);
    }

    #[test]
    fn test_shared_points_sorted() {
        let pts = points(10);
        let elements = vec![
            Element::new(5, vec![9, 4, 7]),
            Element::new(5, vec![7, 4, 2]),
        ];
        let mesh = compact_surface(&pts, &elements).unwrap().unwrap();
        assert_eq!(mesh.point_ids(), &[2, 4, 7, 9]);
        assert_eq!(mesh.cells(), &[vec![3, 1, 2], vec![2, 1, 0]]);
    }

    #[test]
    fn test_surface_ignores_other_types() {
        let pts = points(8);
        let elements = vec![
            Element::new(3, vec![0, 1]),
            Element::new(10, vec![0, 1, 2, 3]),
            Element::new(7, vec![4, 5]),
            Element::new(5, vec![5, 6, 7]),
        ];
        let mesh = compact_surface(&pts, &elements).unwrap().unwrap();
        assert_eq!(mesh.point_ids(), &[5, 6, 7]);
        assert_eq!(mesh.cells().len(), 1);
    }

    #[test]
    fn test_no_eligible_elements() {
        let pts = points(4);
        let lines = vec![Element::new(3, vec![0, 1]), Element::new(3, vec![1, 2])];
        let triangles = vec![Element::new(5, vec![0, 1, 2])];
        assert!(compact_surface(&pts, &lines).unwrap().is_none());
        assert!(compact_lines(&pts, &triangles).unwrap().is_none());
        assert!(compact_surface::<f64>(&pts, &[]).unwrap().is_none());
    }

    #[test]
    fn test_lines_use_two_nodes() {
        let pts = points(30);
        let elements = vec![
            Element::new(3, vec![4, 2, 25]),
            Element::new(3, vec![2, 9]),
            Element::new(3, vec![11]),
        ];
        let mesh = compact_lines(&pts, &elements).unwrap().unwrap();
        assert_eq!(mesh.point_ids(), &[2, 4, 9]);
        assert_eq!(mesh.cells(), &[vec![1, 0], vec![0, 2]]);
        assert_eq!(mesh.cell_types(), &[CellType::Line, CellType::Line]);
    }

    #[test]
    fn test_round_trip() {
        let pts = points(20);
        let elements = vec![
            Element::new(9, vec![19, 3, 8, 12]),
            Element::new(5, vec![3, 0, 19]),
            Element::new(5, vec![8, 15, 12]),
        ];
        let mesh = compact_surface(&pts, &elements).unwrap().unwrap();
        let original = elements
            .iter()
            .map(|e| e.nodes().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(mesh.global_cells(), original);
        for (id, p) in mesh.point_ids().iter().zip(mesh.points()) {
            assert_eq!(*p, pts[*id]);
        }
        for c in mesh.cells() {
            assert!(c.iter().all(|i| *i < mesh.points().len()));
        }
    }

    #[test]
    fn test_idempotent() {
        let pts = points(20);
        let elements = vec![
            Element::new(9, vec![19, 3, 8, 12]),
            Element::new(5, vec![3, 0, 19]),
        ];
        assert_eq!(
            compact_surface(&pts, &elements).unwrap(),
            compact_surface(&pts, &elements).unwrap()
        );
    }

    #[test]
    fn test_only_eligible_nodes_checked() {
        let pts = points(4);
        let elements = vec![
            Element::new(5, vec![0, 1, 2]),
            Element::new(3, vec![0, 1, 17]),
            Element::new(10, vec![0, 1, 2, 40]),
        ];
        let mesh = compact_surface(&pts, &elements).unwrap().unwrap();
        assert_eq!(mesh.point_ids(), &[0, 1, 2]);

        let mesh = compact_lines(&pts, &elements).unwrap().unwrap();
        assert_eq!(mesh.point_ids(), &[0, 1]);

        let elements = vec![Element::new(9, vec![0, 1, 2, 7])];
        assert!(matches!(
            compact_surface(&pts, &elements),
            Err(Error::NodeOutOfRange {
                node: 7,
                point_count: 4
            })
        ));
    }

    #[test]
    fn test_boundary_kind() {
        assert_eq!(BoundaryKind::for_dimension(2), BoundaryKind::Lines);
        assert_eq!(BoundaryKind::for_dimension(3), BoundaryKind::Surface);
        assert!(BoundaryKind::Surface.accepts(CellType::Quadrilateral));
        assert!(!BoundaryKind::Surface.accepts(CellType::Line));
        assert!(BoundaryKind::Lines.accepts(CellType::Line));
        assert!(!BoundaryKind::Lines.accepts(CellType::Tetrahedron));
    }

    #[test]
    fn test_to_grid() {
        let pts = points(14);
        let elements = vec![
            Element::new(5, vec![0, 1, 2]),
            Element::new(9, vec![10, 11, 12, 13]),
        ];
        let grid = compact_surface(&pts, &elements).unwrap().unwrap().to_grid();
        assert_eq!(grid.point_count(), 7);
        assert_eq!(grid.cell_count(), 2);
        assert_eq!(grid.cell_points(1), Some(&[3, 4, 5, 6][..]));
    }
}
