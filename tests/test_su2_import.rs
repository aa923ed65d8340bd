use su2grid::{traits::Su2Import, types::CellType, MeshFile};
use std::path::PathBuf;

fn relative_file(filename: &str) -> String {
    let file = PathBuf::from(file!());
    let dir = file.parent().unwrap();
    format!("{}/{filename}", dir.display())
}

#[test]
fn test_su2_import_2d() {
    let mesh = MeshFile::<f64>::import_from_su2(relative_file("channel_2d.su2")).unwrap();
    assert_eq!(mesh.dimension(), 2);
    assert_eq!(mesh.points().len(), 8);
    assert!(mesh.points().iter().all(|p| p[2] == 0.0));

    let cells = mesh
        .volume_elements()
        .iter()
        .map(|e| (e.cell_type().unwrap(), e.nodes().to_vec()))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (CellType::Quadrilateral, vec![0, 1, 4, 3]),
            (CellType::Quadrilateral, vec![1, 2, 5, 4]),
            (CellType::Triangle, vec![2, 6, 7]),
            (CellType::Triangle, vec![2, 7, 5]),
        ]
    );

    let tags = mesh.markers().iter().map(|m| m.tag()).collect::<Vec<_>>();
    assert_eq!(tags, vec!["inlet", "lower_wall", "upper_wall", "outlet"]);
    for marker in mesh.markers() {
        for element in marker.elements() {
            assert_eq!(element.nodes().len(), 2);
        }
    }
}

#[test]
fn test_su2_import_3d() {
    let mesh = MeshFile::<f64>::import_from_su2(relative_file("mixed_3d.su2")).unwrap();
    assert_eq!(mesh.dimension(), 3);
    assert_eq!(mesh.points().len(), 13);
    assert_eq!(
        mesh.volume_elements()
            .iter()
            .map(|e| e.cell_type().unwrap())
            .collect::<Vec<_>>(),
        vec![
            CellType::Hexahedron,
            CellType::Prism,
            CellType::Pyramid,
            CellType::Tetrahedron
        ]
    );
    for element in mesh.volume_elements() {
        assert_eq!(
            element.nodes().len(),
            element.cell_type().unwrap().node_count()
        );
    }
    assert_eq!(mesh.marker("top").unwrap().elements().len(), 4);
    assert_eq!(
        mesh.marker("feature_edges").unwrap().elements()[1].nodes(),
        &[1, 8]
    );
}

#[test]
fn test_su2_import_missing_file() {
    assert!(MeshFile::<f64>::import_from_su2(relative_file("no_such_mesh.su2")).is_err());
}
