//! Binding for C
#![allow(missing_docs)]
#![allow(clippy::missing_safety_doc)]

pub mod reader {
    use super::grid::GridT;
    use crate::{grid::UnstructuredGrid, reader::Su2Output, reader::Su2Reader};
    use std::ffi::{c_char, CStr, CString};
    use std::ptr;

    /// The grids read from an SU2 file, with C copies of the block names
    pub struct Su2OutputT {
        output: Su2Output<f64>,
        names: Vec<CString>,
    }

    /// Read an SU2 file
    ///
    /// Returns null if the file cannot be read. The result must be freed with
    /// `su2_output_free`.
    #[no_mangle]
    pub unsafe extern "C" fn su2_read(filename: *const c_char) -> *mut Su2OutputT {
        if filename.is_null() {
            tracing::error!("su2_read called with a null filename");
            return ptr::null_mut();
        }
        let filename = match CStr::from_ptr(filename).to_str() {
            Ok(f) => f,
            Err(e) => {
                tracing::error!("SU2 filename is not valid UTF-8: {e}");
                return ptr::null_mut();
            }
        };
        match Su2Reader::default().read::<f64>(filename) {
            Ok(output) => {
                let names = output
                    .boundaries()
                    .iter()
                    .map(|(name, _)| {
                        CString::new(name.replace('\0', "")).unwrap_or_default()
                    })
                    .collect();
                Box::into_raw(Box::new(Su2OutputT { output, names }))
            }
            Err(e) => {
                tracing::error!("Could not read {filename}: {e}");
                ptr::null_mut()
            }
        }
    }

    unsafe fn extract_output<'a>(output: *const Su2OutputT) -> &'a Su2OutputT {
        &*output
    }

    #[no_mangle]
    pub unsafe extern "C" fn su2_output_free(output: *mut Su2OutputT) {
        if !output.is_null() {
            drop(Box::from_raw(output));
        }
    }

    /// The volume grid; valid until the output is freed
    #[no_mangle]
    pub unsafe extern "C" fn su2_output_volume(output: *const Su2OutputT) -> *const GridT {
        let volume: *const UnstructuredGrid<f64> = extract_output(output).output.volume();
        volume as *const GridT
    }

    #[no_mangle]
    pub unsafe extern "C" fn su2_output_boundary_count(output: *const Su2OutputT) -> usize {
        extract_output(output).output.boundaries().len()
    }

    /// A boundary grid, or null if `index` is out of range
    #[no_mangle]
    pub unsafe extern "C" fn su2_output_boundary(
        output: *const Su2OutputT,
        index: usize,
    ) -> *const GridT {
        match extract_output(output).output.boundaries().block(index) {
            Some(grid) => grid as *const UnstructuredGrid<f64> as *const GridT,
            None => ptr::null(),
        }
    }

    /// The name of a boundary grid, or null if `index` is out of range
    #[no_mangle]
    pub unsafe extern "C" fn su2_output_boundary_name(
        output: *const Su2OutputT,
        index: usize,
    ) -> *const c_char {
        match extract_output(output).names.get(index) {
            Some(name) => name.as_ptr(),
            None => ptr::null(),
        }
    }
}

pub mod grid {
    use crate::{grid::UnstructuredGrid, traits::Grid};
    use std::slice::from_raw_parts_mut;

    /// Opaque handle to a grid
    pub struct GridT {
        _private: [u8; 0],
    }

    unsafe fn extract_grid<'a>(grid: *const GridT) -> &'a UnstructuredGrid<f64> {
        &*(grid as *const UnstructuredGrid<f64>)
    }

    #[no_mangle]
    pub unsafe extern "C" fn grid_point_count(grid: *const GridT) -> usize {
        extract_grid(grid).point_count()
    }

    #[no_mangle]
    pub unsafe extern "C" fn grid_cell_count(grid: *const GridT) -> usize {
        extract_grid(grid).cell_count()
    }

    /// Copy the point coordinates into `points`, which must have space for 3 values per point
    #[no_mangle]
    pub unsafe extern "C" fn grid_points(grid: *const GridT, points: *mut f64) {
        let grid = extract_grid(grid);
        from_raw_parts_mut(points, grid.points().len()).copy_from_slice(grid.points());
    }

    /// Number of points of a cell, or 0 if `index` is out of range
    #[no_mangle]
    pub unsafe extern "C" fn grid_cell_size(grid: *const GridT, index: usize) -> usize {
        extract_grid(grid).cell_points(index).map_or(0, |c| c.len())
    }

    /// Copy the points of a cell into `points`, which must have space for `grid_cell_size` values
    #[no_mangle]
    pub unsafe extern "C" fn grid_cell_points(grid: *const GridT, index: usize, points: *mut usize) {
        if let Some(cell) = extract_grid(grid).cell_points(index) {
            from_raw_parts_mut(points, cell.len()).copy_from_slice(cell);
        }
    }

    /// The VTK cell type of a cell, or 0 (VTK_EMPTY_CELL) if `index` is out of range
    #[no_mangle]
    pub unsafe extern "C" fn grid_cell_vtk_type(grid: *const GridT, index: usize) -> u8 {
        extract_grid(grid).cell_type(index).map_or(0, |c| c.vtk_id())
    }
}

#[cfg(test)]
mod test {
    use super::grid::{
        grid_cell_count, grid_cell_points, grid_cell_size, grid_cell_vtk_type, grid_point_count,
        grid_points,
    };
    use super::reader::{
        su2_output_boundary, su2_output_boundary_count, su2_output_boundary_name,
        su2_output_free, su2_output_volume, su2_read,
    };
    use std::ffi::{CStr, CString};
    use std::fs;

    #[test]
    fn test_read_through_c_api() {
        let filename = "_test_bindings_triangle.su2";
        fs::write(
            filename,
            "NDIME= 2\nNPOIN= 3\n0 0\n1 0\n0 1\nNELEM= 1\n5 0 1 2 0\n\
             NMARK= 1\nMARKER_TAG= hypotenuse\nMARKER_ELEMS= 1\n3 1 2 0\n",
        )
        .unwrap();
        let c_filename = CString::new(filename).unwrap();

        unsafe {
            let output = su2_read(c_filename.as_ptr());
            assert!(!output.is_null());

            let volume = su2_output_volume(output);
            assert_eq!(grid_point_count(volume), 3);
            assert_eq!(grid_cell_count(volume), 1);
            assert_eq!(grid_cell_size(volume, 0), 3);
            assert_eq!(grid_cell_size(volume, 1), 0);
            assert_eq!(grid_cell_vtk_type(volume, 0), 5);
            assert_eq!(grid_cell_vtk_type(volume, 1), 0);
            let mut cell = [0usize; 3];
            grid_cell_points(volume, 0, cell.as_mut_ptr());
            assert_eq!(cell, [0, 1, 2]);

            assert_eq!(su2_output_boundary_count(output), 1);
            assert!(su2_output_boundary(output, 1).is_null());
            assert!(su2_output_boundary_name(output, 1).is_null());
            let name = CStr::from_ptr(su2_output_boundary_name(output, 0));
            assert_eq!(name.to_str().unwrap(), "marker:hypotenuse");

            let boundary = su2_output_boundary(output, 0);
            assert_eq!(grid_point_count(boundary), 2);
            assert_eq!(grid_cell_vtk_type(boundary, 0), 3);
            let mut points = [-1.0; 6];
            grid_points(boundary, points.as_mut_ptr());
            assert_eq!(points, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

            su2_output_free(output);
        }
    }

    #[test]
    fn test_failed_read_is_null() {
        let filename = "_test_bindings_no_nmark.su2";
        fs::write(filename, "NDIME= 3\nNPOIN= 1\n0 0 0\n").unwrap();
        let c_filename = CString::new(filename).unwrap();
        unsafe {
            assert!(su2_read(c_filename.as_ptr()).is_null());
            assert!(su2_read(std::ptr::null()).is_null());
            su2_output_free(std::ptr::null_mut());
        }
    }
}
