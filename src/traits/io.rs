mod su2;

pub use su2::Su2Import;
