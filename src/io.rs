//! Mesh file input
mod scanner;
mod su2;
