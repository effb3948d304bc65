// Library exports for percolation
pub mod error;
pub mod percolation;
pub mod union_find;

pub use error::PercolationError;
pub use percolation::PercolationGrid;
pub use union_find::{DisjointSet, UnionFind};
