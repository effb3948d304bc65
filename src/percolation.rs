/// Incremental percolation tracking on an n-by-n grid
///
/// Each component root carries two flags, one for "reaches the top row" and one
/// for "reaches the bottom row". There are no virtual top/bottom elements in the
/// partition, so a site is only ever reported full through a real chain of open
/// sites reaching row 1 (no backwash).
use log::{debug, trace};

use crate::error::PercolationError;
use crate::union_find::{DisjointSet, UnionFind};

#[derive(Debug, Clone)]
pub struct PercolationGrid<D = UnionFind> {
    n: usize,
    open: Vec<bool>,
    // Only meaningful when indexed by a current root of `uf`
    connects_top: Vec<bool>,
    connects_bottom: Vec<bool>,
    open_count: usize,
    percolates: bool,
    uf: D,
}

impl PercolationGrid<UnionFind> {
    /// Create an n-by-n grid with every site closed
    ///
    /// Fails with `InvalidSize` when `n <= 0`.
    pub fn new(n: i64) -> Result<Self, PercolationError> {
        Self::with_disjoint_set(n)
    }
}

impl<D: DisjointSet> PercolationGrid<D> {
    /// Create an n-by-n grid backed by a caller-chosen `DisjointSet` implementation
    pub fn with_disjoint_set(n: i64) -> Result<Self, PercolationError> {
        let side = usize::try_from(n)
            .ok()
            .filter(|&side| side > 0)
            .ok_or(PercolationError::InvalidSize { n })?;
        let sites = side
            .checked_mul(side)
            .ok_or(PercolationError::InvalidSize { n })?;

        debug!("Creating {side}x{side} percolation grid");

        Ok(PercolationGrid {
            n: side,
            open: vec![false; sites],
            connects_top: vec![false; sites],
            connects_bottom: vec![false; sites],
            open_count: 0,
            percolates: false,
            uf: D::with_len(sites),
        })
    }

    /// Grid dimension given at construction
    pub fn size(&self) -> i64 {
        self.n as i64
    }

    /// Open site (row, col) if it is not open already, joining it to its open neighbors
    pub fn open(&mut self, row: i64, col: i64) -> Result<(), PercolationError> {
        let index = self.index(row, col)?;

        if !self.open[index] {
            self.open[index] = true;
            self.open_count += 1;
        }

        let n = self.n;
        let (r, c) = (index / n, index % n);

        let own_root = self.uf.find(index);
        let mut top = r == 0 || self.connects_top[own_root];
        let mut bottom = r == n - 1 || self.connects_bottom[own_root];

        // down, up, right, left
        let neighbors = [
            (r + 1 < n).then(|| index + n),
            (r > 0).then(|| index - n),
            (c + 1 < n).then(|| index + 1),
            (c > 0).then(|| index - 1),
        ];

        for neighbor in neighbors.into_iter().flatten() {
            if !self.open[neighbor] {
                continue;
            }

            // Fold flags in before the union, while both roots are still distinct
            let neighbor_root = self.uf.find(neighbor);
            let site_root = self.uf.find(index);
            top |= self.connects_top[neighbor_root] || self.connects_top[site_root];
            bottom |= self.connects_bottom[neighbor_root] || self.connects_bottom[site_root];

            self.uf.union(index, neighbor);
            trace!("Joined site {index} with open neighbor {neighbor}");
        }

        let root = self.uf.find(index);
        self.connects_top[root] = top;
        self.connects_bottom[root] = bottom;

        if top && bottom && !self.percolates {
            self.percolates = true;
            debug!(
                "Grid percolates after opening ({row}, {col}) with {} open sites",
                self.open_count
            );
        }

        Ok(())
    }

    /// Is site (row, col) open?
    pub fn is_open(&self, row: i64, col: i64) -> Result<bool, PercolationError> {
        let index = self.index(row, col)?;
        Ok(self.open[index])
    }

    /// Is site (row, col) full, i.e. open and joined to the top row by open sites?
    ///
    /// Closed sites are simply not full. Takes `&mut self` because root lookup
    /// compresses paths in the partition.
    pub fn is_full(&mut self, row: i64, col: i64) -> Result<bool, PercolationError> {
        let index = self.index(row, col)?;
        if !self.open[index] {
            return Ok(false);
        }
        let root = self.uf.find(index);
        Ok(self.connects_top[root])
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does some chain of open sites join the top row to the bottom row?
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    /// Map 1-indexed (row, col) to the dense 0-indexed id `n*(row-1) + (col-1)`
    fn index(&self, row: i64, col: i64) -> Result<usize, PercolationError> {
        let n = self.n;
        let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| (1..=n).contains(&v));

        match (in_range(row), in_range(col)) {
            (Some(r), Some(c)) => Ok(n * (r - 1) + (c - 1)),
            _ => Err(PercolationError::InvalidCoordinate {
                row,
                col,
                n: n as i64,
            }),
        }
    }
}
