//! Grid connectivity model for site percolation.
//!
//! An N×N grid of sites, each closed or open. Sites are addressed with
//! 1-based `(row, col)` pairs; row 1 is the top boundary and row N the
//! bottom boundary. Two virtual extremity elements stand for the whole top
//! and bottom boundaries so that "does the grid percolate" is a single
//! connectivity query.
//!
//! # Backwash
//!
//! Joining every open bottom-row site to the bottom extremity would let a
//! bottom site look full through the bottom extremity once the grid
//! percolates, even without a real path to the top. Instead the bottom
//! extremity is only ever joined to *full* sites: after the neighbour unions
//! of an `open`, the new site is linked to the bottom iff it is connected to
//! the top and its open cluster reaches the bottom row. Bottom-row reach is
//! tracked in a second substrate that `is_full` and `percolates` never read.

use crate::error::{PercolationError, Result};
use crate::union_find::{DisjointSet, WeightedQuickUnion};

/// N×N site grid with top/bottom connectivity tracking.
#[derive(Debug, Clone)]
pub struct PercolationGrid<S: DisjointSet = WeightedQuickUnion> {
    /// Side length N
    size: usize,

    /// Row-major open flags, one per site
    open: Vec<bool>,

    /// Number of open sites
    open_count: usize,

    /// Sites + top + bottom; bottom is joined through full sites only
    sites: S,

    /// Sites + bottom; every open bottom-row site is joined to bottom
    bottom_reach: S,

    /// Virtual top extremity id
    top: usize,

    /// Virtual bottom extremity id
    bottom: usize,
}

impl PercolationGrid {
    /// Creates an all-closed grid of the given size.
    ///
    /// Fails with [`PercolationError::InvalidDimension`] if `size <= 0`.
    pub fn new(size: i64) -> Result<Self> {
        Self::with_disjoint_set(size)
    }
}

impl<S: DisjointSet> PercolationGrid<S> {
    /// Creates an all-closed grid backed by a specific disjoint-set type.
    pub fn with_disjoint_set(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(PercolationError::InvalidDimension(size));
        }
        let n = usize::try_from(size).map_err(|_| PercolationError::InvalidDimension(size))?;
        let cells = n
            .checked_mul(n)
            .filter(|cells| cells.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidDimension(size))?;

        Ok(Self {
            size: n,
            open: vec![false; cells],
            open_count: 0,
            sites: S::with_len(cells + 2),
            bottom_reach: S::with_len(cells + 2),
            top: cells + 1,
            bottom: cells,
        })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of open sites.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Opens the site at `(row, col)` and joins it to its open neighbours.
    ///
    /// Opening an already-open site does nothing.
    pub fn open(&mut self, row: i64, col: i64) -> Result<()> {
        let id = self.cell_index(row, col)?;
        if self.open[id] {
            return Ok(());
        }
        self.open[id] = true;
        self.open_count += 1;

        let (r, c) = (id / self.size, id % self.size);
        if r == 0 {
            self.sites.union(id, self.top);
        }
        if r == self.size - 1 {
            self.bottom_reach.union(id, self.bottom);
        }

        for neighbour in self.neighbours(r, c).into_iter().flatten() {
            if self.open[neighbour] {
                self.sites.union(id, neighbour);
                self.bottom_reach.union(id, neighbour);
            }
        }

        // Must run after the neighbour unions above
        if self.sites.connected(self.top, id) && self.bottom_reach.connected(id, self.bottom) {
            self.sites.union(id, self.bottom);
        }

        Ok(())
    }

    /// Returns true if the site at `(row, col)` is open.
    pub fn is_open(&self, row: i64, col: i64) -> Result<bool> {
        let id = self.cell_index(row, col)?;
        Ok(self.open[id])
    }

    /// Returns true if the site is connected to the top row through open sites.
    ///
    /// A closed site is never full.
    pub fn is_full(&self, row: i64, col: i64) -> Result<bool> {
        let id = self.cell_index(row, col)?;
        Ok(self.sites.connected(self.top, id))
    }

    /// Returns true if an open path joins the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.sites.connected(self.top, self.bottom)
    }

    /// Maps a 1-based `(row, col)` to its dense row-major id.
    fn cell_index(&self, row: i64, col: i64) -> Result<usize> {
        let valid = |i: i64| i >= 1 && (i as u64) <= self.size as u64;
        if !valid(row) || !valid(col) {
            return Err(PercolationError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok((row as usize - 1) * self.size + (col as usize - 1))
    }

    /// In-bounds neighbour ids (up, down, left, right) of zero-based `(r, c)`.
    fn neighbours(&self, r: usize, c: usize) -> [Option<usize>; 4] {
        let n = self.size;
        let id = r * n + c;
        [
            (r > 0).then(|| id - n),
            (r + 1 < n).then(|| id + n),
            (c > 0).then(|| id - 1),
            (c + 1 < n).then(|| id + 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Flood fill from the open top-row sites; returns the full mask.
    fn reference_full(grid: &PercolationGrid) -> Vec<bool> {
        let n = grid.size();
        let mut full = vec![false; n * n];
        let mut queue: VecDeque<usize> = (0..n).filter(|&c| grid.open[c]).collect();
        for &c in &queue {
            full[c] = true;
        }
        while let Some(id) = queue.pop_front() {
            for next in grid.neighbours(id / n, id % n).into_iter().flatten() {
                if grid.open[next] && !full[next] {
                    full[next] = true;
                    queue.push_back(next);
                }
            }
        }
        full
    }

    fn all_cells(n: i64) -> Vec<(i64, i64)> {
        (1..=n).flat_map(|r| (1..=n).map(move |c| (r, c))).collect()
    }

    #[test]
    fn test_new_grid_is_closed() {
        let grid = PercolationGrid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.open_count(), 0);
        assert!(!grid.percolates());
        for (r, c) in all_cells(4) {
            assert!(!grid.is_open(r, c).unwrap());
            assert!(!grid.is_full(r, c).unwrap());
        }
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            PercolationGrid::new(0).unwrap_err(),
            PercolationError::InvalidDimension(0)
        );
        assert_eq!(
            PercolationGrid::new(-5).unwrap_err(),
            PercolationError::InvalidDimension(-5)
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let mut grid = PercolationGrid::new(3).unwrap();
        for (r, c) in [(0, 1), (4, 1), (1, 0), (1, 4), (-1, -1)] {
            assert!(matches!(
                grid.is_open(r, c),
                Err(PercolationError::IndexOutOfRange { size: 3, .. })
            ));
            assert!(grid.is_full(r, c).is_err());
            assert!(grid.open(r, c).is_err());
        }
        // Failed calls leave the grid untouched
        assert_eq!(grid.open_count(), 0);
        assert!(!grid.percolates());
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert!(grid.is_open(2, 2).unwrap());
        assert_eq!(grid.open_count(), 1);
        assert!(!grid.is_full(2, 2).unwrap());
    }

    #[test]
    fn test_single_site_percolates() {
        let mut grid = PercolationGrid::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.is_full(1, 1).unwrap());
        assert!(grid.percolates());
    }

    #[test]
    fn test_bottom_row_backwash() {
        let mut grid = PercolationGrid::new(2).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(2, 2).unwrap();

        assert!(!grid.percolates());
        assert!(!grid.is_full(2, 1).unwrap());
        assert!(!grid.is_full(2, 2).unwrap());
    }

    #[test]
    fn test_no_backwash_after_percolation() {
        let mut grid = PercolationGrid::new(3).unwrap();
        // Column 1 percolates, (3,3) is an isolated bottom site
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 1).unwrap();
        grid.open(3, 3).unwrap();

        assert!(grid.percolates());
        assert!(grid.is_full(3, 1).unwrap());
        assert!(!grid.is_full(3, 3).unwrap());
    }

    #[test]
    fn test_bottom_opened_before_path_exists() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(3, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert!(!grid.percolates());

        // Closing the gap from the top must still link the bottom
        grid.open(1, 2).unwrap();
        assert!(grid.is_full(3, 2).unwrap());
        assert!(grid.percolates());
    }

    #[test]
    fn test_side_path_percolates() {
        let mut grid = PercolationGrid::new(3).unwrap();
        for (r, c) in [(1, 3), (2, 3), (2, 2), (2, 1), (3, 1)] {
            assert!(!grid.percolates());
            grid.open(r, c).unwrap();
        }
        assert!(grid.percolates());
        assert!(!grid.is_full(1, 1).unwrap());
    }

    proptest! {
        #[test]
        fn test_full_grid_always_percolates(
            (n, order) in (1i64..8).prop_flat_map(|n| (Just(n), Just(all_cells(n)).prop_shuffle()))
        ) {
            let mut grid = PercolationGrid::new(n).unwrap();
            for (r, c) in order {
                grid.open(r, c).unwrap();
            }
            prop_assert!(grid.percolates());
            prop_assert_eq!(grid.open_count() as i64, n * n);
        }

        #[test]
        fn test_matches_flood_fill(
            (n, order) in (1i64..7).prop_flat_map(|n| (Just(n), Just(all_cells(n)).prop_shuffle()))
        ) {
            let mut grid = PercolationGrid::new(n).unwrap();
            let mut percolated = false;
            for (r, c) in order {
                grid.open(r, c).unwrap();
                prop_assert!(grid.is_open(r, c).unwrap());

                let full = reference_full(&grid);
                let bottom = (n as usize - 1) * n as usize;
                let expected = full[bottom..].iter().any(|&f| f);
                prop_assert_eq!(grid.percolates(), expected);

                for (i, &f) in full.iter().enumerate() {
                    let (row, col) = ((i / n as usize) as i64 + 1, (i % n as usize) as i64 + 1);
                    prop_assert_eq!(grid.is_full(row, col).unwrap(), f);
                    if f {
                        prop_assert!(grid.is_open(row, col).unwrap());
                    }
                }

                // Once percolating, always percolating
                prop_assert!(!percolated || grid.percolates());
                percolated = grid.percolates();
            }
        }
    }
}
