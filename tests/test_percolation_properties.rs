
use percolation::PercolationGrid;
use proptest::prelude::*;
use test_utils::*;

/// Grid size plus an opening order over a random subset of its sites (0-indexed ids)
fn grid_and_order() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..8).prop_flat_map(|n| {
        let ids: Vec<usize> = (0..n * n).collect();
        (
            Just(n),
            Just(ids).prop_shuffle(),
            proptest::collection::vec(any::<bool>(), n * n),
        )
            .prop_map(|(n, order, mask)| {
                let order: Vec<usize> = order.into_iter().filter(|&id| mask[id]).collect();
                (n, order)
            })
    })
}

fn coords(n: usize, id: usize) -> (i64, i64) {
    ((id / n) as i64 + 1, (id % n) as i64 + 1)
}

/// Property: after every open, fullness and percolation match the search oracle
#[test]
fn prop_matches_search_oracle() {
    proptest!(|((n, order) in grid_and_order())| {
        let mut grid = PercolationGrid::new(n as i64).unwrap();
        let mut open = vec![vec![false; n]; n];

        for &id in &order {
            let (row, col) = coords(n, id);
            grid.open(row, col).unwrap();
            open[id / n][id % n] = true;

            let full = oracle_full(&open);
            for r in 0..n {
                for c in 0..n {
                    let (row, col) = (r as i64 + 1, c as i64 + 1);
                    prop_assert_eq!(grid.is_full(row, col).unwrap(), full[r][c],
                        "fullness of ({}, {}) after opening site {}", row, col, id);
                }
            }
            prop_assert_eq!(grid.percolates(), oracle_percolates(&open));
        }
    });
}

/// Property: full sites always have a real open path to the top row (no backwash)
#[test]
fn prop_no_backwash() {
    proptest!(|((n, order) in grid_and_order())| {
        let mut grid = PercolationGrid::new(n as i64).unwrap();
        let mut open = vec![vec![false; n]; n];
        for &id in &order {
            let (row, col) = coords(n, id);
            grid.open(row, col).unwrap();
            open[id / n][id % n] = true;
        }

        let full = oracle_full(&open);
        for r in 0..n {
            for c in 0..n {
                if grid.is_full(r as i64 + 1, c as i64 + 1).unwrap() {
                    prop_assert!(full[r][c], "site ({}, {}) full without a path to the top", r + 1, c + 1);
                }
            }
        }
    });
}

/// Property: opening is monotone and counted once per distinct site
#[test]
fn prop_open_is_monotone_and_counted_once() {
    proptest!(|((n, order) in grid_and_order())| {
        let mut grid = PercolationGrid::new(n as i64).unwrap();
        let mut percolated = false;

        for (step, &id) in order.iter().enumerate() {
            let (row, col) = coords(n, id);
            prop_assert!(!grid.is_open(row, col).unwrap());

            grid.open(row, col).unwrap();
            prop_assert!(grid.is_open(row, col).unwrap());
            prop_assert_eq!(grid.number_of_open_sites(), step + 1);

            // Repeat is a no-op for the counter
            grid.open(row, col).unwrap();
            prop_assert_eq!(grid.number_of_open_sites(), step + 1);

            // Percolation is a one-way latch
            prop_assert!(!percolated || grid.percolates());
            percolated = grid.percolates();
        }

        for &id in &order {
            let (row, col) = coords(n, id);
            prop_assert!(grid.is_open(row, col).unwrap());
        }
        prop_assert!(grid.number_of_open_sites() <= n * n);
    });
}

/// Property: opening every site in any order always percolates
#[test]
fn prop_fully_open_grid_percolates() {
    proptest!(|(n in 1usize..10)| {
        let mut grid = PercolationGrid::new(n as i64).unwrap();
        for id in (0..n * n).rev() {
            let (row, col) = coords(n, id);
            grid.open(row, col).unwrap();
        }
        prop_assert!(grid.percolates());
        prop_assert_eq!(grid.number_of_open_sites(), n * n);
    });
}
