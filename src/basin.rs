use std::collections::{HashSet, VecDeque};

use crate::grid::{Coord, Grid};

/// Heights at or above this value are impassable in the canonical heightmap.
pub const DEFAULT_RIDGE: u32 = 9;

/// Find every cell strictly lower than all of its orthogonal neighbors, in row-major order.
///
/// Edges of the grid behave as if padded with an impassable wall, so a corner
/// only has to beat its two in-bounds neighbors. Ties never qualify.
pub fn find_local_minima(grid: &Grid<u32>) -> Vec<Coord> {
    grid.coords()
        .filter(|&coord| {
            let height = grid[coord];
            grid.neighbors4(coord).all(|neighbor| grid[neighbor] > height)
        })
        .collect()
}

/// Breadth-first expansion of the basin rooted at `start`.
///
/// A neighbor joins the basin when it is strictly higher than the cell it was
/// reached from and strictly below `ridge`. The returned set always contains `start`.
pub fn basin_from(grid: &Grid<u32>, start: Coord, ridge: u32) -> HashSet<Coord> {
    let mut visited = HashSet::from([start]);
    let mut frontier = VecDeque::from([start]);

    while let Some(coord) = frontier.pop_front() {
        let height = grid[coord];
        for neighbor in grid.neighbors4(coord) {
            let neighbor_height = grid[neighbor];
            if neighbor_height > height
                && neighbor_height < ridge
                && visited.insert(neighbor)
            {
                frontier.push_back(neighbor);
            }
        }
    }

    visited
}

/// Size of the basin around each local minimum, in the order the minima were found.
pub fn basin_sizes(grid: &Grid<u32>, ridge: u32) -> Vec<usize> {
    let sizes: Vec<usize> = find_local_minima(grid)
        .into_iter()
        .map(|low| basin_from(grid, low, ridge).len())
        .collect();
    log::debug!("found {} basins: {:?}", sizes.len(), sizes);
    sizes
}

/// Product of the `n` largest basin sizes.
///
/// Uses every basin when there are fewer than `n`; the product of no basins is 1.
pub fn largest_basins_product(grid: &Grid<u32>, ridge: u32, n: usize) -> usize {
    let mut sizes = basin_sizes(grid, ridge);
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.into_iter().take(n).product()
}

/// Sum of `height + 1` over every local minimum.
pub fn risk_level_sum(grid: &Grid<u32>) -> u32 {
    find_local_minima(grid)
        .into_iter()
        .map(|low| grid[low] + 1)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEIGHTMAP: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";

    fn heightmap() -> Grid<u32> {
        HEIGHTMAP.parse().unwrap()
    }

    #[test]
    fn heightmap_minima() {
        let grid = heightmap();
        let minima = find_local_minima(&grid);
        assert_eq!(minima, vec![(0, 1), (0, 9), (2, 2), (4, 6)]);
        let heights: Vec<u32> = minima.iter().map(|&c| grid[c]).collect();
        assert_eq!(heights, vec![1, 0, 5, 5]);
    }

    #[test]
    fn heightmap_risk_level() {
        assert_eq!(risk_level_sum(&heightmap()), 15);
    }

    #[test]
    fn heightmap_basin_sizes() {
        assert_eq!(basin_sizes(&heightmap(), DEFAULT_RIDGE), vec![3, 9, 14, 9]);
    }

    #[rstest]
    #[case(3, 1134)]
    #[case(1, 14)]
    #[case(10, 3402)]
    #[case(0, 1)]
    fn heightmap_largest_product(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(largest_basins_product(&heightmap(), DEFAULT_RIDGE, n), expected);
    }

    #[test]
    fn basin_contains_its_root_and_no_ridge() {
        let grid = heightmap();
        for low in find_local_minima(&grid) {
            let basin = basin_from(&grid, low, DEFAULT_RIDGE);
            assert!(basin.contains(&low));
            assert!(basin.iter().all(|&c| grid[c] < DEFAULT_RIDGE));
        }
    }

    #[test]
    fn ties_are_not_minima() {
        let grid: Grid<u32> = "555\n555".parse().unwrap();
        assert!(find_local_minima(&grid).is_empty());
        assert!(basin_sizes(&grid, DEFAULT_RIDGE).is_empty());
        assert_eq!(largest_basins_product(&grid, DEFAULT_RIDGE, 3), 1);
    }

    #[test]
    fn single_cell_is_a_minimum() {
        let grid: Grid<u32> = "4".parse().unwrap();
        assert_eq!(find_local_minima(&grid), vec![(0, 0)]);
        assert_eq!(basin_sizes(&grid, DEFAULT_RIDGE), vec![1]);
    }

    #[test]
    fn low_ridge_only_keeps_roots() {
        let grid = heightmap();
        assert_eq!(basin_sizes(&grid, 0), vec![1, 1, 1, 1]);
    }

    #[test]
    fn center_ridge_separates_basins() {
        let grid: Grid<u32> = "\
12321
23932
12321"
            .parse()
            .unwrap();
        let minima = find_local_minima(&grid);
        assert_eq!(minima, vec![(0, 0), (0, 4), (2, 0), (2, 4)]);
        for low in minima {
            let basin = basin_from(&grid, low, DEFAULT_RIDGE);
            assert!(!basin.contains(&(1, 2)));
        }
    }
}
