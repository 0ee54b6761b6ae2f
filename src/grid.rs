use std::{
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A `(row, col)` position in a [`Grid`].
pub type Coord = (usize, usize);

const OFFSETS4: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

#[rustfmt::skip]
const OFFSETS8: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A representation of a 2d grid.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner and
/// coordinates are `(row, col)`. Storage is row-major. The dimensions are fixed
/// once the grid is built; only cell values may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Default + Clone,
{
    /// Create a grid of `rows` by `cols` default values.
    ///
    /// Returns `Error::Empty` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::Empty);
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from nested rows, which must all be non-empty and of equal length.
    pub fn from_rows<Rows, Row>(rows: Rows) -> Result<Self, Error>
    where
        Rows: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut n_rows = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let found = cells.len() - before;
            match cols {
                None if found == 0 => return Err(Error::Empty),
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::RaggedRow {
                        row,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            n_rows += 1;
        }

        let cols = cols.ok_or(Error::Empty)?;
        Ok(Grid {
            rows: n_rows,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then_some(coord.0 * self.cols + coord.1)
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.idx(coord).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.idx(coord).map(|idx| &mut self.cells[idx])
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Iterate over every value in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Build a grid of the same shape by applying `f` to every value.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn offset_neighbors<'a>(
        &self,
        (row, col): Coord,
        offsets: &'a [(isize, isize)],
    ) -> impl Iterator<Item = Coord> + 'a {
        let (rows, cols) = (self.rows, self.cols);
        offsets.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some((r, c))
        })
    }

    /// The in-bounds orthogonal neighbors of `coord`, in the order up, left, down, right.
    pub fn neighbors4(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        self.offset_neighbors(coord, &OFFSETS4)
    }

    /// The in-bounds neighbors of `coord` including diagonals, scanning the
    /// surrounding 3x3 block in row-major order.
    pub fn neighbors8(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        self.offset_neighbors(coord, &OFFSETS8)
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        let (rows, cols) = (self.rows, self.cols);
        self.get(coord).unwrap_or_else(|| {
            panic!("{coord:?} is out of bounds for a {rows}x{cols} grid")
        })
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let (rows, cols) = (self.rows, self.cols);
        self.get_mut(coord).unwrap_or_else(|| {
            panic!("{coord:?} is out of bounds for a {rows}x{cols} grid")
        })
    }
}

/// Parse a grid of single decimal digits, one row per line.
impl FromStr for Grid<u32> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (row, line) in s.trim_end().lines().enumerate() {
            let digits = line
                .trim_end()
                .chars()
                .enumerate()
                .map(|(col, c)| {
                    c.to_digit(10).ok_or(Error::NotADigit { row, col, found: c })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(digits);
        }
        Self::from_rows(rows)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed grid: no cells")]
    Empty,
    #[error("malformed grid: row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("malformed grid: `{found}` at ({row}, {col}) is not a digit")]
    NotADigit { row: usize, col: usize, found: char },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn three_by_four() -> Grid<u32> {
        "1234\n5678\n9012".parse().unwrap()
    }

    #[test]
    fn parses_digit_rows() {
        let grid = three_by_four();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid[(1, 2)], 7);
        assert_eq!(grid[(2, 0)], 9);
        assert_eq!(grid.get((3, 0)), None);
    }

    #[test]
    fn tolerates_trailing_newline() {
        let grid: Grid<u32> = "12\n34\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[rstest]
    #[case("", Error::Empty)]
    #[case("\n\n", Error::Empty)]
    #[case("123\n12", Error::RaggedRow { row: 1, expected: 3, found: 2 })]
    #[case("12\n1x", Error::NotADigit { row: 1, col: 1, found: 'x' })]
    fn rejects_malformed_input(#[case] input: &str, #[case] expected: Error) {
        assert_eq!(input.parse::<Grid<u32>>().unwrap_err(), expected);
    }

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(Grid::<u8>::new(0, 3).unwrap_err(), Error::Empty);
        let grid = Grid::<u8>::new(2, 3).unwrap();
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
        assert!(grid.values().all(|&v| v == 0));
    }

    #[rstest]
    #[case((0, 0), vec![(1, 0), (0, 1)])]
    #[case((1, 1), vec![(0, 1), (1, 0), (2, 1), (1, 2)])]
    #[case((2, 3), vec![(1, 3), (2, 2)])]
    fn neighbors4_order(#[case] coord: Coord, #[case] expected: Vec<Coord>) {
        let grid = three_by_four();
        assert_eq!(grid.neighbors4(coord).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn neighbors8_corner_and_center() {
        let grid = three_by_four();
        assert_eq!(
            grid.neighbors8((0, 0)).collect::<Vec<_>>(),
            vec![(0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(
            grid.neighbors8((1, 1)).collect::<Vec<_>>(),
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn neighbors_are_in_bounds_unique_and_exclude_self() {
        let grid = three_by_four();
        for coord in grid.coords() {
            for neighbors in [
                grid.neighbors4(coord).collect::<Vec<_>>(),
                grid.neighbors8(coord).collect::<Vec<_>>(),
            ] {
                let unique: HashSet<_> = neighbors.iter().copied().collect();
                assert_eq!(unique.len(), neighbors.len());
                assert!(!unique.contains(&coord));
                assert!(neighbors.iter().all(|&n| grid.in_bounds(n)));
            }
        }
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid: Grid<u32> = "5".parse().unwrap();
        assert_eq!(grid.neighbors4((0, 0)).count(), 0);
        assert_eq!(grid.neighbors8((0, 0)).count(), 0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let grid = three_by_four();
        let _ = grid[(0, 4)];
    }
}
