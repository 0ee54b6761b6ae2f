use std::str::FromStr;

use crate::grid::{self, Grid};

/// A bingo board and which of its numbers have been drawn so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    numbers: Grid<u32>,
    marked: Grid<bool>,
}

impl Board {
    pub fn new(numbers: Grid<u32>) -> Self {
        let marked = numbers.map(|_| false);
        Board { numbers, marked }
    }

    /// Mark every cell holding `number`.
    pub fn mark(&mut self, number: u32) {
        for coord in self.numbers.coords() {
            if self.numbers[coord] == number {
                self.marked[coord] = true;
            }
        }
    }

    /// `true` once any full row or full column is marked.
    pub fn has_won(&self) -> bool {
        let (rows, cols) = (self.marked.rows(), self.marked.cols());
        (0..rows).any(|row| (0..cols).all(|col| self.marked[(row, col)]))
            || (0..cols).any(|col| (0..rows).all(|row| self.marked[(row, col)]))
    }

    /// Sum of unmarked numbers times the number that was just drawn.
    pub fn score(&self, last_drawn: u32) -> u32 {
        let unmarked: u32 = self
            .numbers
            .coords()
            .filter(|&coord| !self.marked[coord])
            .map(|coord| self.numbers[coord])
            .sum();
        unmarked * last_drawn
    }
}

/// A board which completed a line, and the draw that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub board: usize,
    pub drawn: u32,
    pub score: u32,
}

/// The drawn numbers and every board in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl Game {
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Play every draw to the end, recording each board the first time it wins.
    ///
    /// Boards winning on the same draw are recorded in board order.
    pub fn play(&self) -> Vec<Win> {
        let mut boards = self.boards.clone();
        let mut won = vec![false; boards.len()];
        let mut wins = Vec::new();

        for &drawn in &self.draws {
            for (index, board) in boards.iter_mut().enumerate() {
                if won[index] {
                    continue;
                }
                board.mark(drawn);
                if board.has_won() {
                    won[index] = true;
                    let score = board.score(drawn);
                    log::debug!("board {} wins on {} scoring {}", index, drawn, score);
                    wins.push(Win {
                        board: index,
                        drawn,
                        score,
                    });
                }
            }
            if wins.len() == boards.len() {
                break;
            }
        }

        wins
    }

    pub fn first_winner(&self) -> Result<Win, Error> {
        self.play().first().copied().ok_or(Error::NoWinner)
    }

    pub fn last_winner(&self) -> Result<Win, Error> {
        self.play().last().copied().ok_or(Error::NoWinner)
    }
}

fn parse_board(block: &str) -> Result<Board, Error> {
    let mut rows = Vec::new();
    for line in block.lines() {
        let row = line
            .split_ascii_whitespace()
            .map(|n| n.parse().map_err(|_| Error::InvalidNumber(n.to_owned())))
            .collect::<Result<Vec<u32>, _>>()?;
        rows.push(row);
    }
    Ok(Board::new(Grid::from_rows(rows)?))
}

impl FromStr for Game {
    type Err = Error;

    /// The first line holds the comma-separated draws; boards follow, separated by blank lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace("\r\n", "\n");
        let mut blocks = s.split("\n\n").map(str::trim).filter(|b| !b.is_empty());

        let draws = blocks
            .next()
            .ok_or(Error::MissingDraws)?
            .split(',')
            .map(|n| {
                let n = n.trim();
                n.parse().map_err(|_| Error::InvalidNumber(n.to_owned()))
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let boards = blocks.map(parse_board).collect::<Result<Vec<_>, _>>()?;
        if boards.is_empty() {
            return Err(Error::NoBoards);
        }
        Ok(Game { draws, boards })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("missing the line of drawn numbers")]
    MissingDraws,
    #[error("no boards follow the drawn numbers")]
    NoBoards,
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("malformed board")]
    Board(#[from] grid::Error),
    #[error("no board ever wins")]
    NoWinner,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    fn example() -> Game {
        EXAMPLE.parse().unwrap()
    }

    #[test]
    fn parses_example() {
        let game = example();
        assert_eq!(game.draws.len(), 27);
        assert_eq!(game.boards().len(), 3);
        assert_eq!(game.boards()[1].numbers[(2, 3)], 25);
    }

    #[test]
    fn example_first_winner() {
        assert_eq!(
            example().first_winner(),
            Ok(Win {
                board: 2,
                drawn: 24,
                score: 4512
            })
        );
    }

    #[test]
    fn example_last_winner() {
        assert_eq!(
            example().last_winner(),
            Ok(Win {
                board: 1,
                drawn: 13,
                score: 1924
            })
        );
    }

    #[test]
    fn column_wins() {
        let mut board = Board::new("12\n34".parse().unwrap());
        board.mark(2);
        assert!(!board.has_won());
        board.mark(4);
        assert!(board.has_won());
        assert_eq!(board.score(4), 4 * 4);
    }

    #[test]
    fn no_winner() {
        let game: Game = "1,2\n\n5 6\n7 8".parse().unwrap();
        assert!(game.play().is_empty());
        assert_eq!(game.first_winner(), Err(Error::NoWinner));
    }

    #[test]
    fn rejects_ragged_board() {
        assert_eq!(
            "1,2\n\n1 2\n3".parse::<Game>().unwrap_err(),
            Error::Board(grid::Error::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!("1,2".parse::<Game>().unwrap_err(), Error::NoBoards);
    }
}
