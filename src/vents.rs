use std::str::FromStr;

use crate::grid::{self, Grid};

/// An `(x, y)` point on the ocean floor.
pub type Point = (usize, usize);

/// A line of hydrothermal vents between two inclusive endpoints.
///
/// Lines are horizontal, vertical, or diagonal at exactly 45 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VentLine {
    pub start: Point,
    pub end: Point,
}

impl VentLine {
    pub fn is_diagonal(&self) -> bool {
        self.start.0 != self.end.0 && self.start.1 != self.end.1
    }

    /// Every point covered by this line, from `start` to `end`.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (x0, y0) = self.start;
        let (x1, y1) = self.end;
        let steps = x0.abs_diff(x1).max(y0.abs_diff(y1));
        let step = |from: usize, to: usize, i: usize| {
            if to >= from {
                from + i.min(to - from)
            } else {
                from - i.min(from - to)
            }
        };
        (0..=steps).map(move |i| (step(x0, x1, i), step(y0, y1, i)))
    }
}

fn parse_point(s: &str) -> Result<Point, Error> {
    let malformed = || Error::MalformedPoint(s.trim().to_owned());
    let (x, y) = s.trim().split_once(',').ok_or_else(malformed)?;
    Ok((
        x.trim().parse().map_err(|_| malformed())?,
        y.trim().parse().map_err(|_| malformed())?,
    ))
}

impl FromStr for VentLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("->")
            .ok_or_else(|| Error::MissingArrow(s.to_owned()))?;
        let line = VentLine {
            start: parse_point(start)?,
            end: parse_point(end)?,
        };
        if line.is_diagonal() && line.start.0.abs_diff(line.end.0) != line.start.1.abs_diff(line.end.1)
        {
            return Err(Error::Slanted(line));
        }
        Ok(line)
    }
}

/// Parse one vent line per non-blank line.
pub fn parse_lines(input: &str) -> Result<Vec<VentLine>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Count how many lines cover each point. The diagram is indexed `(y, x)`.
pub fn diagram(lines: &[VentLine], include_diagonal: bool) -> Result<Grid<u32>, Error> {
    let max_x = lines.iter().map(|l| l.start.0.max(l.end.0)).max();
    let max_y = lines.iter().map(|l| l.start.1.max(l.end.1)).max();
    let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
        return Err(Error::NoLines);
    };

    let mut diagram = Grid::new(max_y + 1, max_x + 1)?;
    for line in lines.iter().filter(|l| include_diagonal || !l.is_diagonal()) {
        for (x, y) in line.points() {
            diagram[(y, x)] += 1;
        }
    }
    Ok(diagram)
}

/// How many points are covered by at least `min_lines` lines.
pub fn count_overlaps(
    lines: &[VentLine],
    include_diagonal: bool,
    min_lines: u32,
) -> Result<usize, Error> {
    let diagram = diagram(lines, include_diagonal)?;
    Ok(diagram.values().filter(|&&n| n >= min_lines).count())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("no `->` in `{0}`")]
    MissingArrow(String),
    #[error("`{0}` is not an `x,y` point")]
    MalformedPoint(String),
    #[error("{0:?} is neither straight nor at 45 degrees")]
    Slanted(VentLine),
    #[error("no vent lines")]
    NoLines,
    #[error("cannot build diagram")]
    Diagram(#[from] grid::Error),
}
