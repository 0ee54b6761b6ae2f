use std::collections::VecDeque;

use crate::grid::{Coord, Grid};

/// Counters strictly above this value activate in the canonical puzzle.
pub const DEFAULT_THRESHOLD: u32 = 9;

/// The outcome of a single charge-and-cascade round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundResult {
    /// How many cells activated this round.
    pub activated: usize,
    /// `true` when every cell in the grid activated this round.
    pub simultaneous: bool,
}

/// A grid of counters which charge every round and cascade activations to
/// their eight neighbors.
///
/// The propagator owns its grid and advances it in place; clone [`Propagator::grid`]
/// to keep a snapshot.
#[derive(Debug, Clone)]
pub struct Propagator {
    grid: Grid<u32>,
    threshold: u32,
    reset: u32,
    rounds: usize,
}

impl Propagator {
    /// Wrap `grid` with the default threshold and a reset value of 0.
    pub fn new(grid: Grid<u32>) -> Self {
        Self::with_threshold(grid, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(grid: Grid<u32>, threshold: u32) -> Self {
        Self {
            grid,
            threshold,
            reset: 0,
            rounds: 0,
        }
    }

    /// The current counter values.
    pub fn grid(&self) -> &Grid<u32> {
        &self.grid
    }

    /// Rounds simulated so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Simulate one round: charge every cell, cascade activations, then reset
    /// every activated cell.
    pub fn step(&mut self) -> RoundResult {
        // per-round state
        let mut activated = self.grid.map(|_| false);
        let mut queued = activated.clone();
        let mut queue = VecDeque::new();

        // charge
        for value in self.grid.values_mut() {
            *value += 1;
        }
        for coord in self.grid.coords() {
            if self.grid[coord] > self.threshold {
                queued[coord] = true;
                queue.push_back(coord);
            }
        }

        // cascade
        let mut order: Vec<Coord> = Vec::new();
        while let Some(coord) = queue.pop_front() {
            if activated[coord] {
                continue;
            }
            activated[coord] = true;
            order.push(coord);
            log::trace!("round {}: {:?} activated", self.rounds + 1, coord);

            for neighbor in self.grid.neighbors8(coord) {
                self.grid[neighbor] += 1;
                if self.grid[neighbor] > self.threshold
                    && !activated[neighbor]
                    && !queued[neighbor]
                {
                    queued[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        // reset
        for &coord in &order {
            self.grid[coord] = self.reset;
        }

        self.rounds += 1;
        let result = RoundResult {
            activated: order.len(),
            simultaneous: order.len() == self.grid.len(),
        };
        log::debug!("round {}: {:?}", self.rounds, result);
        result
    }

    /// Simulate `rounds` rounds and return the total number of activations.
    pub fn run(&mut self, rounds: usize) -> usize {
        (0..rounds).map(|_| self.step().activated).sum()
    }

    /// Step until every cell activates in the same round, and return how many
    /// rounds that took, counting from the current state.
    ///
    /// With `max_rounds` set, give up with `Error::NotFoundWithin` once that
    /// many rounds have passed without a simultaneous activation. Without it,
    /// this loops until one occurs.
    pub fn first_simultaneous(&mut self, max_rounds: Option<usize>) -> Result<usize, Error> {
        let mut round = 0;
        loop {
            if max_rounds.is_some_and(|max| round >= max) {
                return Err(Error::NotFoundWithin { rounds: round });
            }
            round += 1;
            if self.step().simultaneous {
                log::debug!("first simultaneous activation after {} rounds", round);
                return Ok(round);
            }
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("no simultaneous activation within {rounds} rounds")]
    NotFoundWithin { rounds: usize },
}
