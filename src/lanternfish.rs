use std::str::FromStr;

/// Timer a fish returns to after spawning.
const RESTART: usize = 6;
/// Timer of a newborn fish.
const NEWBORN: usize = 8;

/// A population of lanternfish, counted per timer value rather than per fish.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct School([u64; NEWBORN + 1]);

impl School {
    pub fn len(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance one day: every timer drops by one, and fish at zero restart and spawn a newborn.
    pub fn step(&mut self) {
        self.0.rotate_left(1);
        // the fish that were at zero are now counted as newborns
        self.0[RESTART] += self.0[NEWBORN];
    }

    /// Advance `days` days and return the population size.
    pub fn simulate(&mut self, days: usize) -> u64 {
        for _ in 0..days {
            self.step();
        }
        log::debug!("{} lanternfish after {} days", self.len(), days);
        self.len()
    }
}

impl FromStr for School {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut school = School::default();
        for timer in s.trim().split(',').map(str::trim) {
            let value: usize = timer
                .parse()
                .map_err(|_| Error::InvalidTimer(timer.to_owned()))?;
            let bucket = school
                .0
                .get_mut(value)
                .ok_or(Error::TimerOutOfRange(value))?;
            *bucket += 1;
        }
        Ok(school)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("`{0}` is not a timer value")]
    InvalidTimer(String),
    #[error("timer {0} is above the newborn timer of 8")]
    TimerOutOfRange(usize),
}
