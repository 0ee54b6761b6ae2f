use std::{fmt, str::FromStr};

/// A set of lit wires `a` through `g`, one bit per wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signal(u8);

impl Signal {
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every wire lit in `other` is also lit in `self`.
    pub fn contains(self, other: Signal) -> bool {
        self.0 & other.0 == other.0
    }
}

impl FromStr for Signal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Signal::default(), |Signal(bits), c| {
            let wire = match c {
                'a'..='g' => 1 << (c as u8 - b'a'),
                _ => return Err(Error::InvalidWire(c)),
            };
            if bits & wire != 0 {
                return Err(Error::DuplicateWire(c));
            }
            Ok(Signal(bits | wire))
        })
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wires: String = ('a'..='g')
            .enumerate()
            .filter(|(bit, _)| self.0 & (1 << bit) != 0)
            .map(|(_, wire)| wire)
            .collect();
        write!(f, "Signal({wires})")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    pub fn value(self) -> u32 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
            Digit::Two => 2,
            Digit::Three => 3,
            Digit::Four => 4,
            Digit::Five => 5,
            Digit::Six => 6,
            Digit::Seven => 7,
            Digit::Eight => 8,
            Digit::Nine => 9,
        }
    }

    /// Digits identified by segment count alone.
    pub fn from_unique_len(len: usize) -> Option<Digit> {
        match len {
            2 => Some(Digit::One),
            3 => Some(Digit::Seven),
            4 => Some(Digit::Four),
            7 => Some(Digit::Eight),
            _ => None,
        }
    }
}

/// The deduced wiring of one display: which signal lights each digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring([Signal; 10]);

impl Wiring {
    pub fn signal(&self, digit: Digit) -> Signal {
        self.0[digit.value() as usize]
    }

    pub fn digit(&self, signal: Signal) -> Option<Digit> {
        Digit::ALL.into_iter().find(|&digit| self.signal(digit) == signal)
    }
}

/// One line of the display log: ten unique patterns and four scrambled outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    patterns: Vec<Signal>,
    outputs: Vec<Signal>,
}

impl Entry {
    pub fn outputs(&self) -> &[Signal] {
        &self.outputs
    }

    fn find(
        &self,
        digit: Digit,
        predicate: impl Fn(Signal) -> bool,
    ) -> Result<Signal, Error> {
        let mut candidates = self.patterns.iter().copied().filter(|&p| predicate(p));
        match (candidates.next(), candidates.next()) {
            (Some(signal), None) => Ok(signal),
            _ => Err(Error::Undeducible(digit)),
        }
    }

    /// Work out which pattern lights which digit from segment counts and set containment.
    pub fn wiring(&self) -> Result<Wiring, Error> {
        let one = self.find(Digit::One, |p| p.len() == 2)?;
        let four = self.find(Digit::Four, |p| p.len() == 4)?;
        let seven = self.find(Digit::Seven, |p| p.len() == 3)?;
        let eight = self.find(Digit::Eight, |p| p.len() == 7)?;

        let nine = self.find(Digit::Nine, |p| p.len() == 6 && p.contains(four))?;
        let zero = self.find(Digit::Zero, |p| {
            p.len() == 6 && p != nine && p.contains(one)
        })?;
        let six = self.find(Digit::Six, |p| p.len() == 6 && p != nine && p != zero)?;

        let three = self.find(Digit::Three, |p| p.len() == 5 && p.contains(one))?;
        let five = self.find(Digit::Five, |p| {
            p.len() == 5 && p != three && six.contains(p)
        })?;
        let two = self.find(Digit::Two, |p| p.len() == 5 && p != three && p != five)?;

        Ok(Wiring([
            zero, one, two, three, four, five, six, seven, eight, nine,
        ]))
    }

    /// Decode the output patterns into digits.
    pub fn decode(&self) -> Result<Vec<Digit>, Error> {
        let wiring = self.wiring()?;
        self.outputs
            .iter()
            .map(|&signal| wiring.digit(signal).ok_or(Error::UnknownPattern(signal)))
            .collect()
    }

    /// The output digits read as one decimal number.
    pub fn output_value(&self) -> Result<u32, Error> {
        Ok(self
            .decode()?
            .into_iter()
            .fold(0, |n, digit| n * 10 + digit.value()))
    }
}

fn parse_signals(s: &str, expected: usize) -> Result<Vec<Signal>, Error> {
    let signals = s
        .split_ascii_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Signal>, _>>()?;
    if signals.len() != expected {
        return Err(Error::PatternCount {
            expected,
            found: signals.len(),
        });
    }
    Ok(signals)
}

impl FromStr for Entry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (patterns, outputs) = s.split_once('|').ok_or(Error::MissingSeparator)?;
        Ok(Entry {
            patterns: parse_signals(patterns, 10)?,
            outputs: parse_signals(outputs, 4)?,
        })
    }
}

/// Parse one entry per non-blank line.
pub fn parse_entries(input: &str) -> Result<Vec<Entry>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Count output patterns whose length alone identifies the digit.
pub fn count_easy_digits(entries: &[Entry]) -> usize {
    entries
        .iter()
        .flat_map(Entry::outputs)
        .filter(|signal| Digit::from_unique_len(signal.len()).is_some())
        .count()
}

/// Sum of every entry's decoded output value.
pub fn sum_output_values(entries: &[Entry]) -> Result<u32, Error> {
    entries.iter().map(Entry::output_value).sum()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("entry has no `|` separator")]
    MissingSeparator,
    #[error("`{0}` is not a wire between `a` and `g`")]
    InvalidWire(char),
    #[error("wire `{0}` appears twice in one pattern")]
    DuplicateWire(char),
    #[error("expected {expected} patterns, found {found}")]
    PatternCount { expected: usize, found: usize },
    #[error("cannot deduce the pattern for {0:?}")]
    Undeducible(Digit),
    #[error("output {0:?} matches no known pattern")]
    UnknownPattern(Signal),
}
