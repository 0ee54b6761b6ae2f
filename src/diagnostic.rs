use std::str::FromStr;

/// Which bit survives a column vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitCriteria {
    /// Keep the majority bit; ties keep `1`.
    MostCommon,
    /// Keep the minority bit; ties keep `0`.
    LeastCommon,
}

impl BitCriteria {
    fn select(self, ones: usize, total: usize) -> bool {
        let zeros = total - ones;
        match self {
            BitCriteria::MostCommon => ones >= zeros,
            BitCriteria::LeastCommon => ones < zeros,
        }
    }
}

/// A diagnostic report: a list of equal-width binary numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    width: usize,
    lines: Vec<Vec<bool>>,
}

impl Report {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn criteria_bits(lines: &[&[bool]], width: usize, criteria: BitCriteria) -> Vec<bool> {
        (0..width)
            .map(|col| {
                let ones = lines.iter().filter(|line| line[col]).count();
                criteria.select(ones, lines.len())
            })
            .collect()
    }

    fn rows(&self) -> Vec<&[bool]> {
        self.lines.iter().map(Vec::as_slice).collect()
    }

    /// The number formed by the most common bit of every column.
    pub fn gamma_rate(&self) -> u64 {
        to_number(&Self::criteria_bits(&self.rows(), self.width, BitCriteria::MostCommon))
    }

    /// The number formed by the least common bit of every column.
    pub fn epsilon_rate(&self) -> u64 {
        to_number(&Self::criteria_bits(&self.rows(), self.width, BitCriteria::LeastCommon))
    }

    pub fn power_consumption(&self) -> u64 {
        self.gamma_rate() * self.epsilon_rate()
    }

    /// Repeatedly partition the report by column, keeping the lines whose bit
    /// matches `criteria` as evaluated over the current survivors, until one line remains.
    pub fn filter_rating(&self, criteria: BitCriteria) -> Result<u64, Error> {
        let mut survivors = self.rows();
        for col in 0..self.width {
            if survivors.len() <= 1 {
                break;
            }
            let ones = survivors.iter().filter(|line| line[col]).count();
            let keep = criteria.select(ones, survivors.len());
            survivors.retain(|line| line[col] == keep);
            log::trace!("{:?} column {}: {} survivors", criteria, col, survivors.len());
        }

        match survivors.as_slice() {
            [line] => Ok(to_number(line)),
            _ => Err(Error::NoUniqueRating {
                criteria,
                remaining: survivors.len(),
            }),
        }
    }

    pub fn oxygen_generator_rating(&self) -> Result<u64, Error> {
        self.filter_rating(BitCriteria::MostCommon)
    }

    pub fn co2_scrubber_rating(&self) -> Result<u64, Error> {
        self.filter_rating(BitCriteria::LeastCommon)
    }

    pub fn life_support_rating(&self) -> Result<u64, Error> {
        Ok(self.oxygen_generator_rating()? * self.co2_scrubber_rating()?)
    }
}

fn to_number(bits: &[bool]) -> u64 {
    bits.iter().fold(0, |n, &bit| (n << 1) | u64::from(bit))
}

impl FromStr for Report {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = Vec::new();
        let mut width = None;

        for (line_no, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let bits = line
                .chars()
                .enumerate()
                .map(|(col, c)| match c {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    found => Err(Error::NotABit {
                        line: line_no,
                        col,
                        found,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            if bits.len() > u64::BITS as usize {
                return Err(Error::TooWide {
                    line: line_no,
                    found: bits.len(),
                });
            }

            let expected = *width.get_or_insert(bits.len());
            if bits.len() != expected {
                return Err(Error::RaggedLine {
                    line: line_no,
                    expected,
                    found: bits.len(),
                });
            }
            lines.push(bits);
        }

        let width = width.ok_or(Error::Empty)?;
        Ok(Report { width, lines })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("report has no lines")]
    Empty,
    #[error("line {line} has {found} bits, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line} has {found} bits, more than fit in 64")]
    TooWide { line: usize, found: usize },
    #[error("`{found}` at line {line}, column {col} is not a bit")]
    NotABit { line: usize, col: usize, found: char },
    #[error("filtering by {criteria:?} left {remaining} lines instead of one")]
    NoUniqueRating {
        criteria: BitCriteria,
        remaining: usize,
    },
}
