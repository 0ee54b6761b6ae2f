/// How much fuel moving a crab costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FuelCost {
    /// One unit per step.
    Linear,
    /// Each step costs one more than the last.
    Triangular,
}

impl FuelCost {
    pub fn cost(self, distance: u64) -> u64 {
        match self {
            FuelCost::Linear => distance,
            FuelCost::Triangular => distance * (distance + 1) / 2,
        }
    }
}

/// Parse a single line of comma-separated horizontal positions.
pub fn parse_positions(input: &str) -> Result<Vec<u64>, Error> {
    let positions = input
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse().map_err(|_| Error::InvalidPosition(p.to_owned())))
        .collect::<Result<Vec<_>, _>>()?;
    if positions.is_empty() {
        return Err(Error::Empty);
    }
    Ok(positions)
}

/// Total fuel to align every crab on `target`.
pub fn alignment_cost(positions: &[u64], target: u64, cost: FuelCost) -> u64 {
    positions
        .iter()
        .map(|&p| cost.cost(p.abs_diff(target)))
        .sum()
}

/// The cheapest alignment over every target between the outermost crabs,
/// as `(target, fuel)`.
pub fn cheapest_alignment(positions: &[u64], cost: FuelCost) -> Result<(u64, u64), Error> {
    let min = positions.iter().copied().min().ok_or(Error::Empty)?;
    let max = positions.iter().copied().max().ok_or(Error::Empty)?;
    (min..=max)
        .map(|target| (target, alignment_cost(positions, target, cost)))
        .min_by_key(|&(_, fuel)| fuel)
        .ok_or(Error::Empty)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("no crab positions")]
    Empty,
    #[error("`{0}` is not a position")]
    InvalidPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = "16,1,2,0,4,2,7,1,2,14\n";

    #[rstest]
    #[case(FuelCost::Linear, (2, 37))]
    #[case(FuelCost::Triangular, (5, 168))]
    fn example_alignment(#[case] cost: FuelCost, #[case] expected: (u64, u64)) {
        let positions = parse_positions(EXAMPLE).unwrap();
        assert_eq!(cheapest_alignment(&positions, cost), Ok(expected));
    }

    #[test]
    fn triangular_cost_per_distance() {
        assert_eq!(FuelCost::Triangular.cost(0), 0);
        assert_eq!(FuelCost::Triangular.cost(11), 66);
        let positions = parse_positions(EXAMPLE).unwrap();
        assert_eq!(alignment_cost(&positions, 2, FuelCost::Triangular), 206);
    }

    #[rstest]
    #[case("", Error::Empty)]
    #[case("1,-2", Error::InvalidPosition("-2".into()))]
    fn rejects_bad_input(#[case] input: &str, #[case] expected: Error) {
        assert_eq!(parse_positions(input).unwrap_err(), expected);
    }
}
