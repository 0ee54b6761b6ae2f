use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, amount) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| Error::Malformed(s.to_owned()))?;
        let amount = amount
            .trim()
            .parse()
            .map_err(|_| Error::Malformed(s.to_owned()))?;
        match direction {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => Err(Error::UnknownDirection(other.to_owned())),
        }
    }
}

/// Parse one command per non-blank line.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
}

impl Position {
    pub fn product(self) -> i64 {
        self.horizontal * self.depth
    }
}

/// `down` and `up` change depth directly.
pub fn plain_course(commands: &[Command]) -> Position {
    commands
        .iter()
        .fold(Position::default(), |mut position, command| {
            match *command {
                Command::Forward(n) => position.horizontal += n,
                Command::Down(n) => position.depth += n,
                Command::Up(n) => position.depth -= n,
            }
            position
        })
}

/// `down` and `up` change the aim; `forward` dives by aim times the distance.
pub fn aimed_course(commands: &[Command]) -> Position {
    let mut aim = 0;
    let mut position = Position::default();
    for command in commands {
        match *command {
            Command::Forward(n) => {
                position.horizontal += n;
                position.depth += aim * n;
            }
            Command::Down(n) => aim += n,
            Command::Up(n) => aim -= n,
        }
    }
    position
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed command: `{0}`")]
    Malformed(String),
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = "\
forward 5
down 5
forward 8
up 3
down 8
forward 2";

    #[test]
    fn example_courses() {
        let commands = parse_commands(EXAMPLE).unwrap();
        assert_eq!(
            plain_course(&commands),
            Position {
                horizontal: 15,
                depth: 10
            }
        );
        assert_eq!(plain_course(&commands).product(), 150);
        assert_eq!(aimed_course(&commands).product(), 900);
    }

    #[rstest]
    #[case("forward", Error::Malformed("forward".into()))]
    #[case("down x", Error::Malformed("down x".into()))]
    #[case("back 3", Error::UnknownDirection("back".into()))]
    fn rejects_bad_commands(#[case] input: &str, #[case] expected: Error) {
        assert_eq!(input.parse::<Command>().unwrap_err(), expected);
    }
}
