/// The four kinds of chunk delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    Round,
    Square,
    Curly,
    Angle,
}

impl Bracket {
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Round),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            '<' => Some(Self::Angle),
            _ => None,
        }
    }

    pub fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Round),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            '>' => Some(Self::Angle),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
            Self::Angle => '<',
        }
    }

    pub fn close(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
            Self::Angle => '>',
        }
    }

    /// Penalty for finding this closer where it doesn't belong.
    pub fn corruption_points(self) -> u64 {
        match self {
            Self::Round => 3,
            Self::Square => 57,
            Self::Curly => 1197,
            Self::Angle => 25137,
        }
    }

    /// Value of this closer when autocompleting an incomplete line.
    pub fn completion_points(self) -> u64 {
        match self {
            Self::Round => 1,
            Self::Square => 2,
            Self::Curly => 3,
            Self::Angle => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Complete,
    /// The first closer which doesn't match the innermost open chunk.
    Corrupted { found: Bracket, expected: Bracket },
    /// Every chunk closed correctly so far, but some are still open.
    ///
    /// `missing` lists the closers in the order they must be appended.
    Incomplete { missing: Vec<Bracket> },
}

impl Status {
    pub fn corruption_score(&self) -> Option<u64> {
        match self {
            Status::Corrupted { found, .. } => Some(found.corruption_points()),
            _ => None,
        }
    }

    pub fn completion_score(&self) -> Option<u64> {
        match self {
            Status::Incomplete { missing } => Some(
                missing
                    .iter()
                    .fold(0, |score, bracket| score * 5 + bracket.completion_points()),
            ),
            _ => None,
        }
    }
}

/// Validate a single line of chunks with a stack of open brackets.
///
/// A closer arriving while nothing is open is ignored.
pub fn check_line(line: &str) -> Result<Status, Error> {
    let mut stack = Vec::new();
    for (index, c) in line.chars().enumerate() {
        if let Some(open) = Bracket::from_open(c) {
            stack.push(open);
        } else if let Some(close) = Bracket::from_close(c) {
            match stack.last() {
                Some(&open) if open == close => {
                    stack.pop();
                }
                Some(&expected) => {
                    return Ok(Status::Corrupted {
                        found: close,
                        expected,
                    })
                }
                None => log::trace!("ignoring stray `{}` at index {}", c, index),
            }
        } else {
            return Err(Error::InvalidChar { index, found: c });
        }
    }

    if stack.is_empty() {
        Ok(Status::Complete)
    } else {
        stack.reverse();
        Ok(Status::Incomplete { missing: stack })
    }
}

fn non_empty<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Sum of corruption penalties over every corrupted line.
pub fn total_corruption_score<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<u64, Error> {
    let mut total = 0;
    for line in non_empty(lines) {
        total += check_line(line)?.corruption_score().unwrap_or_default();
    }
    Ok(total)
}

/// The median completion score over all incomplete lines.
///
/// There must be an odd number of incomplete lines, so that the median is one of the scores.
pub fn middle_completion_score<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<u64, Error> {
    let mut scores = Vec::new();
    for line in non_empty(lines) {
        scores.extend(check_line(line)?.completion_score());
    }
    if scores.is_empty() {
        return Err(Error::NoIncompleteLines);
    }
    if scores.len() % 2 == 0 {
        return Err(Error::EvenIncompleteLines(scores.len()));
    }
    scores.sort_unstable();
    log::debug!("{} incomplete lines", scores.len());
    Ok(scores[scores.len() / 2])
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid character `{found}` at index {index}")]
    InvalidChar { index: usize, found: char },
    #[error("no incomplete lines to score")]
    NoIncompleteLines,
    #[error("{0} incomplete lines have no single middle score")]
    EvenIncompleteLines(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]";

    #[rstest]
    #[case("()", Status::Complete)]
    #[case("{()()()}", Status::Complete)]
    #[case("(]", Status::Corrupted { found: Bracket::Square, expected: Bracket::Round })]
    #[case(")", Status::Complete)]
    #[case(")(", Status::Incomplete { missing: vec![Bracket::Round] })]
    #[case("(>)", Status::Corrupted { found: Bracket::Angle, expected: Bracket::Round })]
    #[case("[<", Status::Incomplete { missing: vec![Bracket::Angle, Bracket::Square] })]
    fn classifies_lines(#[case] line: &str, #[case] expected: Status) {
        assert_eq!(check_line(line).unwrap(), expected);
    }

    #[test]
    fn rejects_other_characters() {
        assert_eq!(
            check_line("(a)").unwrap_err(),
            Error::InvalidChar {
                index: 1,
                found: 'a'
            }
        );
    }

    #[rstest]
    #[case("[[<[([]))<([[{}[[()]]]", Bracket::Round, Bracket::Square)]
    #[case("{([(<{}[<>[]}>{[]{[(<()>", Bracket::Curly, Bracket::Square)]
    #[case("<{([([[(<>()){}]>(<<{{", Bracket::Angle, Bracket::Square)]
    fn example_corruptions(#[case] line: &str, #[case] found: Bracket, #[case] expected: Bracket) {
        assert_eq!(
            check_line(line).unwrap(),
            Status::Corrupted { found, expected }
        );
    }

    #[test]
    fn example_completion() {
        let status = check_line("<{([{{}}[<[[[<>{}]]]>[]]").unwrap();
        let missing: String = match &status {
            Status::Incomplete { missing } => missing.iter().map(|b| b.close()).collect(),
            other => panic!("expected incomplete, got {other:?}"),
        };
        assert_eq!(missing, "])}>");
        assert_eq!(status.completion_score(), Some(294));
    }

    #[test]
    fn example_totals() {
        assert_eq!(total_corruption_score(EXAMPLE.lines()).unwrap(), 26397);
        assert_eq!(middle_completion_score(EXAMPLE.lines()).unwrap(), 288957);
    }

    #[test]
    fn stray_closer_is_not_corruption() {
        assert_eq!(total_corruption_score([")(", "(]"]).unwrap(), 57);
        assert_eq!(middle_completion_score([")(", "(]"]).unwrap(), 1);
    }

    #[rstest]
    #[case(vec!["(", "["], Error::EvenIncompleteLines(2))]
    #[case(vec!["()", "(]"], Error::NoIncompleteLines)]
    fn median_needs_odd_count(#[case] lines: Vec<&str>, #[case] expected: Error) {
        assert_eq!(middle_completion_score(lines).unwrap_err(), expected);
    }

    #[test]
    fn bracket_chars_roundtrip() {
        for bracket in [Bracket::Round, Bracket::Square, Bracket::Curly, Bracket::Angle] {
            assert_eq!(Bracket::from_open(bracket.open()), Some(bracket));
            assert_eq!(Bracket::from_close(bracket.close()), Some(bracket));
        }
    }
}
