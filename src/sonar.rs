/// Parse one depth measurement per non-blank line.
pub fn parse_depths(input: &str) -> Result<Vec<u32>, Error> {
    input
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            text.parse().map_err(|_| Error::InvalidDepth {
                line,
                found: text.to_owned(),
            })
        })
        .collect()
}

/// How many measurements are strictly larger than the one before.
pub fn count_increases(depths: &[u32]) -> usize {
    depths.windows(2).filter(|pair| pair[1] > pair[0]).count()
}

/// Sums of every run of `size` consecutive measurements.
///
/// Empty when there are fewer than `size` measurements or `size` is 0.
pub fn window_sums(depths: &[u32], size: usize) -> Vec<u32> {
    if size == 0 {
        return Vec::new();
    }
    depths.windows(size).map(|window| window.iter().sum()).collect()
}

/// Increases between consecutive sliding-window sums.
pub fn count_window_increases(depths: &[u32], size: usize) -> usize {
    count_increases(&window_sums(depths, size))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("line {line}: `{found}` is not a depth")]
    InvalidDepth { line: usize, found: String },
}
