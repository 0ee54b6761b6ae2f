use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use smoke_flash::{
    activation::DEFAULT_THRESHOLD,
    basin::{self, DEFAULT_RIDGE},
    bingo::Game,
    crabs::{self, FuelCost},
    diagnostic::Report,
    dive,
    lanternfish::School,
    segments, sonar, syntax, vents, Grid, Propagator,
};

/// Grid flood-fill, flash cascades and friends over puzzle input files
#[derive(Parser, Debug)]
#[command(name = "smoke-flash", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Depth increases in a sonar sweep
    Sonar {
        input: PathBuf,

        /// Width of the sliding window for the smoothed count
        #[arg(long, default_value_t = 3)]
        window: usize,
    },
    /// Final position after a list of submarine commands
    Dive { input: PathBuf },
    /// First and last winning bingo boards
    Bingo { input: PathBuf },
    /// Low points and basins of a digit heightmap
    Basins {
        input: PathBuf,

        /// Heights at or above this value are impassable
        #[arg(long, default_value_t = DEFAULT_RIDGE)]
        ridge: u32,

        /// How many of the largest basins to multiply together
        #[arg(long, default_value_t = 3)]
        largest: usize,
    },
    /// Cascading activations over a digit grid of counters
    Flashes {
        input: PathBuf,

        /// Counters strictly above this value activate
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u32,

        /// Rounds to simulate when counting total activations
        #[arg(long, default_value_t = 100)]
        rounds: usize,

        /// Give up looking for a simultaneous round after this many rounds
        #[arg(long, value_name = "N")]
        max_rounds: Option<usize>,
    },
    /// Corrupted and incomplete bracket lines
    Syntax { input: PathBuf },
    /// Power consumption and life support ratings of a binary report
    Diagnostic { input: PathBuf },
    /// Points where hydrothermal vent lines overlap
    Vents {
        input: PathBuf,

        /// A point counts once this many lines cover it
        #[arg(long, default_value_t = 2)]
        min_lines: u32,
    },
    /// Lanternfish population growth
    Lanternfish {
        input: PathBuf,

        /// Days to simulate; each value is reported separately
        #[arg(long, default_values_t = [80, 256])]
        days: Vec<usize>,
    },
    /// Cheapest horizontal alignment of crab submarines
    Crabs { input: PathBuf },
    /// Scrambled seven-segment displays
    Segments { input: PathBuf },
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_grid(path: &Path) -> Result<Grid<u32>> {
    let grid = read_input(path)?
        .parse::<Grid<u32>>()
        .with_context(|| format!("failed to parse grid from {}", path.display()))?;
    log::info!("loaded {}x{} grid", grid.rows(), grid.cols());
    Ok(grid)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sonar { input, window } => {
            let depths = sonar::parse_depths(&read_input(&input)?)
                .with_context(|| format!("failed to parse depths from {}", input.display()))?;
            println!("Depth increases: {}", sonar::count_increases(&depths));
            println!(
                "Increases over a {}-measurement window: {}",
                window,
                sonar::count_window_increases(&depths, window)
            );
        }
        Command::Dive { input } => {
            let commands = dive::parse_commands(&read_input(&input)?)
                .with_context(|| format!("failed to parse commands from {}", input.display()))?;
            println!("Plain course product: {}", dive::plain_course(&commands).product());
            println!("Aimed course product: {}", dive::aimed_course(&commands).product());
        }
        Command::Bingo { input } => {
            let game = read_input(&input)?
                .parse::<Game>()
                .with_context(|| format!("failed to parse bingo from {}", input.display()))?;
            let first = game.first_winner().context("failed to find a winning board")?;
            println!("First winning score: {}", first.score);
            let last = game.last_winner().context("failed to find a winning board")?;
            println!("Last winning score: {}", last.score);
        }
        Command::Vents { input, min_lines } => {
            let lines = vents::parse_lines(&read_input(&input)?)
                .with_context(|| format!("failed to parse vent lines from {}", input.display()))?;
            let straight = vents::count_overlaps(&lines, false, min_lines)
                .context("failed to map straight vents")?;
            println!("Overlaps of straight lines: {}", straight);
            let all = vents::count_overlaps(&lines, true, min_lines)
                .context("failed to map all vents")?;
            println!("Overlaps including diagonals: {}", all);
        }
        Command::Lanternfish { input, days } => {
            let school = read_input(&input)?
                .parse::<School>()
                .with_context(|| format!("failed to parse timers from {}", input.display()))?;
            for days in days {
                println!("Lanternfish after {} days: {}", days, school.clone().simulate(days));
            }
        }
        Command::Crabs { input } => {
            let positions = crabs::parse_positions(&read_input(&input)?)
                .with_context(|| format!("failed to parse positions from {}", input.display()))?;
            for cost in [FuelCost::Linear, FuelCost::Triangular] {
                let (target, fuel) = crabs::cheapest_alignment(&positions, cost)
                    .context("failed to align crabs")?;
                println!("{:?} fuel to align at {}: {}", cost, target, fuel);
            }
        }
        Command::Basins {
            input,
            ridge,
            largest,
        } => {
            let grid = read_grid(&input)?;
            println!("Sum of low point risk levels: {}", basin::risk_level_sum(&grid));
            println!(
                "Product of the {} largest basins: {}",
                largest,
                basin::largest_basins_product(&grid, ridge, largest)
            );
        }
        Command::Flashes {
            input,
            threshold,
            rounds,
            max_rounds,
        } => {
            let propagator = Propagator::with_threshold(read_grid(&input)?, threshold);
            println!(
                "Activations after {} rounds: {}",
                rounds,
                propagator.clone().run(rounds)
            );
            let first = propagator
                .clone()
                .first_simultaneous(max_rounds)
                .context("failed to find a simultaneous activation")?;
            println!("First simultaneous activation: round {}", first);
        }
        Command::Syntax { input } => {
            let content = read_input(&input)?;
            let corrupted = syntax::total_corruption_score(content.lines())
                .context("failed to score corrupted lines")?;
            println!("Total corruption score: {}", corrupted);
            let completion = syntax::middle_completion_score(content.lines())
                .context("failed to score incomplete lines")?;
            println!("Middle completion score: {}", completion);
        }
        Command::Diagnostic { input } => {
            let report = read_input(&input)?
                .parse::<Report>()
                .with_context(|| format!("failed to parse report from {}", input.display()))?;
            println!("Power consumption: {}", report.power_consumption());
            let life_support = report
                .life_support_rating()
                .context("failed to compute life support rating")?;
            println!("Life support rating: {}", life_support);
        }
        Command::Segments { input } => {
            let entries = segments::parse_entries(&read_input(&input)?)
                .with_context(|| format!("failed to parse displays from {}", input.display()))?;
            println!("Easy digits in outputs: {}", segments::count_easy_digits(&entries));
            let total =
                segments::sum_output_values(&entries).context("failed to decode displays")?;
            println!("Sum of output values: {}", total);
        }
    }

    Ok(())
}
