pub mod activation;
pub mod basin;
pub mod bingo;
pub mod crabs;
pub mod diagnostic;
pub mod dive;
pub mod grid;
pub mod lanternfish;
pub mod segments;
pub mod sonar;
pub mod syntax;
pub mod vents;

pub use activation::{Propagator, RoundResult};
pub use grid::{Coord, Grid};
