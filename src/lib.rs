//! Pipe maze: trace the closed pipe loop through `S`, then count the cells it encloses.

pub mod error;
pub mod grid;
pub mod interior;
pub mod pipe;
pub mod render;
pub mod tracer;

use serde::Serialize;

pub use error::{Error, Malformed, Result};
pub use grid::Grid;
pub use tracer::Loop;

/// `(row, column)`, with row 0 at the top
pub type Pos = (i64, i64);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(into = "u8")]
pub enum Part {
    /// Steps to the point of the loop farthest from the start
    One,
    /// Number of cells enclosed by the loop
    Two,
}

impl TryFrom<u8> for Part {
    type Error = String;

    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        match n {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            _ => Err(format!("there is no part {n}, only 1 and 2")),
        }
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> u8 {
        match part {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

/// A parsed grid together with its traced loop
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub lp: Loop,
}

impl Puzzle {
    pub fn new(input: &str) -> Result<Self> {
        let grid: Grid = input.parse()?;
        let start = tracer::find_start(&grid)?;
        log::debug!("start at {start:?} in a {}x{} grid", grid.height, grid.width);

        let lp = tracer::trace(&grid, start)?;

        Ok(Puzzle { grid, lp })
    }

    pub fn answer(&self, part: Part) -> usize {
        match part {
            Part::One => self.lp.farthest(),
            Part::Two => interior::count_inside(&self.grid, &self.lp),
        }
    }

    pub fn classify(&self) -> interior::Classification {
        interior::classify(&self.grid, &self.lp)
    }

    pub fn render(&self) -> String {
        render::render(&self.grid, &self.lp, &self.classify())
    }
}

pub fn solve(input: &str) -> Result<(usize, usize)> {
    let puzzle = Puzzle::new(input)?;
    Ok((puzzle.answer(Part::One), puzzle.answer(Part::Two)))
}

pub fn solve_part(input: &str, part: Part) -> Result<usize> {
    Ok(Puzzle::new(input)?.answer(part))
}

#[test]
fn test() {
    assert_eq!(
        solve(
            "
.....
.S-7.
.|.|.
.L-J.
.....
    "
        ),
        Ok((4, 1))
    );

    assert_eq!(
        solve(
            "
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
    "
        ),
        Ok((8, 1))
    );

    assert_eq!(solve_part("S7\nLJ", Part::Two), Ok(0));
    assert_eq!(solve(".....\n.F-7.\n.L-J."), Err(Error::StartNotFound));
}

#[test]
fn test_part_selector() {
    assert_eq!(Part::try_from(1), Ok(Part::One));
    assert_eq!(Part::try_from(2), Ok(Part::Two));
    assert!(Part::try_from(3).is_err());
    assert_eq!(u8::from(Part::Two), 2);
}
