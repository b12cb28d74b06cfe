use crate::{
    pipe::{Dir, Pipe},
    Pos,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("the grid is empty")]
    EmptyGrid,
    #[error("row {row} has length {len}, expected {expected}")]
    UnevenRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid pipe symbol {symbol:?} at {at:?}")]
    InvalidSymbol { symbol: char, at: Pos },
    #[error("no start marker `S` in the grid")]
    StartNotFound,
    #[error("malformed loop: {0}")]
    MalformedLoop(#[from] Malformed),
}

/// Ways in which the pipes around and after the start fail to form a closed loop
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("no neighbor of the start connects back to it")]
    NoExit,
    #[error("only the neighbor {0:?} of the start connects back to it")]
    DeadEnd(Dir),
    #[error("`{}` at {at:?} cannot be entered moving {incoming:?}", .pipe.to_char())]
    Disconnected { at: Pos, pipe: Pipe, incoming: Dir },
    #[error("the loop leaves the grid moving {dir:?} from {from:?}")]
    OutOfBounds { from: Pos, dir: Dir },
}
