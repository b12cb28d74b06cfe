use std::str::FromStr;

use crate::{
    error::{Error, Result},
    pipe::Pipe,
    Pos,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Pipe>>,
    pub height: usize,
    pub width: usize,
}

impl Grid {
    pub fn get(&self, (y, x): Pos) -> Option<Pipe> {
        if y < 0 || x < 0 {
            return None;
        }

        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pipe]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim_end()
                    .chars()
                    .enumerate()
                    .map(|(x, c)| {
                        Pipe::from_char(c).ok_or(Error::InvalidSymbol {
                            symbol: c,
                            at: (y as i64, x as i64),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(width) = rows.first().map(Vec::len) else {
            return Err(Error::EmptyGrid);
        };

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::UnevenRows {
                row,
                len: r.len(),
                expected: width,
            });
        }

        Ok(Grid {
            height: rows.len(),
            width,
            rows,
        })
    }
}
