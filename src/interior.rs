//! Inside/outside classification of the cells around a traced loop.
//!
//! Flood-filling the cells themselves doesn't work, because the outside can squeeze between
//! two parallel loop segments without any free cell in between. So instead we flood-fill the
//! *corners* between cells, starting from the top-left corner of the grid, which is always
//! outside. Moving from one corner to the next crosses the border between two cells, and is
//! only blocked if the loop passes directly from one of those cells into the other.

use std::collections::VecDeque;

use fxhash::FxHashSet;
use log::debug;

use crate::{grid::Grid, tracer::Loop, Pos};

/// Corner `(i, j)` is the point at `(i - 0.5, j - 0.5)`, i.e. the top-left corner of cell
/// `(i, j)`. Valid corners range over `0..=height` and `0..=width`.
pub type Corner = (i64, i64);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    Loop,
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    cells: Vec<Vec<Cell>>,
}

impl Classification {
    pub fn get(&self, (y, x): Pos) -> Option<Cell> {
        if y < 0 || x < 0 {
            return None;
        }

        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == kind)
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/// Whether the loop runs across the border between the adjacent corners `a` and `b`
pub fn is_blocked(lp: &Loop, a: Corner, b: Corner) -> bool {
    let ((i, j), (k, l)) = (a.min(b), a.max(b));

    let straddling = if i == k && l == j + 1 {
        // horizontal edge, between the cell above and the cell below
        ((i - 1, j), (i, j))
    } else if j == l && k == i + 1 {
        // vertical edge, between the cell to the left and the cell to the right
        ((i, j - 1), (i, j))
    } else {
        return false;
    };

    lp.are_adjacent(straddling.0, straddling.1)
}

/// All corners reachable from the outside of the grid without crossing the loop
pub fn outside_corners(height: usize, width: usize, lp: &Loop) -> FxHashSet<Corner> {
    let (h, w) = (height as i64, width as i64);

    let mut seen = FxHashSet::from_iter([(0, 0)]);
    let mut todo = VecDeque::from_iter([(0, 0)]);

    while let Some((i, j)) = todo.pop_front() {
        for n in [(i - 1, j), (i, j + 1), (i + 1, j), (i, j - 1)] {
            if n.0 >= 0
                && n.1 >= 0
                && n.0 <= h
                && n.1 <= w
                && !seen.contains(&n)
                && !is_blocked(lp, (i, j), n)
            {
                seen.insert(n);
                todo.push_back(n);
            }
        }
    }

    debug!(
        "flood fill reached {} of {} corners",
        seen.len(),
        (h + 1) * (w + 1)
    );

    seen
}

pub fn classify(grid: &Grid, lp: &Loop) -> Classification {
    let outside = outside_corners(grid.height, grid.width, lp);

    let cells = (0..grid.height as i64)
        .map(|y| {
            (0..grid.width as i64)
                .map(|x| {
                    if lp.contains((y, x)) {
                        Cell::Loop
                    } else if [(y, x), (y, x + 1), (y + 1, x), (y + 1, x + 1)]
                        .iter()
                        .any(|corner| !outside.contains(corner))
                    {
                        Cell::Inside
                    } else {
                        Cell::Outside
                    }
                })
                .collect()
        })
        .collect();

    Classification { cells }
}

pub fn count_inside(grid: &Grid, lp: &Loop) -> usize {
    classify(grid, lp).count(Cell::Inside)
}
