use fxhash::FxHashMap;
use log::{debug, trace as trace_step};

use crate::{
    error::{Error, Malformed, Result},
    grid::Grid,
    pipe::{Dir, Pipe},
    Pos,
};

/// The closed pipe loop through the start, in walking order.
///
/// Step index 0 is the first cell after the start. The start itself is the last cell
/// recorded (index `len - 1`), which is where the walk closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    indices: FxHashMap<Pos, usize>,
    path: Vec<Pos>,
    start: Pos,
    start_shape: Pipe,
}

impl Loop {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of steps to the point on the loop farthest from the start
    pub fn farthest(&self) -> usize {
        self.len() / 2
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.indices.contains_key(&pos)
    }

    pub fn step_index(&self, pos: Pos) -> Option<usize> {
        self.indices.get(&pos).copied()
    }

    /// Whether `a` and `b` are both on the loop and directly follow each other along it
    pub fn are_adjacent(&self, a: Pos, b: Pos) -> bool {
        match (self.step_index(a), self.step_index(b)) {
            (Some(i), Some(j)) => {
                let d = i.abs_diff(j);
                d == 1 || (self.len() > 2 && d == self.len() - 1)
            }
            _ => false,
        }
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    /// The actual shape of the pipe under the start marker
    pub fn start_shape(&self) -> Pipe {
        self.start_shape
    }

    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// The pipe at `pos`, with the start marker replaced by its inferred shape
    pub fn pipe_at(&self, grid: &Grid, pos: Pos) -> Option<Pipe> {
        if pos == self.start {
            Some(self.start_shape)
        } else {
            grid.get(pos)
        }
    }
}

pub fn find_start(grid: &Grid) -> Result<Pos> {
    grid.rows()
        .enumerate()
        .find_map(|(y, row)| {
            row.iter()
                .position(|&pipe| pipe == Pipe::Start)
                .map(|x| (y as i64, x as i64))
        })
        .ok_or(Error::StartNotFound)
}

/// Directions out of the start whose neighbor connects back to it, in `Dir::ALL` order
pub fn start_exits(grid: &Grid, start: Pos) -> Vec<Dir> {
    Dir::ALL
        .into_iter()
        .filter(|&dir| {
            grid.get(dir.step(start))
                .is_some_and(|pipe| pipe.connects(dir.opposite()))
        })
        .collect()
}

pub fn infer_first_direction(grid: &Grid, start: Pos) -> Result<Dir> {
    let exits = start_exits(grid, start);
    debug!("exits from start {start:?}: {exits:?}");

    match exits.as_slice() {
        [] => Err(Malformed::NoExit.into()),
        &[only] => Err(Malformed::DeadEnd(only).into()),
        &[first, ..] => Ok(first),
    }
}

pub fn next_direction(grid: &Grid, at: Pos, incoming: Dir) -> Result<Dir> {
    let pipe = grid.get(at).unwrap_or(Pipe::Ground);

    pipe.exit(incoming).ok_or_else(|| {
        Malformed::Disconnected {
            at,
            pipe,
            incoming,
        }
        .into()
    })
}

pub fn trace(grid: &Grid, start: Pos) -> Result<Loop> {
    let first = infer_first_direction(grid, start)?;

    let attempt = walk(grid, start, first);
    if attempt.is_ok() {
        return attempt;
    }

    // stray pipes can point at the start without being part of the loop
    start_exits(grid, start)
        .into_iter()
        .skip(1)
        .map(|dir| walk(grid, start, dir))
        .find(Result::is_ok)
        .unwrap_or(attempt)
}

/// Every step is reversible, so the walk can only cycle by coming back to the start
fn walk(grid: &Grid, start: Pos, first: Dir) -> Result<Loop> {
    let mut indices = FxHashMap::default();
    let mut path = vec![];

    let mut at = start;
    let mut dir = first;

    loop {
        let next = dir.step(at);
        if grid.get(next).is_none() {
            return Err(Malformed::OutOfBounds { from: at, dir }.into());
        }

        at = next;
        trace_step!("step {} -> {at:?}", path.len());
        indices.insert(at, path.len());
        path.push(at);

        if at == start {
            break;
        }

        dir = next_direction(grid, at, dir)?;
    }

    let start_shape =
        Pipe::from_connections(first, dir.opposite()).ok_or(Malformed::DeadEnd(first))?;

    debug!("loop closed after {} steps, start is {start_shape:?}", path.len());

    Ok(Loop {
        indices,
        path,
        start,
        start_shape,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dir::*;

    fn grid(input: &str) -> Grid {
        input.parse().unwrap()
    }

    const SQUARE: &str = "
.....
.S-7.
.|.|.
.L-J.
.....
    ";

    const COMPLEX: &str = "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
    ";

    #[test]
    fn test_find_start() {
        assert_eq!(find_start(&grid(SQUARE)), Ok((1, 1)));
        assert_eq!(find_start(&grid(COMPLEX)), Ok((2, 0)));
        assert_eq!(find_start(&grid("F7\nLJ")), Err(Error::StartNotFound));
    }

    #[test]
    fn test_first_direction() {
        let g = grid(SQUARE);
        assert_eq!(start_exits(&g, (1, 1)), vec![Right, Down]);
        assert_eq!(infer_first_direction(&g, (1, 1)), Ok(Right));

        let g = grid(COMPLEX);
        assert_eq!(start_exits(&g, (2, 0)), vec![Right, Down]);
    }

    #[test]
    fn test_first_direction_malformed() {
        assert_eq!(
            infer_first_direction(&grid("...\n.S.\n..."), (1, 1)),
            Err(Error::MalformedLoop(Malformed::NoExit))
        );
        assert_eq!(
            infer_first_direction(&grid(".|.\n.S.\n..."), (1, 1)),
            Err(Error::MalformedLoop(Malformed::DeadEnd(Up)))
        );
        // pipes next to the start that point away from it don't count
        assert_eq!(
            infer_first_direction(&grid(".-.\n|S|\n.-."), (1, 1)),
            Err(Error::MalformedLoop(Malformed::NoExit))
        );
    }

    #[test]
    fn test_next_direction() {
        let g = grid(SQUARE);
        assert_eq!(next_direction(&g, (1, 3), Right), Ok(Down));
        assert_eq!(next_direction(&g, (3, 3), Down), Ok(Left));
        assert_eq!(next_direction(&g, (1, 2), Right), Ok(Right));
        assert_eq!(
            next_direction(&g, (1, 2), Down),
            Err(Error::MalformedLoop(Malformed::Disconnected {
                at: (1, 2),
                pipe: Pipe::Horizontal,
                incoming: Down
            }))
        );
    }

    #[test]
    fn test_trace() {
        let g = grid(SQUARE);
        let lp = trace(&g, (1, 1)).unwrap();

        assert_eq!(lp.len(), 8);
        assert_eq!(lp.farthest(), 4);
        assert_eq!(
            lp.path(),
            &[
                (1, 2),
                (1, 3),
                (2, 3),
                (3, 3),
                (3, 2),
                (3, 1),
                (2, 1),
                (1, 1)
            ]
        );
        assert_eq!(lp.step_index((1, 2)), Some(0));
        assert_eq!(lp.step_index((1, 1)), Some(7));
        assert_eq!(lp.step_index((2, 2)), None);
        assert_eq!(lp.start_shape(), Pipe::SouthEast);
        assert_eq!(lp.pipe_at(&g, (1, 1)), Some(Pipe::SouthEast));

        assert!(lp.are_adjacent((1, 2), (1, 3)));
        assert!(lp.are_adjacent((1, 1), (1, 2)));
        assert!(lp.are_adjacent((2, 1), (1, 1)));
        assert!(!lp.are_adjacent((1, 2), (3, 2)));
        assert!(!lp.are_adjacent((1, 2), (0, 2)));

        let lp = trace(&grid(COMPLEX), (2, 0)).unwrap();
        assert_eq!(lp.len(), 16);
        assert_eq!(lp.farthest(), 8);
        assert_eq!(lp.start_shape(), Pipe::SouthEast);
    }

    #[test]
    fn test_trace_skips_stray_pipes() {
        // the `-` left of the start points at it, but leads nowhere
        let g = grid(
            "
.....
-S-7.
.|.|.
.L-J.
    ",
        );
        assert_eq!(start_exits(&g, (1, 1)), vec![Right, Down, Left]);
        assert_eq!(trace(&g, (1, 1)).unwrap().len(), 8);

        let g = grid(
            "
.|...
.S-7.
.|.|.
.L-J.
    ",
        );
        assert_eq!(start_exits(&g, (1, 1)), vec![Up, Right, Down]);
        let lp = trace(&g, (1, 1)).unwrap();
        assert_eq!(lp.len(), 8);
        assert_eq!(lp.path()[0], (1, 2));
    }

    #[test]
    fn test_trace_broken_loop() {
        let g = grid(
            "
.....
.S-7.
.|.|.
.L-..
    ",
        );
        assert_eq!(
            trace(&g, (1, 1)),
            Err(Error::MalformedLoop(Malformed::Disconnected {
                at: (3, 3),
                pipe: Pipe::Ground,
                incoming: Down
            }))
        );

        let g = grid("S-7\n|.|\n|.|");
        assert_eq!(
            trace(&g, (0, 0)),
            Err(Error::MalformedLoop(Malformed::OutOfBounds {
                from: (2, 2),
                dir: Down
            }))
        );
    }
}
