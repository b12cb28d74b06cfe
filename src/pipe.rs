use crate::Pos;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

use Dir::*;

impl Dir {
    /// Clockwise, starting at the top. Start-exit inference checks neighbors in this order.
    pub const ALL: [Dir; 4] = [Up, Right, Down, Left];

    pub fn opposite(self) -> Dir {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }

    pub fn step(self, (y, x): Pos) -> Pos {
        match self {
            Up => (y - 1, x),
            Right => (y, x + 1),
            Down => (y + 1, x),
            Left => (y, x - 1),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `F`
    SouthEast,
    /// `7`
    SouthWest,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `.`
    Ground,
    /// `S`, whose actual shape has to be inferred from its neighbors
    Start,
}

impl Pipe {
    pub fn from_char(c: char) -> Option<Pipe> {
        Some(match c {
            '|' => Pipe::Vertical,
            '-' => Pipe::Horizontal,
            'F' => Pipe::SouthEast,
            '7' => Pipe::SouthWest,
            'L' => Pipe::NorthEast,
            'J' => Pipe::NorthWest,
            '.' => Pipe::Ground,
            'S' => Pipe::Start,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        match self {
            Pipe::Vertical => '|',
            Pipe::Horizontal => '-',
            Pipe::SouthEast => 'F',
            Pipe::SouthWest => '7',
            Pipe::NorthEast => 'L',
            Pipe::NorthWest => 'J',
            Pipe::Ground => '.',
            Pipe::Start => 'S',
        }
    }

    pub fn connections(self) -> &'static [Dir] {
        match self {
            Pipe::Vertical => &[Up, Down],
            Pipe::Horizontal => &[Left, Right],
            Pipe::SouthEast => &[Down, Right],
            Pipe::SouthWest => &[Down, Left],
            Pipe::NorthEast => &[Up, Right],
            Pipe::NorthWest => &[Up, Left],
            Pipe::Ground | Pipe::Start => &[],
        }
    }

    pub fn connects(self, dir: Dir) -> bool {
        self.connections().contains(&dir)
    }

    /// The pipe connecting exactly `a` and `b` (in any order), if there is one
    pub fn from_connections(a: Dir, b: Dir) -> Option<Pipe> {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        match (a, b) {
            (Up, Down) => Some(Pipe::Vertical),
            (Right, Left) => Some(Pipe::Horizontal),
            (Right, Down) => Some(Pipe::SouthEast),
            (Down, Left) => Some(Pipe::SouthWest),
            (Up, Right) => Some(Pipe::NorthEast),
            (Up, Left) => Some(Pipe::NorthWest),
            _ => None,
        }
    }

    /// Given that we entered this pipe moving in direction `incoming`, which way do we leave?
    pub fn exit(self, incoming: Dir) -> Option<Dir> {
        match self.connections() {
            &[a, b] if a == incoming.opposite() => Some(b),
            &[a, b] if b == incoming.opposite() => Some(a),
            _ => None,
        }
    }
}

#[test]
fn test_opposites() {
    for dir in Dir::ALL {
        assert_ne!(dir, dir.opposite());
        assert_eq!(dir, dir.opposite().opposite());
        assert_eq!(dir.opposite().step(dir.step((3, 7))), (3, 7));
    }
}

#[test]
fn test_connection_table() {
    for c in "|-F7LJ".chars() {
        let pipe = Pipe::from_char(c).unwrap();
        let &[a, b] = pipe.connections() else {
            panic!("{c} should connect two directions");
        };
        assert_eq!(Pipe::from_connections(a, b), Some(pipe));
        assert_eq!(Pipe::from_connections(b, a), Some(pipe));
        assert_eq!(pipe.to_char(), c);
    }

    assert_eq!(Pipe::SouthEast.connections(), &[Down, Right]);
    assert!(Pipe::Ground.connections().is_empty());
    assert!(Pipe::Start.connections().is_empty());
    assert_eq!(Pipe::from_char('x'), None);
    assert_eq!(Pipe::from_connections(Up, Up), None);
}

#[test]
fn test_exit() {
    // walking right into a `7` turns us downwards
    assert_eq!(Pipe::SouthWest.exit(Right), Some(Down));
    assert_eq!(Pipe::SouthWest.exit(Up), Some(Left));
    assert_eq!(Pipe::Vertical.exit(Down), Some(Down));
    assert_eq!(Pipe::Vertical.exit(Right), None);
    assert_eq!(Pipe::Ground.exit(Up), None);
}
