use crate::{
    grid::Grid,
    interior::{Cell, Classification},
    pipe::Pipe,
    tracer::Loop,
};

fn box_char(pipe: Pipe) -> char {
    match pipe {
        Pipe::Vertical => '│',
        Pipe::Horizontal => '─',
        Pipe::SouthEast => '┌',
        Pipe::SouthWest => '┐',
        Pipe::NorthEast => '└',
        Pipe::NorthWest => '┘',
        Pipe::Ground => '.',
        Pipe::Start => 'S',
    }
}

/// Draws the loop with box-drawing characters, and every other cell as `I` or `O`
pub fn render(grid: &Grid, lp: &Loop, classification: &Classification) -> String {
    let mut out = String::with_capacity((grid.width * 3 + 1) * grid.height);

    for (y, row) in classification.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            out.push(match cell {
                Cell::Loop => lp
                    .pipe_at(grid, (y as i64, x as i64))
                    .map(box_char)
                    .unwrap_or('?'),
                Cell::Inside => 'I',
                Cell::Outside => 'O',
            });
        }
        out.push('\n');
    }

    out
}

#[test]
fn test_render() {
    use crate::{interior::classify, tracer::trace};

    let grid: Grid = "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
    "
    .parse()
    .unwrap();

    let lp = trace(&grid, (2, 0)).unwrap();

    assert_eq!(
        render(&grid, &lp, &classify(&grid, &lp)),
        "\
OO┌┐O
O┌┘│O
┌┘I└┐
│┌──┘
└┘OOO
"
    );
}
