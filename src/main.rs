use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::exit,
    time::Instant,
};

use clap::Parser;
use pipemaze::{Part, Puzzle};
use serde::Serialize;

#[derive(Parser)]
#[command(about = "Trace the pipe loop through `S` and count the cells it encloses")]
struct Cli {
    /// Only solve this part (1: farthest point on the loop, 2: enclosed cells)
    #[arg(short, long, value_parser = parse_part)]
    part: Option<Part>,

    /// Print the grid, with the loop drawn and each other cell marked inside or outside
    #[arg(long)]
    render: bool,

    /// Print the answers as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    /// Print out how long parsing and solving took
    timings: bool,

    /// Puzzle input, read from stdin if it is piped, and `input.txt` otherwise
    file: Option<PathBuf>,
}

fn parse_part(s: &str) -> Result<Part, String> {
    let n: u8 = s.parse().map_err(|_| format!("not a part number: {s}"))?;
    Part::try_from(n)
}

#[derive(Serialize)]
struct Answer {
    part: Part,
    answer: usize,
}

fn read_input(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(file) => fs::read_to_string(file),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut str = String::new();
            io::stdin().read_to_string(&mut str)?;
            Ok(str)
        }
        None => fs::read_to_string("input.txt"),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let input = match read_input(cli.file) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Could not read input: {err}");
            exit(1);
        }
    };

    let t0 = Instant::now();
    let puzzle = match Puzzle::new(&input) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Could not solve: {err}");
            exit(2);
        }
    };
    if cli.timings {
        eprintln!("Traced in {:?}", t0.elapsed());
    }

    if cli.render {
        print!("{}", puzzle.render());
    }

    let parts = match cli.part {
        Some(part) => vec![part],
        None => vec![Part::One, Part::Two],
    };

    let t0 = Instant::now();
    let answers = parts
        .into_iter()
        .map(|part| Answer {
            part,
            answer: puzzle.answer(part),
        })
        .collect::<Vec<_>>();
    if cli.timings {
        eprintln!("Solved in {:?}", t0.elapsed());
    }

    if cli.json {
        match serde_json::to_string(&answers) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Could not serialize answers: {err}");
                exit(3);
            }
        }
        return;
    }

    for Answer { part, answer } in answers {
        match part {
            Part::One => println!("First part: {answer}"),
            Part::Two => println!("Bonus: {answer}"),
        }
    }
}
