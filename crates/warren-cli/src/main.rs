//! Command-line driver: parse dimensions, carve one maze, validate it,
//! print it.
//!
//! Exit codes: 0 on success, 1 for configuration or validation failures,
//! 2 for usage errors. The core performs no retries; rerunning on a
//! validation failure is the operator's call.

use std::env;
use std::process::ExitCode;

use warren_carve::Carver;
use warren_check::{fully_traversable, no_free_clusters};
use warren_grid::Dimensions;

fn usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} WIDTH HEIGHT\n\n  \
         WIDTH   width of the maze, at least 3\n  \
         HEIGHT  height of the maze, at least 3"
    );
}

fn parse_dimensions(width: &str, height: &str) -> Result<Dimensions, String> {
    let width = width
        .parse::<u32>()
        .map_err(|_| format!("WIDTH must be an unsigned integer, got {width:?}"))?;
    let height = height
        .parse::<u32>()
        .map_err(|_| format!("HEIGHT must be an unsigned integer, got {height:?}"))?;
    Dimensions::new(width, height).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        usage(args.first().map_or("warren", String::as_str));
        return ExitCode::from(2);
    }

    let dims = match parse_dimensions(&args[1], &args[2]) {
        Ok(dims) => dims,
        Err(message) => {
            eprintln!("ERROR: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut carver = Carver::new(dims);
    if let Err(err) = carver.generate() {
        eprintln!("ERROR: {err}");
        return ExitCode::FAILURE;
    }

    let grid = carver.grid();
    let mut sampler = carver.validation_sampler();
    let mut failed = false;
    if let Err(err) = no_free_clusters(grid) {
        eprintln!("NOK: {err}");
        failed = true;
    }
    if let Err(err) = fully_traversable(grid, &mut sampler) {
        eprintln!("NOK: {err}");
        failed = true;
    }
    if failed {
        eprintln!("{grid}");
        return ExitCode::FAILURE;
    }

    println!("{grid}");
    ExitCode::SUCCESS
}
