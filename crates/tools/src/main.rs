//! Board complexity report: generate (or re-parse) a board and print
//! the difficulty metrics used when tuning seeds.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tilecrush_core::{Grid, MIN_VALID_MOVES, count_valid_moves, generate};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed to generate and analyze
    #[arg(short, long, default_value_t = 1661)]
    seed: u32,

    /// Analyze a captured board fingerprint (row1|row2|...) instead of
    /// generating from the seed, e.g. for a reported stuck board
    #[arg(short, long)]
    fingerprint: Option<String>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    seed_requested: u32,
    /// None when the board came from a fingerprint, not a seed.
    seed_used: Option<u32>,
    valid_moves: usize,
    move_floor: usize,
    meets_move_floor: bool,
    type_counts: BTreeMap<u8, usize>,
    fingerprint: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (grid, seed_used) = match &args.fingerprint {
        Some(text) => {
            let grid = Grid::parse_fingerprint(text)
                .map_err(|e| anyhow::anyhow!("Failed to parse fingerprint: {:?}", e))?;
            (grid, None)
        }
        None => {
            let board = generate(Some(args.seed));
            (board.grid, Some(board.seed_used))
        }
    };

    let valid_moves = count_valid_moves(&grid);
    let report = Report {
        seed_requested: args.seed,
        seed_used,
        valid_moves,
        move_floor: MIN_VALID_MOVES,
        meets_move_floor: valid_moves >= MIN_VALID_MOVES,
        type_counts: grid.type_counts(),
        fingerprint: grid.fingerprint(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("--- Board complexity report ---");
    println!("Seed requested: {}", report.seed_requested);
    match report.seed_used {
        Some(seed) => println!("Seed used (board): {seed}"),
        None => println!("Seed used (board): n/a (custom fingerprint)"),
    }
    println!("Valid moves (swaps that create a match): {}", report.valid_moves);
    println!("Expected minimum (all seeds): {}", report.move_floor);
    let distribution: Vec<String> =
        report.type_counts.iter().map(|(id, count)| format!("{id}:{count}")).collect();
    println!("Tile types on board (id:count): {}", distribution.join(", "));
    println!("Grid fingerprint (tile ids by row):");
    println!("{}", report.fingerprint);
    println!("--- End report ---");

    Ok(())
}
