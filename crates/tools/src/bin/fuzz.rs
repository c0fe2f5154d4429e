//! Random-play fuzz harness: deal boards across the seed pool, play
//! random swaps, and assert the engine invariants after every step.

use anyhow::Result;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tilecrush_core::moves::valid_moves;
use tilecrush_core::{MIN_VALID_MOVES, Grid, Pos, Round, SwapOutcome, find_matches, generate};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 25)]
    rounds: u32,
    /// Swap attempts per round (valid and deliberately invalid mixed)
    #[arg(long, default_value_t = 40)]
    swaps: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_adjacent_pair(rng: &mut ChaCha8Rng) -> (Pos, Pos) {
    let row = rng.next_u64() as usize % 6;
    let col = rng.next_u64() as usize % 6;
    let a = Pos::new(row, col);
    let b = if col + 1 < 6 && (row + 1 >= 6 || rng.next_u64() % 2 == 0) {
        Pos::new(row, col + 1)
    } else if row + 1 < 6 {
        Pos::new(row + 1, col)
    } else {
        // bottom-right corner: only left and up remain
        Pos::new(row, col - 1)
    };
    (a, b)
}

fn assert_board_invariants(round: &Round, context: &str) {
    assert!(find_matches(round.grid()).is_empty(), "{context}: board left unsettled");
    assert!(round.grid().is_coherent(), "{context}: tile positions out of sync");
    assert_eq!(round.grid().type_counts().values().sum::<usize>(), 36, "{context}: holes");
    for (id, _) in round.grid().type_counts() {
        assert!(
            round.active_type_ids().contains(&id),
            "{context}: id {id} leaked in from outside the active set"
        );
    }
    let reparsed = Grid::parse_fingerprint(&round.grid().fingerprint())
        .expect("fingerprints must always parse");
    assert_eq!(reparsed.fingerprint(), round.grid().fingerprint(), "{context}: round trip");
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Fuzzing {} rounds of {} swaps from driver seed {}...", args.rounds, args.swaps, args.seed);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut cleared_total = 0_u64;
    let mut reverted_total = 0_u64;
    let mut degraded_boards = 0_u32;

    for round_index in 0..args.rounds {
        let board_seed = 1_000 + (rng.next_u64() % 1_000) as u32;
        let board = generate(Some(board_seed));

        assert!(find_matches(&board.grid).is_empty(), "seed {board_seed}: pre-matched deal");
        assert_eq!(
            board.meets_move_floor,
            board.valid_moves >= MIN_VALID_MOVES,
            "seed {board_seed}: degraded deal not flagged"
        );
        if !board.meets_move_floor {
            degraded_boards += 1;
        }

        let mut round = Round::from_board(board);
        assert_board_invariants(&round, "after deal");

        for swap_index in 0..args.swaps {
            let context = format!("round {round_index} swap {swap_index}");

            // Mostly take real moves; every fourth attempt is a random
            // adjacent pair to exercise the revert path.
            let pair = if swap_index % 4 == 3 {
                random_adjacent_pair(&mut rng)
            } else {
                let moves = valid_moves(round.grid());
                if moves.is_empty() {
                    break; // dead board, next round
                }
                choose(&mut rng, &moves)
            };

            match round.swap(pair.0, pair.1).expect("adjacent in-bounds swap must be legal") {
                SwapOutcome::Cleared { tiles_cleared, .. } => {
                    assert!(tiles_cleared >= 3, "{context}: cleared fewer than a full run");
                    cleared_total += tiles_cleared as u64;
                }
                SwapOutcome::Reverted => reverted_total += 1,
            }
            assert_board_invariants(&round, &context);
        }
    }

    println!(
        "Fuzzing completed: {cleared_total} tiles cleared, {reverted_total} reverts, {degraded_boards} degraded deals."
    );
    Ok(())
}
