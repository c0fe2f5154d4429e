use tilecrush_core::moves::valid_moves;
use tilecrush_core::{Pos, Round, SwapOutcome, find_matches, generate};

#[test]
fn a_full_round_of_play_keeps_every_invariant() {
    let board = generate(Some(1_500));
    let expected_seed = board.seed_used;
    let active = board.active_type_ids.clone();
    let mut round = Round::from_board(board);
    let mut last_score = 0_u32;

    for step in 0..20 {
        let moves = valid_moves(round.grid());
        let Some(&(a, b)) = moves.first() else {
            break; // board went dead; nothing left to verify
        };

        let outcome = round.swap(a, b).expect("move taken from valid_moves must apply");
        assert!(
            matches!(outcome, SwapOutcome::Cleared { .. }),
            "step {step}: a counted valid move must clear, got {outcome:?}"
        );

        assert!(find_matches(round.grid()).is_empty(), "step {step}: board left unsettled");
        assert!(round.grid().is_coherent(), "step {step}: tile positions out of sync");
        assert_eq!(
            round.grid().type_counts().values().sum::<usize>(),
            36,
            "step {step}: refill left holes"
        );
        for (id, _) in round.grid().type_counts() {
            assert!(active.contains(&id), "step {step}: id {id} leaked in from outside");
        }

        assert!(round.score() > last_score, "step {step}: clearing must raise the score");
        last_score = round.score();
    }

    assert_eq!(round.seed_used(), expected_seed);
    assert!(last_score > 0, "seed 1500 should allow at least one scoring swap");
}

#[test]
fn rejected_swaps_leave_the_round_untouched() {
    let mut round = Round::new(Some(1_500));
    let before = round.grid().fingerprint();

    assert!(round.swap(Pos::new(0, 0), Pos::new(2, 2)).is_err());
    assert_eq!(round.grid().fingerprint(), before);
    assert_eq!(round.score(), 0);
}
