//! Full-match tests: the exhaustive side never loses.

use tactix::orchestrator::{Match, MatchEvent};
use tactix::players::{HeuristicSource, PerfectSource, RandomSource};
use tactix_core::{Mark, Outcome};

#[test]
fn test_perfect_vs_perfect_is_a_draw() {
    let mut game = Match::new(
        Box::new(PerfectSource::new("hard")),
        Box::new(PerfectSource::new("hard")),
    );
    assert_eq!(game.play(|_| {}).unwrap(), Outcome::Draw);
}

#[test]
fn test_perfect_as_x_never_loses_to_random() {
    for seed in 0..6 {
        let mut game = Match::new(
            Box::new(PerfectSource::new("hard")),
            Box::new(RandomSource::seeded("easy", seed)),
        );
        let outcome = game.play(|_| {}).unwrap();
        assert_ne!(outcome, Outcome::Won(Mark::O), "seed {seed}");
    }
}

#[test]
fn test_perfect_as_o_never_loses_to_random() {
    for seed in 0..6 {
        let mut game = Match::new(
            Box::new(RandomSource::seeded("easy", seed)),
            Box::new(PerfectSource::new("hard")),
        );
        let outcome = game.play(|_| {}).unwrap();
        assert_ne!(outcome, Outcome::Won(Mark::X), "seed {seed}");
    }
}

#[test]
fn test_perfect_never_loses_to_heuristic() {
    for seed in 0..3 {
        let mut game = Match::new(
            Box::new(PerfectSource::new("hard")),
            Box::new(HeuristicSource::seeded("medium", seed)),
        );
        let outcome = game.play(|_| {}).unwrap();
        assert_ne!(outcome, Outcome::Won(Mark::O), "seed {seed}");

        let mut game = Match::new(
            Box::new(HeuristicSource::seeded("medium", seed)),
            Box::new(PerfectSource::new("hard")),
        );
        let outcome = game.play(|_| {}).unwrap();
        assert_ne!(outcome, Outcome::Won(Mark::X), "seed {seed}");
    }
}

#[test]
fn test_match_renders_after_every_move_and_at_the_end() {
    let mut boards = 0;
    let mut over = 0;
    let mut game = Match::new(
        Box::new(PerfectSource::new("hard")),
        Box::new(PerfectSource::new("hard")),
    );
    let outcome = game
        .play(|event| match event {
            MatchEvent::Thinking { .. } => {}
            MatchEvent::Moved { board, .. } => {
                boards += 1;
                // Snapshot is consistent with the move count so far.
                assert_eq!(9 - board.empty_cells().count(), boards);
            }
            MatchEvent::Over { .. } => over += 1,
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(boards, 9, "a drawn perfect game fills the board");
    assert_eq!(over, 1);
}
