use crate::config::RulesConfig;
use crate::domain::fixtures::DominoFixtures as F;
use crate::domain::test_gens::trick_from;
use crate::domain::tricks::check_play;
use crate::domain::{
    lead_suit_of, legal_suit_followers, play_domino, validate_play, winner_of, DominoSuit,
    PlayAttempt, Seat, Trick,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;

fn attempt(player: &str, seat: Seat, token: &str) -> PlayAttempt {
    PlayAttempt {
        player_id: player.to_string(),
        position: seat,
        domino: F::one(token),
    }
}

#[test]
fn double_trump_wins_regardless_of_other_ends() {
    let trick = trick_from(&F::parse_hardcoded(&["6-6", "6-2", "4-1", "0-0"]));
    assert_eq!(winner_of(&trick, DominoSuit::Sixes).unwrap(), "p1");
}

#[test]
fn empty_trick_has_no_winner() {
    let err = winner_of(&Trick::new("t0"), DominoSuit::Sixes).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::EmptyTrick, _)
    ));
    assert_eq!(err.code(), ErrorCode::EmptyTrick);
}

#[test]
fn highest_trump_wins_over_lead() {
    // Lead 6-5 (sixes), east trumps with 2-0, west overtrumps with 2-1.
    let trick = trick_from(&F::parse_hardcoded(&["6-5", "2-0", "6-4", "2-1"]));
    assert_eq!(winner_of(&trick, DominoSuit::Twos).unwrap(), "p4");
}

#[test]
fn no_trump_highest_lead_suit_wins() {
    // Trump blanks; lead 5-3 is fives. 6-1 is higher plain but off-suit.
    let trick = trick_from(&F::parse_hardcoded(&["5-3", "6-1", "5-4", "5-2"]));
    assert_eq!(lead_suit_of(&trick, DominoSuit::Blanks), Some(DominoSuit::Fives));
    assert_eq!(winner_of(&trick, DominoSuit::Blanks).unwrap(), "p3");
}

#[test]
fn in_progress_trick_reports_current_leader() {
    let trick = trick_from(&F::parse_hardcoded(&["4-3"]));
    assert_eq!(winner_of(&trick, DominoSuit::Sixes).unwrap(), "p1");
}

#[test]
fn doubles_trump_lead_uses_higher_pip() {
    let trick = trick_from(&F::parse_hardcoded(&["5-2"]));
    assert_eq!(lead_suit_of(&trick, DominoSuit::Doubles), Some(DominoSuit::Fives));

    // 2-1 occupies twos, not fives, so it cannot win; 5-0 follows fives.
    let trick = trick_from(&F::parse_hardcoded(&["5-2", "2-1", "5-0", "6-3"]));
    assert_eq!(winner_of(&trick, DominoSuit::Doubles).unwrap(), "p1");

    let trick = trick_from(&F::parse_hardcoded(&["5-2", "1-1", "5-3", "6-3"]));
    assert_eq!(winner_of(&trick, DominoSuit::Doubles).unwrap(), "p2");
}

#[test]
fn lead_suit_none_when_empty() {
    assert_eq!(lead_suit_of(&Trick::new("t"), DominoSuit::Sixes), None);
}

#[test]
fn empty_trick_all_hand_legal() {
    let hand = F::parse_hardcoded(&["6-6", "3-1", "0-0"]);
    assert_eq!(legal_suit_followers(&hand, &Trick::new("t"), DominoSuit::Sixes), hand);
}

#[test]
fn must_follow_when_able() {
    let trick = trick_from(&F::parse_hardcoded(&["5-3"]));
    let hand = F::parse_hardcoded(&["5-1", "6-2", "5-5", "4-0"]);
    let legal = legal_suit_followers(&hand, &trick, DominoSuit::Blanks);
    // 5-5 is fives, 5-1 is fives, 4-0 is trump (blanks), 6-2 is sixes.
    assert_eq!(legal, F::parse_hardcoded(&["5-1", "5-5"]));
}

#[test]
fn void_in_lead_may_sluff_or_trump() {
    let trick = trick_from(&F::parse_hardcoded(&["5-3"]));
    let hand = F::parse_hardcoded(&["6-2", "4-0"]);
    assert_eq!(legal_suit_followers(&hand, &trick, DominoSuit::Blanks), hand);
}

#[test]
fn trump_carrying_lead_pip_does_not_follow_that_pip() {
    // Trump fours: 5-4 is trump, so it does not count as a five.
    let trick = trick_from(&F::parse_hardcoded(&["5-3"]));
    let hand = F::parse_hardcoded(&["5-4", "1-0"]);
    assert_eq!(legal_suit_followers(&hand, &trick, DominoSuit::Fours), hand);
}

#[test]
fn play_domino_full_trick() {
    let config = RulesConfig::default();
    let trump = DominoSuit::Sixes;
    let mut trick = Trick::new("t1");

    let plays = [
        ("north", Seat::North, "6-6", vec!["6-6", "1-0"]),
        ("east", Seat::East, "6-2", vec!["6-2", "3-3"]),
        ("south", Seat::South, "4-1", vec!["4-1", "5-5"]),
        ("west", Seat::West, "0-0", vec!["0-0", "2-1"]),
    ];
    for (player, seat, token, hand) in plays {
        let hand = F::parse_hardcoded(&hand);
        trick = play_domino(&trick, &hand, attempt(player, seat, token), trump, &config).unwrap();
    }

    assert_eq!(trick.lead_suit, Some(DominoSuit::Sixes));
    assert_eq!(trick.winner.as_deref(), Some("north"));
    let seq: Vec<u8> = trick.plays.iter().map(|p| p.sequence_index).collect();
    assert_eq!(seq, vec![0, 1, 2, 3]);
}

#[test]
fn play_domino_rejections() {
    let config = RulesConfig::default();
    let trump = DominoSuit::Blanks;
    let hand = F::parse_hardcoded(&["5-3", "5-1", "6-2"]);
    let trick = play_domino(
        &Trick::new("t"),
        &hand,
        attempt("a", Seat::North, "5-3"),
        trump,
        &config,
    )
    .unwrap();
    assert_eq!(trick.winner, None);

    let err = check_play(&trick, &hand, &attempt("a", Seat::North, "5-1"), trump, &config)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::OutOfTurn);

    let east_hand = F::parse_hardcoded(&["5-2", "6-1"]);
    let err = check_play(&trick, &east_hand, &attempt("b", Seat::East, "4-4"), trump, &config)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DominoNotInHand);

    let err = check_play(&trick, &east_hand, &attempt("b", Seat::East, "6-1"), trump, &config)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MustFollowSuit);

    assert!(check_play(&trick, &east_hand, &attempt("b", Seat::East, "5-2"), trump, &config).is_ok());
}

#[test]
fn full_trick_rejects_more_plays() {
    let config = RulesConfig::default();
    let trick = trick_from(&F::parse_hardcoded(&["6-6", "6-2", "4-1", "0-0"]));
    let hand = F::parse_hardcoded(&["3-3"]);
    let res = validate_play(&trick, &hand, &attempt("p5", Seat::North, "3-3"), DominoSuit::Sixes, &config);
    assert_eq!(res.error(), Some(ErrorCode::TrickComplete));
}

#[test]
fn two_player_trick_completes_at_two() {
    let config = RulesConfig::default().with_player_count(2);
    let trump = DominoSuit::Ones;
    let trick = play_domino(
        &Trick::new("t"),
        &F::parse_hardcoded(&["6-5"]),
        attempt("a", Seat::North, "6-5"),
        trump,
        &config,
    )
    .unwrap();
    let trick = play_domino(
        &trick,
        &F::parse_hardcoded(&["1-0"]),
        attempt("b", Seat::South, "1-0"),
        trump,
        &config,
    )
    .unwrap();
    assert_eq!(trick.winner.as_deref(), Some("b"));
}

#[test]
fn trumping_in_warns() {
    let config = RulesConfig::default();
    let trick = trick_from(&F::parse_hardcoded(&["5-3"]));
    let hand = F::parse_hardcoded(&["6-2", "4-0"]);
    let res = validate_play(&trick, &hand, &attempt("p2", Seat::East, "4-0"), DominoSuit::Blanks, &config);
    assert!(res.is_valid);
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn trick_wire_shape() {
    let trick = trick_from(&F::parse_hardcoded(&["6-6"]));
    let v = serde_json::to_value(&trick).unwrap();
    assert_eq!(v["id"], "t");
    assert_eq!(v["plays"][0]["playerId"], "p1");
    assert_eq!(v["plays"][0]["position"], "north");
    assert_eq!(v["plays"][0]["sequenceIndex"], 0);
    assert_eq!(v["plays"][0]["domino"]["id"], "6-6");
    let back: Trick = serde_json::from_value(v).unwrap();
    assert_eq!(back, trick);
}
