//! Property tests for piece movement (pure domain).
//!
//! Rules under test:
//! - A legal move only ever increases a piece's position
//! - A refused move leaves the player untouched
//! - Inside the home stretch only an exact roll is legal
//! - The predicates agree with what `move_piece` actually accepts

use proptest::prelude::*;

use crate::domain::dice::Dice;
use crate::domain::player::Player;
use crate::domain::rules::{PIECE_IDS, TRACK_END};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::errors::domain::DomainError;

fn player_at(layout: [u8; 4], roll: Option<u8>) -> Player {
    let mut player = Player::new("red", Dice::scripted([1]).unwrap());
    for (id, position) in PIECE_IDS.into_iter().zip(layout) {
        player.place_piece(id, position);
    }
    player.set_pending_roll(roll);
    player
}

fn positions(player: &Player) -> Vec<u8> {
    player.pieces().iter().map(|p| p.position()).collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: moves are monotone and consume exactly the roll
    #[test]
    fn prop_move_never_goes_backwards(
        layout in test_gens::layout(),
        id in test_gens::piece_id(),
        roll in test_gens::roll(),
    ) {
        let mut player = player_at(layout, Some(roll));
        let before = player.piece(id).unwrap().position();

        match player.move_piece(id) {
            Ok(()) => {
                let after = player.piece(id).unwrap().position();
                prop_assert_eq!(after, before + roll);
                prop_assert_eq!(player.pending_roll(), None);
            }
            Err(_) => {
                prop_assert_eq!(positions(&player), layout.to_vec());
                prop_assert_eq!(player.pending_roll(), Some(roll));
            }
        }
    }

    /// Property: home stretch accepts only the exact roll
    #[test]
    fn prop_home_stretch_requires_exact_roll(
        position in (TRACK_END + 1)..=62u8,
        roll in test_gens::roll(),
    ) {
        let mut player = player_at([position, 0, 0, 0], Some(roll));
        let needed = 63 - position;
        let result = player.move_piece(1);

        if roll == needed {
            prop_assert!(result.is_ok());
            prop_assert!(player.piece(1).unwrap().is_in_goal());
        } else {
            prop_assert_eq!(
                result,
                Err(DomainError::OvershootViolation { piece: 1, steps_until_goal: needed, roll })
            );
        }
    }

    /// Property: can_move_any_pieces is true iff some piece would accept the move
    #[test]
    fn prop_can_move_matches_move_piece(
        layout in test_gens::layout(),
        roll in test_gens::roll(),
    ) {
        let player = player_at(layout, Some(roll));
        let any_accepts = PIECE_IDS.iter().any(|&id| {
            let mut trial = player.clone();
            trial.move_piece(id).is_ok()
        });
        prop_assert_eq!(player.can_move_any_pieces(roll), any_accepts);
    }

    /// Property: a piece can be put in play iff a six is rolled and a yard piece exists
    #[test]
    fn prop_put_in_play_matches_entry(
        layout in test_gens::layout(),
        roll in test_gens::roll(),
    ) {
        let player = player_at(layout, Some(roll));
        let yard_piece = player.pieces().iter().find(|p| p.is_in_yard()).map(|p| p.id());
        let expected = roll == 6 && yard_piece.is_some();
        prop_assert_eq!(player.can_put_piece_in_play(roll), expected);

        if let Some(id) = yard_piece {
            let mut trial = player.clone();
            prop_assert_eq!(trial.move_piece_onto_board(id).is_ok(), roll == 6);
        }
    }

    /// Property: won() iff every piece is past the home stretch
    #[test]
    fn prop_won_iff_all_in_goal(layout in test_gens::layout()) {
        let player = player_at(layout, None);
        prop_assert_eq!(player.won(), layout.iter().all(|&p| p > 62));
    }

    /// Property: moving a yard or goal piece is always refused
    #[test]
    fn prop_inactive_pieces_never_move(
        id in test_gens::piece_id(),
        in_goal in any::<bool>(),
        roll in test_gens::roll(),
    ) {
        let position = if in_goal { 63 } else { 0 };
        let mut layout = [10u8; 4];
        layout[(id - 1) as usize] = position;
        let mut player = player_at(layout, Some(roll));

        prop_assert_eq!(
            player.move_piece(id),
            Err(DomainError::IllegalPieceState { piece: id, position })
        );
    }

    /// Property: a track move from an active square always succeeds before the home stretch
    #[test]
    fn prop_track_moves_always_legal(
        position in 1u8..=TRACK_END,
        roll in test_gens::roll(),
    ) {
        let mut player = player_at([position, 0, 0, 0], Some(roll));
        prop_assert!(player.move_piece(1).is_ok());
        prop_assert!(player.piece(1).unwrap().position() <= 62);
    }

    /// Property: position and distance to goal always add up to the goal square
    #[test]
    fn prop_steps_until_goal_complements_position(position in test_gens::active_position()) {
        let player = player_at([position, 0, 0, 0], None);
        let piece = player.piece(1).unwrap();
        prop_assert_eq!(piece.position() + piece.steps_until_goal(), 63);
        prop_assert!(!piece.is_in_yard());
        prop_assert!(!piece.is_in_goal());
    }
}
