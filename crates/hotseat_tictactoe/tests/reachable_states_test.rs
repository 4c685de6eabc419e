//! Exhaustive checks over every state reachable from a new game.

use hotseat_tictactoe::{
    GameState, GameStateInvariants, GameStatus, InvariantSet, MoveError, Player, evaluate_status,
    reset,
};
use std::collections::HashSet;

/// Collects every state reachable through legal play.
fn reachable_states() -> HashSet<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![reset()];

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        for pos in state.valid_moves() {
            stack.push(state.place(pos));
        }
    }

    seen
}

#[test]
fn test_reachable_state_count() {
    // 5478 distinct legal positions, counting the empty board.
    assert_eq!(reachable_states().len(), 5478);
}

#[test]
fn test_every_reachable_state_is_consistent() {
    for state in reachable_states() {
        assert!(
            GameStateInvariants::check_all(&state).is_ok(),
            "Invariant violated for\n{}",
            state.board()
        );
        assert_eq!(*state.status(), evaluate_status(state.board()));
    }
}

#[test]
fn test_exactly_one_status_and_draw_only_when_full() {
    for state in reachable_states() {
        match state.status() {
            GameStatus::Ongoing => {
                assert!(state.move_count() < 9);
                assert!(!state.valid_moves().is_empty());
            }
            GameStatus::Won { player, line } => {
                for pos in line.positions() {
                    assert_eq!(state.square(pos).player(), Some(*player));
                }
            }
            GameStatus::Draw => assert_eq!(state.move_count(), 9),
        }
    }
}

#[test]
fn test_accepted_moves_add_one_mark_and_flip_turn() {
    for state in reachable_states() {
        for pos in state.valid_moves() {
            let next = state.place(pos);
            assert_eq!(next.move_count(), state.move_count() + 1);
            assert_eq!(next.square(pos).player(), Some(state.active_player()));
            assert_eq!(next.active_player(), state.active_player().opponent());
        }
    }
}

#[test]
fn test_rejected_moves_leave_state_unchanged() {
    for state in reachable_states() {
        for index in 0..10 {
            let legal = !state.is_over()
                && state
                    .board()
                    .get_index(index)
                    .is_some_and(|s| s.is_empty());
            if legal {
                continue;
            }
            assert_eq!(state.apply_move(index), state);
            assert!(state.try_apply_move(index).is_err());
        }
    }
}

#[test]
fn test_terminal_states_reject_everything() {
    for state in reachable_states().into_iter().filter(GameState::is_over) {
        for index in 0..9 {
            assert_eq!(state.try_apply_move(index), Err(MoveError::GameOver));
        }
    }
}

#[test]
fn test_winner_made_the_last_move() {
    for state in reachable_states() {
        if let Some(winner) = state.winner() {
            // The winner made the last move, so the turn has passed to the other player.
            assert_eq!(state.active_player(), winner.opponent());
            let expected = if state.move_count() % 2 == 1 {
                Player::X
            } else {
                Player::O
            };
            assert_eq!(winner, expected);
        }
    }
}
