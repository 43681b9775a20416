//! Random move selection and random games.
//!
//! A playout plays uniformly random legal moves until the side to move has
//! none left. Used by the demo opponent and for exercising the transition
//! engine over many reachable positions.

use crate::board::{Board, Side};
use crate::constants::MAX_GAME_LEN;
use crate::position::{Move, Position, legal_moves};
use crate::rules::Rules;

/// Pick a uniformly random legal move for `side`, or `None` if there is none.
pub fn random_move(board: &Board, side: Side, rng: &mut fastrand::Rng) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// A finished random game.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Final position (terminal unless the length cap was hit)
    pub position: Position,
    /// Moves played, in order
    pub moves: Vec<Move>,
}

/// Play random moves from `start` until the game ends.
pub fn random_playout(rules: &Rules, start: Position, rng: &mut fastrand::Rng) -> Playout {
    let mut pos = start;
    let mut moves = Vec::new();

    while moves.len() < MAX_GAME_LEN {
        let Some(mv) = random_move(&pos.board, pos.to_move, rng) else {
            break;
        };
        pos = pos
            .play(rules, mv)
            .expect("random_move picked an illegal move");
        moves.push(mv);
    }

    Playout { position: pos, moves }
}
