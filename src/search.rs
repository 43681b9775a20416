//! Fixed-depth minimax search.
//!
//! This module implements a plain minimax search with:
//! - No pruning: every legal move is expanded down to the depth limit
//! - Final-score evaluation at both terminal positions and the cut-off
//! - A fixed perspective for the whole search, whoever is to move below
//! - Deterministic tie-breaking: the later (higher-index) move wins ties
//!
//! Boards are values, so each recursive call owns its child board and sibling
//! branches never share state. With the `parallel` feature the root moves are
//! searched on the rayon thread pool; results are folded in move order so the
//! answer matches the sequential search exactly.

use tracing::debug;

use crate::board::{Board, Side};
use crate::eval::{ScoreKind, evaluate};
use crate::position::{Move, is_terminal, legal_moves};
use crate::rules::Rules;

/// Result of searching a root position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Chosen move (`None` when the root has no legal move)
    pub best: Option<Move>,
    /// Minimax score of the chosen move
    pub score: i32,
    /// Minimax score of every root move, in ascending move order
    pub children: Vec<(Move, i32)>,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Search `board` with `side` to move and return the best move and its score
/// as seen by `perspective`, under the default rules.
///
/// Returns `(None, score)` when `depth < 0` or `side` has no legal move.
pub fn best_move(board: &Board, side: Side, depth: i32, perspective: Side) -> (Option<Move>, i32) {
    best_move_with(&Rules::default(), board, side, depth, perspective)
}

/// [`best_move`] under an explicit rule set.
pub fn best_move_with(
    rules: &Rules,
    board: &Board,
    side: Side,
    depth: i32,
    perspective: Side,
) -> (Option<Move>, i32) {
    let mut nodes = 0;
    minimax(rules, board, side, depth, perspective, &mut nodes)
}

fn minimax(
    rules: &Rules,
    board: &Board,
    side: Side,
    depth: i32,
    perspective: Side,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;
    if depth < 0 || is_terminal(board, side) {
        return (None, evaluate(board, perspective, ScoreKind::Final));
    }

    let maximise = side == perspective;
    let mut best = (None, if maximise { i32::MIN } else { i32::MAX });

    for mv in legal_moves(board, side) {
        let (child, next) = rules
            .apply_move(board, mv, side)
            .expect("legal_moves yielded a move the rules reject");
        let (_, score) = minimax(rules, &child, next, depth - 1, perspective, nodes);
        if replaces(maximise, score, best.1) {
            best = (Some(mv), score);
        }
    }

    best
}

/// Later moves win ties in both directions.
#[inline]
fn replaces(maximise: bool, score: i32, current: i32) -> bool {
    if maximise {
        score >= current
    } else {
        score <= current
    }
}

/// Search the root for `side`, scoring from `side`'s own perspective, and
/// report every root move's score along with the choice.
pub fn analyze(rules: &Rules, board: &Board, side: Side, depth: i32) -> SearchReport {
    if depth < 0 || is_terminal(board, side) {
        return SearchReport {
            best: None,
            score: evaluate(board, side, ScoreKind::Final),
            children: Vec::new(),
            nodes: 1,
        };
    }

    let scored = root_children(rules, board, side, depth);

    let mut report = SearchReport {
        best: None,
        score: i32::MIN,
        children: Vec::with_capacity(scored.len()),
        nodes: 1,
    };
    for (mv, score, nodes) in scored {
        report.nodes += nodes;
        report.children.push((mv, score));
        if replaces(true, score, report.score) {
            report.best = Some(mv);
            report.score = score;
        }
    }
    report
}

fn child_score(rules: &Rules, board: &Board, side: Side, mv: Move, depth: i32) -> (Move, i32, u64) {
    let (child, next) = rules
        .apply_move(board, mv, side)
        .expect("legal_moves yielded a move the rules reject");
    let mut nodes = 0;
    let (_, score) = minimax(rules, &child, next, depth - 1, side, &mut nodes);
    (mv, score, nodes)
}

#[cfg(not(feature = "parallel"))]
fn root_children(rules: &Rules, board: &Board, side: Side, depth: i32) -> Vec<(Move, i32, u64)> {
    legal_moves(board, side)
        .into_iter()
        .map(|mv| child_score(rules, board, side, mv, depth))
        .collect()
}

#[cfg(feature = "parallel")]
fn root_children(rules: &Rules, board: &Board, side: Side, depth: i32) -> Vec<(Move, i32, u64)> {
    use rayon::prelude::*;

    legal_moves(board, side)
        .into_par_iter()
        .map(|mv| child_score(rules, board, side, mv, depth))
        .collect()
}

/// Pick a move for `side` at the given depth. Only call this on positions
/// where `side` has a legal move.
pub fn choose_move(rules: &Rules, board: &Board, side: Side, depth: i32) -> Option<Move> {
    let report = analyze(rules, board, side, depth);
    debug!(
        side = %side,
        depth,
        nodes = report.nodes,
        score = report.score,
        children = ?report.children,
        "search finished"
    );
    report.best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_depth_is_leaf() {
        let board = Board::new();
        assert_eq!(best_move(&board, Side::First, -1, Side::First), (None, 0));
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let board = Board::from_parts([0; 6], [1, 2, 0, 0, 0, 0], [20, 13]);
        let (mv, score) = best_move(&board, Side::First, 4, Side::First);
        assert_eq!(mv, None);
        assert_eq!(score, 20 - 13 - 3);
    }

    #[test]
    fn test_ties_go_to_later_move() {
        assert!(replaces(true, 0, 0));
        assert!(replaces(false, 0, 0));
        assert!(!replaces(true, -1, 0));
        assert!(!replaces(false, 1, 0));
    }

    #[test]
    fn test_analyze_matches_best_move() {
        let rules = Rules::default();
        let board = Board::new();
        for depth in 0..4 {
            let report = analyze(&rules, &board, Side::Second, depth);
            let (mv, score) = best_move(&board, Side::Second, depth, Side::Second);
            assert_eq!(report.best, mv, "depth {depth}");
            assert_eq!(report.score, score, "depth {depth}");
            assert_eq!(report.children.len(), 6);
        }
    }

    #[test]
    fn test_node_count_at_depth_zero() {
        let report = analyze(&Rules::default(), &Board::new(), Side::First, 0);
        // root plus one leaf per legal move
        assert_eq!(report.nodes, 7);
    }
}
