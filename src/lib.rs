//! Mancala-Rust: a Kalah-style sowing game with a minimax opponent.
//!
//! This crate provides a deterministic transition function for the sowing
//! game and a fixed-depth minimax search that picks moves for the engine side.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine parameters
//! - [`board`] - Board snapshots and sides
//! - [`rules`] - Rule variants for captures and store sowing
//! - [`position`] - Core game logic (sowing, captures, extra turns, legal moves)
//! - [`eval`] - Scoring from one side's perspective
//! - [`search`] - Fixed-depth minimax search
//! - [`playout`] - Random moves and random games
//! - [`session`] - Interactive game loop and text command engine
//!
//! ## Example
//!
//! ```
//! use mancala_rust::board::{Board, Side};
//! use mancala_rust::position::apply_move;
//! use mancala_rust::search::best_move;
//!
//! // Sow from hollow 3: the last seed lands in the store, First moves again.
//! let (board, next) = apply_move(&Board::new(), 3, Side::First).unwrap();
//! assert_eq!(next, Side::First);
//!
//! let (mv, score) = best_move(&board, next, 2, Side::First);
//! println!("Best move: {mv:?} ({score})");
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod playout;
pub mod position;
pub mod rules;
pub mod search;
pub mod session;
