//! Constants for board geometry and engine parameters.
//!
//! The board is two rows of hollows plus one store per side. Sowing walks a
//! single ring of slots that covers both rows and both stores.

// =============================================================================
// Board Geometry
// =============================================================================

/// Hollows per side.
pub const HOLLOWS: usize = 6;

/// Slots per side on the sowing ring (hollows followed by the store).
pub const SIDE_SLOTS: usize = HOLLOWS + 1;

/// Length of the sowing ring: both rows and both stores.
pub const RING_LEN: usize = 2 * SIDE_SLOTS;

/// Seeds placed in every hollow at the start of a game.
pub const INITIAL_SEEDS: u32 = 3;

/// Seeds on the board for the standard start (3 seeds x 12 hollows).
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS * (2 * HOLLOWS) as u32;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth for the engine player.
pub const AI_DEPTH: i32 = 8;

// =============================================================================
// Playouts
// =============================================================================

/// Upper bound on moves in a random playout.
pub const MAX_GAME_LEN: usize = 1000;
