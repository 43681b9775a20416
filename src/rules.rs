//! Rule switches consulted by the transition engine.
//!
//! Kalah variants disagree on a few details. The defaults reproduce the
//! reference game; each flag turns on one alternative.

/// Rule set for sowing and capture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Capture even when the mirrored opposite hollow is empty (the landing
    /// seed alone goes to the store).
    pub capture_empty_opposite: bool,
    /// Allow a capture when the last seed lands in an empty hollow on the
    /// opponent's row. Seeds go to the store of the row they landed on.
    pub capture_on_opponent_side: bool,
    /// Sow into the opponent's store when the ring passes it. When false the
    /// opponent's store is skipped and costs no seed.
    pub sow_opponent_store: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            capture_empty_opposite: false,
            capture_on_opponent_side: false,
            sow_opponent_store: true,
        }
    }
}
