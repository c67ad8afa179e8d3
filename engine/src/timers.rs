//! Feedback timers
//!
//! Deferred visual-state transitions are explicit deadlines on the session
//! clock rather than fire-and-forget delays, so a reset or a superseding
//! selection can cancel them.

use serde::{Deserialize, Serialize};

/// How long incorrect highlighting stays visible.
pub const INCORRECT_FLAG_MS: u64 = 3000;
/// Selection-clear delay after a correct match.
pub const CLEAR_AFTER_CORRECT_MS: u64 = 1000;
/// Selection-clear delay after an incorrect match.
pub const CLEAR_AFTER_INCORRECT_MS: u64 = 3000;
/// Delay before the grand completion celebration.
pub const GRAND_CELEBRATION_MS: u64 = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTimers {
    pub clear_incorrect_at: Option<u64>,
    pub clear_selections_at: Option<u64>,
    pub grand_celebration_at: Option<u64>,
}

impl FeedbackTimers {
    pub fn cancel_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_pending(&self) -> bool {
        self.clear_incorrect_at.is_some()
            || self.clear_selections_at.is_some()
            || self.grand_celebration_at.is_some()
    }

    /// Earliest pending deadline, if any. The runner uses this to decide
    /// whether a session needs a poll at all.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.clear_incorrect_at,
            self.clear_selections_at,
            self.grand_celebration_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
