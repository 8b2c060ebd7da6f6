//! Player count reconciliation
//!
//! The requested squad size only serves as a cross-check: when it disagrees
//! with the formation, the formation wins and the count is overridden. The
//! formation itself is never trimmed or re-derived from the count.

use serde::{Deserialize, Serialize};

use crate::formation::Formation;

/// Squad size used when none is given
pub const DEFAULT_PLAYER_COUNT: i64 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCount {
    /// As entered; any integer, including negative ones
    pub requested: i64,
    pub effective: u64,
    pub adjusted: bool,
}

impl PlayerCount {
    pub fn warning(&self) -> Option<String> {
        self.adjusted.then(|| {
            format!(
                "Formation does not match number of players. Adjusting players to {}.",
                self.effective
            )
        })
    }
}

pub fn reconcile_player_count(requested: i64, formation: &Formation) -> PlayerCount {
    let computed = formation.total_players();
    let count = PlayerCount {
        requested,
        effective: computed,
        adjusted: u64::try_from(requested).map_or(true, |n| n != computed),
    };
    if let Some(msg) = count.warning() {
        log::warn!("{} (requested {})", msg, requested);
    }
    count
}
