//! Typed sort keys and the sort configuration.
//!
//! The source UI looked fields up by string at runtime; here each view gets
//! a closed key enum and a per-key comparator, so an unknown key is
//! unrepresentable rather than a silent no-op.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::player::{HeadToHeadPlayer, Named, RoundRobinPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Directional marker shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// A sortable column: one enum case per metric, each mapped to a typed
/// comparator. Numeric fields compare numerically; `f64` uses `total_cmp`
/// so the ordering is total.
pub trait SortKey: Copy + Eq {
    type Record: Named;

    fn compare(self, a: &Self::Record, b: &Self::Record) -> Ordering;

    /// Column label as shown in the table header.
    fn label(self) -> &'static str;
}

/// Sortable columns of the round-robin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundRobinKey {
    RoundsWon,
    GamesPlayed,
    WinRate,
}

impl SortKey for RoundRobinKey {
    type Record = RoundRobinPlayer;

    fn compare(self, a: &RoundRobinPlayer, b: &RoundRobinPlayer) -> Ordering {
        match self {
            RoundRobinKey::RoundsWon => a.rounds_won.cmp(&b.rounds_won),
            RoundRobinKey::GamesPlayed => a.games_played.cmp(&b.games_played),
            RoundRobinKey::WinRate => a.win_rate.total_cmp(&b.win_rate),
        }
    }

    fn label(self) -> &'static str {
        match self {
            RoundRobinKey::RoundsWon => "Rounds Won",
            RoundRobinKey::GamesPlayed => "Games Played",
            RoundRobinKey::WinRate => "Win Rate",
        }
    }
}

/// Sortable columns of the 1v1 view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadToHeadKey {
    WinRate,
    Wins,
    Streak,
}

impl SortKey for HeadToHeadKey {
    type Record = HeadToHeadPlayer;

    fn compare(self, a: &HeadToHeadPlayer, b: &HeadToHeadPlayer) -> Ordering {
        match self {
            HeadToHeadKey::WinRate => a.win_rate.total_cmp(&b.win_rate),
            HeadToHeadKey::Wins => a.wins.cmp(&b.wins),
            HeadToHeadKey::Streak => a.streak.cmp(&b.streak),
        }
    }

    fn label(self) -> &'static str {
        match self {
            HeadToHeadKey::WinRate => "Win Rate",
            HeadToHeadKey::Wins => "W/L",
            HeadToHeadKey::Streak => "Streak",
        }
    }
}

/// The pair (active key, direction) governing display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> SortConfig<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// The stateful toggle: requesting the active key flips the direction;
    /// requesting any other key adopts it with direction reset to ascending.
    pub fn toggled(self, key: K) -> Self {
        if key == self.key {
            Self {
                key,
                direction: self.direction.flip(),
            }
        } else {
            Self::ascending(key)
        }
    }

    /// Comparator honoring the direction. Reversing maps `Equal` to `Equal`,
    /// so a stable sort stays stable in both directions.
    pub fn compare(self, a: &K::Record, b: &K::Record) -> Ordering {
        let ord = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}
