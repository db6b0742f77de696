//! Player records — the fundamental leaderboard units.
//!
//! Records are immutable inputs: the engine reorders them and filters views
//! over them, but never edits a field after seeding. `win_rate` is a stored
//! percentage, not derived from the counters at runtime.

use serde::{Deserialize, Serialize};

/// A player in the round-robin (round-the-table) rotation format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinPlayer {
    pub id: u32,
    pub name: String,
    pub rounds_won: u32,
    /// Expected to be >= `rounds_won`, but not enforced.
    pub games_played: u32,
    /// Precomputed percentage in `[0, 100]`.
    pub win_rate: f64,
}

/// A player in the head-to-head 1v1 format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadPlayer {
    pub id: u32,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Precomputed percentage in `[0, 100]`.
    pub win_rate: f64,
    /// Positive = current win streak, negative = current loss streak, 0 = none.
    pub streak: i32,
    pub best_matchup: Matchup,
    pub worst_matchup: Matchup,
}

/// Per-opponent record embedded in a 1v1 player.
///
/// References the opponent by display name, not by id — a rename would
/// orphan it. Preserved as-is from the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

impl Matchup {
    /// "8-1" style score line.
    pub fn score(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// Streak decoration derived at render time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakMark {
    /// Win streak of the given length.
    Hot(u32),
    /// Loss streak of the given length.
    Cold(u32),
    /// No active streak.
    Even,
}

impl HeadToHeadPlayer {
    pub fn streak_mark(&self) -> StreakMark {
        match self.streak {
            s if s > 0 => StreakMark::Hot(s as u32),
            s if s < 0 => StreakMark::Cold(s.unsigned_abs()),
            _ => StreakMark::Even,
        }
    }
}

/// Access to the display name, used by the substring filter.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for RoundRobinPlayer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for HeadToHeadPlayer {
    fn name(&self) -> &str {
        &self.name
    }
}
