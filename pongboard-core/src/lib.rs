//! Pongboard Core — domain types and the rank/sort/filter engine.
//!
//! This crate contains everything the dashboard shows that is not pixels:
//! - Player records for the two league formats (round-robin and 1v1)
//! - Typed sort keys with per-key comparators (no stringly-typed field lookup)
//! - The leaderboard state machine: stored order, sort toggle, live name filter
//! - Rank badges (medals for the top three, ordinals below)
//! - The fixed seed rosters
//!
//! No I/O, no rendering, no concurrency. All operations are total.

pub mod board;
pub mod player;
pub mod rank;
pub mod roster;
pub mod sort;

pub use board::Leaderboard;
pub use player::{HeadToHeadPlayer, Matchup, Named, RoundRobinPlayer, StreakMark};
pub use rank::RankBadge;
pub use sort::{HeadToHeadKey, RoundRobinKey, SortConfig, SortDirection, SortKey};
