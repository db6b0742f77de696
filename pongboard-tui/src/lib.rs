//! Pongboard TUI — terminal leaderboard dashboard for the office
//! table-tennis league.
//!
//! Two views under tab selection:
//! - Round the Table — ranking by rounds won across the rotation format
//! - 1 vs 1 Matches — win/loss records with per-opponent matchup detail
//!
//! Both offer live name search, sortable metric columns, rank medals, a
//! player detail overlay, and a light/dark theme toggle.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
