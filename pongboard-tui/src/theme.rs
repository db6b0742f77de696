//! Theme tokens — light/dark palettes and the semantic color helpers.
//!
//! # Color roles
//! - **Background / surface**: base layers of the dashboard
//! - **Accent**: focus, active sort column, highlights
//! - **Gold / silver / bronze**: podium rank badges
//! - **Positive**: wins, hot streaks
//! - **Negative**: losses, cold streaks
//! - **Neutral**: selection background, even streaks
//! - **Muted**: hints, secondary labels

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use pongboard_core::{RankBadge, StreakMark};

/// Which palette is active. Persisted across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Color tokens for one palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub gold: Color,
    pub silver: Color,
    pub bronze: Color,
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            surface: Color::Rgb(30, 30, 34),
            accent: Color::Rgb(0, 200, 255),
            gold: Color::Rgb(255, 200, 0),
            silver: Color::Rgb(176, 176, 186),
            bronze: Color::Rgb(205, 127, 50),
            positive: Color::Rgb(0, 220, 120),
            negative: Color::Rgb(255, 80, 100),
            neutral: Color::Rgb(90, 80, 140),
            muted: Color::Rgb(110, 120, 140),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 242),
            surface: Color::Rgb(232, 232, 228),
            accent: Color::Rgb(0, 110, 180),
            gold: Color::Rgb(180, 134, 0),
            silver: Color::Rgb(120, 120, 128),
            bronze: Color::Rgb(150, 90, 30),
            positive: Color::Rgb(0, 140, 70),
            negative: Color::Rgb(200, 40, 60),
            neutral: Color::Rgb(190, 185, 215),
            muted: Color::Rgb(130, 135, 145),
            text_primary: Color::Rgb(25, 25, 30),
            text_secondary: Color::Rgb(80, 80, 90),
        }
    }

    /// Color for a stored win-rate percentage.
    pub fn win_rate_color(&self, rate: f64) -> Color {
        match rate {
            r if r >= 60.0 => self.positive,
            r if r >= 50.0 => self.accent,
            r if r >= 40.0 => self.neutral,
            _ => self.negative,
        }
    }

    /// Color for a streak decoration.
    pub fn streak_color(&self, mark: StreakMark) -> Color {
        match mark {
            StreakMark::Hot(_) => self.positive,
            StreakMark::Cold(_) => self.negative,
            StreakMark::Even => self.muted,
        }
    }

    /// Color for a rank badge.
    pub fn badge_color(&self, badge: RankBadge) -> Color {
        match badge {
            RankBadge::Gold => self.gold,
            RankBadge::Silver => self.silver,
            RankBadge::Bronze => self.bronze,
            RankBadge::Ordinal(_) => self.text_secondary,
        }
    }
}
