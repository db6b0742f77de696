//! Application state — single-owner, main-thread only.
//!
//! Every state transition is synchronous and runs to completion inside a
//! key-event handler. No worker threads, no timers driving logic.

use serde::{Deserialize, Serialize};

use pongboard_core::{
    HeadToHeadKey, Leaderboard, RoundRobinKey, SortConfig, roster,
};

use crate::theme::{Theme, ThemeMode};

/// Which leaderboard view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    RoundRobin,
    HeadToHead,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::RoundRobin => 0,
            Tab::HeadToHead => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::RoundRobin => "Round the Table",
            Tab::HeadToHead => "1 vs 1 Matches",
        }
    }

    pub fn other(self) -> Tab {
        match self {
            Tab::RoundRobin => Tab::HeadToHead,
            Tab::HeadToHead => Tab::RoundRobin,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Player detail for the row under the cursor.
    Detail,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub active_tab: Tab,
    pub running: bool,
    pub theme_mode: ThemeMode,

    pub round_robin: Leaderboard<RoundRobinKey>,
    pub head_to_head: Leaderboard<HeadToHeadKey>,

    // Cursor per view, indexing into the FILTERED row sequence.
    pub rr_cursor: usize,
    pub h2h_cursor: usize,

    /// True while keystrokes edit the active view's search term.
    pub search_mode: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::RoundRobin,
            running: true,
            theme_mode: ThemeMode::Dark,
            round_robin: Leaderboard::new(
                roster::round_robin_roster(),
                SortConfig::descending(RoundRobinKey::RoundsWon),
            ),
            head_to_head: Leaderboard::new(
                roster::head_to_head_roster(),
                SortConfig::descending(HeadToHeadKey::WinRate),
            ),
            rr_cursor: 0,
            h2h_cursor: 0,
            search_mode: false,
            overlay: Overlay::None,
            status_message: None,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.search_mode = false;
    }

    /// Number of rows the active view currently displays.
    pub fn visible_len(&self) -> usize {
        match self.active_tab {
            Tab::RoundRobin => self.round_robin.visible_len(),
            Tab::HeadToHead => self.head_to_head.visible_len(),
        }
    }

    pub fn cursor(&self) -> usize {
        match self.active_tab {
            Tab::RoundRobin => self.rr_cursor,
            Tab::HeadToHead => self.h2h_cursor,
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.active_tab {
            Tab::RoundRobin => &mut self.rr_cursor,
            Tab::HeadToHead => &mut self.h2h_cursor,
        }
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.visible_len();
        let cursor = self.cursor_mut();
        if len > 0 && *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// Keep the cursor inside the filtered view after the filter shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        let cursor = self.cursor_mut();
        if len == 0 {
            *cursor = 0;
        } else if *cursor >= len {
            *cursor = len - 1;
        }
    }

    /// The active view's search term.
    pub fn search(&self) -> &str {
        match self.active_tab {
            Tab::RoundRobin => self.round_robin.search(),
            Tab::HeadToHead => self.head_to_head.search(),
        }
    }

    pub fn push_search(&mut self, c: char) {
        match self.active_tab {
            Tab::RoundRobin => self.round_robin.push_search(c),
            Tab::HeadToHead => self.head_to_head.push_search(c),
        }
        self.clamp_cursor();
    }

    pub fn pop_search(&mut self) {
        match self.active_tab {
            Tab::RoundRobin => self.round_robin.pop_search(),
            Tab::HeadToHead => self.head_to_head.pop_search(),
        }
        self.clamp_cursor();
    }

    pub fn clear_search(&mut self) {
        match self.active_tab {
            Tab::RoundRobin => self.round_robin.clear_search(),
            Tab::HeadToHead => self.head_to_head.clear_search(),
        }
        self.clamp_cursor();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
