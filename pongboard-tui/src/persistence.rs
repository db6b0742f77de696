//! UI-preference persistence — JSON save/load across restarts.
//!
//! Only preferences persist: active tab, theme, and the two sort configs.
//! Player records never touch disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pongboard_core::{HeadToHeadKey, RoundRobinKey, SortConfig};

use crate::app::{AppState, Tab};
use crate::theme::ThemeMode;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_tab: Tab,
    pub theme_mode: ThemeMode,
    pub round_robin_sort: SortConfig<RoundRobinKey>,
    pub head_to_head_sort: SortConfig<HeadToHeadKey>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_tab: Tab::RoundRobin,
            theme_mode: ThemeMode::Dark,
            round_robin_sort: SortConfig::descending(RoundRobinKey::RoundsWon),
            head_to_head_sort: SortConfig::descending(HeadToHeadKey::WinRate),
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is missing
/// or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_tab: app.active_tab,
        theme_mode: app.theme_mode,
        round_robin_sort: app.round_robin.sort(),
        head_to_head_sort: app.head_to_head.sort(),
    }
}

/// Apply persisted state to AppState. Restoring a sort config re-sorts the
/// seeded roster so the stored-order invariant holds from the first frame.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_tab = state.active_tab;
    app.theme_mode = state.theme_mode;
    app.round_robin.set_sort(state.round_robin_sort);
    app.head_to_head.set_sort(state.head_to_head_sort);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pongboard_core::SortDirection;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("pongboard_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            active_tab: Tab::HeadToHead,
            theme_mode: ThemeMode::Light,
            round_robin_sort: SortConfig::ascending(RoundRobinKey::WinRate),
            head_to_head_sort: SortConfig::ascending(HeadToHeadKey::Streak),
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.active_tab, Tab::HeadToHead);
        assert_eq!(loaded.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.round_robin_sort.key, RoundRobinKey::WinRate);
        assert_eq!(loaded.head_to_head_sort.direction, SortDirection::Ascending);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.active_tab, Tab::RoundRobin);
        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("pongboard_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.active_tab, Tab::RoundRobin);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_resorts_the_boards() {
        let mut app = AppState::new();
        let state = PersistedState {
            active_tab: Tab::HeadToHead,
            theme_mode: ThemeMode::Dark,
            round_robin_sort: SortConfig::ascending(RoundRobinKey::RoundsWon),
            head_to_head_sort: SortConfig::ascending(HeadToHeadKey::Wins),
        };
        apply(&mut app, state);

        assert_eq!(app.round_robin.players()[0].name, "Isabella Lopez");
        assert_eq!(app.head_to_head.players()[0].name, "Zoe Williams");
    }
}
