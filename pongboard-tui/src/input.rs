//! Keyboard input dispatch — overlays → search mode → global keys → per-tab
//! sort keys.
//!
//! Every handler is synchronous and runs to completion before the next
//! event is read.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use pongboard_core::{HeadToHeadKey, RoundRobinKey, SortKey};

use crate::app::{AppState, Overlay, Tab};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Detail | Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Search mode edits the active view's term on each keystroke.
    if app.search_mode {
        handle_search_key(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.switch_tab(Tab::RoundRobin);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::HeadToHead);
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.switch_tab(app.active_tab.other());
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            app.set_status(format!("Theme: {}", app.theme_mode.label()));
            return;
        }
        KeyCode::Char('/') => {
            app.search_mode = true;
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_cursor_down();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_cursor_up();
            return;
        }
        KeyCode::Enter => {
            if app.visible_len() > 0 {
                app.overlay = Overlay::Detail;
            }
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Esc => {
            if !app.search().is_empty() {
                app.clear_search();
                app.set_status("Search cleared");
            }
            return;
        }
        _ => {}
    }

    // 4. Per-tab sort keys.
    match app.active_tab {
        Tab::RoundRobin => handle_round_robin_key(app, key),
        Tab::HeadToHead => handle_head_to_head_key(app, key),
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.clear_search();
            app.search_mode = false;
        }
        KeyCode::Enter => {
            app.search_mode = false;
        }
        KeyCode::Backspace => {
            app.pop_search();
        }
        KeyCode::Char(c) => {
            app.push_search(c);
        }
        _ => {}
    }
}

fn handle_round_robin_key(app: &mut AppState, key: KeyEvent) {
    let sort_key = match key.code {
        KeyCode::Char('r') => RoundRobinKey::RoundsWon,
        KeyCode::Char('g') => RoundRobinKey::GamesPlayed,
        KeyCode::Char('w') => RoundRobinKey::WinRate,
        _ => return,
    };
    app.round_robin.toggle_sort(sort_key);
    let sort = app.round_robin.sort();
    app.set_status(format!("Sorted by {} {}", sort.key.label(), sort.direction.arrow()));
}

fn handle_head_to_head_key(app: &mut AppState, key: KeyEvent) {
    let sort_key = match key.code {
        KeyCode::Char('w') => HeadToHeadKey::WinRate,
        KeyCode::Char('m') => HeadToHeadKey::Wins,
        KeyCode::Char('s') => HeadToHeadKey::Streak,
        _ => return,
    };
    app.head_to_head.toggle_sort(sort_key);
    let sort = app.head_to_head.sort();
    app.set_status(format!("Sorted by {} {}", sort.key.label(), sort.direction.arrow()));
}

/// Key bindings shown in the help overlay.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "Quit"),
        ("1 / 2, Tab", "Switch leaderboard view"),
        ("t", "Toggle light/dark theme"),
        ("/", "Search players by name (live)"),
        ("Esc", "Clear search"),
        ("↑/k, ↓/j", "Move selection"),
        ("Enter", "Player detail"),
        ("r / g / w", "Round the Table: sort by rounds / games / win rate"),
        ("w / m / s", "1 vs 1: sort by win rate / wins / streak"),
        ("?", "This help"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pongboard_core::SortDirection;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn quit_on_q() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn tab_keys_switch_views() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_tab, Tab::HeadToHead);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::RoundRobin);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_tab, Tab::RoundRobin);
    }

    #[test]
    fn slash_enters_search_and_typing_filters_live() {
        let mut app = AppState::new();
        app.switch_tab(Tab::HeadToHead);
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert!(app.search_mode);

        for c in "mike".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.search(), "mike");
        let rows = app.head_to_head.visible();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Mike Chen");
    }

    #[test]
    fn search_enter_keeps_term_esc_clears() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.search_mode);
        assert_eq!(app.search(), "s");

        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.search_mode);
        assert_eq!(app.search(), "");
    }

    #[test]
    fn search_mode_shields_global_keys() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.search(), "q");
    }

    #[test]
    fn sort_keys_toggle_direction_on_repeat() {
        let mut app = AppState::new();
        app.switch_tab(Tab::HeadToHead);

        // Initial config is WinRate descending; first press flips it.
        handle_key(&mut app, press(KeyCode::Char('w')));
        let sort = app.head_to_head.sort();
        assert_eq!(sort.key, HeadToHeadKey::WinRate);
        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(app.head_to_head.visible()[0].name, "Zoe Williams");

        // Different key resets to ascending.
        handle_key(&mut app, press(KeyCode::Char('m')));
        let sort = app.head_to_head.sort();
        assert_eq!(sort.key, HeadToHeadKey::Wins);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn round_robin_sort_keys_map_to_columns() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.round_robin.sort().key, RoundRobinKey::GamesPlayed);
        handle_key(&mut app, press(KeyCode::Char('w')));
        assert_eq!(app.round_robin.sort().key, RoundRobinKey::WinRate);
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.round_robin.sort().key, RoundRobinKey::RoundsWon);
    }

    #[test]
    fn enter_opens_detail_and_any_close_key_dismisses() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::Detail);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);

        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn enter_is_a_no_op_on_an_empty_view() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('/')));
        for c in "xyz".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter)); // leaves search mode
        handle_key(&mut app, press(KeyCode::Enter)); // no rows, no overlay
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn help_listing_is_nonempty() {
        let bindings = key_bindings_help();
        assert!(!bindings.is_empty());
        assert_eq!(bindings[0].0, "q");
    }
}
