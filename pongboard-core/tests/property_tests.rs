//! Property tests for leaderboard invariants.
//!
//! Uses proptest to verify, over arbitrary rosters:
//! 1. Direction toggle — toggling the active key twice reverses a single toggle
//! 2. Stability — equal-key records retain their pre-sort relative order
//! 3. Non-destructive filter — filter + clear restores the last-sorted order
//! 4. Filter semantics — case-insensitive substring on the name only

use proptest::prelude::*;
use pongboard_core::{
    Leaderboard, RoundRobinKey, RoundRobinPlayer, SortConfig, SortDirection,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}"
}

fn arb_roster() -> impl Strategy<Value = Vec<RoundRobinPlayer>> {
    prop::collection::vec((arb_name(), 0u32..40, 0u32..60, 0.0..100.0_f64), 1..20).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, rounds_won, games_played, win_rate))| RoundRobinPlayer {
                    id: i as u32,
                    name,
                    rounds_won,
                    games_played,
                    win_rate: (win_rate * 10.0).round() / 10.0,
                })
                .collect()
        },
    )
}

fn arb_key() -> impl Strategy<Value = RoundRobinKey> {
    prop_oneof![
        Just(RoundRobinKey::RoundsWon),
        Just(RoundRobinKey::GamesPlayed),
        Just(RoundRobinKey::WinRate),
    ]
}

fn board(roster: Vec<RoundRobinPlayer>) -> Leaderboard<RoundRobinKey> {
    Leaderboard::new(roster, SortConfig::descending(RoundRobinKey::RoundsWon))
}

fn ids(board: &Leaderboard<RoundRobinKey>) -> Vec<u32> {
    board.players().iter().map(|p| p.id).collect()
}

// ── 1. Direction toggle ──────────────────────────────────────────────

proptest! {
    /// Toggling the same key twice flips the direction back; with all key
    /// values distinct, the resulting order is the exact reverse.
    #[test]
    fn double_toggle_reverses(roster in arb_roster(), key in arb_key()) {
        // De-duplicate key values so reversal is exact (ties are covered by
        // the stability property below).
        let mut roster = roster;
        for (i, p) in roster.iter_mut().enumerate() {
            p.rounds_won = i as u32;
            p.games_played = 100 + i as u32;
            p.win_rate = i as f64;
        }

        let mut once = board(roster.clone());
        once.toggle_sort(key);

        let mut twice = board(roster);
        twice.toggle_sort(key);
        twice.toggle_sort(key);

        let mut reversed = ids(&twice);
        reversed.reverse();
        prop_assert_eq!(ids(&once), reversed);
        prop_assert_eq!(
            twice.sort().direction,
            once.sort().direction.flip()
        );
    }
}

// ── 2. Stability ─────────────────────────────────────────────────────

proptest! {
    /// Records with equal values on the active key keep their pre-sort
    /// relative order, ascending and descending alike.
    #[test]
    fn sort_is_stable_on_ties(roster in arb_roster(), key in arb_key()) {
        // Collapse every key value so the whole roster ties.
        let mut roster = roster;
        for p in roster.iter_mut() {
            p.rounds_won = 7;
            p.games_played = 7;
            p.win_rate = 50.0;
        }
        let seed: Vec<u32> = roster.iter().map(|p| p.id).collect();

        let mut b = board(roster);
        b.toggle_sort(key); // ascending
        prop_assert_eq!(ids(&b), seed.clone());
        b.toggle_sort(key); // descending
        prop_assert_eq!(ids(&b), seed);
    }
}

// ── 3. Non-destructive filter ────────────────────────────────────────

proptest! {
    /// Applying any filter and clearing it leaves the stored order exactly
    /// as the last sort left it.
    #[test]
    fn filter_never_mutates_order(
        roster in arb_roster(),
        key in arb_key(),
        term in "[a-zA-Z]{0,6}",
    ) {
        let mut b = board(roster);
        b.toggle_sort(key);
        let sorted = ids(&b);

        b.set_search(term);
        let _ = b.visible();
        b.clear_search();

        prop_assert_eq!(ids(&b), sorted);
        prop_assert_eq!(b.visible_len(), b.len());
    }
}

// ── 4. Filter semantics ──────────────────────────────────────────────

proptest! {
    /// The visible view is exactly the records whose lowercased name
    /// contains the lowercased term, in stored order.
    #[test]
    fn filter_is_case_insensitive_substring(
        roster in arb_roster(),
        term in "[a-zA-Z]{1,4}",
    ) {
        let mut b = board(roster);
        b.set_search(term.clone());
        let needle = term.to_lowercase();

        let expected: Vec<u32> = b
            .players()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| p.id)
            .collect();
        let visible: Vec<u32> = b.visible().iter().map(|p| p.id).collect();
        prop_assert_eq!(visible, expected);
    }
}
