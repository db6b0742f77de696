//! The fixed seed rosters.
//!
//! Ten records per format, seeded once at board construction and never
//! added to, removed from, or persisted. Both lists arrive pre-ordered to
//! match their view's initial sort config (round-robin: rounds won
//! descending; 1v1: win rate descending).

use crate::player::{HeadToHeadPlayer, Matchup, RoundRobinPlayer};

pub fn round_robin_roster() -> Vec<RoundRobinPlayer> {
    let rows: [(u32, &str, u32, u32, f64); 10] = [
        (1, "Sarah Johnson", 42, 67, 62.7),
        (2, "David Kim", 38, 71, 53.5),
        (3, "Alex Martinez", 35, 59, 59.3),
        (4, "Emma Wilson", 31, 62, 50.0),
        (5, "James Taylor", 29, 55, 52.7),
        (6, "Olivia Brown", 27, 58, 46.6),
        (7, "Michael Davis", 25, 49, 51.0),
        (8, "Sophia Garcia", 23, 51, 45.1),
        (9, "Daniel Rodriguez", 21, 47, 44.7),
        (10, "Isabella Lopez", 19, 42, 45.2),
    ];
    rows.into_iter()
        .map(|(id, name, rounds_won, games_played, win_rate)| RoundRobinPlayer {
            id,
            name: name.to_string(),
            rounds_won,
            games_played,
            win_rate,
        })
        .collect()
}

pub fn head_to_head_roster() -> Vec<HeadToHeadPlayer> {
    fn matchup(name: &str, wins: u32, losses: u32) -> Matchup {
        Matchup {
            name: name.to_string(),
            wins,
            losses,
        }
    }

    vec![
        HeadToHeadPlayer {
            id: 1,
            name: "Mike Chen".into(),
            wins: 37,
            losses: 12,
            win_rate: 75.5,
            streak: 8,
            best_matchup: matchup("Ryan Murphy", 8, 1),
            worst_matchup: matchup("Lisa Wang", 3, 5),
        },
        HeadToHeadPlayer {
            id: 2,
            name: "Lisa Wang".into(),
            wins: 34,
            losses: 15,
            win_rate: 69.4,
            streak: 3,
            best_matchup: matchup("Emma Davis", 7, 1),
            worst_matchup: matchup("John Smith", 2, 4),
        },
        HeadToHeadPlayer {
            id: 3,
            name: "John Smith".into(),
            wins: 31,
            losses: 19,
            win_rate: 62.0,
            streak: 0,
            best_matchup: matchup("Lisa Wang", 4, 2),
            worst_matchup: matchup("Mike Chen", 1, 6),
        },
        HeadToHeadPlayer {
            id: 4,
            name: "Priya Patel".into(),
            wins: 29,
            losses: 22,
            win_rate: 56.9,
            streak: 2,
            best_matchup: matchup("Zoe Williams", 6, 1),
            worst_matchup: matchup("Carlos Gomez", 2, 5),
        },
        HeadToHeadPlayer {
            id: 5,
            name: "Carlos Gomez".into(),
            wins: 26,
            losses: 21,
            win_rate: 55.3,
            streak: 1,
            best_matchup: matchup("Priya Patel", 5, 2),
            worst_matchup: matchup("Mike Chen", 1, 7),
        },
        HeadToHeadPlayer {
            id: 6,
            name: "Aisha Johnson".into(),
            wins: 24,
            losses: 23,
            win_rate: 51.1,
            streak: 0,
            best_matchup: matchup("Tom Wilson", 5, 2),
            worst_matchup: matchup("Lisa Wang", 1, 5),
        },
        HeadToHeadPlayer {
            id: 7,
            name: "Tom Wilson".into(),
            wins: 22,
            losses: 25,
            win_rate: 46.8,
            streak: -2,
            best_matchup: matchup("Ryan Murphy", 5, 3),
            worst_matchup: matchup("Aisha Johnson", 2, 5),
        },
        HeadToHeadPlayer {
            id: 8,
            name: "Emma Davis".into(),
            wins: 19,
            losses: 28,
            win_rate: 40.4,
            streak: -1,
            best_matchup: matchup("Zoe Williams", 5, 2),
            worst_matchup: matchup("Lisa Wang", 1, 7),
        },
        HeadToHeadPlayer {
            id: 9,
            name: "Ryan Murphy".into(),
            wins: 17,
            losses: 31,
            win_rate: 35.4,
            streak: -3,
            best_matchup: matchup("Zoe Williams", 4, 2),
            worst_matchup: matchup("Mike Chen", 1, 8),
        },
        HeadToHeadPlayer {
            id: 10,
            name: "Zoe Williams".into(),
            wins: 14,
            losses: 34,
            win_rate: 29.2,
            streak: 0,
            best_matchup: matchup("Ryan Murphy", 3, 2),
            worst_matchup: matchup("Priya Patel", 1, 6),
        },
    ]
}
