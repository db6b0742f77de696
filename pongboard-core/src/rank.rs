//! Rank badges — medal for the top three visible rows, ordinal below.

/// The decoration assigned by position in the currently displayed
/// (filtered) sequence, not by global rank: filtering the leaders out
/// promotes whoever is left to the medals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    /// 1-based place for everyone below the podium.
    Ordinal(usize),
}

impl RankBadge {
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => RankBadge::Gold,
            1 => RankBadge::Silver,
            2 => RankBadge::Bronze,
            i => RankBadge::Ordinal(i + 1),
        }
    }

    pub fn is_medal(self) -> bool {
        !matches!(self, RankBadge::Ordinal(_))
    }
}
