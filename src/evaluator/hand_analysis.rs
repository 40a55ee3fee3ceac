use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a card set.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze every card together; no five-card subset is selected.
    pub fn new(cards: &[Card]) -> Self {
        let rank_groups = RankGroups::from_cards(cards);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&rank_groups.distinct_ranks());

        Self { rank_groups, suit_info, straight_info }
    }

    pub fn is_straight_flush(&self) -> bool {
        self.suit_info.is_flush && self.straight_info.is_straight
    }

    /// Ace and King both present.
    pub fn has_ace_and_king(&self) -> bool {
        self.rank_groups.contains(Rank::Ace) && self.rank_groups.contains(Rank::King)
    }
}
