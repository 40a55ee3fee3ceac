use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognizes exactly one category.
///
/// Detectors assume every stronger detector has already been tried, so they
/// are only meaningful when run in the order of [`DETECTORS`].
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: a straight flush containing both Ace and King
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush() && analysis.has_ace_and_king()
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush()
    }
}

/// Four of a Kind: four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.frequency(0) == 4
    }
}

/// Full House: largest group of three, next group of exactly two
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.frequency(0) == 3 && analysis.rank_groups.frequency(1) == 2
    }
}

/// Flush: every card the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }
}

/// Straight: five distinct consecutive ranks
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

/// Three of a Kind: largest group of three (two trips count here too)
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.frequency(0) == 3
    }
}

/// Two Pair: the two largest groups are pairs
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.frequency(0) == 2 && analysis.rank_groups.frequency(1) == 2
    }
}

/// One Pair: a single pair
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.frequency(0) == 2
    }
}

/// High Card: fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
