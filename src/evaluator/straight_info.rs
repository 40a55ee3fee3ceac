use crate::cards::Rank;

/// Whether a card set forms a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from the distinct ranks of a card set.
    ///
    /// A straight needs exactly five distinct ranks spanning a run of five.
    /// Ace only ranks high, so A-2-3-4-5 is not a straight.
    pub fn detect(distinct_ascending: &[Rank]) -> Self {
        if let [low, .., high] = distinct_ascending {
            if distinct_ascending.len() == 5 && high.value() - low.value() == 4 {
                return StraightInfo { is_straight: true, top_rank: Some(*high) };
            }
        }
        StraightInfo { is_straight: false, top_rank: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let ranks = [Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_ace_high_straight() {
        let ranks = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_is_not_a_straight() {
        let ranks = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
        let info = StraightInfo::detect(&ranks);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn gap_is_not_a_straight() {
        let ranks = [Rank::Nine, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
        assert!(!StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn six_distinct_ranks_are_not_a_straight() {
        let ranks = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven];
        assert!(!StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn too_few_ranks() {
        assert!(!StraightInfo::detect(&[Rank::Two, Rank::Three]).is_straight);
        assert!(!StraightInfo::detect(&[]).is_straight);
    }
}
