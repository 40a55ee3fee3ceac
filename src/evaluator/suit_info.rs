use crate::cards::{Card, Suit};

/// Whether every card in the set shares one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// A flush requires all cards, not just five of them, to match.
    pub fn detect(cards: &[Card]) -> Self {
        match cards.first() {
            Some(first) if cards.iter().all(|c| c.suit() == first.suit()) => {
                SuitInfo { is_flush: true, flush_suit: Some(first.suit()) }
            }
            _ => SuitInfo { is_flush: false, flush_suit: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush);
        assert_eq!(info.flush_suit, Some(Suit::Spades));
    }

    #[test]
    fn test_not_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush);
        assert_eq!(info.flush_suit, None);
    }

    #[test]
    fn five_suited_of_seven_is_not_a_flush() {
        let cards = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
        ];
        assert!(!SuitInfo::detect(&cards).is_flush);
    }

    #[test]
    fn empty_set_is_not_a_flush() {
        assert!(!SuitInfo::detect(&[]).is_flush);
    }
}
