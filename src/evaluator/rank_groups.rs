use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a card set, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count rank frequencies across any number of cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// The `i`-th largest group size, or 0 when there are fewer groups.
    pub fn frequency(&self, i: usize) -> u8 {
        self.groups.get(i).map_or(0, |(_, count)| *count)
    }

    /// Group sizes in descending order, e.g. `[3, 2]` for a full house.
    pub fn profile(&self) -> Vec<u8> {
        self.groups.iter().map(|(_, count)| *count).collect()
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.groups.iter().any(|(r, _)| *r == rank)
    }

    /// Distinct ranks present, ascending.
    pub fn distinct_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.groups.iter().map(|(r, _)| *r).collect();
        ranks.sort_unstable();
        ranks
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
