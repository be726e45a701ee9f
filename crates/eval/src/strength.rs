// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength value type.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Rank;

use crate::HandRanking;

/// The strength of the best five cards hand found in a card set.
///
/// A strength holds the hand category, the ranks that define it (the pair
/// rank for a pair, trips and pair ranks for a full house, the top card for
/// straights and flushes), and the kickers that complete the five cards
/// hand in descending order.
///
/// Strengths are totally ordered: category first, then defining ranks, then
/// kickers. Suits never matter, two rank-identical hands of different suits
/// tie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    ranking: HandRanking,
    rank_cards: Vec<Rank>,
    kickers: Vec<Rank>,
}

impl HandStrength {
    /// Creates a strength for a classified hand.
    pub(crate) fn new(ranking: HandRanking, rank_cards: Vec<Rank>, kickers: Vec<Rank>) -> Self {
        Self {
            ranking,
            rank_cards,
            kickers,
        }
    }

    /// The hand category.
    pub fn ranking(&self) -> HandRanking {
        self.ranking
    }

    /// The ranks that define the category.
    ///
    /// Empty for a high card hand where all five ranks are kickers; two
    /// entries for two pair (higher pair first) and full house (trips
    /// first); the single defining rank otherwise, with the top card for
    /// straights and flushes.
    pub fn rank_cards(&self) -> &[Rank] {
        &self.rank_cards
    }

    /// The kicker ranks in descending order.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking
            .cmp(&other.ranking)
            .then_with(|| self.rank_cards.cmp(&other.rank_cards))
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.ranking.name())?;

        match self.ranking {
            HandRanking::OnePair
            | HandRanking::TwoPair
            | HandRanking::ThreeOfAKind
            | HandRanking::FullHouse
            | HandRanking::FourOfAKind => {
                write!(f, " {}.", join_names(&self.rank_cards, true))?;
            }
            HandRanking::Straight | HandRanking::StraightFlush => {
                write!(f, " {}.", join_names(&self.rank_cards, false))?;
            }
            // No defining clause for a flush, a high card hand keeps all
            // its ranks in the kickers.
            HandRanking::HighCard | HandRanking::Flush => {}
        }

        if !self.kickers.is_empty() {
            let names = self
                .kickers
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " Kickers: {names}.")?;
        }

        Ok(())
    }
}

/// Joins rank names with commas and a final "and".
fn join_names(ranks: &[Rank], plural: bool) -> String {
    let names = ranks
        .iter()
        .map(|r| if plural { r.name_plural() } else { r.name() })
        .collect::<Vec<_>>();

    match names.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, head)) => format!("{} and {}", head.join(", "), last),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HandRanking::*;
    use Rank::*;

    #[test]
    fn category_decides_first() {
        let pair = HandStrength::new(OnePair, vec![Ace], vec![King, Queen, Jack]);
        let two_pair = HandStrength::new(TwoPair, vec![Deuce, Trey], vec![Four]);
        assert!(pair < two_pair);

        let four = HandStrength::new(FourOfAKind, vec![Deuce], vec![Trey]);
        let full = HandStrength::new(FullHouse, vec![Ace, King], vec![]);
        assert!(four > full);
    }

    #[test]
    fn full_house_trips_break_ties_first() {
        let lo = HandStrength::new(FullHouse, vec![Five, Nine], vec![]);
        let hi = HandStrength::new(FullHouse, vec![Eight, Deuce], vec![]);
        assert!(lo < hi);
    }

    #[test]
    fn two_pair_kicker_never_overrides_pairs() {
        let hi = HandStrength::new(TwoPair, vec![King, Deuce], vec![Five]);
        let lo = HandStrength::new(TwoPair, vec![Queen, Jack], vec![Ace]);
        assert!(hi > lo);

        // Equal pairs fall through to the kicker.
        let hi = HandStrength::new(TwoPair, vec![King, Deuce], vec![Five]);
        let lo = HandStrength::new(TwoPair, vec![King, Deuce], vec![Four]);
        assert!(hi > lo);
    }

    #[test]
    fn rank_identical_hands_tie() {
        let a = HandStrength::new(HighCard, vec![], vec![Ace, King, Queen, Jack, Nine]);
        let b = HandStrength::new(HighCard, vec![], vec![Ace, King, Queen, Jack, Nine]);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        let wheel = HandStrength::new(Straight, vec![Five], vec![]);
        let six_high = HandStrength::new(Straight, vec![Six], vec![]);
        let broadway = HandStrength::new(Straight, vec![Ace], vec![]);
        assert!(wheel < six_high);
        assert!(six_high < broadway);
    }

    #[test]
    fn ordering_is_transitive_over_sort() {
        let mut hands = vec![
            HandStrength::new(Straight, vec![Ace], vec![]),
            HandStrength::new(HighCard, vec![], vec![Ace, King, Queen, Jack, Nine]),
            HandStrength::new(StraightFlush, vec![Five], vec![]),
            HandStrength::new(OnePair, vec![Deuce], vec![Five, Four, Trey]),
            HandStrength::new(Straight, vec![Five], vec![]),
        ];
        hands.sort();

        let rankings = hands.iter().map(|h| h.ranking()).collect::<Vec<_>>();
        assert_eq!(
            rankings,
            vec![HighCard, OnePair, Straight, Straight, StraightFlush]
        );
        assert_eq!(hands[2].rank_cards(), &[Five]);
        assert_eq!(hands[3].rank_cards(), &[Ace]);
    }

    #[test]
    fn render_pairs_and_kickers() {
        let s = HandStrength::new(OnePair, vec![Ace], vec![King, Queen, Jack]);
        assert_eq!(s.to_string(), "One Pair: Aces. Kickers: King, Queen, Jack.");

        let s = HandStrength::new(TwoPair, vec![Ace, King], vec![Queen]);
        assert_eq!(s.to_string(), "Two Pair: Aces and Kings. Kickers: Queen.");

        let s = HandStrength::new(ThreeOfAKind, vec![Ace], vec![King, Queen]);
        assert_eq!(s.to_string(), "Three of a Kind: Aces. Kickers: King, Queen.");

        let s = HandStrength::new(FourOfAKind, vec![Ace], vec![King]);
        assert_eq!(s.to_string(), "Four of a Kind: Aces. Kickers: King.");

        let s = HandStrength::new(FullHouse, vec![Deuce, Five], vec![]);
        assert_eq!(s.to_string(), "Full House: Twos and Fives.");
    }

    #[test]
    fn render_straights_singular() {
        let s = HandStrength::new(Straight, vec![Ace], vec![]);
        assert_eq!(s.to_string(), "Straight: Ace.");

        let s = HandStrength::new(StraightFlush, vec![Five], vec![]);
        assert_eq!(s.to_string(), "Straight Flush: Five.");
    }

    #[test]
    fn render_omits_empty_clauses() {
        // No defining clause for a flush.
        let s = HandStrength::new(Flush, vec![Ace], vec![]);
        assert_eq!(s.to_string(), "Flush:");

        // No defining clause for a high card, all ranks are kickers.
        let s = HandStrength::new(HighCard, vec![], vec![Ace, King, Queen, Jack, Nine]);
        assert_eq!(
            s.to_string(),
            "High Card: Kickers: Ace, King, Queen, Jack, Nine."
        );
    }
}
