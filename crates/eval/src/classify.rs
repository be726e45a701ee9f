// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand classification.
use ahash::AHashSet;
use thiserror::Error;

use showdown_cards::{Card, Rank, Suit};

use crate::{HandRanking, HandStrength};

/// Errors for an invalid card set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// The card set is smaller than a five cards hand.
    #[error("hand classification requires at least 5 cards, got {0}")]
    TooFewCards(usize),
    /// The card set contains the same card more than once.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
}

impl HandStrength {
    /// Classifies the best five cards hand in the given card set.
    ///
    /// The cards may be more than five, as with the seven cards of hole
    /// cards plus board in community cards games, classification picks the
    /// strongest five cards combination.
    ///
    /// Fails with [ClassifyError] if the set has fewer than five cards or
    /// contains duplicates, no classification work happens on invalid
    /// input.
    ///
    /// ```
    /// # use showdown_eval::{Card, HandRanking, HandStrength};
    /// let cards = ["AS", "KS", "QS", "JS", "TS"]
    ///     .iter()
    ///     .map(|t| t.parse::<Card>().unwrap())
    ///     .collect::<Vec<_>>();
    /// let strength = HandStrength::classify(&cards).unwrap();
    /// assert_eq!(strength.ranking(), HandRanking::StraightFlush);
    /// ```
    pub fn classify(cards: &[Card]) -> Result<HandStrength, ClassifyError> {
        if cards.len() < 5 {
            return Err(ClassifyError::TooFewCards(cards.len()));
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        for &card in cards {
            if !seen.insert(card) {
                return Err(ClassifyError::DuplicateCard(card));
            }
        }

        Ok(Classifier::new(cards).classify())
    }
}

/// Ranks forming the ace low straight, the ace bit plus deuce to five.
const WHEEL: u16 = 1 << 14 | 1 << 5 | 1 << 4 | 1 << 3 | 1 << 2;

/// Rank and suit multiplicities for a card set.
///
/// Rank masks have one bit per rank at the rank numeric value, so the
/// highest set bit is the highest card and consecutive bits are
/// consecutive ranks.
struct Classifier {
    rank_counts: [u8; 15],
    rank_mask: u16,
    suit_masks: [u16; 4],
    suit_counts: [u8; 4],
}

impl Classifier {
    fn new(cards: &[Card]) -> Self {
        let mut counts = Self {
            rank_counts: [0; 15],
            rank_mask: 0,
            suit_masks: [0; 4],
            suit_counts: [0; 4],
        };

        for card in cards {
            let rank = card.rank().value() as usize;
            let suit = suit_index(card.suit());
            counts.rank_counts[rank] += 1;
            counts.rank_mask |= 1 << rank;
            counts.suit_masks[suit] |= 1 << rank;
            counts.suit_counts[suit] += 1;
        }

        counts
    }

    /// Finds the strongest category, categories are tried in strict
    /// descending precedence so a larger card pool that satisfies several
    /// reports only the highest one.
    fn classify(&self) -> HandStrength {
        self.straight_flush()
            .or_else(|| self.four_of_a_kind())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.three_of_a_kind())
            .or_else(|| self.two_pair())
            .or_else(|| self.one_pair())
            .unwrap_or_else(|| self.high_card())
    }

    fn straight_flush(&self) -> Option<HandStrength> {
        self.suit_masks
            .iter()
            .filter_map(|&mask| straight_top(mask))
            .max()
            .map(|top| HandStrength::new(HandRanking::StraightFlush, vec![top], Vec::new()))
    }

    fn four_of_a_kind(&self) -> Option<HandStrength> {
        self.rank_with_count(4, None).map(|quads| {
            let kickers = self.kickers(&[quads], HandRanking::FourOfAKind.kicker_count());
            HandStrength::new(HandRanking::FourOfAKind, vec![quads], kickers)
        })
    }

    fn full_house(&self) -> Option<HandStrength> {
        let trips = self.rank_with_count(3, None)?;
        // A second set of trips can supply the pair.
        let pair = self.rank_with_count(2, Some(trips))?;
        Some(HandStrength::new(
            HandRanking::FullHouse,
            vec![trips, pair],
            Vec::new(),
        ))
    }

    fn flush(&self) -> Option<HandStrength> {
        (0..self.suit_masks.len())
            .filter(|&suit| self.suit_counts[suit] >= 5)
            .filter_map(|suit| top_rank(self.suit_masks[suit]))
            .max()
            .map(|top| HandStrength::new(HandRanking::Flush, vec![top], Vec::new()))
    }

    fn straight(&self) -> Option<HandStrength> {
        straight_top(self.rank_mask)
            .map(|top| HandStrength::new(HandRanking::Straight, vec![top], Vec::new()))
    }

    fn three_of_a_kind(&self) -> Option<HandStrength> {
        self.rank_with_count(3, None).map(|trips| {
            let kickers = self.kickers(&[trips], HandRanking::ThreeOfAKind.kicker_count());
            HandStrength::new(HandRanking::ThreeOfAKind, vec![trips], kickers)
        })
    }

    fn two_pair(&self) -> Option<HandStrength> {
        let hi = self.rank_with_count(2, None)?;
        let lo = self.rank_with_count(2, Some(hi))?;
        // With three pairs in seven cards the best remaining card may come
        // from the third pair.
        let kickers = self.kickers(&[hi, lo], HandRanking::TwoPair.kicker_count());
        Some(HandStrength::new(
            HandRanking::TwoPair,
            vec![hi, lo],
            kickers,
        ))
    }

    fn one_pair(&self) -> Option<HandStrength> {
        self.rank_with_count(2, None).map(|pair| {
            let kickers = self.kickers(&[pair], HandRanking::OnePair.kicker_count());
            HandStrength::new(HandRanking::OnePair, vec![pair], kickers)
        })
    }

    fn high_card(&self) -> HandStrength {
        let kickers = self.kickers(&[], HandRanking::HighCard.kicker_count());
        HandStrength::new(HandRanking::HighCard, Vec::new(), kickers)
    }

    /// The highest rank with at least `count` cards, skipping an already
    /// claimed rank.
    fn rank_with_count(&self, count: u8, skip: Option<Rank>) -> Option<Rank> {
        Rank::ranks()
            .rev()
            .filter(|&rank| Some(rank) != skip)
            .find(|&rank| self.rank_counts[rank.value() as usize] >= count)
    }

    /// The highest remaining ranks, in descending order, completing a five
    /// cards hand.
    fn kickers(&self, claimed: &[Rank], count: usize) -> Vec<Rank> {
        Rank::ranks()
            .rev()
            .filter(|rank| !claimed.contains(rank))
            .filter(|rank| self.rank_counts[rank.value() as usize] > 0)
            .take(count)
            .collect()
    }
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// The top card of the best straight in a ranks mask, if any.
fn straight_top(mask: u16) -> Option<Rank> {
    // A bit survives four shift-ands only at the top of a five bits run.
    let mut bits = mask;
    for _ in 0..4 {
        bits &= bits << 1;
    }

    if bits != 0 {
        top_rank(bits)
    } else if mask & WHEEL == WHEEL {
        // The ace counts as low in the wheel, the top card is the five.
        Some(Rank::Five)
    } else {
        None
    }
}

/// The highest rank in a ranks mask.
fn top_rank(mask: u16) -> Option<Rank> {
    if mask == 0 {
        None
    } else {
        Rank::from_value((15 - mask.leading_zeros()) as u8)
    }
}
