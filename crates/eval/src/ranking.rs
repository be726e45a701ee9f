// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine poker hand categories, ordered from weakest to strongest.
///
/// The derived ordering follows the standard poker precedence, a
/// [HandStrength](crate::HandStrength) compares by category before looking
/// at defining ranks and kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRanking {
    /// No combination, the five highest cards play.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
}

impl HandRanking {
    /// The human readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRanking::HighCard => "High Card",
            HandRanking::OnePair => "One Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
        }
    }

    /// Number of kickers that complete a five cards hand for this category.
    pub fn kicker_count(&self) -> usize {
        match self {
            HandRanking::HighCard => 5,
            HandRanking::OnePair => 3,
            HandRanking::TwoPair => 1,
            HandRanking::ThreeOfAKind => 2,
            HandRanking::FourOfAKind => 1,
            HandRanking::Straight
            | HandRanking::Flush
            | HandRanking::FullHouse
            | HandRanking::StraightFlush => 0,
        }
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_precedence() {
        use HandRanking::*;

        let order = [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ];

        for pair in order.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(HandRanking::HighCard.to_string(), "High Card");
        assert_eq!(HandRanking::FullHouse.to_string(), "Full House");
        assert_eq!(HandRanking::StraightFlush.to_string(), "Straight Flush");
    }
}
