// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ordered cards containers.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Card;

/// An ordered collection of cards with indexed access.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card to the collection.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The card at the given position.
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Number of cards in the collection.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the collection contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterates the cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The cards as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CardCollection {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl fmt::Display for CardCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, card) in self.cards.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// The muck, a pile of discarded cards.
///
/// Cards that hit the muck are out of play for the rest of the hand, so the
/// pile accepts cards and reports how many it holds but exposes no way to
/// read them back.
#[derive(Debug, Default)]
pub struct Muck {
    cards: Vec<Card>,
}

impl Muck {
    /// Creates an empty muck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards a card into the muck.
    pub fn discard(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Discards all the given cards into the muck.
    pub fn discard_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Number of cards in the muck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the muck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank, Suit};

    #[test]
    fn collection_ordered_access() {
        let mut cards = CardCollection::new();
        assert!(cards.is_empty());
        assert_eq!(cards.get(0), None);

        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        cards.push(as_);
        cards.push(kd);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards.get(0), Some(as_));
        assert_eq!(cards.get(1), Some(kd));
        assert_eq!(cards.get(2), None);
        assert!(cards.contains(kd));
        assert!(!cards.contains(Card::new(Rank::Deuce, Suit::Hearts)));
    }

    #[test]
    fn collection_to_string() {
        let cards = ["AS", "KD", "5H"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect::<CardCollection>();
        assert_eq!(cards.to_string(), "AS KD 5H");

        assert_eq!(CardCollection::new().to_string(), "");
    }

    #[test]
    fn muck_exposes_only_count() {
        let mut deck = Deck::default();
        let mut muck = Muck::new();
        assert!(muck.is_empty());

        let card = deck.deal().unwrap();
        muck.discard(card);
        assert_eq!(muck.count(), 1);

        muck.discard_all((0..3).map(|_| deck.deal().unwrap()));
        assert_eq!(muck.count(), 4);
        assert!(!muck.is_empty());
    }
}
