// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand strength evaluator.
//!
//! Given a set of 5 or more cards this crate finds the best 5-cards poker
//! hand and classifies it into a [HandStrength]: the hand category, the
//! ranks that define it, and the kickers that break ties. Strengths are
//! totally ordered so competing hands can be compared at showdown:
//!
//! ```
//! # use showdown_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandStrength::classify(&cards[0..5]).unwrap();
//! let v2 = HandStrength::classify(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! ```
//!
//! A strength renders to a human readable description:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = ["2H", "2D", "2S", "5C", "5H"]
//!     .iter()
//!     .map(|t| t.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! let strength = HandStrength::classify(&cards).unwrap();
//! assert_eq!(strength.ranking(), HandRanking::FullHouse);
//! assert_eq!(strength.to_string(), "Full House: Twos and Fives.");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod classify;
mod ranking;
mod strength;

pub use classify::ClassifyError;
pub use ranking::HandRanking;
pub use strength::HandStrength;

// Reexport cards types.
pub use showdown_cards::{Card, CardCollection, Deck, Muck, ParseCardError, Rank, Suit};
