// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal cards rendering.
use crossterm::style::{StyledContent, Stylize};

use crate::{Card, Suit};

impl Card {
    /// The card styled for terminal output with its suit symbol, hearts and
    /// diamonds in red.
    pub fn styled(&self) -> StyledContent<String> {
        let text = format!("{}{}", self.rank(), self.suit().symbol());
        match self.suit() {
            Suit::Hearts | Suit::Diamonds => text.red(),
            Suit::Clubs | Suit::Spades => text.white(),
        }
    }
}
