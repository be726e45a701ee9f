// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Classifies the cards given on the command line:
//
// ```bash
// $ cargo r --example classify -- AS KS QS JS TS
// Straight Flush: Ace.
//
// $ cargo r --example classify -- 2H 2D 2S 5C 5H
// Full House: Twos and Fives.
// ```

use anyhow::Result;
use clap::Parser;

use showdown_eval::{Card, HandStrength};

#[derive(Parser)]
#[command(about = "Classify a poker hand from card tokens")]
struct Args {
    /// The cards tokens, at least five, e.g. AS KD 2H 5C TH.
    #[arg(required = true, num_args = 1..)]
    cards: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cards = args
        .cards
        .iter()
        .map(|token| token.parse::<Card>().map_err(Into::into))
        .collect::<Result<Vec<_>>>()?;

    log::info!("classifying {} cards", cards.len());

    let strength = HandStrength::classify(&cards)?;
    println!("{strength}");

    Ok(())
}
