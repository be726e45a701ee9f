// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the given cards with terminal colors:
//
// ```bash
// $ cargo r --features=cli --example show -- AS KD 5H TC
// ```

use anyhow::Result;

use showdown_cards::Card;

fn main() -> Result<()> {
    for token in std::env::args().skip(1) {
        let card = token.parse::<Card>()?;
        print!("{} ", card.styled());
    }

    println!();

    Ok(())
}
