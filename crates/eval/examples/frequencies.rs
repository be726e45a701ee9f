// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example frequencies
// Total hands      2598960
// Elapsed:         0.531s
// Hands/sec:       4894463
//
// High Card:       1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use showdown_eval::{Deck, HandRanking, HandStrength};

#[rustfmt::skip]
fn main() {
    // Classify all 2.6M five cards hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(5, |hand| {
        let ranking = HandStrength::classify(hand).expect("deck cards are unique").ranking();
        counts[ranking as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRanking::HighCard as usize]);
    println!("One Pair:        {}", counts[HandRanking::OnePair as usize]);
    println!("Two Pair:        {}", counts[HandRanking::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRanking::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRanking::Straight as usize]);
    println!("Flush:           {}", counts[HandRanking::Flush as usize]);
    println!("Full House:      {}", counts[HandRanking::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRanking::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRanking::StraightFlush as usize]);
}
