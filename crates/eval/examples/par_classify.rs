// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Classifies sampled 7 cards hands from parallel tasks, classification is
// pure so tasks share nothing but the deck they sample from:
//
// ```bash
// $ cargo r --release --example par_classify
// Classified 400000 hands
// Best hand: Straight Flush: King.
// ```

use rand::prelude::*;
use std::thread;

use showdown_eval::{Card, Deck, HandStrength};

const NUM_TASKS: usize = 4;
const HANDS_PER_TASK: usize = 100_000;

fn main() {
    let deck = Deck::default().into_iter().collect::<Vec<_>>();

    let best = thread::scope(|s| {
        let tasks = (0..NUM_TASKS)
            .map(|_| {
                let deck = &deck;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    let mut best: Option<HandStrength> = None;

                    for _ in 0..HANDS_PER_TASK {
                        let hand = deck
                            .choose_multiple(&mut rng, 7)
                            .copied()
                            .collect::<Vec<Card>>();
                        let strength =
                            HandStrength::classify(&hand).expect("deck cards are unique");
                        if best.as_ref().is_none_or(|b| strength > *b) {
                            best = Some(strength);
                        }
                    }

                    best
                })
            })
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .filter_map(|task| task.join().expect("task panicked"))
            .max()
    });

    println!("Classified {} hands", NUM_TASKS * HANDS_PER_TASK);
    println!("Best hand: {}", best.expect("at least one hand"));
}
