/*
memory.rs

Copyright 2025 Hervé Quatremain

This file is part of Kidcomputer.

Kidcomputer is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kidcomputer is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kidcomputer. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Memory game: find the pairs of parts.
//!
//! Every part is on two cards. The player flips two cards per move. When both show the same
//! part they stay visible, otherwise the front-end shows them for a moment and then calls
//! [`MemoryGame::hide_mismatch`].

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::saver::instant;

/// A card of the deck.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemoryCard {
    /// Part shown on the card.
    pub entity_id: String,

    /// Whether the card shows its face.
    pub flipped: bool,

    /// Whether the pair of the card was found.
    pub matched: bool,
}

/// Result of flipping a card.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MemoryOutcome {
    /// The card cannot be flipped now.
    Ignored,

    /// First card of the move.
    FirstFlipped,

    /// The two flipped cards show the same part.
    Matched,

    /// The two flipped cards differ. They stay visible until [`MemoryGame::hide_mismatch`].
    Mismatch,

    /// The last pair was found.
    Solved { duration: Duration },
}

/// Manage the status of the memory game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct MemoryGame {
    /// Parts in the deck, one entry per pair.
    entity_ids: Vec<String>,

    cards: Vec<MemoryCard>,

    /// Indexes of the face-up cards of the current move.
    flipped: Vec<usize>,

    /// Number of moves (pairs of flipped cards).
    moves: usize,

    solved: bool,

    #[serde(with = "instant")]
    start_time: Instant,

    /// Game duration, frozen when all the pairs are found.
    final_duration: Option<Duration>,
}

impl MemoryGame {
    /// Create a [`MemoryGame`] object with a shuffled deck.
    pub fn new<R: Rng + ?Sized>(entity_ids: Vec<String>, rng: &mut R) -> Self {
        let mut game: MemoryGame = Self {
            entity_ids,
            cards: Vec::new(),
            flipped: Vec::with_capacity(2),
            moves: 0,
            solved: false,
            start_time: Instant::now(),
            final_duration: None,
        };
        game.restart(rng);
        game
    }

    /// Shuffle a new deck and reset the timer.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut deck: Vec<&String> = self
            .entity_ids
            .iter()
            .chain(self.entity_ids.iter())
            .collect();
        deck.shuffle(rng);
        self.cards = deck
            .into_iter()
            .map(|id| MemoryCard {
                entity_id: id.clone(),
                flipped: false,
                matched: false,
            })
            .collect();
        self.flipped.clear();
        self.moves = 0;
        self.solved = false;
        self.start_time = Instant::now();
        self.final_duration = None;
    }

    /// Flip the card at the given index.
    pub fn flip(&mut self, index: usize) -> MemoryOutcome {
        if self.solved || self.flipped.len() >= 2 {
            return MemoryOutcome::Ignored;
        }
        match self.cards.get_mut(index) {
            Some(card) if !card.flipped && !card.matched => card.flipped = true,
            _ => return MemoryOutcome::Ignored,
        }
        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return MemoryOutcome::FirstFlipped;
        }

        self.moves += 1;
        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.cards[first].entity_id != self.cards[second].entity_id {
            return MemoryOutcome::Mismatch;
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.flipped.clear();
        if self.cards.iter().all(|c| c.matched) {
            let duration: Duration = self.start_time.elapsed();
            self.final_duration = Some(duration);
            self.solved = true;
            info!("Memory game solved in {} moves", self.moves);
            return MemoryOutcome::Solved { duration };
        }
        MemoryOutcome::Matched
    }

    /// Turn the two cards of a failed move face down.
    pub fn hide_mismatch(&mut self) {
        if self.flipped.len() < 2 {
            return;
        }
        for index in self.flipped.drain(..) {
            self.cards[index].flipped = false;
        }
    }

    /// Whether two different cards are face up and must be hidden before the next move.
    pub fn is_mismatch_pending(&self) -> bool {
        self.flipped.len() == 2
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Return the game duration.
    pub fn elapsed(&self) -> Duration {
        self.final_duration
            .unwrap_or_else(|| self.start_time.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> MemoryGame {
        let mut rng = StdRng::seed_from_u64(42);
        MemoryGame::new(vec!["mouse".to_string(), "printer".to_string()], &mut rng)
    }

    fn pair_of(game: &MemoryGame, index: usize) -> usize {
        let id = &game.cards()[index].entity_id;
        (0..game.cards().len())
            .find(|i| *i != index && game.cards()[*i].entity_id == *id)
            .unwrap()
    }

    fn other_than(game: &MemoryGame, index: usize) -> usize {
        let id = &game.cards()[index].entity_id;
        (0..game.cards().len())
            .find(|i| game.cards()[*i].entity_id != *id)
            .unwrap()
    }

    #[test]
    fn test_deck_has_pairs() {
        let g = game();
        assert_eq!(g.cards().len(), 4);
        for card in g.cards() {
            let n = g
                .cards()
                .iter()
                .filter(|c| c.entity_id == card.entity_id)
                .count();
            assert_eq!(n, 2);
        }
    }

    #[test]
    fn test_mismatch_then_hide() {
        let mut g = game();
        let other = other_than(&g, 0);
        assert_eq!(g.flip(0), MemoryOutcome::FirstFlipped);
        assert_eq!(g.flip(0), MemoryOutcome::Ignored);
        assert_eq!(g.flip(other), MemoryOutcome::Mismatch);
        assert!(g.is_mismatch_pending());

        // Nothing can be flipped until the cards are hidden
        let third = pair_of(&g, 0);
        assert_eq!(g.flip(third), MemoryOutcome::Ignored);
        g.hide_mismatch();
        assert!(!g.cards()[0].flipped);
        assert!(!g.cards()[other].flipped);
        assert_eq!(g.moves(), 1);
    }

    #[test]
    fn test_solve() {
        let mut g = game();
        let p0 = pair_of(&g, 0);
        g.flip(0);
        assert_eq!(g.flip(p0), MemoryOutcome::Matched);
        assert_eq!(g.flip(p0), MemoryOutcome::Ignored);

        let rest: Vec<usize> = (0..4).filter(|i| *i != 0 && *i != p0).collect();
        g.flip(rest[0]);
        assert!(matches!(g.flip(rest[1]), MemoryOutcome::Solved { .. }));
        assert!(g.is_solved());
        assert_eq!(g.moves(), 2);

        let frozen = g.elapsed();
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(g.elapsed(), frozen);
        assert_eq!(g.flip(0), MemoryOutcome::Ignored);
    }

    #[test]
    fn test_restart() {
        let mut g = game();
        g.flip(0);
        let mut rng = StdRng::seed_from_u64(1);
        g.restart(&mut rng);
        assert_eq!(g.moves(), 0);
        assert!(g.cards().iter().all(|c| !c.flipped && !c.matched));
    }
}
