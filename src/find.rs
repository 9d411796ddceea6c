/*
find.rs

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

//! "Find it": show the part that the narrator names.
//!
//! The parts are laid out in a random order. Picking the named part scores a point, shuffles
//! the board, and names another part. A wrong pick changes nothing, the player tries again.

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Result of picking a part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FindOutcome {
    /// No part at that position.
    Ignored,

    /// The named part was picked. The board was shuffled and a new part is named.
    Correct,

    /// Another part was picked.
    Wrong,
}

/// Manage the status of the find game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct FindGame {
    /// Parts in the order they are shown.
    board: Vec<String>,

    /// Part to find.
    target: String,

    score: usize,
}

impl FindGame {
    /// Create a [`FindGame`] object. Return None if there is no part to show.
    pub fn new<R: Rng + ?Sized>(entity_ids: Vec<String>, rng: &mut R) -> Option<Self> {
        if entity_ids.is_empty() {
            return None;
        }
        let target: String = entity_ids[rng.random_range(0..entity_ids.len())].clone();
        let mut game: FindGame = Self {
            board: entity_ids,
            target,
            score: 0,
        };
        game.board.shuffle(rng);
        debug!("Find {} first", game.target);
        Some(game)
    }

    /// Shuffle the board, name a new part, and reset the score.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.next_target(rng);
    }

    /// Shuffle the board and name a part that differs from the current one.
    ///
    /// With a single part on the board, the same part is named again.
    fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.shuffle(rng);
        let options: Vec<&String> = self.board.iter().filter(|id| **id != self.target).collect();
        if !options.is_empty() {
            self.target = options[rng.random_range(0..options.len())].clone();
        }
        debug!("Find {} now", self.target);
    }

    /// Pick the part at the given position of the board.
    pub fn pick<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> FindOutcome {
        match self.board.get(index) {
            None => FindOutcome::Ignored,
            Some(id) if *id == self.target => {
                self.score += 1;
                info!("Found {} (score {})", self.target, self.score);
                self.next_target(rng);
                FindOutcome::Correct
            }
            Some(_) => FindOutcome::Wrong,
        }
    }

    pub fn board(&self) -> &[String] {
        &self.board
    }

    /// Return the identifier of the part to find.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn score(&self) -> usize {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids() -> Vec<String> {
        ["monitor", "keyboard", "mouse", "printer"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn position_of(game: &FindGame, id: &str) -> usize {
        game.board().iter().position(|i| i == id).unwrap()
    }

    #[test]
    fn test_board_has_every_part() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = FindGame::new(ids(), &mut rng).unwrap();
        let mut board = g.board().to_vec();
        board.sort();
        let mut expected = ids();
        expected.sort();
        assert_eq!(board, expected);
        assert!(ids().contains(&g.target().to_string()));
        assert!(FindGame::new(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_target_never_repeats() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut g = FindGame::new(ids(), &mut rng).unwrap();
        for round in 1..=30 {
            let previous = g.target().to_string();
            let index = position_of(&g, &previous);
            assert_eq!(g.pick(index, &mut rng), FindOutcome::Correct);
            assert_eq!(g.score(), round);
            assert_ne!(g.target(), previous);
        }
    }

    #[test]
    fn test_wrong_pick_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut g = FindGame::new(ids(), &mut rng).unwrap();
        let target = g.target().to_string();
        let board = g.board().to_vec();
        let wrong = (0..board.len()).find(|i| board[*i] != target).unwrap();
        assert_eq!(g.pick(wrong, &mut rng), FindOutcome::Wrong);
        assert_eq!(g.pick(42, &mut rng), FindOutcome::Ignored);
        assert_eq!(g.target(), target);
        assert_eq!(g.board(), board.as_slice());
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn test_single_part() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut g = FindGame::new(vec!["mouse".to_string()], &mut rng).unwrap();
        assert_eq!(g.pick(0, &mut rng), FindOutcome::Correct);
        assert_eq!(g.target(), "mouse");
        g.restart(&mut rng);
        assert_eq!(g.score(), 0);
    }
}
