/*
sorter.rs

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

//! The sorter: send each part to the input or the output side of the computer.
//!
//! Only the input and output parts take part. They come one at a time from a shuffled queue,
//! and a new queue is shuffled when the previous one is empty.

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category};

/// Result of sorting the current part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SortOutcome {
    /// Not a side the part can be sent to.
    Ignored,

    /// Right side. The next part is shown.
    Correct,

    /// Wrong side. The part stays, the player tries again.
    Wrong,
}

/// A part to sort.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SortItem {
    pub entity_id: String,
    pub category: Category,
}

/// Manage the status of the sorter game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct SorterGame {
    /// Every part that can be sorted.
    items: Vec<SortItem>,

    /// Parts still to come, the next one last.
    queue: Vec<SortItem>,

    current: SortItem,

    score: usize,
}

impl SorterGame {
    /// Create a [`SorterGame`] object from a list of parts.
    ///
    /// Parts that are neither input nor output devices are left out. Return None if no part
    /// remains.
    pub fn new<R: Rng + ?Sized>(items: Vec<SortItem>, rng: &mut R) -> Option<Self> {
        let items: Vec<SortItem> = items
            .into_iter()
            .filter(|i| matches!(i.category, Category::Input | Category::Output))
            .collect();
        let current: SortItem = items.first()?.clone();
        let mut game: SorterGame = Self {
            items,
            queue: Vec::new(),
            current,
            score: 0,
        };
        game.advance(rng);
        Some(game)
    }

    /// Create a [`SorterGame`] object with the input and output parts of the catalog.
    pub fn from_catalog<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        let items: Vec<SortItem> = [Category::Input, Category::Output]
            .into_iter()
            .flat_map(catalog::by_category)
            .map(|e| SortItem {
                entity_id: e.id.to_string(),
                category: e.category,
            })
            .collect();
        Self::new(items, rng)
    }

    /// Show the next part, shuffling a new queue when needed.
    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.queue.is_empty() {
            self.queue = self.items.clone();
            self.queue.shuffle(rng);
            debug!("New queue of {} part(s)", self.queue.len());
        }
        if let Some(item) = self.queue.pop() {
            self.current = item;
        }
    }

    /// Start again with a new queue and a zero score.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.queue.clear();
        self.score = 0;
        self.advance(rng);
    }

    /// Send the current part to the given side.
    pub fn choose<R: Rng + ?Sized>(&mut self, category: Category, rng: &mut R) -> SortOutcome {
        if category == Category::Processing {
            return SortOutcome::Ignored;
        }
        if category != self.current.category {
            return SortOutcome::Wrong;
        }
        self.score += 1;
        info!(
            "{} sorted as {category} (score {})",
            self.current.entity_id, self.score
        );
        self.advance(rng);
        SortOutcome::Correct
    }

    /// Return the part to sort.
    pub fn current(&self) -> &SortItem {
        &self.current
    }

    /// Number of parts left before the queue is shuffled again.
    pub fn remaining(&self) -> usize {
        self.queue.len()
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

    fn item(id: &str, category: Category) -> SortItem {
        SortItem {
            entity_id: id.to_string(),
            category,
        }
    }

    fn game(seed: u64) -> (SorterGame, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = SorterGame::new(
            vec![
                item("keyboard", Category::Input),
                item("tower", Category::Processing),
                item("monitor", Category::Output),
                item("mouse", Category::Input),
            ],
            &mut rng,
        )
        .unwrap();
        (g, rng)
    }

    #[test]
    fn test_processing_parts_are_left_out() {
        let (mut g, mut rng) = game(1);
        for _ in 0..20 {
            assert_ne!(g.current().entity_id, "tower");
            let category = g.current().category;
            g.choose(category, &mut rng);
        }
        let mut empty = StdRng::seed_from_u64(0);
        assert!(SorterGame::new(vec![item("tower", Category::Processing)], &mut empty).is_none());
    }

    #[test]
    fn test_wrong_side_is_only_feedback() {
        let (mut g, mut rng) = game(2);
        let before = g.current().clone();
        let remaining = g.remaining();
        let wrong = match before.category {
            Category::Input => Category::Output,
            _ => Category::Input,
        };
        assert_eq!(g.choose(wrong, &mut rng), SortOutcome::Wrong);
        assert_eq!(g.choose(Category::Processing, &mut rng), SortOutcome::Ignored);
        assert_eq!(g.current(), &before);
        assert_eq!(g.remaining(), remaining);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn test_queue_shows_every_part_then_reshuffles() {
        let (mut g, mut rng) = game(3);
        assert_eq!(g.remaining(), 2);
        let mut seen = vec![g.current().entity_id.clone()];
        for _ in 0..2 {
            let category = g.current().category;
            assert_eq!(g.choose(category, &mut rng), SortOutcome::Correct);
            seen.push(g.current().entity_id.clone());
        }
        seen.sort();
        assert_eq!(seen, vec!["keyboard", "monitor", "mouse"]);

        // The queue is empty: the next correct answer starts a new one
        let category = g.current().category;
        g.choose(category, &mut rng);
        assert_eq!(g.remaining(), 2);
        assert_eq!(g.score(), 3);
    }

    #[test]
    fn test_catalog_parts() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut g = SorterGame::from_catalog(&mut rng).unwrap();
        assert_eq!(g.remaining(), 4);
        g.restart(&mut rng);
        assert_eq!(g.score(), 0);
        assert_ne!(g.current().category, Category::Processing);
    }
}
