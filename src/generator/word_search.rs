/*
word_search.rs

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

//! Build a word-search puzzle from a list of candidate words.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::grid::{Cell, Grid};
use super::placement::Placement;
use crate::catalog::Entity;
use crate::config::{GRID_SIZE, MAX_PLACEMENT_TRIALS};
use crate::language::Language;

/// Word that the generator tries to hide in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Identifier of the part the word names.
    pub entity_id: String,

    /// Text to hide, per language.
    texts: BTreeMap<Language, String>,
}

impl Candidate {
    /// Create a candidate that uses the same text in every language.
    pub fn new(entity_id: &str, text: &str) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            texts: Language::ALL
                .into_iter()
                .map(|l| (l, text.to_string()))
                .collect(),
        }
    }

    /// Create a candidate from a part, using its short name when it has one.
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            entity_id: entity.id.to_string(),
            texts: Language::ALL
                .into_iter()
                .map(|l| (l, entity.puzzle_name(l).to_string()))
                .collect(),
        }
    }

    /// Return the text for the given language.
    pub fn text(&self, language: Language) -> &str {
        self.texts.get(&language).map(|s| s.as_str()).unwrap_or("")
    }
}

/// Build the candidate list for a list of parts.
pub fn candidates(entities: &[Entity]) -> Vec<Candidate> {
    entities.iter().map(Candidate::from_entity).collect()
}

/// Word hidden in a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleWord {
    /// Normalized letters, as they appear in the grid.
    pub word: String,

    /// Text from which the word was built.
    pub display: String,

    /// Whether the player found the word.
    pub found: bool,

    /// Identifier of the part the word names.
    pub entity_id: String,

    /// Cells of the word, from its first letter. Empty until the word is placed.
    pub cells: Vec<Cell>,
}

impl PuzzleWord {
    /// Return the normalized letters.
    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }

    /// Return the number of letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }
}

/// Grid and the words hidden in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<PuzzleWord>,
}

/// Word-search puzzle generator.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct WordSearchGenerator {
    /// Number of rows and columns in the grid.
    pub size: usize,

    /// Number of random placements to try for each word.
    pub max_trials: usize,
}

impl Default for WordSearchGenerator {
    fn default() -> Self {
        Self::new(GRID_SIZE, MAX_PLACEMENT_TRIALS)
    }
}

impl WordSearchGenerator {
    /// Create a [`WordSearchGenerator`] object.
    pub fn new(size: usize, max_trials: usize) -> Self {
        Self { size, max_trials }
    }

    /// Normalize the candidates for the given language and keep the words that fit in the grid.
    ///
    /// The order of the candidates is preserved.
    pub fn prepare(&self, candidates: &[Candidate], language: Language) -> Vec<PuzzleWord> {
        let mut ret: Vec<PuzzleWord> = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let display: &str = candidate.text(language);
            let word: String = language.normalizer().normalize(display);
            let len: usize = word.chars().count();
            if len == 0 || len > self.size {
                debug!(
                    "Dropping {:?} ({}): {len} letters for a {} grid",
                    display, candidate.entity_id, self.size
                );
                continue;
            }
            ret.push(PuzzleWord {
                word,
                display: display.to_string(),
                found: false,
                entity_id: candidate.entity_id.clone(),
                cells: Vec::new(),
            });
        }
        ret
    }

    /// Try to find a place for the word in the grid.
    ///
    /// Return None when all the trials failed.
    fn place<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        word: &[char],
        rng: &mut R,
    ) -> Option<Placement> {
        for trial in 0..self.max_trials {
            let placement: Placement = Placement::random(self.size, word.len(), rng);
            if grid.fits(&placement, word) {
                debug!("Placed after {} trial(s): {placement:?}", trial + 1);
                return Some(placement);
            }
        }
        None
    }

    /// Generate a puzzle.
    ///
    /// Words that cannot be placed are left out of the returned puzzle. The grid is always
    /// completely filled.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        candidates: &[Candidate],
        language: Language,
        rng: &mut R,
    ) -> Puzzle {
        let mut grid: Grid = Grid::new(self.size);
        let mut words: Vec<PuzzleWord> = Vec::new();

        for mut word in self.prepare(candidates, language) {
            let letters: Vec<char> = word.letters();
            match self.place(&grid, &letters, rng) {
                Some(placement) => {
                    grid.write(&placement, &letters);
                    word.cells = placement.cells(letters.len());
                    words.push(word);
                }
                None => debug!(
                    "Giving up on {} after {} trials",
                    word.word, self.max_trials
                ),
            }
        }

        grid.fill(&language.alphabet(), rng);
        debug!(
            "Puzzle with {} word(s) for language {language}:\n{grid}",
            words.len()
        );
        Puzzle { grid, words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COMPUTER_PARTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Candidate> {
        list.iter()
            .map(|w| Candidate::new(&w.to_lowercase(), w))
            .collect()
    }

    #[test]
    fn test_prepare_filters_and_normalizes() {
        let generator = WordSearchGenerator::default();
        let prepared = generator.prepare(
            &words(&["Écran", "12", "Unité Centrale", "RAM"]),
            Language::Fr,
        );
        let list: Vec<&str> = prepared.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(list, vec!["ECRAN", "RAM"]);
        assert_eq!(prepared[0].display, "Écran");
        assert!(!prepared[0].found);
    }

    #[test]
    fn test_placed_words_read_back() {
        let generator = WordSearchGenerator::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generator.generate(&words(&["RAM", "CPU", "FAN"]), Language::En, &mut rng);
            assert!(puzzle.grid.is_complete());
            for word in &puzzle.words {
                assert_eq!(word.cells.len(), word.len());
                assert_eq!(puzzle.grid.read(&word.cells), Some(word.letters()));
            }
        }
    }

    #[test]
    fn test_every_cell_is_a_letter_of_the_language() {
        let generator = WordSearchGenerator::default();
        for language in Language::ALL {
            for seed in 0..5 {
                let mut rng = StdRng::seed_from_u64(seed);
                let puzzle = generator.generate(&candidates(&COMPUTER_PARTS), language, &mut rng);
                for row in puzzle.grid.rows() {
                    assert_eq!(row.len(), 10);
                    assert!(row.iter().all(|c| language.is_letter(*c)), "{language}: {row:?}");
                }
            }
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_excluded() {
        let generator = WordSearchGenerator::default();
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = generator.generate(
            &words(&["MOTHERBOARDS", "RAM", "CPU"]),
            Language::En,
            &mut rng,
        );
        assert!(puzzle.words.iter().all(|w| w.word != "MOTHERBOARDS"));
        assert_eq!(puzzle.words.len(), 2);
    }

    #[test]
    fn test_unplaceable_word_is_dropped() {
        // Two-by-two grid: "AB" and "CD" cannot both fit on the same line, and a one trial
        // budget makes collisions likely. Whatever happens, the words that are kept are
        // readable and no placed word conflicts with another.
        let generator = WordSearchGenerator::new(2, 1);
        let mut dropped = false;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generator.generate(&words(&["AB", "CD", "EF"]), Language::En, &mut rng);
            if puzzle.words.len() < 3 {
                dropped = true;
            }
            for word in &puzzle.words {
                assert_eq!(puzzle.grid.read(&word.cells), Some(word.letters()));
            }
        }
        assert!(dropped);
    }

    #[test]
    fn test_zero_trials_places_nothing() {
        let generator = WordSearchGenerator::new(10, 0);
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = generator.generate(&words(&["RAM"]), Language::En, &mut rng);
        assert!(puzzle.words.is_empty());
        assert!(puzzle.grid.is_complete());
    }

    #[test]
    fn test_arabic_words() {
        let generator = WordSearchGenerator::default();
        let mut rng = StdRng::seed_from_u64(9);
        let puzzle = generator.generate(&candidates(&COMPUTER_PARTS), Language::Ar, &mut rng);
        assert!(!puzzle.words.is_empty());
        for word in &puzzle.words {
            assert!(word.word.chars().all(|c| Language::Ar.is_letter(c)));
        }

        // Filler cells use the base alphabet only
        let alphabet = Language::Ar.alphabet();
        let word_cells: Vec<Cell> = puzzle.words.iter().flat_map(|w| w.cells.clone()).collect();
        for (r, row) in puzzle.grid.rows().iter().enumerate() {
            for (c, letter) in row.iter().enumerate() {
                if !word_cells.contains(&Cell::new(r, c)) {
                    assert!(alphabet.contains(letter));
                }
            }
        }
    }
}
