/*
game.rs

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

//! Manage the status of a word-search game in progress.
//!
//! A [`Session`] is one play-through: a generated grid, the words hidden in it, the cells the
//! player picked, and the timer.
//! Restarting the game or switching the language always builds a new grid, because the words
//! and the filler letters depend on the language.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::generator::grid::{Cell, Grid};
use crate::generator::word_search::{Candidate, Puzzle, PuzzleWord, WordSearchGenerator};
use crate::language::Language;
use crate::saver::instant;
use crate::selection::Selection;

/// Result of a player action.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Outcome {
    /// The action was not taken into account (game over, paused, or cell outside the grid).
    Ignored,

    /// The selection changed but does not spell a word yet.
    Pending,

    /// The selection spelled the word at the given index in [`Session::words`].
    Found { word: usize },

    /// The selection spelled the last word to find.
    Solved { word: usize, duration: Duration },
}

/// Manage the status of the word-search game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct Session {
    /// Active language.
    language: Language,

    /// Words to hide, in every language. Kept to rebuild the puzzle.
    candidates: Vec<Candidate>,

    /// Grid size and placement budget.
    generator: WordSearchGenerator,

    /// Grid and the words that could be placed.
    puzzle: Puzzle,

    /// Cells the player picked and that do not form a word yet.
    selection: Selection,

    /// Cells of the words the player found.
    found_cells: HashSet<Cell>,

    /// Number of words found.
    score: usize,

    /// Whether all the words are found.
    solved: bool,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Time when the game started. Used to compute game duration.
    #[serde(with = "instant")]
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// Game duration, frozen when the puzzle is solved.
    final_duration: Option<Duration>,
}

impl Session {
    /// Create a [`Session`] object and generate its puzzle.
    pub fn new<R: Rng + ?Sized>(
        candidates: Vec<Candidate>,
        language: Language,
        generator: WordSearchGenerator,
        rng: &mut R,
    ) -> Self {
        let mut session: Session = Self {
            language,
            candidates,
            generator,
            puzzle: Puzzle::default(),
            selection: Selection::new(),
            found_cells: HashSet::new(),
            score: 0,
            solved: false,
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
            final_duration: None,
        };
        session.restart(rng);
        session
    }

    /// Throw the current puzzle away and start a new one in the same language.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.puzzle = self
            .generator
            .generate(&self.candidates, self.language, rng);
        self.selection.clear();
        self.found_cells.clear();
        self.score = 0;
        self.solved = false;
        self.paused = false;
        self.start_time = Instant::now();
        self.pause_duration = None;
        self.final_duration = None;
        info!(
            "New {} puzzle with {} word(s)",
            self.language,
            self.puzzle.words.len()
        );
    }

    /// Switch to another language.
    ///
    /// A new puzzle is always generated, even if the language does not change.
    pub fn set_language<R: Rng + ?Sized>(&mut self, language: Language, rng: &mut R) {
        self.language = language;
        self.restart(rng);
    }

    /// Select or unselect a cell, and then check whether the selection spells a word.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Outcome {
        let cell: Cell = Cell::new(row, col);
        if self.solved || self.paused || !self.puzzle.grid.contains(cell) {
            return Outcome::Ignored;
        }
        self.selection.toggle(cell);
        self.evaluate_selection()
    }

    /// Check whether the current selection spells a word that is not found yet.
    ///
    /// The selected cells must form an unbroken horizontal or vertical line. The letters are
    /// read in grid order and compared, forward and backward, with the words to find.
    /// When a word matches, the selection is cleared. Otherwise, the selection is kept so that
    /// the player can continue adding or removing cells.
    pub fn evaluate_selection(&mut self) -> Outcome {
        if self.solved {
            return Outcome::Ignored;
        }
        let line: Vec<Cell> = match self.selection.line() {
            Some(l) => l,
            None => return Outcome::Pending,
        };
        let forward: String = match self.puzzle.grid.read(&line) {
            Some(letters) => letters.into_iter().collect(),
            None => return Outcome::Pending,
        };
        let backward: String = forward.chars().rev().collect();

        let index: usize = match self
            .puzzle
            .words
            .iter()
            .position(|w| !w.found && (w.word == forward || w.word == backward))
        {
            Some(i) => i,
            None => {
                debug!("Selection {forward} does not match any word");
                return Outcome::Pending;
            }
        };

        self.puzzle.words[index].found = true;
        self.found_cells.extend(line);
        self.selection.clear();
        self.score += 1;
        info!(
            "Found {} ({}/{})",
            self.puzzle.words[index].word,
            self.score,
            self.puzzle.words.len()
        );

        if self.puzzle.words.iter().all(|w| w.found) {
            let duration: Duration = self.elapsed();
            self.final_duration = Some(duration);
            self.solved = true;
            info!("Puzzle solved in {}s", duration.as_secs());
            return Outcome::Solved {
                word: index,
                duration,
            };
        }
        Outcome::Found { word: index }
    }

    /// Return the active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the grid.
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Return the words hidden in the grid, with their found status.
    pub fn words(&self) -> &[PuzzleWord] {
        &self.puzzle.words
    }

    /// Return the cells that the player picked.
    pub fn selection(&self) -> &[Cell] {
        self.selection.cells()
    }

    /// Whether the cell belongs to a word that the player found.
    pub fn is_found_cell(&self, cell: Cell) -> bool {
        self.found_cells.contains(&cell)
    }

    /// Return the number of words found and the number of words to find.
    pub fn score(&self) -> (usize, usize) {
        (self.score, self.puzzle.words.len())
    }

    /// Whether all the words are found.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.paused || self.solved {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration.
    pub fn elapsed(&self) -> Duration {
        if let Some(d) = self.final_duration {
            return d;
        }
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }

    /// Return the game duration in hours, minutes, and seconds.
    pub fn elapsed_hms(&self) -> (u64, u64, u64) {
        hms(self.elapsed())
    }
}

/// Split a duration in hours, minutes, and seconds.
pub fn hms(duration: Duration) -> (u64, u64, u64) {
    let secs: u64 = duration.as_secs();
    (secs / 3600, (secs % 3600) / 60, (secs % 3600) % 60)
}

/// Format a duration as `mm:ss`, or `hh:mm:ss` when it exceeds an hour.
pub fn clock(duration: Duration) -> String {
    let (hour, minute, second) = hms(duration);
    if hour > 0 {
        format!("{hour:02}:{minute:02}:{second:02}")
    } else {
        format!("{minute:02}:{second:02}")
    }
}
