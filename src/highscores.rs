/*
highscores.rs

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

//! Manage high scores for the games.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each game and language.
//! This object is saved when the player wins a game and makes it to the scoreboard, and
//! is restored when the application starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, SystemTime};

use crate::config::BOARD_SIZE;
use crate::language::Language;

/// Games of the application.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    #[default]
    WordSearch,
    Memory,
    Robot,
    Find,
    Sorter,
}

impl GameKind {
    /// Games that end, and therefore keep a scoreboard. The other games run until the player
    /// leaves.
    pub const WITH_SCOREBOARD: [GameKind; 3] =
        [GameKind::WordSearch, GameKind::Memory, GameKind::Robot];

    pub fn has_scoreboard(&self) -> bool {
        Self::WITH_SCOREBOARD.contains(self)
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameKind::WordSearch => write!(f, "word-search"),
            GameKind::Memory => write!(f, "memory"),
            GameKind::Robot => write!(f, "robot"),
            GameKind::Find => write!(f, "find"),
            GameKind::Sorter => write!(f, "sorter"),
        }
    }
}

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// How long did it take to win the game.
    pub time: Duration,

    /// Game-specific counter: words found, memory moves, or robot mistakes.
    pub count: usize,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a game.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct HighScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl HighScoreBoard {
    /// Create a [`HighScoreBoard`] object.
    fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, time: Duration, count: usize) -> Option<usize> {
        // Equal times keep their arrival order
        let position: usize = self.top.iter().take_while(|s| s.time <= time).count();
        if position >= BOARD_SIZE {
            return None;
        }
        self.top.insert(
            position,
            Score {
                time,
                count,
                when: SystemTime::now(),
            },
        );
        self.top.truncate(BOARD_SIZE);
        Some(position + 1)
    }
}

/// List of the scoreboards for the games.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HighScores {
    /// Map of the [`HighScoreBoard`] scoreboards.
    ///
    /// The index is a string in the format "<game>@@<language>".
    board: HashMap<String, HighScoreBoard>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(game: GameKind, language: Language) -> String {
        format!("{game}@@{language}")
    }

    /// Add a score to the scoreboard of the given game and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        game: GameKind,
        language: Language,
        time: Duration,
        count: usize,
    ) -> Option<usize> {
        self.board
            .entry(Self::build_key(game, language))
            .or_insert_with(HighScoreBoard::new)
            .add_score(time, count)
    }

    /// Return the list of [`Score`] for the given game.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, game: GameKind, language: Language) -> Option<&Vec<Score>> {
        self.board
            .get(&Self::build_key(game, language))
            .map(|b| &b.top)
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any game)
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}
