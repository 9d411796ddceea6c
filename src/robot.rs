/*
robot.rs

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

//! "Save the robot": guess the name of a part letter by letter.
//!
//! Each wrong letter drains the robot battery. The robot is saved when every letter of the
//! name is revealed, and switches off after [`MAX_ROBOT_ERRORS`] wrong letters.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::catalog::Entity;
use crate::config::MAX_ROBOT_ERRORS;
use crate::language::Language;
use crate::saver::instant;

/// Result of a guess.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RobotOutcome {
    /// Letter already tried, not a letter, or game over.
    Ignored,

    /// The letter is in the word.
    Hit,

    /// The letter is not in the word.
    Miss,

    /// The last missing letter was found.
    Won { duration: Duration },

    /// The battery is empty.
    Lost,
}

/// Status of the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum RobotState {
    Playing,
    Won,
    Lost,
}

/// Manage the status of the robot game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct RobotGame {
    language: Language,

    /// Part to guess.
    entity_id: String,

    /// Normalized letters of the part name.
    target: Vec<char>,

    /// Letters the player tried, in order.
    guessed: Vec<char>,

    /// Number of wrong letters.
    errors: usize,

    state: RobotState,

    #[serde(with = "instant")]
    start_time: Instant,

    final_duration: Option<Duration>,
}

impl RobotGame {
    /// Create a game for the given word. Return None if the word has no letter once normalized.
    pub fn with_word(entity_id: &str, text: &str, language: Language) -> Option<Self> {
        let target: Vec<char> = language.normalizer().letters(text);
        if target.is_empty() {
            return None;
        }
        Some(Self {
            language,
            entity_id: entity_id.to_string(),
            target,
            guessed: Vec::new(),
            errors: 0,
            state: RobotState::Playing,
            start_time: Instant::now(),
            final_duration: None,
        })
    }

    /// Create a game for a random part.
    pub fn new<R: Rng + ?Sized>(
        entities: &[Entity],
        language: Language,
        rng: &mut R,
    ) -> Option<Self> {
        if entities.is_empty() {
            return None;
        }
        let entity: &Entity = &entities[rng.random_range(0..entities.len())];
        Self::with_word(entity.id, entity.name(language), language)
    }

    /// Try a letter.
    pub fn guess(&mut self, letter: char) -> RobotOutcome {
        if self.state != RobotState::Playing {
            return RobotOutcome::Ignored;
        }
        let letter: char = match self
            .language
            .normalizer()
            .letters(&letter.to_string())
            .first()
        {
            Some(c) => *c,
            None => return RobotOutcome::Ignored,
        };
        if self.guessed.contains(&letter) {
            return RobotOutcome::Ignored;
        }
        self.guessed.push(letter);

        if !self.target.contains(&letter) {
            self.errors += 1;
            if self.errors >= MAX_ROBOT_ERRORS {
                self.state = RobotState::Lost;
                self.final_duration = Some(self.start_time.elapsed());
                info!("Robot lost: the word was {}", self.word());
                return RobotOutcome::Lost;
            }
            return RobotOutcome::Miss;
        }

        if self.target.iter().all(|c| self.guessed.contains(c)) {
            let duration: Duration = self.start_time.elapsed();
            self.state = RobotState::Won;
            self.final_duration = Some(duration);
            info!("Robot saved with {} error(s)", self.errors);
            return RobotOutcome::Won { duration };
        }
        RobotOutcome::Hit
    }

    /// Return the word with the letters not found yet replaced by `_`.
    pub fn masked(&self) -> String {
        self.target
            .iter()
            .map(|c| if self.guessed.contains(c) { *c } else { '_' })
            .collect()
    }

    /// Return the word to guess.
    pub fn word(&self) -> String {
        self.target.iter().collect()
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Return the remaining battery, from 100 to 0.
    pub fn power_percent(&self) -> usize {
        MAX_ROBOT_ERRORS.saturating_sub(self.errors) * 100 / MAX_ROBOT_ERRORS
    }

    /// Return the game duration.
    pub fn elapsed(&self) -> Duration {
        self.final_duration
            .unwrap_or_else(|| self.start_time.elapsed())
    }
}
