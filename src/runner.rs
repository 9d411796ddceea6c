/*
runner.rs

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

//! Drive a word-search [`Session`] for a front-end.
//!
//! The [`SessionRunner`] object routes the player actions to the session, and handles the side
//! effects: narration, the clock timer, and the scoreboard.

use log::{info, warn};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::game::{Outcome, Session};
use crate::highscores::{GameKind, HighScores};
use crate::language::Language;
use crate::narration::{ClipKind, Cue, Narrator};
use crate::saver::highscores::SaverHighScores;
use crate::ticker::Ticker;

/// Function called by the clock timer. Returns `false` to stop the timer.
pub type TickFn = Arc<dyn Fn(u64) -> bool + Send + Sync>;

/// Word-search session with its side effects.
pub struct SessionRunner<N: Narrator> {
    session: Session,
    narrator: N,
    highscores: HighScores,

    /// Where to save the scoreboards. Nothing is saved when None.
    saver: Option<SaverHighScores>,

    /// Clock period and callback.
    clock: Option<(Duration, TickFn)>,

    /// Running clock timer.
    ticker: Option<Ticker>,

    /// Position in the scoreboard of the last solved puzzle.
    last_position: Option<usize>,
}

impl<N: Narrator> SessionRunner<N> {
    /// Create a [`SessionRunner`] object.
    pub fn new(session: Session, narrator: N) -> Self {
        Self {
            session,
            narrator,
            highscores: HighScores::new(),
            saver: None,
            clock: None,
            ticker: None,
            last_position: None,
        }
    }

    /// Load and save the scoreboards with the given saver.
    pub fn with_saver(mut self, saver: SaverHighScores) -> Self {
        match saver.get_highscores() {
            Ok(Some(h)) => self.highscores = h,
            Ok(None) => (),
            Err(e) => warn!("Cannot read the high scores from {:?}: {e}", saver.path()),
        }
        self.saver = Some(saver);
        self
    }

    /// Call `on_tick` every `period` while a puzzle is being played.
    pub fn with_clock(mut self, period: Duration, on_tick: TickFn) -> Self {
        self.clock = Some((period, on_tick));
        self
    }

    /// Start playing the current puzzle.
    pub fn start(&mut self) {
        self.narrator.cue(Cue::StartGame, self.session.language());
        self.start_clock();
    }

    fn start_clock(&mut self) {
        self.stop_clock();
        if let Some((period, on_tick)) = &self.clock {
            let f: TickFn = Arc::clone(on_tick);
            self.ticker = Some(Ticker::start(*period, move |tick| f(tick)));
        }
    }

    fn stop_clock(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Select or unselect a cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> Outcome {
        let outcome: Outcome = self.session.toggle_cell(row, col);
        let language: Language = self.session.language();

        match outcome {
            Outcome::Found { word } => {
                self.narrator.cue(Cue::GoodAnswer, language);
                let id: String = self.session.words()[word].entity_id.clone();
                self.narrator.speak(&id, language, ClipKind::Name);
            }
            Outcome::Solved { word, duration } => {
                self.stop_clock();
                self.narrator.cue(Cue::GoodAnswer, language);
                let id: String = self.session.words()[word].entity_id.clone();
                self.narrator.speak(&id, language, ClipKind::Name);
                self.narrator.cue(Cue::GameWon, language);
                self.record_score(duration);
            }
            Outcome::Ignored | Outcome::Pending => (),
        }
        outcome
    }

    fn record_score(&mut self, duration: Duration) {
        let (found, _) = self.session.score();
        self.last_position = self.highscores.add_score(
            GameKind::WordSearch,
            self.session.language(),
            duration,
            found,
        );
        if let Some(position) = self.last_position {
            info!("New high score at position {position}");
            if let Some(saver) = &self.saver
                && let Err(e) = saver.save_highscores(&self.highscores)
            {
                warn!("Cannot save the high scores to {:?}: {e}", saver.path());
            }
        }
    }

    /// Start a new puzzle in the same language.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session.restart(rng);
        self.last_position = None;
        self.start();
    }

    /// Start a new puzzle in another language.
    pub fn set_language<R: Rng + ?Sized>(&mut self, language: Language, rng: &mut R) {
        self.session.set_language(language, rng);
        self.last_position = None;
        self.start();
    }

    /// Stop the clock. Call this method when the front-end leaves the game.
    pub fn shutdown(&mut self) {
        self.stop_clock();
    }

    /// Whether the clock timer is running.
    pub fn is_clock_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    /// Return the scoreboard position of the last solved puzzle, if it made it to the board.
    pub fn last_position(&self) -> Option<usize> {
        self.last_position
    }
}

impl<N: Narrator> Drop for SessionRunner<N> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::word_search::{Candidate, WordSearchGenerator};
    use crate::narration::RecordingNarrator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn runner(seed: u64) -> SessionRunner<RecordingNarrator> {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Session::new(
            vec![Candidate::new("ram", "RAM"), Candidate::new("cpu", "CPU")],
            Language::En,
            WordSearchGenerator::default(),
            &mut rng,
        );
        SessionRunner::new(session, RecordingNarrator::default())
            .with_clock(Duration::from_millis(5), Arc::new(|_| true))
    }

    fn select_word(r: &mut SessionRunner<RecordingNarrator>, index: usize) -> Outcome {
        let cells = r.session().words()[index].cells.clone();
        let mut outcome = Outcome::Pending;
        for c in cells {
            outcome = r.toggle(c.row, c.col);
        }
        outcome
    }

    #[test]
    fn test_found_word_is_narrated() {
        let mut r = runner(1);
        r.start();
        assert!(r.is_clock_running());
        assert_eq!(select_word(&mut r, 0), Outcome::Found { word: 0 });
        assert_eq!(
            r.narrator().spoken,
            vec![("ram".to_string(), Language::En, ClipKind::Name)]
        );
        assert_eq!(
            r.narrator().cues,
            vec![(Cue::StartGame, Language::En), (Cue::GoodAnswer, Language::En)]
        );
    }

    #[test]
    fn test_solve_stops_clock_and_records_score() {
        let mut r = runner(2);
        r.start();
        select_word(&mut r, 0);
        assert!(matches!(select_word(&mut r, 1), Outcome::Solved { .. }));
        assert!(!r.is_clock_running());
        assert_eq!(r.last_position(), Some(1));
        assert_eq!(r.narrator().cues.last(), Some(&(Cue::GameWon, Language::En)));
        let board = r
            .highscores()
            .get_score(GameKind::WordSearch, Language::En)
            .unwrap();
        assert_eq!(board[0].count, 2);
    }

    #[test]
    fn test_set_language_restarts_clock() {
        let mut r = runner(3);
        r.start();
        select_word(&mut r, 0);
        select_word(&mut r, 1);
        let mut rng = StdRng::seed_from_u64(4);
        r.set_language(Language::Fr, &mut rng);
        assert!(r.is_clock_running());
        assert_eq!(r.session().score(), (0, 2));
        assert_eq!(r.last_position(), None);
        r.shutdown();
        assert!(!r.is_clock_running());
    }

    #[test]
    fn test_scores_are_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = runner(5).with_saver(SaverHighScores::new(dir.path().to_path_buf()));
        r.start();
        select_word(&mut r, 0);
        select_word(&mut r, 1);
        let saved = SaverHighScores::new(dir.path().to_path_buf())
            .get_highscores()
            .unwrap()
            .unwrap();
        assert!(saved.get_score(GameKind::WordSearch, Language::En).is_some());
    }
}
