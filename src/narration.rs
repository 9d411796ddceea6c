/*
narration.rs

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

//! Spoken clips.
//!
//! The games never wait for a clip, and a missing or broken clip never stops a game: the
//! [`Narrator`] methods return nothing and report problems in the log only.

use log::{info, warn};
use std::path::PathBuf;

use crate::language::Language;

/// Kind of clip recorded for each part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClipKind {
    /// The part name.
    Name,

    /// A sentence that describes the part.
    Description,
}

/// Game events that have their own clip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cue {
    StartGame,
    GoodAnswer,
    WrongAnswer,
    GameWon,
    GameLost,
}

impl Cue {
    fn key(&self) -> &'static str {
        match self {
            Cue::StartGame => "start_game",
            Cue::GoodAnswer => "good_answer",
            Cue::WrongAnswer => "wrong_answer",
            Cue::GameWon => "game_won",
            Cue::GameLost => "game_lost",
        }
    }
}

/// Play clips in the user language.
pub trait Narrator {
    /// Say the name or the description of a part.
    fn speak(&mut self, entity_id: &str, language: Language, kind: ClipKind);

    /// Play the clip associated with a game event.
    fn cue(&mut self, cue: Cue, language: Language);
}

/// Clip file names, per part and language: (name clip, description clip).
const CLIPS: &[(&str, [(&str, &str); 3])] = &[
    (
        "monitor",
        [
            ("french/Lecran1.mp3", "french/Lecran2.mp3"),
            ("English/englishscreen1.mp3", "English/englishscreen2.mp3"),
            ("arabic/arabicecran1.mp3", "arabic/arabicecran2.mp3"),
        ],
    ),
    (
        "keyboard",
        [
            ("french/Leclavier1.mp3", "french/Leclavier2.mp3"),
            ("English/EnglishKeyboard1.mp3", "English/EnglishKeyboard2.mp3"),
            ("arabic/arabicclavier1.mp3", "arabic/arabicclavier2.mp3"),
        ],
    ),
    (
        "mouse",
        [
            ("french/Lasouris1.mp3", "french/Lasouris2.mp3"),
            ("English/EnglishMouse1.mp3", "English/EnglishMouse2.mp3"),
            ("arabic/arabic-souris1.mp3", "arabic/arabic-souris2.mp3"),
        ],
    ),
    (
        "tower",
        [
            // No description clip was recorded in French
            ("french/Lunitecentrale1.mp3", "french/Lunitecentrale1.mp3"),
            (
                "English/EnglishCentralUnit1.mp3",
                "English/EnglishCentralUnit2.mp3",
            ),
            (
                "arabic/arabicunitecentrale1.mp3",
                "arabic/arabicunitecentrale2.mp3",
            ),
        ],
    ),
    (
        "speakers",
        [
            ("french/hautparleur1.mp3", "french/hautparleur2.mp3"),
            ("English/EnglishSpeakers1.mp3", "English/EnglishSpeakers2.mp3"),
            (
                "arabic/arabichautparleur1.mp3",
                "arabic/arabichautparleur2.mp3",
            ),
        ],
    ),
    (
        "printer",
        [
            ("french/imprimante1.mp3", "french/imprimante2.mp3"),
            ("English/Englishprinter1.mp3", "English/Englishprinter2.mp3"),
            ("arabic/arabicimprimante1.mp3", "arabic/arabicimprimante2.mp3"),
        ],
    ),
];

/// Resolve clips to files in the audio directory.
#[derive(Debug, Clone)]
pub struct AudioMap {
    /// Directory that contains the `french`, `English`, and `arabic` clip directories.
    base_dir: PathBuf,
}

impl AudioMap {
    /// Create an [`AudioMap`] object for the given audio directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Return the path of the clip for a part, or None if no clip was recorded.
    pub fn clip(&self, entity_id: &str, language: Language, kind: ClipKind) -> Option<PathBuf> {
        let id: String = entity_id.to_lowercase();
        let (_, per_language) = CLIPS.iter().find(|(k, _)| *k == id)?;
        let (name, description) = per_language[language as usize];
        let file: &str = match kind {
            ClipKind::Name => name,
            ClipKind::Description => description,
        };
        Some(self.base_dir.join(file))
    }

    /// Return the path of the clip for a game event.
    pub fn cue(&self, cue: Cue, language: Language) -> PathBuf {
        self.base_dir
            .join("cues")
            .join(format!("{}_{}.mp3", cue.key(), language.code()))
    }
}

/// Narrator that resolves clips and reports them in the log.
///
/// Audio output is provided by the front-end; this object only checks that the clip exists.
#[derive(Debug)]
pub struct LogNarrator {
    map: AudioMap,
}

impl LogNarrator {
    pub fn new(map: AudioMap) -> Self {
        Self { map }
    }
}

impl Narrator for LogNarrator {
    fn speak(&mut self, entity_id: &str, language: Language, kind: ClipKind) {
        match self.map.clip(entity_id, language, kind) {
            Some(path) => {
                if path.is_file() {
                    info!("Playing {path:?}");
                } else {
                    warn!("Missing audio clip {path:?}");
                }
            }
            None => warn!("No audio map found for part {entity_id} in language {language}"),
        }
    }

    fn cue(&mut self, cue: Cue, language: Language) {
        let path: PathBuf = self.map.cue(cue, language);
        if path.is_file() {
            info!("Playing {path:?}");
        } else {
            warn!("Missing audio clip {path:?}");
        }
    }
}

/// Narrator that remembers what it was asked to play.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingNarrator {
    pub spoken: Vec<(String, Language, ClipKind)>,
    pub cues: Vec<(Cue, Language)>,
}

impl Narrator for RecordingNarrator {
    fn speak(&mut self, entity_id: &str, language: Language, kind: ClipKind) {
        self.spoken.push((entity_id.to_string(), language, kind));
    }

    fn cue(&mut self, cue: Cue, language: Language) {
        self.cues.push((cue, language));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COMPUTER_PARTS;

    #[test]
    fn test_every_part_has_clips() {
        let map = AudioMap::new(PathBuf::from("/audio"));
        for entity in &COMPUTER_PARTS {
            for language in Language::ALL {
                assert!(map.clip(entity.id, language, ClipKind::Name).is_some());
                assert!(map.clip(entity.id, language, ClipKind::Description).is_some());
            }
        }
    }

    #[test]
    fn test_clip_paths() {
        let map = AudioMap::new(PathBuf::from("/audio"));
        assert_eq!(
            map.clip("Mouse", Language::En, ClipKind::Description),
            Some(PathBuf::from("/audio/English/EnglishMouse2.mp3"))
        );
        assert_eq!(
            map.clip("tower", Language::Fr, ClipKind::Description),
            map.clip("tower", Language::Fr, ClipKind::Name)
        );
        assert_eq!(map.clip("scanner", Language::En, ClipKind::Name), None);
        assert_eq!(
            map.cue(Cue::GameWon, Language::Ar),
            PathBuf::from("/audio/cues/game_won_ar.mp3")
        );
    }

    #[test]
    fn test_missing_clip_is_not_fatal() {
        let mut narrator = LogNarrator::new(AudioMap::new(PathBuf::from("/nonexistent")));
        narrator.speak("monitor", Language::Fr, ClipKind::Name);
        narrator.speak("scanner", Language::Fr, ClipKind::Name);
        narrator.cue(Cue::StartGame, Language::Fr);
    }
}
