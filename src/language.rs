/*
language.rs

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

//! Languages supported by the games.
//!
//! The active [`Language`] decides which strings are displayed, which clips are narrated, how
//! words are normalized before being hidden in a grid, and which letters fill the empty cells.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::normalize::{ArabicNormalizer, LatinNormalizer, Normalizer};

/// Filler letters for the Latin-script languages.
const LATIN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Filler letters for Arabic (base letters, no hamza variants).
const ARABIC_ALPHABET: &str = "ابتثجحخدذرزسشصضطظعغفقكلمنهوي";

static LATIN: LatinNormalizer = LatinNormalizer;
static ARABIC: ArabicNormalizer = ArabicNormalizer;

/// Language of the application.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Language {
    #[default]
    Fr,
    En,
    Ar,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Ar];

    /// Return the two-letter code of the language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parse a two-letter language code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Letters used to fill the grid cells that no word occupies.
    pub fn alphabet(&self) -> Vec<char> {
        match self {
            Language::Fr | Language::En => LATIN_ALPHABET.chars().collect(),
            Language::Ar => ARABIC_ALPHABET.chars().collect(),
        }
    }

    /// Whether the character is a letter that can appear in a grid for this language.
    ///
    /// Words may contain letters that are not in [`Language::alphabet`], such as the Arabic
    /// teh marbuta, so this set is larger than the filler alphabet.
    pub fn is_letter(&self, c: char) -> bool {
        match self {
            Language::Fr | Language::En => c.is_ascii_uppercase(),
            Language::Ar => ('\u{0621}'..='\u{064A}').contains(&c) && c != '\u{0640}',
        }
    }

    /// Whether the language is written from right to left.
    pub fn is_rtl(&self) -> bool {
        *self == Language::Ar
    }

    /// Return the normalizer that turns display strings into puzzle letters.
    pub fn normalizer(&self) -> &'static dyn Normalizer {
        match self {
            Language::Fr | Language::En => &LATIN,
            Language::Ar => &ARABIC,
        }
    }

    /// Return the language that follows in the language selector.
    pub fn next(&self) -> Self {
        Self::from_repr((*self as u8 + 1) % Self::ALL.len() as u8).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::from_code("AR"), Some(Language::Ar));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::Fr.to_string(), "fr");
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Language::Fr.next(), Language::En);
        assert_eq!(Language::En.next(), Language::Ar);
        assert_eq!(Language::Ar.next(), Language::Fr);
    }

    #[test]
    fn test_alphabets() {
        assert_eq!(Language::En.alphabet().len(), 26);
        assert_eq!(Language::Ar.alphabet().len(), 28);
        assert!(Language::Ar.is_rtl());
        assert!(!Language::Fr.is_rtl());
    }

    #[test]
    fn test_letters_include_alphabet() {
        for language in Language::ALL {
            assert!(language.alphabet().iter().all(|c| language.is_letter(*c)));
        }
        assert!(Language::Ar.is_letter('ة'));
        assert!(Language::Ar.is_letter('ء'));
        assert!(!Language::Ar.is_letter('\u{0640}'));
        assert!(!Language::Ar.is_letter('A'));
        assert!(!Language::En.is_letter('a'));
        assert!(!Language::Fr.is_letter('É'));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let l: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(l, Language::En);
    }
}
