/*
normalize.rs

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

//! Turn display strings into the canonical letters used by the word games.
//!
//! "Unité Centrale" becomes `UNITECENTRALE` and "لوحة المفاتيح" becomes `لوحةالمفاتيح`.
//! The grid engine only ever compares normalized letters, so it does not need to know which
//! script it is working with.

use unicode_normalization::UnicodeNormalization;

/// Language-specific normalization.
pub trait Normalizer {
    /// Return the canonical form of the given display string.
    fn normalize(&self, text: &str) -> String;

    /// Return the canonical form as a vector of letters.
    fn letters(&self, text: &str) -> Vec<char> {
        self.normalize(text).chars().collect()
    }
}

/// Normalization for French and English.
///
/// The text is decomposed (NFD) so that accented letters become a base letter followed by
/// combining marks, then everything that is not an ASCII letter is removed, and the result
/// is uppercased.
#[derive(Debug, Default, Clone, Copy)]
pub struct LatinNormalizer;

/// Normalization for Arabic.
///
/// Tashkeel marks and tatweel are removed, the hamza forms of alef are folded to a plain alef,
/// and only characters of the Arabic letter block are kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArabicNormalizer;

impl Normalizer for LatinNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.nfd()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

/// Whether the character is an Arabic diacritic (tashkeel, Quranic annotation, or tatweel).
fn is_arabic_mark(c: char) -> bool {
    matches!(c,
        '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}' | '\u{0640}')
}

impl Normalizer for ArabicNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !is_arabic_mark(*c))
            .map(|c| match c {
                'آ' | 'أ' | 'إ' | 'ٱ' => 'ا',
                _ => c,
            })
            .filter(|c| ('\u{0621}'..='\u{064A}').contains(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_accents() {
        let n = LatinNormalizer;
        assert_eq!(n.normalize("Écran"), "ECRAN");
        assert_eq!(n.normalize("Unité Centrale"), "UNITECENTRALE");
        assert_eq!(n.normalize("Haut-parleurs"), "HAUTPARLEURS");
        assert_eq!(n.normalize("Clé USB"), "CLEUSB");
    }

    #[test]
    fn test_latin_decomposes_any_precomposed_letter() {
        let n = LatinNormalizer;
        // Latin Extended Additional and Extended-B letters
        assert_eq!(n.normalize("\u{1EBD}cran"), "ECRAN");
        assert_eq!(n.normalize("\u{01CE}b"), "AB");
    }

    #[test]
    fn test_latin_ligatures_are_dropped() {
        let n = LatinNormalizer;
        assert_eq!(n.normalize("cœur"), "CUR");
        assert_eq!(n.normalize("Æther"), "THER");
    }

    #[test]
    fn test_latin_combining_marks() {
        // "E" followed by a combining acute accent
        let n = LatinNormalizer;
        assert_eq!(n.normalize("E\u{0301}cran"), "ECRAN");
    }

    #[test]
    fn test_latin_drops_digits_and_other_scripts() {
        let n = LatinNormalizer;
        assert_eq!(n.normalize("CPU 2 شاشة"), "CPU");
        assert_eq!(n.normalize("123"), "");
    }

    #[test]
    fn test_arabic_tashkeel() {
        let n = ArabicNormalizer;
        assert_eq!(n.normalize("تَعلَّم"), "تعلم");
        assert_eq!(n.normalize("الْعَب"), "العب");
    }

    #[test]
    fn test_arabic_hamza_folding() {
        let n = ArabicNormalizer;
        assert_eq!(n.normalize("أرني"), "ارني");
        assert_eq!(n.normalize("إآٱ"), "ااا");
    }

    #[test]
    fn test_arabic_spaces_and_latin_removed() {
        let n = ArabicNormalizer;
        assert_eq!(n.normalize("لوحة المفاتيح"), "لوحةالمفاتيح");
        assert_eq!(n.normalize("CPU مكبرات"), "مكبرات");
        assert_eq!(n.letters("شاشة").len(), 4);
    }
}
