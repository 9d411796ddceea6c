/*
generator.rs

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

//! Generate word-search puzzles.
//!
//! A puzzle is built from a list of [`word_search::Candidate`] objects, one per part.
//! Each candidate provides the text to hide in every language.
//!
//! The [`word_search::WordSearchGenerator::generate`] method:
//!
//! * Normalizes the candidate texts for the active language and drops the words that are empty
//!   or longer than the grid.
//! * Tries to place each word horizontally or vertically at a random position.
//!   A word can cross another word only on a shared letter.
//!   After [`crate::config::MAX_PLACEMENT_TRIALS`] failed trials, the word is left out of the
//!   puzzle.
//! * Fills the remaining cells with random letters from the language alphabet.
//!
//! The result is a [`word_search::Puzzle`] object: a full [`grid::Grid`] and the list of the
//! words that were placed, with their cells.

pub mod grid;
pub mod placement;
pub mod word_search;
