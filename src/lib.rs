/*
lib.rs

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

//! Computer hardware games for young children, in French, English, and Arabic.
//!
//! The main game is a word search: [`generator`] builds the letter grid from the names of the
//! parts in the [`catalog`], and [`game::Session`] matches the player selections against the
//! hidden words. [`runner::SessionRunner`] adds the narration, the clock, and the scoreboards.
//! The crate also provides a memory game ([`memory`]), a letter-guessing game ([`robot`]), a
//! game where the player shows the named part ([`find`]), and a game where the player sorts
//! the input and output devices ([`sorter`]).

pub mod catalog;
pub mod config;
pub mod find;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod language;
pub mod memory;
pub mod narration;
pub mod normalize;
pub mod robot;
pub mod runner;
pub mod saver;
pub mod selection;
pub mod sorter;
pub mod ticker;
