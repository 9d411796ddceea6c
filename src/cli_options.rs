/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play the word search in English:
//!
//! ```text
//! $ kidcomputer -l en
//! ```
//!
//! Print a puzzle for a worksheet, always the same one:
//!
//! ```text
//! $ kidcomputer -l fr --print --seed 7
//! ```
//!
//! Learn about the parts in Arabic:
//!
//! ```text
//! $ kidcomputer -l ar --learn
//! ```
//!
//! Show the scoreboards:
//!
//! ```text
//! $ kidcomputer --scores
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

use kidcomputer::config::{COPYRIGHT_NOTICE, PKGNAME};
use kidcomputer::highscores::GameKind;
use kidcomputer::language::Language;

/// Computer hardware games for young children.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Language of the games
    #[arg(value_enum, short, long, default_value_t = Language::Fr)]
    pub language: Language,

    /// Game to play
    #[arg(value_enum, short, long, default_value_t = GameKind::WordSearch)]
    pub game: GameKind,

    /// Seed for the random generator, to replay the same puzzle
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print a word-search puzzle and its word list, and then exit
    #[arg(short, long, default_value_t = false, conflicts_with = "scores")]
    pub print: bool,

    /// With --print, output the puzzle in JSON format
    #[arg(long, default_value_t = false, requires = "print")]
    pub json: bool,

    /// Print the scoreboards and exit
    #[arg(long, default_value_t = false)]
    pub scores: bool,

    /// Browse the parts, their descriptions and facts, instead of playing
    #[arg(long, default_value_t = false, conflicts_with_all = ["print", "scores"])]
    pub learn: bool,

    /// Directory where the scoreboards are saved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory that contains the audio clips
    #[arg(long, default_value = "audio")]
    pub assets_dir: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Return the directory where the scoreboards are saved.
    ///
    /// Default to `$XDG_DATA_HOME/kidcomputer`, or `$HOME/.local/share/kidcomputer`.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(d) = &self.data_dir {
            return d.clone();
        }
        if let Some(d) = env::var_os("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
            return PathBuf::from(d).join(PKGNAME);
        }
        match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".local/share").join(PKGNAME),
            None => PathBuf::from("."),
        }
    }
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["kidcomputer"]);
        assert_eq!(args.language, Language::Fr);
        assert_eq!(args.game, GameKind::WordSearch);
        assert!(args.seed.is_none());
        assert!(!args.print);
    }

    #[test]
    fn test_options() {
        let args = Args::parse_from([
            "kidcomputer", "-l", "ar", "-g", "memory", "--seed", "3", "--data-dir", "/tmp/x",
        ]);
        assert_eq!(args.language, Language::Ar);
        assert_eq!(args.game, GameKind::Memory);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.data_dir(), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_json_requires_print() {
        assert!(Args::try_parse_from(["kidcomputer", "--json"]).is_err());
        assert!(Args::try_parse_from(["kidcomputer", "--print", "--json"]).is_ok());
    }

    #[test]
    fn test_learn_and_new_games() {
        let args = Args::parse_from(["kidcomputer", "--learn"]);
        assert!(args.learn);
        assert!(Args::try_parse_from(["kidcomputer", "--learn", "--scores"]).is_err());
        let args = Args::parse_from(["kidcomputer", "-g", "sorter"]);
        assert_eq!(args.game, GameKind::Sorter);
        let args = Args::parse_from(["kidcomputer", "--game", "find"]);
        assert_eq!(args.game, GameKind::Find);
    }
}
